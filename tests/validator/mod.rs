
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use field_rail::validator::compose;
use field_rail::{attach, checks, Effect, EffectError, FieldError, Validator, Verdict};

type Text = Validator<String, String, &'static str, &'static str>;

fn counted(calls: &Arc<AtomicUsize>) -> Text {
    let calls = Arc::clone(calls);
    attach(
        move |text: String| {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(text)
        },
        "counted",
    )
}

#[tokio::test]
async fn attach_pairs_rejection_with_key() {
    let name: Text = attach(checks::not_empty("name required"), "name");

    assert_eq!(name.validate("Kim".to_string()).await.unwrap(), Ok("Kim".to_string()));
    assert_eq!(
        name.validate(String::new()).await.unwrap(),
        Err(FieldError::new("name", "name required"))
    );
}

#[tokio::test]
async fn attach_may_change_the_value_type() {
    let age: Validator<String, u8, &str, &str> = attach(checks::parse("not a number"), "age");

    assert_eq!(age.validate("42".to_string()).await.unwrap(), Ok(42));
    assert_eq!(
        age.validate("old".to_string()).await.unwrap(),
        Err(FieldError::new("age", "not a number"))
    );
}

#[tokio::test]
async fn compose_feeds_output_of_first_into_second() {
    let number = attach(checks::not_empty("required"), "amount")
        .and_then(attach(checks::parse::<u32, _>("not a number"), "amount"))
        .and_then(attach(
            checks::predicate(|amount: &u32| *amount <= 100, "too large"),
            "amount",
        ));

    assert_eq!(number.validate("7".to_string()).await.unwrap(), Ok(7));
    assert_eq!(
        number.validate("700".to_string()).await.unwrap(),
        Err(FieldError::new("amount", "too large"))
    );
}

#[tokio::test]
async fn compose_short_circuits_on_first_rejection() {
    let calls = Arc::new(AtomicUsize::new(0));
    let name = compose(attach(checks::not_empty("name required"), "name"), counted(&calls));

    let verdict = name.validate(String::new()).await.unwrap();

    assert_eq!(verdict, Err(FieldError::new("name", "name required")));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn compose_runs_second_once_on_success() {
    let calls = Arc::new(AtomicUsize::new(0));
    let name = attach(checks::not_empty("name required"), "name").and_then(counted(&calls));

    assert_eq!(name.validate("Kim".to_string()).await.unwrap(), Ok("Kim".to_string()));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn only_the_first_failure_is_reported() {
    let name = attach(checks::not_empty("name required"), "name")
        .and_then(attach(checks::starts_with("A", "must start with A"), "name"));

    assert_eq!(
        name.validate(String::new()).await.unwrap(),
        Err(FieldError::new("name", "name required"))
    );
    assert_eq!(
        name.validate("Bob".to_string()).await.unwrap(),
        Err(FieldError::new("name", "must start with A"))
    );
}

#[tokio::test]
async fn later_validator_keeps_its_own_key() {
    let pair = attach(
        |(name, confirm): (String, String)| {
            if name.is_empty() {
                Err("name required")
            } else {
                Ok((name, confirm))
            }
        },
        "name",
    )
    .and_then(attach(checks::matching("fields do not match."), "confirmName"));

    assert_eq!(
        pair.validate(("hi".to_string(), "bye".to_string())).await.unwrap(),
        Err(FieldError::new("confirmName", "fields do not match."))
    );
}

#[tokio::test]
async fn identity_is_unit_on_both_sides() {
    let name: Text = attach(checks::not_empty("name required"), "name");
    let left = Validator::identity().and_then(name.clone());
    let right = name.clone().and_then(Validator::identity());

    for input in ["", "Kim"] {
        let expected = name.validate(input.to_string()).await.unwrap();
        assert_eq!(left.validate(input.to_string()).await.unwrap(), expected);
        assert_eq!(right.validate(input.to_string()).await.unwrap(), expected);
    }
}

#[tokio::test]
async fn map_and_map_message_transform_each_side() {
    let length = attach(checks::not_empty("empty"), "word").map(|word: String| word.len());
    assert_eq!(length.validate("four".to_string()).await.unwrap(), Ok(4));

    let owned = length.map_message(|message: &str| message.to_uppercase());
    assert_eq!(
        owned.validate(String::new()).await.unwrap(),
        Err(FieldError::new("word", "EMPTY".to_string()))
    );
}

#[tokio::test]
async fn validator_is_reusable_across_invocations() {
    let calls = Arc::new(AtomicUsize::new(0));
    let validator = counted(&calls);

    for _ in 0..3 {
        validator.validate("x".to_string()).await.unwrap().unwrap();
    }

    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn new_accepts_hand_written_effects() {
    type Checked = Verdict<i32, &'static str, &'static str>;

    let validator = Validator::new(|n: i32| -> Effect<'static, Checked> {
        Box::pin(async move {
            let verdict = if n < 0 { Err(FieldError::new("n", "negative")) } else { Ok(n) };
            Ok::<_, EffectError>(verdict)
        })
    });

    assert_eq!(validator.validate(3).await.unwrap(), Ok(3));
    assert_eq!(validator.validate(-1).await.unwrap(), Err(FieldError::new("n", "negative")));
}
