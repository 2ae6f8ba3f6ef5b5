use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use field_rail::step::{compose, reject};
use field_rail::{
    attach, checks, lens, try_attach_m, validation, FieldError, FieldErrors, ValidationStep,
    Validator,
};

#[derive(Debug, Clone, Default, PartialEq)]
struct Shipment {
    recipient: String,
    weight: u32,
    postcode: String,
}

type Step = ValidationStep<Shipment, &'static str, &'static str>;

fn recipient(input: &str) -> Step {
    validation(
        lens!(Shipment, recipient),
        input.to_string(),
        attach(checks::not_empty("recipient required"), "recipient"),
    )
}

fn weight(input: &str) -> Step {
    validation(
        lens!(Shipment, weight),
        input.to_string(),
        attach(checks::parse("weight must be a number"), "weight"),
    )
}

fn postcode(input: &str) -> Step {
    validation(
        lens!(Shipment, postcode),
        input.to_string(),
        attach(checks::length_eq(5, "postcode must be 5 digits"), "postcode"),
    )
}

fn existing() -> Shipment {
    Shipment { recipient: "old".to_string(), weight: 1, postcode: "00000".to_string() }
}

#[tokio::test]
async fn success_stores_value_through_lens() {
    let (record, errors) = weight("12").apply(existing()).await.unwrap();

    assert!(errors.is_empty());
    assert_eq!(record, Shipment { weight: 12, ..existing() });
}

#[tokio::test]
async fn rejection_leaves_record_untouched() {
    let (record, errors) = weight("heavy").apply(existing()).await.unwrap();

    assert_eq!(record, existing());
    assert_eq!(errors.into_pairs(), vec![("weight", "weight must be a number")]);
}

#[tokio::test]
async fn compose_accumulates_errors_in_order() {
    let step = compose(compose(recipient(""), weight("12")), postcode("123"));
    let (record, errors) = step.apply(Shipment::default()).await.unwrap();

    assert_eq!(record.weight, 12);
    assert_eq!(record.recipient, "");
    assert_eq!(
        errors.into_pairs(),
        vec![("recipient", "recipient required"), ("postcode", "postcode must be 5 digits")]
    );
}

#[tokio::test]
async fn later_steps_run_after_earlier_failure() {
    let step = recipient("").then(postcode("04524"));
    let (record, errors) = step.apply(Shipment::default()).await.unwrap();

    assert_eq!(record.postcode, "04524");
    assert_eq!(errors.len(), 1);
}

#[tokio::test]
async fn fields_are_validated_independently() {
    let step = recipient("").then(weight("3"));
    let alone = weight("3");

    let (combined, _) = step.apply(Shipment::default()).await.unwrap();
    let (single, _) = alone.apply(Shipment::default()).await.unwrap();

    assert_eq!(combined.weight, single.weight);
}

#[tokio::test]
async fn identity_changes_nothing() {
    let (record, errors) = Step::identity().apply(existing()).await.unwrap();

    assert_eq!(record, existing());
    assert!(errors.is_empty());

    let step = Step::identity().then(weight("x")).then(Step::default());
    let (_, errors) = step.apply(existing()).await.unwrap();
    assert_eq!(errors.len(), 1);
}

#[tokio::test]
async fn collecting_steps_folds_left_to_right() {
    let step: Step = vec![recipient(""), weight("many"), postcode("1")].into_iter().collect();
    let (_, errors) = step.apply(Shipment::default()).await.unwrap();

    let keys: Vec<_> = errors.keys().copied().collect();
    assert_eq!(keys, vec!["recipient", "weight", "postcode"]);

    let empty: Step = Vec::<Step>::new().into_iter().collect();
    let (record, errors) = empty.apply(existing()).await.unwrap();
    assert_eq!(record, existing());
    assert!(errors.is_empty());
}

#[tokio::test]
async fn reject_adds_error_without_touching_record() {
    let step = reject(FieldError::new("form", "submission expired")).then(weight("8"));
    let (record, errors) = step.apply(existing()).await.unwrap();

    assert_eq!(record.weight, 8);
    assert_eq!(errors, FieldErrors::from(FieldError::new("form", "submission expired")));
}

#[tokio::test]
async fn step_reuses_its_input_on_every_application() {
    let step = recipient("Lee");

    for _ in 0..2 {
        let (record, _) = step.apply(Shipment::default()).await.unwrap();
        assert_eq!(record.recipient, "Lee");
    }
}

#[tokio::test]
async fn effect_failure_aborts_composed_step() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let broken: Validator<String, String, &str, &str> = try_attach_m(
        |_: String| async move { Err::<Result<String, &str>, _>("registry offline") },
        "recipient",
    );
    let counting: Validator<String, u32, &str, &str> = attach(
        move |text: String| {
            counter.fetch_add(1, Ordering::SeqCst);
            text.parse::<u32>().map_err(|_| "weight must be a number")
        },
        "weight",
    );

    let step = validation(lens!(Shipment, recipient), "Lee".to_string(), broken)
        .then(validation(lens!(Shipment, weight), "4".to_string(), counting));

    let err = step.apply(Shipment::default()).await.unwrap_err();

    assert!(err.error_chain().ends_with("registry offline"));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}
