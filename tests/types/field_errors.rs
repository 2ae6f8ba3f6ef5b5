use field_rail::{FieldError, FieldErrors};

fn sample() -> FieldErrors<&'static str, &'static str> {
    [
        ("name", "name required"),
        ("confirmName", "fields do not match."),
        ("name", "too short"),
    ]
    .into_iter()
    .collect()
}

#[test]
fn new_collection_is_empty() {
    let errors = FieldErrors::<&str, &str>::new();

    assert!(errors.is_empty());
    assert_eq!(errors.len(), 0);
    assert_eq!(errors.first(), None);
}

#[test]
fn push_and_append_preserve_order() {
    let mut errors = FieldErrors::from(FieldError::new("a", 1));
    errors.push(FieldError::new("b", 2));

    let mut rest = FieldErrors::new();
    rest.push(FieldError::new("c", 3));
    errors.append(rest);

    assert_eq!(errors.into_pairs(), vec![("a", 1), ("b", 2), ("c", 3)]);
}

#[test]
fn keys_follow_report_order() {
    let errors = sample();

    assert_eq!(errors.keys().copied().collect::<Vec<_>>(), vec!["name", "confirmName", "name"]);
}

#[test]
fn messages_for_routes_by_key() {
    let errors = sample();

    let messages: Vec<_> = errors.messages_for(&"name").copied().collect();
    assert_eq!(messages, vec!["name required", "too short"]);
    assert_eq!(errors.messages_for(&"missing").count(), 0);
}

#[test]
fn contains_key_checks_any_entry() {
    let errors = sample();

    assert!(errors.contains_key(&"confirmName"));
    assert!(!errors.contains_key(&"accountNumber"));
}

#[test]
fn messages_for_accepts_borrowed_key_forms() {
    let errors: FieldErrors<String, &str> =
        [(String::from("email"), "invalid email")].into_iter().collect();

    assert_eq!(errors.messages_for("email").count(), 1);
    assert!(errors.contains_key("email"));
}

#[test]
fn extend_and_iterate_by_reference() {
    let mut errors = FieldErrors::new();
    errors.extend([FieldError::new("x", "bad"), FieldError::new("y", "worse")]);

    let keys: Vec<_> = (&errors).into_iter().map(|err| err.key).collect();
    assert_eq!(keys, vec!["x", "y"]);
    assert_eq!(errors.iter().count(), 2);
}

#[test]
fn into_iter_yields_owned_errors() {
    let owned: Vec<FieldError<&str, &str>> = sample().into_iter().collect();

    assert_eq!(owned.len(), 3);
    assert_eq!(owned[1], FieldError::new("confirmName", "fields do not match."));
}

#[test]
fn into_inner_exposes_error_vec() {
    let inner = sample().into_inner();

    assert_eq!(inner.len(), 3);
    assert_eq!(inner[0].message, "name required");
}
