use field_rail::{FieldError, FieldErrors, Form, FormView};

#[test]
fn field_error_serializes_as_key_and_message() {
    let err = FieldError::new("name", "name required");
    let json = serde_json::to_value(&err).unwrap();

    assert_eq!(json, serde_json::json!({ "key": "name", "message": "name required" }));
}

#[test]
fn field_errors_serialize_as_plain_list() {
    let errors: FieldErrors<String, String> = [
        ("name".to_string(), "name required".to_string()),
        ("accountNumber".to_string(), "account number not correct length".to_string()),
    ]
    .into_iter()
    .collect();

    let json = serde_json::to_string(&errors).unwrap();
    assert_eq!(
        json,
        r#"[{"key":"name","message":"name required"},{"key":"accountNumber","message":"account number not correct length"}]"#
    );

    let back: FieldErrors<String, String> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, errors);
}

#[test]
fn form_survives_json_transport() {
    let form: Form<String, String> = Form::new()
        .with_value("name".to_string(), "hi")
        .with_errors(FieldErrors::from(FieldError::new(
            "confirmName".to_string(),
            "fields do not match.".to_string(),
        )));

    let json = serde_json::to_string(&form).unwrap();
    let back: Form<String, String> = serde_json::from_str(&json).unwrap();

    assert_eq!(back, form);
    assert_eq!(back.value(&"name".to_string()), Some("hi"));
}
