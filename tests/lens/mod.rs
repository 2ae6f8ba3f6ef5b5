use field_rail::lens;
use field_rail::lens::{FieldLens, Lens};

#[derive(Debug, Clone, PartialEq, Default)]
struct Address {
    city: String,
    zip: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
struct Customer {
    name: String,
    address: Address,
}

fn customer() -> Customer {
    Customer {
        name: "Kim".to_string(),
        address: Address { city: "Seoul".to_string(), zip: "04524".to_string() },
    }
}

#[test]
fn get_reads_focused_field() {
    let name = lens!(Customer, name);
    let source = customer();

    assert_eq!(name.get(&source), "Kim");
}

#[test]
fn set_then_get_returns_new_value() {
    let name = lens!(Customer, name);
    let updated = name.set(customer(), "Lee".to_string());

    assert_eq!(name.get(&updated), "Lee");
}

#[test]
fn set_with_current_value_is_identity() {
    let name = lens!(Customer, name);
    let source = customer();
    let current = name.get(&source).clone();

    assert_eq!(name.set(source.clone(), current), source);
}

#[test]
fn set_leaves_other_fields_untouched() {
    let name = lens!(Customer, name);
    let updated = name.set(customer(), "Park".to_string());

    assert_eq!(updated.address, customer().address);
}

#[test]
fn modify_applies_function_to_focus() {
    let name = lens!(Customer, name);
    let shouted = name.modify(customer(), |name| name.to_uppercase());

    assert_eq!(shouted.name, "KIM");
}

#[test]
fn composed_lens_reaches_nested_field() {
    let city = lens!(Customer, address).compose(lens!(Address, city));
    let source = customer();

    assert_eq!(city.get(&source), "Seoul");

    let moved = city.set(source, "Busan".to_string());
    assert_eq!(moved.address.city, "Busan");
    assert_eq!(moved.address.zip, "04524");
    assert_eq!(moved.name, "Kim");
}

#[test]
fn hand_built_field_lens_matches_macro() {
    let zip = FieldLens::new(
        |address: &Address| &address.zip,
        |mut address: Address, zip: String| {
            address.zip = zip;
            address
        },
    );

    let address = zip.set(Address::default(), "12345".to_string());
    assert_eq!(zip.get(&address), "12345");
}

#[test]
fn field_lens_is_cloneable() {
    let name = lens!(Customer, name);
    let copy = name.clone();

    assert_eq!(copy.set(customer(), "Choi".to_string()).name, "Choi");
    assert_eq!(name.get(&customer()), "Kim");
}

#[test]
fn composed_lens_obeys_lens_laws() {
    let zip = lens!(Customer, address).compose(lens!(Address, zip));
    let source = customer();

    let current = zip.get(&source).clone();
    assert_eq!(zip.set(source.clone(), current), source);

    let bumped = zip.modify(source, |zip| format!("{zip}-1"));
    assert_eq!(zip.get(&bumped), "04524-1");
    assert_eq!(bumped.address.city, "Seoul");
}
