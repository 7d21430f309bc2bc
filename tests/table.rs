use action_signature::*;
use rstest::{fixture, rstest};
use serde_json::json;

static_assertions::assert_impl_all!(ActionTable<String>: Send, Sync);

/// Link templates for a small customer API, including an overloaded `Get`.
#[fixture]
fn table() -> ActionTable<&'static str> {
    ActionTable::new()
        .with(ActionSignature::new("Customers", "List"), "/customers")
        .with(
            ActionSignature::with_params::<(u32,)>("Customers", "Get"),
            "/customers/{id}",
        )
        .with(
            ActionSignature::with_params::<(u32, String)>("Customers", "Get"),
            "/customers/{id}?fields={fields}",
        )
        .with(
            ActionSignature::with_params::<(u32,)>("Orders", "Get"),
            "/orders/{id}",
        )
}

#[rstest]
fn exact_lookup(table: ActionTable<&'static str>) {
    assert_eq!(table.len(), 4);

    assert_eq!(
        table.get(&ActionSignature::with_params::<(u32,)>("customers", "get")),
        Some(&"/customers/{id}")
    );
    assert_eq!(
        table.get(&ActionSignature::with_params::<(String, u32)>("Customers", "Get")),
        Some(&"/customers/{id}?fields={fields}")
    );
    assert_eq!(table.get(&ActionSignature::new("Customers", "Get")), None);
}

#[rstest]
#[case("Customers.List", Some("/customers"))]
#[case("customers.list", Some("/customers"))]
#[case("Customers.Delete", None)]
fn lookup_by_str(
    table: ActionTable<&'static str>,
    #[case] key: &str,
    #[case] expected: Option<&'static str>,
) {
    assert_eq!(table.get_str(key).unwrap().copied(), expected);
}

#[rstest]
fn lookup_by_invalid_str(table: ActionTable<&'static str>) {
    assert_eq!(
        table.get_str("CustomersList"),
        Err(SignatureError::InvalidFormat("CustomersList".to_string()))
    );
}

#[rstest]
fn compatible_entries(table: ActionTable<&'static str>) {
    let query = ActionSignature::new("Customers", "Get");

    let mut values = table
        .compatible(&query)
        .map(|(_, value)| *value)
        .collect::<Vec<_>>();
    values.sort();

    assert_eq!(
        values,
        ["/customers/{id}", "/customers/{id}?fields={fields}"]
    );
}

#[rstest]
fn resolve(table: ActionTable<&'static str>) {
    // Exact match.
    let query = ActionSignature::with_params::<(u32, String)>("Customers", "Get");
    let (signature, value) = table.resolve(&query).unwrap();
    assert_eq!(signature, &query);
    assert_eq!(*value, "/customers/{id}?fields={fields}");

    // Only the two parameter overload declares `String`.
    let query = ActionSignature::with_params::<(String,)>("Customers", "Get");
    assert_eq!(
        table.resolve(&query).map(|(_, value)| *value),
        Some("/customers/{id}?fields={fields}")
    );

    // Nothing declares `bool`.
    let query = ActionSignature::with_params::<(bool,)>("Customers", "Get");
    assert!(table.resolve(&query).is_none());
}

#[test]
fn from_iterator() {
    let table = [
        (ActionSignature::new("Foo", "Bar"), 1),
        (ActionSignature::new("Foo", "Baz"), 2),
        (ActionSignature::new("FOO", "BAR"), 3),
    ]
    .into_iter()
    .collect::<ActionTable<_>>();

    assert_eq!(table.len(), 2);
    assert!(table.contains(&ActionSignature::new("foo", "bar")));
    assert_eq!(table.get(&ActionSignature::new("Foo", "Bar")), Some(&3));
}

#[test]
fn serialize() {
    let table = ActionTable::new()
        .with(ActionSignature::new("Orders", "List"), "/orders")
        .with(
            ActionSignature::with_params::<(u32,)>("Customers", "Get"),
            "/customers/{id}",
        );

    assert_eq!(
        serde_json::to_value(&table).unwrap(),
        json!([
            {
                "signature": {
                    "controller": "Customers",
                    "action": "Get",
                    "parameter_types": ["u32"],
                },
                "value": "/customers/{id}",
            },
            {
                "signature": {
                    "controller": "Orders",
                    "action": "List",
                    "parameter_types": [],
                },
                "value": "/orders",
            },
        ])
    );
}
