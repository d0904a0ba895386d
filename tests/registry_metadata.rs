//! Registry lookup, metadata exposure and cross-thread sharing

use decimal_math_operators::metadata::DEFAULT_LOCALE;
use decimal_math_operators::{
    BigDecimal, LocalizedText, Operator, OperatorError, OperatorFn, OperatorMetadata,
    OperatorRegistry, RegistryConfig, create_standard_registry, format_decimal, parse_decimal,
};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::thread;

#[test]
fn test_core_metadata() {
    let registry = create_standard_registry().unwrap();
    let acos = registry.get("acos").unwrap();
    let metadata = acos.metadata();

    assert_eq!(metadata.name, "acos");
    assert_eq!(metadata.folder.get(DEFAULT_LOCALE), Some("Decimal"));
    assert_eq!(
        metadata.description.get(DEFAULT_LOCALE),
        Some("Returns the arc cosine of a value; the returned angle is in the range 0.0 through pi.")
    );
    assert_eq!(metadata.arguments.len(), 1);
    assert_eq!(metadata.arguments[0].name.get(DEFAULT_LOCALE), Some("n"));
    assert!(!metadata.extended);
}

#[test]
fn test_standard_registry_matches_default_config() {
    let standard = create_standard_registry().unwrap();
    let configured = OperatorRegistry::with_config(&RegistryConfig::default()).unwrap();

    assert_eq!(standard.names(), configured.names());
    assert_eq!(
        standard.metadata().collect::<Vec<_>>(),
        configured.metadata().collect::<Vec<_>>()
    );
    assert_eq!(standard.top_level_folder(), configured.top_level_folder());
}

#[test]
fn test_metadata_iteration_is_sorted() {
    let registry = create_standard_registry().unwrap();
    let names: Vec<&str> = registry.metadata().map(|m| m.name.as_str()).collect();
    assert_eq!(names, registry.names());
}

#[test]
fn test_metadata_json_shape() {
    let registry = create_standard_registry().unwrap();
    let metadata: Vec<_> = registry.metadata().collect();
    let json = serde_json::to_value(&metadata).unwrap();

    assert_eq!(json[0]["name"], "abs");
    assert_eq!(json[0]["folder"]["en"], "Decimal");
    assert_eq!(json[0]["arguments"][0]["name"]["en"], "n");
}

#[test]
fn test_localized_registration() {
    fn negate(n: Option<&BigDecimal>) -> Option<BigDecimal> {
        n.map(|v| -v)
    }

    let mut metadata = OperatorMetadata::new("negate", "Decimal", "Negates a value.")
        .with_argument("n");
    metadata.description = metadata.description.with("de", "Negiert einen Wert.");
    metadata.folder = LocalizedText::en("Decimal").with("de", "Dezimal");

    let mut registry = OperatorRegistry::new();
    registry
        .register(Operator::new(metadata, OperatorFn::Unary(negate)).unwrap())
        .unwrap();

    let op = registry.get("negate").unwrap();
    assert_eq!(
        op.metadata().description.resolve("de", DEFAULT_LOCALE),
        Some("Negiert einen Wert.")
    );
    assert_eq!(
        op.metadata().folder.resolve("fr", DEFAULT_LOCALE),
        Some("Decimal")
    );
    assert_eq!(
        registry.invoke("negate", &[parse_decimal("4.5").unwrap()]).unwrap(),
        parse_decimal("-4.5").unwrap()
    );
}

#[test]
fn test_unknown_and_duplicate_errors() {
    let mut registry = create_standard_registry().unwrap();
    assert_eq!(
        registry.invoke("nope", &[None]).unwrap_err(),
        OperatorError::unknown_operator("nope")
    );

    let duplicate = registry.get("abs").unwrap().as_ref().clone();
    assert!(matches!(
        registry.register(duplicate),
        Err(OperatorError::AlreadyRegistered { .. })
    ));
}

#[test]
fn test_config_from_json_drives_registry() {
    let config =
        RegistryConfig::from_json_str(r#"{ "include_extended": true, "top_level_folder": "Maths" }"#)
            .unwrap();
    let registry = OperatorRegistry::with_config(&config).unwrap();

    assert_eq!(registry.top_level_folder(), "Maths");
    assert!(registry.contains("hypot"));
    assert!(registry.get("hypot").unwrap().metadata().extended);
}

#[test]
fn test_shared_registry_across_threads() {
    let registry = Arc::new(create_standard_registry().unwrap());

    let handles: Vec<_> = (1..=8)
        .map(|i| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let input = parse_decimal(&format!("{i}.5")).unwrap();
                registry.invoke("floor", &[input]).unwrap()
            })
        })
        .collect();

    for (i, handle) in (1..=8).zip(handles) {
        assert_eq!(handle.join().unwrap(), Some(BigDecimal::from(i)));
    }
}

#[test]
fn test_format_of_results() {
    let registry = create_standard_registry().unwrap();
    let tenth = registry
        .invoke("abs", &[parse_decimal("-0.1").unwrap()])
        .unwrap();
    assert_eq!(format_decimal(tenth.as_ref()), "0.1");

    let absent = registry.invoke("acos", &[parse_decimal("2").unwrap()]).unwrap();
    assert_eq!(format_decimal(absent.as_ref()), "null");

    let ceil = registry
        .invoke("ceil", &[parse_decimal("0.1").unwrap()])
        .unwrap();
    assert_eq!(format_decimal(ceil.as_ref()), "1");
}

#[test]
fn test_format_of_exact_result_beyond_double_range() {
    let registry = create_standard_registry().unwrap();
    let huge = registry
        .invoke("abs", &[parse_decimal("-1e99999999999").unwrap()])
        .unwrap();
    assert_eq!(format_decimal(huge.as_ref()), "1e99999999999");

    let zero = registry.invoke("abs", &[parse_decimal("0e5").unwrap()]).unwrap();
    assert_eq!(format_decimal(zero.as_ref()), "0");
}
