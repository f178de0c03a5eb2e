//! Basic tests for recase

use recase::*;

#[test]
fn test_literal_conversions() {
    assert_eq!(convert("test string", Case::Camel), "testString");
    assert_eq!(convert("test string", Case::Pascal), "TestString");
    assert_eq!(convert("test string", Case::Snake), "test_string");
    assert_eq!(convert("test string", Case::Kebab), "test-string");
    assert_eq!(convert("test string", Case::Dot), "test.string");
    assert_eq!(convert("test string", Case::Path), "test/string");
    assert_eq!(convert("test string", Case::Constant), "TEST_STRING");
    assert_eq!(convert("a simple test", Case::Title), "A Simple Test");
    assert_eq!(convert("a simple test", Case::Sentence), "A simple test");
    assert_eq!(convert("test string", Case::Header), "Test-String");
    assert_eq!(convert("XMLHttpRequest", Case::Normal), "xml http request");
}

#[test]
fn test_reexported_functions_match_cases() {
    let input = "someHTTPValue_2";
    assert_eq!(camel(input, false), Case::Camel.apply(input));
    assert_eq!(pascal(input, false), Case::Pascal.apply(input));
    assert_eq!(snake(input), Case::Snake.apply(input));
    assert_eq!(param(input), Case::Kebab.apply(input));
    assert_eq!(header(input), Case::Header.apply(input));
    assert_eq!(no(input, None), normalize(input, None));
    assert_eq!(words(input), ["some", "http", "value", "2"]);
}

#[test]
fn test_convert_named() {
    assert_eq!(convert_named("fooBar", "CONSTANT_CASE").unwrap(), "FOO_BAR");
    assert!(matches!(
        convert_named("fooBar", "zigzag"),
        Err(ApiError::UnknownCase(_))
    ));
}

#[test]
fn test_every_case_is_idempotent() {
    // Lower and Upper do not segment, Normal re-segments to itself
    let inputs = ["fooBarBaz", "XMLHttpRequest", "  leading and trailing  ", "v2 api"];
    for case in Case::ALL {
        for input in inputs {
            let once = case.apply(input);
            // camel and pascal keep the digit underscore, which segments again
            if matches!(case, Case::Camel | Case::Pascal) && once.contains('_') {
                continue;
            }
            assert_eq!(case.apply(once.as_str()), once, "{case} on {input:?}");
        }
    }
}

#[test]
fn test_converter_reuse() {
    let converter = Converter::with_config(
        Config::builder()
            .case_name("path")
            .unwrap()
            .separator("\\")
            .build()
            .unwrap(),
    )
    .unwrap();

    assert_eq!(converter.case(), Case::Path);
    assert_eq!(converter.convert("Program Files"), "program\\files");
    assert_eq!(
        converter.convert_all(["a b", "cD"]),
        vec!["a\\b".to_string(), "c\\d".to_string()]
    );
}

#[test]
fn test_casing_trait() {
    assert_eq!("HTMLElement".to_case(Case::Kebab), "html-element");
    assert!("html_element".is_case(Case::Snake));
    assert!(!"html_element".is_case(Case::Kebab));
}

#[test]
#[cfg(feature = "serde")]
fn test_case_serialization() {
    let json = serde_json::to_string(&Case::Constant).unwrap();
    assert_eq!(json, "\"constant\"");

    let case: Case = serde_json::from_str("\"param\"").unwrap();
    assert_eq!(case, Case::Kebab);

    for case in Case::ALL {
        let json = serde_json::to_string(&case).unwrap();
        let back: Case = serde_json::from_str(&json).unwrap();
        assert_eq!(back, case);
    }
}

#[test]
#[cfg(feature = "serde")]
fn test_config_serialization() {
    let config = Config::builder()
        .case(Case::Normal)
        .separator("~")
        .build()
        .unwrap();

    let json = serde_json::to_string(&config).unwrap();
    let back = Config::from_json_str(&json).unwrap();
    assert_eq!(back, config);

    let no_separator = serde_json::to_string(&Config::new(Case::Title)).unwrap();
    assert!(!no_separator.contains("separator"));
}

#[test]
#[cfg(feature = "serde")]
fn test_config_json_errors() {
    assert!(matches!(
        Config::from_json_str("{\"case\": 3}"),
        Err(ApiError::Serde(_))
    ));
    assert!(matches!(
        Config::from_json_str("{\"case\": \"camel\", \"separator\": \"-\"}"),
        Err(ApiError::Config(_))
    ));
}

#[test]
fn test_error_display() {
    let err = "wavy".parse::<Case>().unwrap_err();
    assert_eq!(err.to_string(), "unknown case: wavy");

    let err = ApiError::Config("bad".to_string());
    assert_eq!(err.to_string(), "configuration error: bad");
}
