use framebox_types::*;

#[test]
fn test_empty_document_is_defaults() {
    let options = RenderOptions::from_toml_str("").unwrap();
    assert_eq!(options, RenderOptions::default());
}

#[test]
fn test_toml_string_round_trip() {
    let options = RenderOptions::new()
        .with_border_style(NamedStyle::Round)
        .with_border_color("cyan")
        .with_padding(Spacing::new(0, 2, 0, 2))
        .with_margin(1)
        .with_float(Float::Right)
        .with_align(Align::Center);

    let document = options.to_toml_string().unwrap();
    assert!(document.contains("borderStyle = \"round\""));
    assert_eq!(RenderOptions::from_toml_str(&document).unwrap(), options);
}

#[test]
fn test_unknown_style_survives_parsing_and_fails_on_resolve() {
    let options = RenderOptions::from_toml_str(r#"borderStyle = "zigzag""#).unwrap();
    let err = options.border_style.resolve().unwrap_err();
    assert_eq!(err.to_string(), "Invalid border style: zigzag");
}

#[test]
fn test_custom_style_missing_field_fails_on_resolve() {
    let options = RenderOptions::from_toml_str(
        r#"
borderStyle = { topLeft = "a", topRight = "b", bottomRight = "c", bottomLeft = "d", vertical = "e" }
"#,
    )
    .unwrap();

    let err = options.border_style.resolve().unwrap_err();
    assert!(matches!(err, Error::InvalidBorderStyle(ref field) if field == "horizontal"));
}

#[test]
fn test_bad_float_value_is_config_error() {
    let err = RenderOptions::from_toml_str(r#"float = "middle""#).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
    assert!(err.to_string().starts_with("Configuration error:"));
}
