//! Integration tests for the DiagramBuilder API

use arbor::{
    ArborError, DiagramBuilder, SourceFormat,
    config::{AppConfig, LayoutConfig, SettingsError, StyleConfig},
    geometry::Point,
    layout::LayoutError,
};

const LOGIN: &str = r#"
    [in]
    "$class" = "kk.Logic"
    title = "Login"
    onDone = "session"
    onFail = "failure"

    [session]
    "$class" = "kk.Logic.Outlet"

    [failure]
    "$class" = "kk.Logic.Outlet"
    title = "Show error"
"#;

#[test]
fn test_parse_toml_diagram() {
    let builder = DiagramBuilder::default();
    let diagram = builder
        .parse(LOGIN, SourceFormat::Toml)
        .expect("Should parse valid diagram");

    let root = diagram.root().expect("Diagram should have a tree");
    let titles: Vec<_> = root.iter().map(|node| node.title()).collect();
    assert_eq!(
        titles,
        ["in: Login", "Done: kk.Logic.Outlet", "Fail: Show error"]
    );
    assert!(diagram.skipped().is_empty());
}

#[test]
fn test_parse_json_diagram() {
    let source = r#"{
        "in": {"$class": "kk.Logic", "onNext": {"$class": "kk.Logic.Outlet"}}
    }"#;

    let builder = DiagramBuilder::default();
    let diagram = builder.parse(source, SourceFormat::Json).unwrap();
    assert_eq!(diagram.root().unwrap().len(), 2);
}

#[test]
fn test_render_simple_diagram() {
    let builder = DiagramBuilder::default();
    let diagram = builder.parse(LOGIN, SourceFormat::Toml).unwrap();
    let svg = builder
        .render_svg(&diagram)
        .expect("Failed to render diagram");

    assert!(svg.contains("<svg"), "Output should contain SVG tag");
    assert!(svg.contains("</svg>"), "Output should be complete SVG");
    assert!(svg.contains("Fail: Show error"));
}

#[test]
fn test_render_twice_is_rejected() {
    let builder = DiagramBuilder::default();
    let diagram = builder.parse(LOGIN, SourceFormat::Toml).unwrap();
    builder.render_svg(&diagram).unwrap();

    let err = builder.render_svg(&diagram).unwrap_err();
    assert!(matches!(
        err,
        ArborError::Layout(LayoutError::AlreadyLaidOut { .. })
    ));
}

#[test]
fn test_builder_with_config() {
    let config = AppConfig::new(
        LayoutConfig::new(4.0, Point::new(0.0, 0.0)),
        StyleConfig::default(),
    );
    let builder = DiagramBuilder::new(config);
    assert_eq!(builder.engine().spacing(), 4.0);

    let diagram = builder.parse(LOGIN, SourceFormat::Toml).unwrap();
    builder.render_svg(&diagram).unwrap();

    let root = diagram.root().unwrap();
    assert_eq!(root.placement().unwrap().origin(), Point::new(0.0, 0.0));
}

#[test]
fn test_parse_invalid_syntax_returns_error() {
    let builder = DiagramBuilder::default();

    let result = builder.parse("[in\n", SourceFormat::Toml);
    assert!(matches!(result, Err(ArborError::Parse { .. })));

    let result = builder.parse("{\"in\": ", SourceFormat::Json);
    assert!(matches!(result, Err(ArborError::Parse { .. })));
}

#[test]
fn test_entry_pin_must_be_object() {
    let builder = DiagramBuilder::default();
    let result = builder.parse("in = \"login\"", SourceFormat::Toml);
    assert!(matches!(result, Err(ArborError::Config(_))));
}

#[test]
fn test_document_without_entry_pin_renders_empty() {
    let builder = DiagramBuilder::default();
    let diagram = builder
        .parse("[login]\n\"$class\" = \"kk.Logic\"\n", SourceFormat::Toml)
        .unwrap();
    assert!(diagram.root().is_none());

    let svg = builder.render_svg(&diagram).unwrap();
    assert!(svg.contains("<svg"));
    assert!(!svg.contains("<rect"));
}

#[test]
fn test_invalid_style_is_export_error() {
    let config: AppConfig = toml::from_str("[style]\nnode_fill_color = \"nope\"\n").unwrap();
    let builder = DiagramBuilder::new(config);
    let diagram = builder.parse(LOGIN, SourceFormat::Toml).unwrap();

    let err = builder.render_svg(&diagram).unwrap_err();
    assert!(matches!(err, ArborError::Export(_)));
}

#[test]
fn test_zero_font_size_is_settings_error() {
    let config: AppConfig = toml::from_str("[style]\nfont_size = 0\n").unwrap();
    let builder = DiagramBuilder::new(config);
    let diagram = builder.parse(LOGIN, SourceFormat::Toml).unwrap();

    let err = builder.render_svg(&diagram).unwrap_err();
    assert!(matches!(
        err,
        ArborError::Settings(SettingsError::Validation {
            option: "font_size",
            ..
        })
    ));
    assert!(!diagram.root().unwrap().is_positioned());
}

#[test]
fn test_negative_spacing_is_settings_error() {
    let config = AppConfig::new(
        LayoutConfig::new(-100.0, Point::new(40.0, 40.0)),
        StyleConfig::default(),
    );
    let builder = DiagramBuilder::new(config);
    let diagram = builder.parse(LOGIN, SourceFormat::Toml).unwrap();

    let err = builder.render_svg(&diagram).unwrap_err();
    assert!(matches!(
        err,
        ArborError::Settings(SettingsError::Validation {
            option: "spacing",
            ..
        })
    ));
}

#[test]
fn test_builder_reusability() {
    let builder = DiagramBuilder::default();

    let first = builder.parse(LOGIN, SourceFormat::Toml).unwrap();
    let second = builder.parse(LOGIN, SourceFormat::Toml).unwrap();

    let svg1 = builder.render_svg(&first).unwrap();
    let svg2 = builder.render_svg(&second).unwrap();
    assert_eq!(svg1, svg2, "Same document should render identically");
}
