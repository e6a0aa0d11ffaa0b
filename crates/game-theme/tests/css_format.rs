use game_theme::{
    factory_themes, parse_theme_css, serialize_theme, slugify, CssFormat, ParseError, Theme,
};
use insta::assert_snapshot;
use proptest::prelude::*;

#[test]
fn test_factory_theme_css() {
    let theme = factory_themes()
        .iter()
        .find(|t| t.slug() == "white-and-orange-on-blue")
        .unwrap();

    assert_snapshot!(serialize_theme(theme), @r"
.bloom-page.game-theme-white-and-orange-on-blue {
  --game-button-bg-color: white;
  --game-button-correct-color: var(--game-text-color);
  --game-button-outline-color: var(--game-page-bg-color);
  --game-button-text-color: black;
  --game-checkbox-outline-color: #848484;
  --game-draggable-color: white;
  --game-header-bg-color: var(--game-secondary-color);
  --game-header-color: var(--game-text-color);
  --game-primary-color: #ffb453;
  --game-secondary-color: #539eff;
  --game-text-color: white;
}
");
}

#[test]
fn test_custom_format_css() {
    let theme = Theme::new("7", "Night Mode").with_variable("--game-text-color", "#eeeeee");
    let css = CssFormat::new("reader", "palette").serialize(&theme);

    assert_snapshot!(css, @r"
.reader.palette-night-mode {
  --game-text-color: #eeeeee;
}
");
}

#[test]
fn test_empty_theme_css() {
    assert_snapshot!(serialize_theme(&Theme::new("1", "Blank")), @r"
.bloom-page.game-theme-blank {
}
");
}

#[test]
fn test_parse_hand_written_paste() {
    let pasted = r#"
/* exported from the page editor */
.bloom-page.game-theme-sunset-glow{
    --game-primary-color:#ff8800;   // warm
    --game-text-color :  var(--game-secondary-color) ;
    color: red;
    --game-header-color: ;
}
"#;
    let parsed = parse_theme_css(pasted).unwrap();

    assert_eq!(parsed.slug, "sunset-glow");
    assert_eq!(parsed.display_name, "Sunset Glow");
    let entries: Vec<(&str, &str)> = parsed
        .variables
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    assert_eq!(
        entries,
        vec![
            ("--game-primary-color", "#ff8800"),
            ("--game-text-color", "var(--game-secondary-color)"),
        ]
    );
}

#[test]
fn test_parse_rejects_foreign_selector() {
    let err = parse_theme_css(".page.theme-x { --a: b; }").unwrap_err();
    assert!(matches!(err, ParseError::NoThemeSelector { .. }));

    // a custom format does not accept the default selector
    let custom = CssFormat::new("reader", "palette");
    assert!(custom
        .parse(".bloom-page.game-theme-x { --a: b; }")
        .is_err());
}

#[test]
fn test_every_factory_theme_round_trips() {
    for theme in factory_themes() {
        let css = serialize_theme(theme);
        let parsed = parse_theme_css(&css).unwrap();
        assert_eq!(parsed.slug, theme.slug());
        assert_eq!(parsed.len(), theme.variables().len());
        for (name, value) in theme.variables() {
            assert_eq!(parsed.variables.get(name), Some(value), "{}", name);
        }
    }
}

// ============================================================================
// Property tests
// ============================================================================

fn display_name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9 ]{0,20}"
}

fn variable_name() -> impl Strategy<Value = String> {
    "--[a-z][a-z0-9-]{0,15}"
}

fn variable_value() -> impl Strategy<Value = String> {
    prop_oneof![
        "#[0-9a-f]{6}",
        "[a-z]{3,10}",
        "var\\(--[a-z][a-z-]{0,12}\\)",
        "rgb\\([0-9]{1,3}, [0-9]{1,3}, [0-9]{1,3}\\)",
    ]
}

fn theme_strategy() -> impl Strategy<Value = Theme> {
    (
        display_name(),
        prop::collection::hash_map(variable_name(), variable_value(), 0..12),
    )
        .prop_map(|(name, vars)| Theme::new("p", name).with_variables(vars))
}

proptest! {
    #[test]
    fn serialization_is_idempotent(theme in theme_strategy()) {
        let css = serialize_theme(&theme);
        let parsed = parse_theme_css(&css).unwrap();
        prop_assert_eq!(&parsed.slug, theme.slug());

        let again = serialize_theme(&parsed.into_theme("p"));
        prop_assert_eq!(again, css);
    }

    #[test]
    fn declarations_are_sorted(theme in theme_strategy()) {
        let css = serialize_theme(&theme);
        let lines: Vec<&str> = css.lines().collect();
        prop_assert_eq!(lines.len(), theme.variables().len() + 2);
        prop_assert!(lines[0].ends_with(" {"), "first line should open a block");
        prop_assert_eq!(*lines.last().unwrap(), "}");

        let names: Vec<&str> = lines[1..lines.len() - 1]
            .iter()
            .map(|line| line.trim_start().split(':').next().unwrap())
            .collect();
        prop_assert!(names.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn slugs_are_selector_safe(text in "\\PC{0,40}") {
        let slug = slugify(&text);
        prop_assert!(slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-'));
        prop_assert!(!slug.starts_with('-') && !slug.ends_with('-'));
        prop_assert!(!slug.contains("--"));
        prop_assert_eq!(slugify(&slug), slug);
    }
}
