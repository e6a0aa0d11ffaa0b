use game_theme::{
    load_presets, CssFormat, CssRuleSource, EditorConfig, PasteMerge, PasteNaming, Theme,
    ThemeError, ThemeId, ThemeLibrary,
};
use serde_json::json;

fn factory_id(library: &ThemeLibrary, slug: &str) -> ThemeId {
    library
        .themes()
        .iter()
        .find(|t| t.is_factory && t.slug() == slug)
        .unwrap()
        .id
        .clone()
}

#[test]
fn test_duplicate_edit_and_export() {
    let mut library = ThemeLibrary::new(EditorConfig::default());
    let source = factory_id(&library, "blue-on-white");

    let copy = library.duplicate(&source).unwrap();
    library
        .set_variable(&copy, "--game-header-bg-color", "var(--game-secondary-color)")
        .unwrap();
    library.rename(&copy, "Calm Sky").unwrap();

    assert_eq!(library.selected().unwrap().id, copy);
    let table = library.resolved_table(&copy).unwrap();
    assert_eq!(table.get("--game-header-bg-color"), Some("white"));
    assert_eq!(table.get("--game-draggable-bg-color"), Some("#539eff"));

    assert_eq!(
        library.css(&copy).unwrap(),
        ".bloom-page.game-theme-calm-sky {\n  --game-header-bg-color: var(--game-secondary-color);\n  --game-primary-color: #539eff;\n  --game-secondary-color: white;\n}"
    );

    // the source is untouched
    let original = library.get(&source).unwrap();
    assert_eq!(original.display_name(), "Blue on White");
    assert!(!original.is_overridden("--game-header-bg-color"));
}

#[test]
fn test_css_moves_between_libraries() {
    let mut first = ThemeLibrary::new(EditorConfig::default());
    let id = first.create("Forest Floor").unwrap();
    first.set_variable(&id, "--game-primary-color", "#2f5d3a").unwrap();
    let exported = first.css(&id).unwrap();

    let config = EditorConfig::default().with_naming(PasteNaming::AdoptPasted);
    let mut second = ThemeLibrary::new(config);
    let target = second.create("Scratch").unwrap();
    let applied = second.paste_css(&target, &exported).unwrap();

    assert_eq!(applied, 2);
    let theme = second.get(&target).unwrap();
    assert_eq!(theme.display_name(), "Forest Floor");
    assert_eq!(theme.id, target);
    assert_eq!(second.css(&target).unwrap(), exported);
}

#[test]
fn test_union_paste_keeps_unmentioned_overrides() {
    let config = EditorConfig::default().with_merge(PasteMerge::Union);
    let mut library = ThemeLibrary::new(config);
    let id = library.create("Layered").unwrap();
    library.set_variable(&id, "--game-text-color", "#222222").unwrap();

    library
        .paste_css(&id, ".bloom-page.game-theme-x { --game-primary-color: #010101; }")
        .unwrap();

    let theme = library.get(&id).unwrap();
    assert_eq!(theme.variable("--game-primary-color"), Some("#010101"));
    assert_eq!(theme.variable("--game-secondary-color"), Some("#ffffff"));
    assert_eq!(theme.variable("--game-text-color"), Some("#222222"));
    assert_eq!(theme.display_name(), "Layered");
}

#[test]
fn test_custom_format_library() {
    let config = EditorConfig::from_yaml("format:\n  namespace: reader\n  prefix: palette\n").unwrap();
    assert_eq!(config.format, CssFormat::new("reader", "palette"));

    let mut library = ThemeLibrary::new(config);
    let id = library.create("Ink").unwrap();

    let err = library
        .paste_css(&id, ".bloom-page.game-theme-ink { --game-primary-color: red; }")
        .unwrap_err();
    assert!(matches!(err, ThemeError::Parse(_)));

    library
        .paste_css(&id, ".reader.palette-ink { --game-primary-color: red; }")
        .unwrap();
    assert!(library.css(&id).unwrap().starts_with(".reader.palette-ink {"));
}

#[test]
fn test_stylesheet_refines_library_derivation() {
    let rules = CssRuleSource::new(":root { --game-header-color: var(--game-primary-color); }");
    let mut library = ThemeLibrary::new(EditorConfig::default()).with_rule_source(&rules);
    let id = library.create("Tinted").unwrap();

    let table = library.resolved_table(&id).unwrap();
    assert_eq!(table.get("--game-header-color"), Some("#9b87f5"));
    assert_eq!(table.get("--game-draggable-color"), Some("#ffffff"));
}

#[test]
fn test_pasted_deep_var_chain_resolves() {
    const LINKS: usize = 100_000;
    let mut css = String::from(".bloom-page.game-theme-deep {\n");
    css.push_str("  --game-text-color: var(--x0);\n");
    for i in 0..LINKS {
        css.push_str(&format!("  --x{}: var(--x{});\n", i, i + 1));
    }
    css.push_str(&format!("  --x{}: #123456;\n}}", LINKS));

    let mut library = ThemeLibrary::new(EditorConfig::default());
    let id = library.create("Scratch").unwrap();
    assert_eq!(library.paste_css(&id, &css).unwrap(), LINKS + 2);

    let table = library.resolved_table(&id).unwrap();
    assert_eq!(table.get("--game-text-color"), Some("#123456"));
    assert_eq!(table.get("--game-checkbox-outline-color"), Some("#123456"));
}

#[test]
fn test_factory_protection_holds_across_operations() {
    let mut library = ThemeLibrary::new(EditorConfig::default());
    let id = factory_id(&library, "red-on-white");
    let before = library.get(&id).unwrap().clone();

    let paste = ".bloom-page.game-theme-x { --game-primary-color: green; }";
    assert!(library.set_variable(&id, "--game-primary-color", "green").is_err());
    assert!(library.reset_variable(&id, "--game-primary-color").is_err());
    assert!(library.rename(&id, "Mine Now").is_err());
    assert!(library.paste_css(&id, paste).is_err());
    assert!(library.delete(&id).is_err());

    assert_eq!(library.get(&id), Some(&before));
}

#[test]
fn test_preset_becomes_editable_copy() {
    let presets = load_presets(
        "- id: seasonal\n  displayName: Autumn Leaves\n  variables:\n    --game-primary-color: \"#b5651d\"\n",
    )
    .unwrap();
    assert!(presets[0].is_factory);

    let mut library = ThemeLibrary::new(EditorConfig::default());
    let id = library.use_preset(&presets[0]);
    library.set_variable(&id, "--game-text-color", "black").unwrap();

    let theme = library.selected().unwrap();
    assert_eq!(theme.slug(), "autumn-leaves");
    assert!(!theme.is_factory);
}

#[test]
fn test_theme_json_shape() {
    let theme = Theme::new("42", "Night Owl").with_variable("--game-primary-color", "#101820");
    let value = serde_json::to_value(&theme).unwrap();

    assert_eq!(
        value,
        json!({
            "id": "42",
            "displayName": "Night Owl",
            "slug": "night-owl",
            "isFactory": false,
            "variables": { "--game-primary-color": "#101820" }
        })
    );

    let back: Theme = serde_json::from_value(value).unwrap();
    assert_eq!(back, theme);
}
