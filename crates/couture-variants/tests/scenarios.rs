//! End-to-end resolution and merging scenarios.

use couture_variants::{
    Axis, ClassMerger, ComponentStyle, FragmentSet, PropertyGroups, ResolvedFragments, Selection,
    VariantSchema,
};

fn button() -> ComponentStyle {
    let schema = VariantSchema::builder()
        .axis(
            Axis::new("size")
                .value("sm", "h-9")
                .value("md", "h-11")
                .default_value("md"),
        )
        .axis(
            Axis::new("variant")
                .value("primary", "bg-blue")
                .value("outline", "border-blue")
                .default_value("primary"),
        )
        .build()
        .unwrap();
    ComponentStyle::new("button", "inline-flex", schema)
}

#[test]
fn test_invalid_size_falls_back_and_override_is_trimmed() {
    let classes = button().classes(
        &Selection::new().with("size", "lg"),
        Some("  text-white  "),
        &PropertyGroups::new(),
    );
    assert_eq!(classes, "inline-flex h-11 bg-blue text-white");
}

#[test]
fn test_explicit_selection_without_override() {
    let selection = Selection::new().with("variant", "outline").with("size", "sm");
    let classes = button().classes(&selection, None, &PropertyGroups::new());
    assert_eq!(classes, "inline-flex h-9 border-blue");
}

#[test]
fn test_override_drops_conflicting_base_token() {
    let groups = PropertyGroups::builder()
        .group("bg", ["bg-blue", "bg-red"])
        .build()
        .unwrap();
    let merged = ClassMerger::new(&groups).merge(
        &FragmentSet::parse("bg-blue"),
        &ResolvedFragments::default(),
        Some("bg-red"),
    );
    assert_eq!(merged, "bg-red");
}

#[test]
fn test_override_drops_conflicting_variant_token() {
    let groups = PropertyGroups::builder()
        .group("bg", ["bg-blue", "bg-red"])
        .build()
        .unwrap();
    let classes = button().classes(&Selection::new(), Some("bg-red"), &groups);
    assert_eq!(classes, "inline-flex h-11 bg-red");
}

#[test]
fn test_unset_and_unknown_axes_are_ignored() {
    let selection = Selection::new()
        .unset("size")
        .with("tone", "loud")
        .with_optional("variant", None::<String>);
    let classes = button().classes(&selection, None, &PropertyGroups::new());
    assert_eq!(classes, "inline-flex h-11 bg-blue");
}

#[test]
fn test_strict_mode_explains_typos() {
    let err = button()
        .classes_strict(&Selection::new().with("size", "lg"), None, &PropertyGroups::new())
        .unwrap_err();
    assert!(err.to_string().contains("expected one of: sm, md"));
}

#[test]
fn test_yaml_component_and_groups() {
    let button = ComponentStyle::from_yaml(
        r#"
name: button
base: inline-flex font-bold
variants:
  size:
    default: md
    values:
      sm: h-9 px-4 rounded-lg
      md: h-11 px-6 rounded-lg
  rounded:
    default: default
    values:
      default: ""
      full: rounded-full
"#,
    )
    .unwrap();
    let groups = PropertyGroups::from_yaml(
        r#"
border-radius: [rounded-lg, rounded-full]
padding-x: [px-4, px-6, px-8]
"#,
    )
    .unwrap();

    let selection = Selection::new().with("rounded", "full");
    assert_eq!(
        button.classes(&selection, Some("px-8"), &groups),
        "inline-flex font-bold h-11 rounded-full px-8"
    );
}

#[test]
fn test_schemas_are_shareable_across_threads() {
    let button = std::sync::Arc::new(button());
    let groups = std::sync::Arc::new(PropertyGroups::new());

    let handles: Vec<_> = ["sm", "md", "lg"]
        .into_iter()
        .map(|size| {
            let button = button.clone();
            let groups = groups.clone();
            std::thread::spawn(move || {
                button.classes(&Selection::new().with("size", size), None, &groups)
            })
        })
        .collect();

    let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(
        results,
        [
            "inline-flex h-9 bg-blue",
            "inline-flex h-11 bg-blue",
            "inline-flex h-11 bg-blue"
        ]
    );
}
