//! Property tests for resolution and merging.

use couture_variants::{Axis, ClassMerger, PropertyGroups, Selection, VariantSchema};
use proptest::prelude::*;
use proptest::sample::Index;

fn token() -> impl Strategy<Value = String> {
    "[a-z]{1,3}-[0-9]{1,2}"
}

fn axis_values() -> impl Strategy<Value = (Vec<Vec<String>>, Index)> {
    (
        prop::collection::vec(prop::collection::vec(token(), 0..4), 1..5),
        any::<Index>(),
    )
}

fn schema() -> impl Strategy<Value = VariantSchema> {
    prop::collection::vec(axis_values(), 0..4).prop_map(|axes| {
        axes.into_iter()
            .enumerate()
            .fold(VariantSchema::builder(), |builder, (i, (values, default))| {
                let default = default.index(values.len());
                let axis = values
                    .into_iter()
                    .enumerate()
                    .fold(Axis::new(format!("axis{i}")), |axis, (j, fragments)| {
                        axis.value(format!("v{j}"), fragments.join(" "))
                    });
                builder.axis(axis.default_value(format!("v{default}")))
            })
            .build()
            .unwrap()
    })
}

fn selection() -> impl Strategy<Value = Selection> {
    prop::collection::vec(("axis[0-5]", "v[0-6]"), 0..6)
        .prop_map(|pairs| pairs.into_iter().collect())
}

proptest! {
    #[test]
    fn resolution_is_deterministic(schema in schema(), selection in selection()) {
        prop_assert_eq!(schema.resolve(&selection), schema.resolve(&selection));
    }

    #[test]
    fn resolution_covers_every_axis(schema in schema(), selection in selection()) {
        let resolved = schema.resolve(&selection);
        prop_assert_eq!(resolved.len(), schema.len());
        for (entry, axis) in resolved.iter().zip(schema.axes()) {
            prop_assert_eq!(entry.axis, axis.name());
        }
    }

    #[test]
    fn empty_selection_yields_defaults(schema in schema()) {
        let resolved = schema.resolve(&Selection::new());
        let defaults: Vec<_> = schema.axes().iter().map(|a| a.default_fragments()).collect();
        let sets: Vec<_> = resolved.fragment_sets().collect();
        prop_assert_eq!(sets, defaults);
    }

    #[test]
    fn invalid_value_equals_omission(schema in schema(), selection in selection()) {
        for axis in schema.axes() {
            let invalid = selection.clone().with(axis.name(), "not-a-value");
            let omitted = selection.clone().unset(axis.name());
            prop_assert_eq!(schema.resolve(&invalid), schema.resolve(&omitted));
        }
    }

    #[test]
    fn clean_input_merges_unchanged(
        tokens in prop::collection::hash_set(token(), 0..12),
        classify in prop::collection::vec(any::<bool>(), 12),
    ) {
        let tokens: Vec<String> = tokens.into_iter().collect();
        // Each classified token gets a group of its own, so nothing conflicts.
        let groups = tokens
            .iter()
            .zip(&classify)
            .enumerate()
            .filter(|(_, (_, classified))| **classified)
            .fold(PropertyGroups::builder(), |builder, (i, (token, _))| {
                builder.group(format!("g{i}"), [token.as_str()])
            })
            .build()
            .unwrap();

        let merged = ClassMerger::new(&groups)
            .join(tokens.iter().map(String::as_str));
        let round_trip: Vec<&str> = merged.split(' ').filter(|t| !t.is_empty()).collect();
        prop_assert_eq!(round_trip, tokens.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn later_token_in_group_wins(
        a in token(),
        b in token(),
        before in prop::collection::vec("n[0-9]{1,2}", 0..4),
        between in prop::collection::vec("n[0-9]{1,2}", 0..4),
    ) {
        prop_assume!(a != b);
        let groups = PropertyGroups::builder()
            .group("shared", [a.as_str(), b.as_str()])
            .build()
            .unwrap();

        let sequence = format!("{} {} {} {}", before.join(" "), a, between.join(" "), b);
        let merged = ClassMerger::new(&groups).join([sequence.as_str()]);
        let tokens: Vec<&str> = merged.split(' ').collect();
        prop_assert!(tokens.contains(&b.as_str()));
        prop_assert!(!tokens.contains(&a.as_str()));
    }

    #[test]
    fn override_whitespace_is_normalized(
        parts in prop::collection::vec((token(), "[ \t\n]{1,4}"), 0..6),
        lead in "[ \t\n]{0,3}",
    ) {
        let raw: String = parts
            .iter()
            .fold(lead, |mut raw, (token, gap)| {
                raw.push_str(token);
                raw.push_str(gap);
                raw
            });
        let merged = ClassMerger::new(&PropertyGroups::new()).join([raw.as_str()]);

        prop_assert_eq!(merged.trim(), merged.as_str());
        prop_assert!(!merged.contains("  "));
        prop_assert!(!merged.contains('\t') && !merged.contains('\n'));
    }
}
