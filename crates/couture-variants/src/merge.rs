//! Class merging with property-group conflict resolution.
//!
//! Tokens are processed in precedence order: base fragments, then each
//! resolved axis in schema order, then the caller's raw override. Within a
//! property group only the last-occurring token survives. Every surviving
//! token is emitted once, at the position of its first occurrence, so
//! already-clean input comes back unchanged.

use std::collections::{HashMap, HashSet};

use tracing::trace;

use crate::fragment::{tokenize, FragmentSet};
use crate::groups::PropertyGroups;
use crate::resolve::ResolvedFragments;

/// Merges fragment sequences into a single class string.
///
/// # Example
///
/// ```rust
/// use couture_variants::{ClassMerger, FragmentSet, PropertyGroups, ResolvedFragments};
///
/// let groups = PropertyGroups::builder()
///     .group("bg", ["bg-blue", "bg-red"])
///     .build()
///     .unwrap();
/// let merger = ClassMerger::new(&groups);
///
/// let merged = merger.merge(
///     &FragmentSet::parse("bg-blue text-white"),
///     &ResolvedFragments::default(),
///     Some("  bg-red  text-white "),
/// );
/// assert_eq!(merged, "text-white bg-red");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ClassMerger<'g> {
    groups: &'g PropertyGroups,
}

impl<'g> ClassMerger<'g> {
    pub fn new(groups: &'g PropertyGroups) -> Self {
        Self { groups }
    }

    /// Merges `base`, then `resolved`, then the tokenized `raw_override`.
    ///
    /// Never fails: an empty base, a zero-axis resolution, or a blank
    /// override all produce a well-formed, possibly empty, string.
    pub fn merge(
        &self,
        base: &FragmentSet,
        resolved: &ResolvedFragments<'_>,
        raw_override: Option<&str>,
    ) -> String {
        let tokens = base
            .tokens()
            .chain(resolved.tokens())
            .chain(raw_override.into_iter().flat_map(tokenize));
        self.merge_tokens(tokens)
    }

    /// Merges arbitrary class strings, later parts taking precedence.
    ///
    /// Useful for elements without variants that still accept overrides.
    pub fn join<'s, I>(&self, parts: I) -> String
    where
        I: IntoIterator<Item = &'s str>,
    {
        self.merge_tokens(parts.into_iter().flat_map(tokenize))
    }

    fn merge_tokens<'t>(&self, tokens: impl Iterator<Item = &'t str>) -> String {
        let tokens: Vec<&'t str> = tokens.collect();

        // Last occurrence wins within each property group.
        let mut winners: HashMap<&str, &str> = HashMap::new();
        for &token in &tokens {
            if let Some(group) = self.groups.group_of(token) {
                winners.insert(group, token);
            }
        }

        let mut seen: HashSet<&str> = HashSet::with_capacity(tokens.len());
        let mut merged: Vec<&str> = Vec::with_capacity(tokens.len());
        for token in tokens {
            if let Some(group) = self.groups.group_of(token) {
                if winners.get(group).is_some_and(|winner| *winner != token) {
                    trace!(token, group, "class overridden by a later class in its group");
                    continue;
                }
            }
            if seen.insert(token) {
                merged.push(token);
            }
        }

        merged.join(" ")
    }
}
