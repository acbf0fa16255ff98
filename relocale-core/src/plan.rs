//! Removal planning over discovered locales.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::locale::LocaleId;

/// Which locale directories fall outside the release list.
///
/// Plain data. Nothing is touched on disk until a plan is handed to
/// [`crate::apply::apply_removals`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemovalPlan {
    /// The injected release allow-list.
    pub release: Vec<LocaleId>,
    /// Locales discovered in the app's resources.
    pub app: Vec<LocaleId>,
    /// App locales not on the release list.
    pub remove: Vec<LocaleId>,
}

impl RemovalPlan {
    pub fn is_noop(&self) -> bool {
        self.remove.is_empty()
    }
}

/// Compute the removal set `app − release`.
///
/// All three collections in the returned plan are sorted and deduplicated,
/// so plans, logs, and serialized output are deterministic.
pub fn plan_removals(app: &[LocaleId], release: &[LocaleId]) -> RemovalPlan {
    let keep: HashSet<&LocaleId> = release.iter().collect();

    let mut remove: Vec<LocaleId> = app
        .iter()
        .filter(|locale| !keep.contains(locale))
        .cloned()
        .collect();

    let mut app = app.to_vec();
    let mut release = release.to_vec();
    for list in [&mut app, &mut release, &mut remove] {
        list.sort();
        list.dedup();
    }

    RemovalPlan {
        release,
        app,
        remove,
    }
}

#[cfg(test)]
mod tests {
    use super::plan_removals;
    use crate::locale::LocaleId;

    fn ids(raw: &[&str]) -> Vec<LocaleId> {
        raw.iter().map(|r| LocaleId::parse(r).expect("id")).collect()
    }

    #[test]
    fn removes_locales_outside_release_list() {
        let plan = plan_removals(&ids(&["de", "fr", "en-US"]), &ids(&["de", "en-US"]));

        assert_eq!(plan.remove, ids(&["fr"]));
        assert!(!plan.is_noop());
    }

    #[test]
    fn full_coverage_is_a_noop() {
        let plan = plan_removals(&ids(&["de", "fr"]), &ids(&["de", "fr", "it"]));

        assert!(plan.is_noop());
        assert_eq!(plan.app, ids(&["de", "fr"]));
    }

    #[test]
    fn region_variants_are_distinct_locales() {
        let plan = plan_removals(&ids(&["de", "de-DE"]), &ids(&["de"]));

        assert_eq!(plan.remove, ids(&["de-DE"]));
    }

    #[test]
    fn output_is_sorted_and_deduplicated() {
        let plan = plan_removals(&ids(&["fr", "de", "fr"]), &ids(&["it", "it"]));

        assert_eq!(plan.app, ids(&["de", "fr"]));
        assert_eq!(plan.release, ids(&["it"]));
        assert_eq!(plan.remove, ids(&["de", "fr"]));
    }
}
