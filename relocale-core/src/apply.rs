//! The side-effecting half of locale filtering.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::locale::LocaleId;
use crate::plan::RemovalPlan;

/// One directory deleted by [`apply_removals`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemovalOutcome {
    pub locale: LocaleId,
    pub path: PathBuf,
}

/// Delete the resource directories named by the plan's removal set.
///
/// This is the only mutating operation in the crate and must be invoked
/// explicitly; planning never calls it. Directories are resolved against
/// `res_root` via [`LocaleId::res_dir_name`], so a plan computed from one
/// root must be applied to the same root.
pub fn apply_removals(res_root: &Path, plan: &RemovalPlan) -> Result<Vec<RemovalOutcome>> {
    let mut outcomes = Vec::with_capacity(plan.remove.len());

    for locale in &plan.remove {
        let path = res_root.join(locale.res_dir_name());
        fs::remove_dir_all(&path)
            .with_context(|| format!("failed to remove locale dir: {}", path.display()))?;

        outcomes.push(RemovalOutcome {
            locale: locale.clone(),
            path,
        });
    }

    Ok(outcomes)
}
