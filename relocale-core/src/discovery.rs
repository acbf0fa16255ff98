//! Locale resource directory discovery.

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use walkdir::WalkDir;

use crate::locale::LocaleId;

/// A locale resource directory found under a resources root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleDirRef {
    pub path: PathBuf,
    pub locale: LocaleId,
}

/// Trait for enumerating locale directories from some backing store.
pub trait LocaleDiscovery {
    fn discover(&self) -> Result<Vec<LocaleDirRef>>;
}

/// Lists the immediate children of an Android `res/` directory and keeps
/// the ones whose names are locale-shaped (`values-de`, `values-de-rDE`).
#[derive(Debug, Clone)]
pub struct ResDirDiscovery {
    root: PathBuf,
    follow_symlinks: bool,
}

impl ResDirDiscovery {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            follow_symlinks: false,
        }
    }

    pub fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }
}

impl LocaleDiscovery for ResDirDiscovery {
    fn discover(&self) -> Result<Vec<LocaleDirRef>> {
        if !self.root.exists() {
            return Err(anyhow!(
                "resources root does not exist: {}",
                self.root.display()
            ));
        }

        let mut found = Vec::new();

        // Locale dirs sit directly under res/, never nested.
        for entry in WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .follow_links(self.follow_symlinks)
        {
            let entry = entry?;
            if !entry.file_type().is_dir() {
                continue;
            }

            let name = match entry.file_name().to_str() {
                Some(name) => name,
                None => continue,
            };

            if let Some(locale) = LocaleId::from_res_dir(name) {
                found.push(LocaleDirRef {
                    path: entry.path().to_path_buf(),
                    locale,
                });
            }
        }

        found.sort_by(|a, b| a.locale.cmp(&b.locale));
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::{LocaleDiscovery, ResDirDiscovery};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn skips_files_with_locale_shaped_names() {
        let tmp = tempdir().expect("tempdir");
        fs::create_dir(tmp.path().join("values-de")).expect("mkdir");
        fs::write(tmp.path().join("values-fr"), b"not a dir").expect("touch file");

        let dirs = ResDirDiscovery::new(tmp.path()).discover().expect("discover");
        let names: Vec<String> = dirs.iter().map(|d| d.locale.to_string()).collect();

        assert_eq!(names, ["de"]);
    }

    #[test]
    fn errors_on_missing_root() {
        let discovery = ResDirDiscovery::new("/nonexistent/relocale-res");
        assert!(discovery.discover().is_err());
    }

    #[cfg(unix)]
    #[test]
    fn follows_symlinked_root_when_enabled() {
        use std::os::unix::fs::symlink;

        let tmp = tempdir().expect("tempdir");
        let real = tmp.path().join("res");
        fs::create_dir_all(real.join("values-de")).expect("mkdir");
        let link = tmp.path().join("res-link");
        symlink(&real, &link).expect("symlink");

        let dirs = ResDirDiscovery::new(&link)
            .follow_symlinks(true)
            .discover()
            .expect("discover");

        assert_eq!(dirs.len(), 1);
        assert_eq!(dirs[0].locale.to_string(), "de");
    }
}
