//! relocale-core: planning engine for release locale filtering.
//!
//! Release builds of the app historically shipped only translations on an
//! approved release locales list; every other `values-*` resource directory
//! was deleted during CI packaging. This crate is that machinery, split the
//! way it should have been from the start:
//!
//! - [`discovery`] enumerates the locale resource directories under a given
//!   resources root.
//! - [`plan`] computes which of them fall outside an injected allow-list.
//!   Pure data in, pure data out.
//! - [`apply`] is the separate, explicitly invoked step that actually
//!   deletes directories named by a plan.
//! - [`locale`] holds the identifier type and the Android resource-dir
//!   naming rules (`de-DE` maps to `values-de-rDE` and back).
//! - [`output`] renders plans and outcomes for packaging logs or as JSON.
//!
//! The CI entrypoint does not call any of this while filtering stays
//! disabled (#5474); it is kept live and tested so that re-enabling the
//! step is a matter of wiring `discover -> plan -> apply` back together.
//!
//! ```rust,no_run
//! use relocale_core::discovery::{LocaleDiscovery, ResDirDiscovery};
//! use relocale_core::locale::parse_locale_list;
//! use relocale_core::plan::plan_removals;
//!
//! let release = parse_locale_list(&["de".into(), "en-US".into()])?;
//! let discovered = ResDirDiscovery::new("app/src/main/res").discover()?;
//! let app: Vec<_> = discovered.into_iter().map(|dir| dir.locale).collect();
//!
//! let plan = plan_removals(&app, &release);
//! println!("{} locale dirs outside the release list", plan.remove.len());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod apply;
pub mod discovery;
pub mod locale;
pub mod output;
pub mod plan;
