//! Quarry - IDE feature catalog harvester.
//!
//! Quarry digs the capabilities ("features") of an extensible IDE-like
//! platform out of a serialized snapshot of its loaded type universe,
//! classifies them into feature kinds, resolves each feature's language
//! affinity, deduplicates, and merges the result into an append-only,
//! version-stamped catalog document recording when each feature first
//! appeared.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Harvest configuration (`quarry.yml`)
//! - [`error`] - Error types and result aliases
//! - [`harvest`] - Classification and harvesting passes
//! - [`model`] - Features, kinds, languages, catalogs
//! - [`registry`] - External lookup tables (severities, quick fixes, categories)
//! - [`store`] - Versioned, append-only catalog store
//! - [`tags`] - Tag-indexed re-projection of harvested catalogs
//! - [`ui`] - Terminal output
//! - [`universe`] - Type-universe abstraction and snapshot loader
//!
//! # Example
//!
//! ```
//! use quarry::model::{Feature, FeatureCatalog, FeatureKind, Language};
//!
//! let mut catalog = FeatureCatalog::new(FeatureKind::QuickFix);
//! let fix = Feature::new(FeatureKind::QuickFix, "RemoveBracesFix", Language::csharp())
//!     .unwrap()
//!     .with_text("Remove braces");
//! assert!(catalog.insert(fix));
//! // Same (kind, id, language) again is a no-op.
//! let dup = Feature::new(FeatureKind::QuickFix, "RemoveBracesFix", Language::csharp()).unwrap();
//! assert!(!catalog.insert(dup));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod harvest;
pub mod model;
pub mod registry;
pub mod store;
pub mod tags;
pub mod ui;
pub mod universe;

pub use error::{QuarryError, Result};
