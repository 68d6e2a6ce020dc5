//! Core data model: features, kinds, languages, catalogs.
//!
//! A [`Feature`] is one harvested capability instance (one kind, one
//! language, one id). A [`FeatureCatalog`] collects features of a single
//! [`FeatureKind`] and enforces the `(kind, id, lang)` uniqueness invariant.

pub mod catalog;
pub mod feature;
pub mod language;
pub mod severity;

pub use catalog::{CategoryGroup, FeatureCatalog};
pub use feature::{Feature, FeatureKind};
pub use language::Language;
pub use severity::Severity;
