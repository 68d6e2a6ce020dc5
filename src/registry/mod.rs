//! External lookup tables the harvester consults.
//!
//! Three collaborators, all abstracted away from the live host:
//! - [`SeverityRegistry`]: configurable-inspection registrations
//! - [`QuickFixIndex`]: quick-fix/inspection associations
//! - [`CategoryLanguages`]: group-id-to-language fallback table

pub mod categories;
pub mod quickfix;
pub mod severity;

pub use categories::CategoryLanguages;
pub use quickfix::QuickFixIndex;
pub use severity::{SeverityConfiguration, SeverityRegistry};
