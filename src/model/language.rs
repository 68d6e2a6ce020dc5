//! Language identity for harvested features.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A language a feature is attributed to.
///
/// Languages are open-ended (the platform can load bindings Quarry has never
/// heard of), so this is a newtype over the presentable name rather than a
/// closed enum. Well-known languages are provided as constructors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Language(String);

impl Language {
    /// Create a language from its presentable name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn csharp() -> Self {
        Self::new("C#")
    }

    pub fn vbnet() -> Self {
        Self::new("VB.NET")
    }

    pub fn cpp() -> Self {
        Self::new("C++")
    }

    pub fn javascript() -> Self {
        Self::new("JavaScript")
    }

    pub fn typescript() -> Self {
        Self::new("TypeScript")
    }

    pub fn xaml() -> Self {
        Self::new("XAML")
    }

    pub fn aspnet() -> Self {
        Self::new("ASP.NET")
    }

    pub fn razor() -> Self {
        Self::new("Razor")
    }

    pub fn css() -> Self {
        Self::new("CSS")
    }

    pub fn html() -> Self {
        Self::new("HTML")
    }

    pub fn regexp() -> Self {
        Self::new("RegExp")
    }

    /// The catch-all language for features that apply platform-wide.
    pub fn common() -> Self {
        Self::new("Common")
    }

    /// The name shown in summaries and written to the catalog document.
    pub fn presentable_name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
