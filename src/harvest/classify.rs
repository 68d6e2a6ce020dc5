//! Capability classification of loaded types.

use crate::universe::TypeMetadata;

/// The capability class a type falls into, at most one per type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Implements the quick-fix capability.
    QuickFix,

    /// Implements the scope-aware action capability (and not quick-fix).
    ScopedAction,

    /// Carries a static severity and no configurable severity.
    StaticInspection,
}

/// Name suffixes that signal a base/template type rather than a concrete
/// capability.
const BASE_NAME_SUFFIXES: [&str; 2] = ["Base", "Template"];

/// Classify one type, or `None` when it contributes nothing.
///
/// Interfaces, abstract types and base/template-named types are skipped.
/// A type carrying both capability sets classifies as a quick fix; the
/// quick-fix pass checks scope-awareness separately to emit the parallel
/// fix-in-scope feature.
pub fn classify(ty: &TypeMetadata) -> Option<Classification> {
    if ty.is_interface || ty.is_abstract || has_base_name(&ty.short_name) {
        return None;
    }
    if ty.quick_fix {
        return Some(Classification::QuickFix);
    }
    if ty.scope_aware {
        return Some(Classification::ScopedAction);
    }
    if ty.static_severity && !ty.configurable_severity {
        return Some(Classification::StaticInspection);
    }
    None
}

fn has_base_name(short_name: &str) -> bool {
    BASE_NAME_SUFFIXES
        .iter()
        .any(|suffix| short_name.ends_with(suffix))
}
