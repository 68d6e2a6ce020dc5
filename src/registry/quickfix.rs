//! Quick-fix association index.
//!
//! The host registers each quick fix against the inspection types it can
//! fix. The harvester needs both directions: fix -> inspections (to qualify
//! and language-resolve the fix) and inspection -> has-any-fix (for the
//! cross index and for the generated-error-name skip rule).

use std::collections::BTreeMap;

/// Bidirectional view over quick-fix/inspection associations, keyed by
/// fully-qualified type names.
#[derive(Debug, Clone, Default)]
pub struct QuickFixIndex {
    fix_to_inspections: BTreeMap<String, Vec<String>>,
    inspection_to_fixes: BTreeMap<String, Vec<String>>,
}

impl QuickFixIndex {
    /// Build the index from (fix, fixed inspections) pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, Vec<String>)>) -> Self {
        let mut index = Self::default();
        for (fix, inspections) in pairs {
            for inspection in &inspections {
                index
                    .inspection_to_fixes
                    .entry(inspection.clone())
                    .or_default()
                    .push(fix.clone());
            }
            index.fix_to_inspections.insert(fix, inspections);
        }
        index
    }

    /// Inspection type names the quick fix is registered against.
    ///
    /// Empty means the fix is unused and must be discarded by harvesting.
    pub fn inspections_fixed_by(&self, fix_full_name: &str) -> &[String] {
        self.fix_to_inspections
            .get(fix_full_name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether any quick fix is registered against this inspection type.
    pub fn has_fix(&self, inspection_full_name: &str) -> bool {
        self.inspection_to_fixes.contains_key(inspection_full_name)
    }

    /// Inspection type names that have at least one quick fix.
    pub fn fixed_inspections(&self) -> impl Iterator<Item = &str> {
        self.inspection_to_fixes.keys().map(String::as_str)
    }
}
