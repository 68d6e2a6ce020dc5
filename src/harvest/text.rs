//! Display-text and language-inference helpers.

use regex::Regex;
use std::sync::OnceLock;

use crate::config::NameMarker;
use crate::model::Language;

/// Placeholder token some tooltips carry instead of real text.
const PLACEHOLDER_TOOLTIP: &str = "{0}";

/// Derive a presentable title from a type name.
///
/// A space is inserted before every interior capital and everything after
/// the first character is lower-cased: `"EmptyBlockStatement"` becomes
/// `"Empty block statement"`.
pub fn title_from_type_name(name: &str) -> String {
    let mut title = String::with_capacity(name.len() + 8);
    for (i, ch) in name.chars().enumerate() {
        if i == 0 {
            title.push(ch);
        } else if ch.is_uppercase() {
            title.push(' ');
            title.extend(ch.to_lowercase());
        } else {
            title.push(ch);
        }
    }
    title
}

/// Whether a tooltip carries no usable text.
pub fn is_placeholder_tooltip(tooltip: &str) -> bool {
    let trimmed = tooltip.trim();
    trimmed.is_empty() || trimmed == PLACEHOLDER_TOOLTIP
}

/// Extract the first HTML hyperlink target from a description.
pub fn extract_link(description: &str) -> Option<String> {
    static HREF: OnceLock<Regex> = OnceLock::new();
    let href = HREF.get_or_init(|| Regex::new(r#"href\s*=\s*"([^"]+)""#).unwrap());
    href.captures(description)
        .map(|caps| caps[1].to_string())
}

/// Substring-to-language table applied to fully-qualified type names when
/// no other rule resolves a language.
///
/// Config-supplied markers are checked before the built-in ones; the first
/// match wins and an unmatched name falls back to `Common`.
#[derive(Debug, Clone)]
pub struct LanguageMarkers {
    markers: Vec<(String, Language)>,
}

impl LanguageMarkers {
    /// The built-in marker table for the stock platform bindings.
    pub fn builtin() -> Self {
        let markers = [
            ("CSharp", Language::csharp()),
            ("VB", Language::vbnet()),
            ("Cpp", Language::cpp()),
            ("Xaml", Language::xaml()),
            ("Asp", Language::aspnet()),
            ("Razor", Language::razor()),
            ("JavaScript", Language::javascript()),
            ("TypeScript", Language::typescript()),
            ("Css", Language::css()),
            ("Html", Language::html()),
        ]
        .into_iter()
        .map(|(marker, lang)| (marker.to_string(), lang))
        .collect();
        Self { markers }
    }

    /// Built-in markers with config extras prepended.
    pub fn with_extras(extras: &[NameMarker]) -> Self {
        let mut markers: Vec<(String, Language)> = extras
            .iter()
            .map(|m| (m.marker.clone(), m.language.clone()))
            .collect();
        markers.extend(Self::builtin().markers);
        Self { markers }
    }

    /// Whether a name starts with any known language marker.
    ///
    /// Used to spot generated, language-prefixed inspection names.
    pub fn has_language_prefix(&self, name: &str) -> bool {
        self.markers
            .iter()
            .any(|(marker, _)| name.starts_with(marker.as_str()))
    }

    /// Infer a language from a fully-qualified type name.
    pub fn language_from_name(&self, full_name: &str) -> Language {
        for (marker, lang) in &self.markers {
            if full_name.contains(marker.as_str()) {
                return lang.clone();
            }
        }
        Language::common()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_splits_on_interior_capitals() {
        assert_eq!(title_from_type_name("EmptyBlockStatement"), "Empty block statement");
        assert_eq!(
            title_from_type_name("UnusedVariableHighlighting"),
            "Unused variable highlighting"
        );
    }

    #[test]
    fn title_of_single_word_is_unchanged() {
        assert_eq!(title_from_type_name("Redundancy"), "Redundancy");
    }

    #[test]
    fn title_keeps_digits() {
        assert_eq!(title_from_type_name("Cs0108Warning"), "Cs0108 warning");
    }

    #[test]
    fn placeholder_tooltips_are_detected() {
        assert!(is_placeholder_tooltip(""));
        assert!(is_placeholder_tooltip("   "));
        assert!(is_placeholder_tooltip("{0}"));
        assert!(is_placeholder_tooltip(" {0} "));
        assert!(!is_placeholder_tooltip("Redundant braces"));
    }

    #[test]
    fn extract_link_finds_first_href() {
        let description = r#"See <a href="https://docs.example/cs0108">docs</a> and
            <a href="https://other.example">more</a>."#;
        assert_eq!(
            extract_link(description),
            Some("https://docs.example/cs0108".to_string())
        );
    }

    #[test]
    fn extract_link_without_anchor_is_none() {
        assert_eq!(extract_link("plain text description"), None);
    }

    #[test]
    fn builtin_markers_resolve_stock_bindings() {
        let markers = LanguageMarkers::builtin();
        assert_eq!(
            markers.language_from_name("Platform.CSharp.Fixes.RemoveBraces"),
            Language::csharp()
        );
        assert_eq!(
            markers.language_from_name("Platform.VB.Fixes.AddHandler"),
            Language::vbnet()
        );
        assert_eq!(
            markers.language_from_name("Platform.Core.GenericFix"),
            Language::common()
        );
    }

    #[test]
    fn first_match_wins_in_declared_order() {
        // "CSharp" is checked before "Html", so a name carrying both
        // resolves to C#.
        let markers = LanguageMarkers::builtin();
        assert_eq!(
            markers.language_from_name("Platform.CSharp.Html.Fix"),
            Language::csharp()
        );
    }

    #[test]
    fn language_prefix_is_detected() {
        let markers = LanguageMarkers::builtin();
        assert!(markers.has_language_prefix("CSharpUnresolvedError"));
        assert!(markers.has_language_prefix("VBUnresolvedError"));
        assert!(!markers.has_language_prefix("UnresolvedError"));
    }

    #[test]
    fn extras_are_checked_before_builtins() {
        let markers = LanguageMarkers::with_extras(&[NameMarker {
            marker: "CSharp".to_string(),
            language: Language::new("F#"),
        }]);
        assert_eq!(
            markers.language_from_name("Platform.CSharp.Fix"),
            Language::new("F#")
        );
    }
}
