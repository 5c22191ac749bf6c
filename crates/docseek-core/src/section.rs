//! Index sections: the per-category file families Doxygen writes.
//!
//! A documentation set's `search/` directory holds one family of files per
//! section (`functions_0.js`, `functions_1.js`, …). The labels below are the
//! headings Doxygen shows in its search filter menu.

use phf::phf_map;

/// Section id → display label.
static SECTION_LABELS: phf::Map<&'static str, &'static str> = phf_map! {
    "all" => "All",
    "classes" => "Classes",
    "namespaces" => "Namespaces",
    "files" => "Files",
    "functions" => "Functions",
    "variables" => "Variables",
    "typedefs" => "Typedefs",
    "enums" => "Enumerations",
    "enumvalues" => "Enumerator",
    "properties" => "Properties",
    "events" => "Events",
    "related" => "Friends",
    "defines" => "Macros",
    "groups" => "Modules",
    "pages" => "Pages",
    "concepts" => "Concepts",
};

/// Section loaded when none is configured.
pub const DEFAULT_SECTION: &str = "all";

/// Human-readable label for a section id. Unknown ids are returned unchanged.
pub fn label(section: &str) -> &str {
    SECTION_LABELS.get(section).copied().unwrap_or(section)
}

/// Labels of several sections joined for display: `Classes, Functions`.
pub fn describe<S: AsRef<str>>(sections: &[S]) -> String {
    sections
        .iter()
        .map(|s| label(s.as_ref()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Whether `section` is one Doxygen is known to emit.
pub fn is_known(section: &str) -> bool {
    SECTION_LABELS.contains_key(section)
}

/// Split a file stem like `functions_12` into `("functions", 12)`.
///
/// Returns `None` when the stem has no numeric `_<n>` suffix.
pub fn split_file_stem(stem: &str) -> Option<(&str, u32)> {
    let (section, number) = stem.rsplit_once('_')?;
    if section.is_empty() {
        return None;
    }
    number.parse().ok().map(|n| (section, n))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels() {
        assert_eq!(label("functions"), "Functions");
        assert_eq!(label("enumvalues"), "Enumerator");
        assert!(is_known(DEFAULT_SECTION));
    }

    #[test]
    fn describe_joins_labels() {
        assert_eq!(describe(&["classes", "functions"]), "Classes, Functions");
        assert_eq!(describe(&["widgets"]), "widgets");
        assert_eq!(describe::<&str>(&[]), "");
    }

    #[test]
    fn unknown_section_keeps_raw_id() {
        assert_eq!(label("widgets"), "widgets");
        assert!(!is_known("widgets"));
    }

    #[test]
    fn file_stem_split() {
        assert_eq!(split_file_stem("functions_9"), Some(("functions", 9)));
        assert_eq!(split_file_stem("all_10"), Some(("all", 10)));
        assert_eq!(split_file_stem("searchdata"), None);
        assert_eq!(split_file_stem("functions_x"), None);
        assert_eq!(split_file_stem("_3"), None);
    }
}
