//! Result renderer: turns matched entries into display groups.
//!
//! One [`ResultGroup`] per matched entry, carrying the display label and one
//! [`Link`] per target. Links are `link_prefix + url[#anchor]`, the same way a
//! search page prepends its results path. Nothing here touches external state.

use crate::types::IndexEntry;
use serde::Serialize;

/// A clickable target with its qualifying scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub href: String,
    pub scope: String,
    /// Opens in place when true; in a new window for external references.
    pub internal: bool,
}

/// Display group for one matched entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultGroup {
    pub key: String,
    pub label: String,
    pub links: Vec<Link>,
}

impl ResultGroup {
    /// Single-target groups show their scope inline beside the label;
    /// multi-target groups list one child row per link.
    pub fn is_single(&self) -> bool {
        self.links.len() == 1
    }
}

#[derive(Debug, Clone, Default)]
pub struct Renderer {
    link_prefix: String,
}

impl Renderer {
    pub fn new(link_prefix: impl Into<String>) -> Self {
        Self {
            link_prefix: link_prefix.into(),
        }
    }

    pub fn render_entry(&self, entry: &IndexEntry) -> ResultGroup {
        ResultGroup {
            key: entry.search_key.clone(),
            label: entry.display_label.clone(),
            links: entry
                .targets
                .iter()
                .map(|t| Link {
                    href: format!("{}{}", self.link_prefix, t.href()),
                    scope: t.scope.clone(),
                    internal: t.internal,
                })
                .collect(),
        }
    }

    pub fn render(&self, entries: &[&IndexEntry]) -> Vec<ResultGroup> {
        entries.iter().map(|e| self.render_entry(e)).collect()
    }
}

/// Plain-text listing of rendered groups, as printed by headless mode.
///
/// ```text
/// initialise  GaussAmp
///     ../d0/daa/classGaussAmp.html#ac5bc
/// init
///   Logging::init()
///     ../d8/d8a/classLogging.html#afbd
///   TwoBodyKinematics::init()
///     ../d7/d09/classTwoBodyKinematics.html#a571
/// ```
pub fn to_text(groups: &[ResultGroup]) -> String {
    let mut out = String::new();
    for group in groups {
        if group.is_single() {
            let link = &group.links[0];
            out.push_str(&format!("{}  {}\n", group.label, link.scope));
            out.push_str(&format!("    {}\n", link.href));
        } else {
            out.push_str(&format!("{}\n", group.label));
            for link in &group.links {
                out.push_str(&format!("  {}\n", link.scope));
                out.push_str(&format!("    {}\n", link.href));
            }
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
