//! Status bar widget: one line at the top of the screen.

use crate::theme::Theme;
use docseek_core::{section, EmptyQuery, LoadStats, MatchMode};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

const HINT: &str = " enter:open  tab:focus  ::cmd  ?:help ";

/// Loaded sections, index size, match count and active search settings, with
/// keybinding hints right-aligned when the row has room for them.
pub struct StatusBar<'a> {
    pub entries: usize,
    pub matches: usize,
    pub mode: MatchMode,
    pub empty_query: EmptyQuery,
    pub max_results: usize,
    pub sections: &'a [String],
    pub stats: LoadStats,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    pub fn new(entries: usize, matches: usize, mode: MatchMode, theme: &'a Theme) -> Self {
        Self {
            entries,
            matches,
            mode,
            empty_query: EmptyQuery::default(),
            max_results: 0,
            sections: &[],
            stats: LoadStats::default(),
            theme,
        }
    }

    pub fn empty_query(mut self, empty_query: EmptyQuery) -> Self {
        self.empty_query = empty_query;
        self
    }

    pub fn max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn sections(mut self, sections: &'a [String]) -> Self {
        self.sections = sections;
        self
    }

    pub fn stats(mut self, stats: LoadStats) -> Self {
        self.stats = stats;
        self
    }

    fn summary(&self) -> String {
        let mut out = String::from(" ");
        if !self.sections.is_empty() {
            out.push_str(&format!("[{}] ", section::describe(self.sections)));
        }
        out.push_str(&format!("{} entries", self.entries));
        if self.stats.skipped > 0 || self.stats.merged > 0 {
            out.push_str(&format!(
                " ({} skipped, {} merged)",
                self.stats.skipped, self.stats.merged
            ));
        }
        let limit = if self.max_results == 0 {
            "none".to_string()
        } else {
            self.max_results.to_string()
        };
        out.push_str(&format!(
            "  {} matches  mode:{}  empty:{}  limit:{} ",
            self.matches, self.mode, self.empty_query, limit
        ));
        out
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, self.theme.status_bar);
        let summary = self.summary();
        buf.set_stringn(
            area.x,
            area.y,
            &summary,
            area.width as usize,
            self.theme.status_bar,
        );

        // Hints never cover the summary.
        let used = summary.chars().count() + HINT.len();
        if used <= area.width as usize {
            let hint_x = area.right().saturating_sub(HINT.len() as u16);
            buf.set_string(
                hint_x,
                area.y,
                HINT,
                self.theme.status_bar.patch(Style::default().add_modifier(Modifier::DIM)),
            );
        }
    }
}
