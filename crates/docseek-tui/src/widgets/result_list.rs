//! Result list widget: the scrollable pane of matched entries.
//!
//! Groups are flattened into rows. A single-target group is one row with the
//! scope shown beside the label; a multi-target group is a header row followed
//! by one indented child row per link.
//!
//! # Navigation (when pane is focused)
//!
//! | Key | Action |
//! |-----|--------|
//! | `↑` / `k` | Move cursor up one row |
//! | `↓` / `j` | Move cursor down one row |
//! | `PageUp` / `Ctrl+u` | Up one page |
//! | `PageDown` / `Ctrl+d` | Down one page |

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use docseek_core::{Link, ResultGroup};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, List, ListItem, ListState, Scrollbar, ScrollbarOrientation, ScrollbarState,
        StatefulWidget, Widget,
    },
};

const PAGE_STEP: usize = 10;

/// One visible row. `link` is `None` for the header of a multi-target group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row {
    pub group: usize,
    pub link: Option<usize>,
}

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct ResultListState {
    pub groups: Vec<ResultGroup>,
    pub rows: Vec<Row>,
    /// Index into `rows` of the highlighted row.
    pub cursor: usize,
}

impl ResultListState {
    /// Replace the displayed results and move the cursor back to the top.
    pub fn set_groups(&mut self, groups: Vec<ResultGroup>) {
        self.rows = flatten(&groups);
        self.groups = groups;
        self.cursor = 0;
    }

    pub fn handle(&mut self, event: &AppEvent) {
        let last = self.rows.len().saturating_sub(1);
        match event {
            AppEvent::Nav(Direction::Up) => self.cursor = self.cursor.saturating_sub(1),
            AppEvent::Nav(Direction::Down) => self.cursor = (self.cursor + 1).min(last),
            AppEvent::ScrollUp => self.cursor = self.cursor.saturating_sub(PAGE_STEP),
            AppEvent::ScrollDown => self.cursor = (self.cursor + PAGE_STEP).min(last),
            _ => return,
        }
        tracing::debug!(cursor = self.cursor, rows = self.rows.len(), "results: cursor moved");
    }

    /// The link under the cursor. A group header selects its first link.
    pub fn selected_link(&self) -> Option<&Link> {
        let row = self.rows.get(self.cursor)?;
        let group = self.groups.get(row.group)?;
        group.links.get(row.link.unwrap_or(0))
    }

    pub fn match_count(&self) -> usize {
        self.groups.len()
    }
}

fn flatten(groups: &[ResultGroup]) -> Vec<Row> {
    let mut rows = Vec::new();
    for (g, group) in groups.iter().enumerate() {
        if group.is_single() {
            rows.push(Row { group: g, link: Some(0) });
        } else {
            rows.push(Row { group: g, link: None });
            rows.extend((0..group.links.len()).map(|l| Row { group: g, link: Some(l) }));
        }
    }
    rows
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct ResultList<'a> {
    state: &'a ResultListState,
    /// Raw query text, used to highlight the matched part of each label.
    query: &'a str,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> ResultList<'a> {
    pub fn new(state: &'a ResultListState, query: &'a str, focused: bool, theme: &'a Theme) -> Self {
        Self {
            state,
            query,
            focused,
            theme,
        }
    }

    fn row_line(&self, row: Row) -> Line<'static> {
        let group = &self.state.groups[row.group];
        match row.link {
            Some(l) if group.is_single() => {
                let link = &group.links[l];
                let mut spans = self.label_spans(&group.label);
                spans.push(Span::raw("  "));
                spans.push(Span::styled(link.scope.clone(), self.theme.result_scope));
                spans.push(Span::raw("  "));
                spans.push(Span::styled(
                    link.href.clone(),
                    self.theme.link_style(link.internal),
                ));
                Line::from(spans)
            }
            Some(l) => {
                let link = &group.links[l];
                Line::from(vec![
                    Span::raw("    "),
                    Span::styled(link.scope.clone(), self.theme.result_scope),
                    Span::raw("  "),
                    Span::styled(link.href.clone(), self.theme.link_style(link.internal)),
                ])
            }
            None => {
                let mut spans = self.label_spans(&group.label);
                spans.push(Span::styled(
                    format!("  ({})", group.links.len()),
                    Style::default().add_modifier(Modifier::DIM),
                ));
                Line::from(spans)
            }
        }
    }

    /// Split a label around the first case-insensitive occurrence of the query.
    fn label_spans(&self, label: &str) -> Vec<Span<'static>> {
        let needle = self.query.trim();
        match find_ignore_case(label, needle) {
            Some((start, end)) => vec![
                Span::styled(label[..start].to_string(), self.theme.result_label),
                Span::styled(
                    label[start..end].to_string(),
                    self.theme.result_label.patch(self.theme.search_highlight),
                ),
                Span::styled(label[end..].to_string(), self.theme.result_label),
            ],
            None => vec![Span::styled(label.to_string(), self.theme.result_label)],
        }
    }
}

/// Byte range of the first case-insensitive match of `needle` in `haystack`.
///
/// Only ASCII case folding is applied so byte offsets stay valid.
fn find_ignore_case(haystack: &str, needle: &str) -> Option<(usize, usize)> {
    if needle.is_empty() || needle.starts_with('/') {
        return None;
    }
    let hay = haystack.to_ascii_lowercase();
    let start = hay.find(&needle.to_ascii_lowercase())?;
    Some((start, start + needle.len()))
}

impl Widget for ResultList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };

        let title = format!("Results ({})", self.state.match_count());
        let block = Block::bordered().title(title).border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        if self.state.rows.is_empty() {
            let hint = if self.query.trim().is_empty() {
                "type to search"
            } else {
                "no matches"
            };
            buf.set_string(
                inner.x,
                inner.y,
                hint,
                Style::default().add_modifier(Modifier::DIM),
            );
            return;
        }

        // Text (fill) + 1-column scrollbar strip inside the borders.
        let text_area = Rect {
            width: inner.width.saturating_sub(1),
            ..inner
        };
        let sb_area = Rect {
            x: inner.right().saturating_sub(1),
            width: 1,
            ..inner
        };

        let items: Vec<ListItem> = self
            .state
            .rows
            .iter()
            .map(|row| ListItem::new(self.row_line(*row)))
            .collect();

        let highlight = if self.focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        let mut list_state = ListState::default().with_selected(Some(self.state.cursor));
        StatefulWidget::render(
            List::new(items).highlight_style(highlight),
            text_area,
            buf,
            &mut list_state,
        );

        let mut sb_state = ScrollbarState::new(self.state.rows.len())
            .position(self.state.cursor)
            .viewport_content_length(inner.height as usize);
        StatefulWidget::render(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None),
            sb_area,
            buf,
            &mut sb_state,
        );
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
