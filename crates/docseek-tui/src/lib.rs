//! docseek TUI: ratatui application shell.

pub mod app;
pub mod commands;
pub mod event;
pub mod theme;
pub mod widgets;

pub use app::App;

use docseek_core::{Matcher, Renderer, SearchIndex};

/// Start the interactive search over `index`.
///
/// Returns the link chosen with `Enter`, or `None` if the user quit.
pub fn run(
    index: SearchIndex,
    matcher: Matcher,
    renderer: Renderer,
    theme_name: &str,
) -> anyhow::Result<Option<String>> {
    let theme = theme::Theme::by_name(theme_name);
    tracing::info!(entries = index.len(), theme = theme_name, "starting tui");
    App::new(index, matcher, renderer, theme).run()
}
