use anyhow::Context;
use clap::Parser;
use docseek_core::{
    config::Config, EmptyQuery, IndexBuilder, MatchMode, Matcher, Renderer, SearchIndex,
};
use std::path::{Path, PathBuf};

mod headless;

use headless::Format;

#[derive(Parser)]
#[command(
    name = "docseek",
    version,
    about = "Search Doxygen search indexes from the terminal"
)]
struct Cli {
    /// search/*.js file(s) or a Doxygen `search/` directory.
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Section to load from directories (functions, classes, all, ...).
    #[arg(short, long)]
    section: Option<String>,

    /// Run a single query, print the result and exit.
    #[arg(short, long)]
    query: Option<String>,

    /// Output format for --query and --dump.
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Use prefix matching instead of substring.
    #[arg(long)]
    prefix: bool,

    /// An empty query returns every entry.
    #[arg(long)]
    all_on_empty: bool,

    /// Cap the number of matched entries (0 = unlimited).
    #[arg(short = 'n', long)]
    max_results: Option<usize>,

    /// Prepend this to every rendered link.
    #[arg(long)]
    link_prefix: Option<String>,

    /// Write the loaded index back out as searchData JS.
    #[arg(long)]
    dump: bool,

    /// Read configuration from this file instead of the default location.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write debug logs to /tmp/docseek-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,
}

impl Cli {
    fn is_headless(&self) -> bool {
        self.query.is_some() || self.dump
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/docseek-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("docseek debug log started, tail -f /tmp/docseek-debug.log");
    } else if cli.is_headless() {
        // Nothing is drawn in headless mode, so warnings can go straight to stderr.
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .init();
    }

    let config = load_config(cli.config.as_deref())?;

    let section = cli.section.as_deref().unwrap_or(&config.search.section);
    let index = load_index(&cli.paths, section)?;

    let mut matcher = Matcher::from_config(&config.search);
    if cli.prefix {
        matcher.mode = MatchMode::Prefix;
    }
    if cli.all_on_empty {
        matcher = matcher.with_empty_query(EmptyQuery::All);
    }
    if let Some(n) = cli.max_results {
        matcher = matcher.with_max_results(n);
    }
    let renderer = Renderer::new(
        cli.link_prefix
            .clone()
            .unwrap_or_else(|| config.render.link_prefix.clone()),
    );

    let stdout = std::io::stdout();
    if cli.dump {
        return headless::dump(&index, cli.format, stdout.lock());
    }
    if let Some(query) = &cli.query {
        return headless::search(&index, &matcher, &renderer, query, cli.format, stdout.lock());
    }

    if let Some(link) = docseek_tui::run(index, matcher, renderer, &config.ui.theme)? {
        println!("{link}");
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(Config::load().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "config unreadable, using defaults");
            Config::defaults()
        })),
    }
}

/// Load every path into one index: directories by section, anything else as a
/// single search file.
fn load_index(paths: &[PathBuf], section: &str) -> anyhow::Result<SearchIndex> {
    let mut builder = IndexBuilder::new();
    for path in paths {
        if path.is_dir() {
            builder
                .add_dir(path, section)
                .with_context(|| format!("failed to load section {section:?} from {}", path.display()))?;
        } else {
            builder
                .add_file(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
        }
    }
    let stats = builder.stats();
    let index = builder.build().context("failed to build search index")?;
    tracing::info!(entries = index.len(), %stats, "loaded");
    Ok(index)
}
