use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use log::{LevelFilter, debug};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

use badgegen::fetch::{self, Source};
use badgegen::render::RenderOptions;
use badgegen::style::Style;
use badgegen::{OutputMode, RunOptions};

/// Pick badges from the markdown-badges catalog and print the Markdown for them
#[derive(Parser, Debug)]
#[command(name = "badgegen", version)]
#[command(about = "Pick badges from the markdown-badges catalog and print the Markdown for them", long_about = None)]
struct Cli {
    /// Badge to select, by name (repeatable)
    #[arg(short, long = "select", value_name = "NAME")]
    select: Vec<String>,

    /// Badge style: plastic, flat, flat-square, for-the-badge or social
    #[arg(long, value_parser = parse_style)]
    style: Option<Style>,

    /// Catalog URL [default: the markdown-badges README]
    #[arg(long, conflicts_with = "input")]
    url: Option<String>,

    /// Read the catalog from a local markdown file instead of fetching it
    #[arg(long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Text marking the start of the badge listing
    #[arg(long, default_value = fetch::DEFAULT_MARKER)]
    marker: String,

    /// Print the catalog with checked/unchecked badges instead of the snippet
    #[arg(long, conflicts_with_all = ["json", "html"])]
    list: bool,

    /// Show image links in the catalog listing
    #[arg(long)]
    show_links: bool,

    /// Print the parsed catalog as JSON
    #[arg(long, conflicts_with = "html")]
    json: bool,

    /// Print an HTML preview instead of the Markdown snippet
    #[arg(long)]
    html: bool,

    /// Also copy the Markdown snippet to the clipboard
    #[arg(long)]
    copy: bool,

    /// Pick badges interactively
    #[arg(short, long)]
    interactive: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_options(self) -> RunOptions {
        let source = match (self.input, self.url) {
            (Some(path), _) => Source::File(path),
            (None, Some(url)) => Source::Url(url),
            (None, None) => Source::default(),
        };

        let output = if self.list {
            OutputMode::List
        } else if self.json {
            OutputMode::Json
        } else if self.html {
            OutputMode::Html
        } else {
            OutputMode::Markdown
        };

        RunOptions {
            source,
            marker: self.marker,
            select: self.select,
            style: self.style,
            output,
            render: RenderOptions {
                show_links: self.show_links,
            },
            copy: self.copy,
            interactive: self.interactive,
        }
    }
}

fn parse_style(s: &str) -> Result<Style, String> {
    s.parse().map_err(|e: badgegen::style::UnknownStyle| e.to_string())
}

fn init_logging(verbose: bool) -> Result<(), Box<dyn Error>> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    // stdout carries the snippet; all logging goes to stderr.
    TermLogger::init(
        level,
        ConfigBuilder::new()
            .add_filter_ignore_str("reqwest")
            .add_filter_ignore_str("hyper")
            .add_filter_ignore_str("rustls")
            .build(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let opts = cli.into_options();
    debug!("options: {opts:?}");
    badgegen::run(&opts)
}
