pub mod app;
pub mod catalog;
pub mod clipboard;
pub mod fetch;
pub mod parse;
pub mod render;
pub mod selection;
pub mod session;
pub mod style;

use std::error::Error;
use std::io::{self, Write};

use log::{error, warn};

use app::App;
use clipboard::{Clipboard, SystemClipboard};
use fetch::{LoadedCatalog, Source};
use style::Style;

/// What a non-interactive run prints to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// The copyable Markdown snippet.
    #[default]
    Markdown,
    /// The HTML preview of the selected badges.
    Html,
    /// The catalog listing with checked/unchecked badges.
    List,
    /// The catalog JSON envelope.
    Json,
}

/// Everything one run needs to know.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub source: Source,
    /// Text that marks the start of the badge listing in the document.
    pub marker: String,
    /// Badge names to check, in order.
    pub select: Vec<String>,
    pub style: Option<Style>,
    pub output: OutputMode,
    pub render: render::RenderOptions,
    /// Also put the Markdown snippet on the clipboard.
    pub copy: bool,
    pub interactive: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            source: Source::default(),
            marker: fetch::DEFAULT_MARKER.to_string(),
            select: Vec::new(),
            style: None,
            output: OutputMode::default(),
            render: render::RenderOptions::default(),
            copy: false,
            interactive: false,
        }
    }
}

/// Load the catalog, degrading to an empty one when the source is unusable.
///
/// Load failures are logged, never returned: the tool stays usable with an
/// empty badge list.
pub fn load(opts: &RunOptions) -> LoadedCatalog {
    match fetch::load_catalog(&opts.source, &opts.marker) {
        Ok(loaded) => loaded,
        Err(err) => {
            error!("{err}");
            LoadedCatalog::failed(&opts.source, &err)
        }
    }
}

/// Build the controller: check the requested badges and apply the style.
pub fn prepare_app(loaded: &LoadedCatalog, opts: &RunOptions) -> App {
    let mut app = App::new(loaded.parsed.sections.clone());
    if let Some(style) = opts.style {
        app.set_style(style);
    }
    for name in &opts.select {
        if let Err(err) = app.check(name) {
            warn!("{err}");
        }
    }
    app
}

/// Render the requested output for a prepared app.
pub fn render_output(
    app: &App,
    loaded: &LoadedCatalog,
    opts: &RunOptions,
) -> Result<String, Box<dyn Error>> {
    let text = match opts.output {
        OutputMode::Markdown => app.markdown(),
        OutputMode::Html => render::render_html_preview(app.selection()),
        OutputMode::List => {
            render::render_catalog_with_options(app.sections(), app.selection(), &opts.render)
        }
        // prettify JSON so it's easy to inspect / diff.
        OutputMode::Json => serde_json::to_string_pretty(&loaded.to_file())?,
    };
    Ok(text)
}

/// Single-shot mode: print the requested output (and copy if asked).
pub fn run(opts: &RunOptions) -> Result<(), Box<dyn Error>> {
    run_with_clipboard(opts, &mut SystemClipboard)
}

/// Like [`run`], but lets callers choose where `--copy` puts the snippet.
pub fn run_with_clipboard(
    opts: &RunOptions,
    clipboard: &mut dyn Clipboard,
) -> Result<(), Box<dyn Error>> {
    let loaded = load(opts);
    let mut app = prepare_app(&loaded, opts);

    if opts.interactive {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        session::run_session(&mut app, stdin.lock(), &mut stdout, clipboard, &opts.render)?;
        return Ok(());
    }

    let text = render_output(&app, &loaded, opts)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{text}")?;

    if opts.copy {
        let md = app.markdown();
        if md.is_empty() {
            warn!("nothing selected; clipboard left unchanged");
        } else if let Err(err) = clipboard.set_text(&md) {
            error!("{err}");
        }
    }

    Ok(())
}
