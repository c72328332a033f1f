//! Interactive session: the checkbox / radio / copy UI as line commands.
//!
//! Every input line is one event and is handled to completion before the
//! next line is read.

use std::io::{self, BufRead, Write};

use crate::app::App;
use crate::clipboard::Clipboard;
use crate::render::{self, RenderOptions};
use crate::style::Style;

const HELP: &str = "\
commands:
  list             show sections and which badges are checked
  check <name>     select a badge (`Section/Name` picks one of several with that name)
  uncheck <name>   deselect a badge
  toggle <name>    flip a badge
  styles           show the available styles
  style <token>    switch every selected badge to a style
  reset            deselect everything
  preview          print the Markdown snippet
  html             print the HTML preview
  copy             copy the Markdown snippet to the clipboard
  quit             leave";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Check(String),
    Uncheck(String),
    Toggle(String),
    Styles,
    Style(Style),
    Reset,
    Preview,
    Html,
    Copy,
    Help,
    Quit,
}

impl Command {
    /// `Ok(None)` for blank lines; `Err` carries a message for the user.
    pub fn parse(line: &str) -> Result<Option<Command>, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, arg) = match line.split_once(char::is_whitespace) {
            Some((w, a)) => (w, a.trim()),
            None => (line, ""),
        };

        let needs_name = |make: fn(String) -> Command| {
            if arg.is_empty() {
                Err(format!("usage: {} <name>", word.to_ascii_lowercase()))
            } else {
                Ok(make(arg.to_string()))
            }
        };

        let cmd = match word.to_ascii_lowercase().as_str() {
            "list" | "ls" => Command::List,
            "check" | "select" => needs_name(Command::Check)?,
            "uncheck" | "deselect" => needs_name(Command::Uncheck)?,
            "toggle" => needs_name(Command::Toggle)?,
            "styles" => Command::Styles,
            "style" if arg.is_empty() => Command::Styles,
            "style" => Command::Style(arg.parse::<Style>().map_err(|e| e.to_string())?),
            "reset" => Command::Reset,
            "preview" | "markdown" => Command::Preview,
            "html" => Command::Html,
            "copy" => Command::Copy,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(format!("unknown command: {other} (try `help`)")),
        };
        Ok(Some(cmd))
    }
}

/// Read commands from `input` until `quit` or end of input.
pub fn run_session<R, W>(
    app: &mut App,
    input: R,
    out: &mut W,
    clipboard: &mut dyn Clipboard,
    opts: &RenderOptions,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(
        out,
        "{} badges in {} sections. Type `help` for commands.",
        app.badge_count(),
        app.sections().len()
    )?;

    for line in input.lines() {
        let line = line?;
        let cmd = match Command::parse(&line) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => continue,
            Err(msg) => {
                writeln!(out, "{msg}")?;
                continue;
            }
        };

        if cmd == Command::Quit {
            break;
        }
        let reply = handle(app, cmd, clipboard, opts);
        writeln!(out, "{reply}")?;
    }

    out.flush()
}

fn handle(app: &mut App, cmd: Command, clipboard: &mut dyn Clipboard, opts: &RenderOptions) -> String {
    match cmd {
        Command::List if app.sections().is_empty() => "(catalog is empty)".to_string(),
        Command::List => render::render_catalog_with_options(app.sections(), app.selection(), opts),
        Command::Check(name) => match app.check(&name) {
            Ok(()) => format!("checked {name}"),
            Err(e) => e.to_string(),
        },
        Command::Uncheck(name) => {
            if app.uncheck(&name) {
                format!("unchecked {name}")
            } else {
                format!("{name} is not selected")
            }
        }
        Command::Toggle(name) => match app.toggle(&name) {
            Ok(true) => format!("checked {name}"),
            Ok(false) => format!("unchecked {name}"),
            Err(e) => e.to_string(),
        },
        Command::Styles => render::render_styles(app.style()),
        Command::Style(style) => {
            app.set_style(style);
            format!("style set to {} [{}]", style.label(), style.token())
        }
        Command::Reset => {
            app.reset();
            "selection cleared".to_string()
        }
        Command::Preview => {
            let md = app.markdown();
            if md.is_empty() {
                "(nothing selected)".to_string()
            } else {
                md
            }
        }
        Command::Html => render::render_html_preview(app.selection()),
        Command::Copy => {
            let md = app.markdown();
            if md.is_empty() {
                return "nothing to copy".to_string();
            }
            match clipboard.set_text(&md) {
                Ok(()) => format!("copied {} badge(s) to the clipboard", md.lines().count()),
                Err(e) => format!("copy failed: {e}"),
            }
        }
        Command::Help => HELP.to_string(),
        Command::Quit => String::new(),
    }
}
