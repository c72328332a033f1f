//! Text views of the catalog and the selection.
//!
//! Everything here is a pure function of its arguments: the Markdown snippet
//! users copy, the HTML preview, and the plain-text listing that stands in
//! for the checkbox accordion and the style picker.

use crate::catalog::Section;
use crate::selection::SelectionMap;
use crate::style::Style;

/// Rendering options that control formatting decisions.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// If true, the catalog listing shows each badge's image URL after its name.
    pub show_links: bool,
}

/// `[![name](link)](link)` per selected badge, one per line.
///
/// Badges without a link have nothing to render and are skipped.
pub fn render_markdown(selection: &SelectionMap) -> String {
    selection
        .iter()
        .filter_map(|entry| {
            let link = entry.link.as_deref()?;
            Some(format!("[![{}]({link})]({link})", entry.name))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The live preview: one `<img>` per selected badge.
pub fn render_html_preview(selection: &SelectionMap) -> String {
    let mut out = String::from("<div class=\"badges\">");
    let mut any = false;
    for entry in selection {
        let Some(link) = entry.link.as_deref() else {
            continue;
        };
        any = true;
        out.push_str(&format!(
            "\n  <span><img src=\"{}\" alt=\"{}\"></span>",
            html_escape::encode_double_quoted_attribute(link),
            html_escape::encode_double_quoted_attribute(&entry.name),
        ));
    }
    if any {
        out.push('\n');
    }
    out.push_str("</div>");
    out
}

pub fn render_catalog(sections: &[Section], selection: &SelectionMap) -> String {
    render_catalog_with_options(sections, selection, &RenderOptions::default())
}

/// One `### title` block per section with a task-list row per badge.
pub fn render_catalog_with_options(
    sections: &[Section],
    selection: &SelectionMap,
    opts: &RenderOptions,
) -> String {
    let mut out = String::new();
    for (si, section) in sections.iter().enumerate() {
        if si > 0 {
            // separate sections with a single blank line.
            out.push_str("\n\n");
        }
        out.push_str("###");
        if !section.title.is_empty() {
            out.push(' ');
            out.push_str(&section.title);
        }

        for badge in &section.badges {
            let mark = if selection.contains(&badge.name) { 'x' } else { ' ' };
            out.push_str(&format!("\n- [{mark}] {}", badge.name));
            if opts.show_links {
                match badge.link.as_deref() {
                    Some(link) => out.push_str(&format!(" ({link})")),
                    None => out.push_str(" (no link)"),
                }
            }
        }
    }
    out
}

/// The style radio group; `(*)` marks the active style.
pub fn render_styles(active: Option<Style>) -> String {
    Style::ALL
        .iter()
        .map(|&style| {
            let mark = if active == Some(style) { "(*)" } else { "( )" };
            format!("{mark} {} [{}]", style.label(), style.token())
        })
        .collect::<Vec<_>>()
        .join("\n")
}
