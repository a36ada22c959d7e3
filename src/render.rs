//! Terminal rendering of a highlighted widget
//!
//! Writes the buffer line by line with crossterm style commands: each run
//! of text takes the style its token tag has under the active scheme, the
//! selection is drawn on top, and every line is padded with the scheme
//! background to the widest line.

use std::io::Write;

use crossterm::queue;
use crossterm::style::{
    Attribute, Color as TermColor, Print, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::codebox::CodeBox;
use crate::error::Result;
use crate::syntax::{Color, Style};
use crate::tags::{StyleTag, SELECTION_TAG};

/// What to draw besides the text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Draw a line-number gutter
    pub line_numbers: bool,
    /// Emit colors and attributes; plain text otherwise
    pub colors: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            line_numbers: false,
            colors: true,
        }
    }
}

fn term_color(color: Color) -> TermColor {
    TermColor::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

/// Replace tabs with spaces up to the next tab stop
///
/// `start` is the display column the text begins at.
fn expand_tabs(text: &str, start: usize, tab_width: usize) -> String {
    if !text.contains('\t') {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len());
    let mut column = start;
    for ch in text.chars() {
        if ch == '\t' {
            let spaces = tab_width - column % tab_width;
            out.extend(std::iter::repeat(' ').take(spaces));
            column += spaces;
        } else {
            out.push(ch);
            column += ch.width().unwrap_or(0);
        }
    }
    out
}

/// A run of one line drawn with a single style
struct Segment {
    start: usize,
    end: usize,
    token: Option<String>,
    selected: bool,
}

/// Split a line at every tag boundary
fn segments(tags: &[StyleTag], len: usize) -> Vec<Segment> {
    let mut cuts: Vec<usize> = vec![0, len];
    for tag in tags {
        cuts.push(tag.start.column.min(len));
        cuts.push(tag.end.column.min(len));
    }
    cuts.sort_unstable();
    cuts.dedup();

    cuts.windows(2)
        .map(|pair| {
            let (start, end) = (pair[0], pair[1]);
            let covers = |tag: &&StyleTag| tag.start.column <= start && start < tag.end.column;
            Segment {
                start,
                end,
                token: tags
                    .iter()
                    .filter(|tag| tag.name != SELECTION_TAG)
                    .find(covers)
                    .map(|tag| tag.name.clone()),
                selected: tags
                    .iter()
                    .filter(|tag| tag.name == SELECTION_TAG)
                    .any(|tag| covers(&tag)),
            }
        })
        .collect()
}

fn apply_style<W: Write>(out: &mut W, style: &Style, background: Option<Color>) -> Result<()> {
    queue!(out, SetAttribute(Attribute::Reset))?;
    if let Some(bg) = style.bg.or(background) {
        queue!(out, SetBackgroundColor(term_color(bg)))?;
    }
    if let Some(fg) = style.fg {
        queue!(out, SetForegroundColor(term_color(fg)))?;
    }
    if style.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if style.italic {
        queue!(out, SetAttribute(Attribute::Italic))?;
    }
    if style.underline {
        queue!(out, SetAttribute(Attribute::Underlined))?;
    }
    if style.strikethrough {
        queue!(out, SetAttribute(Attribute::CrossedOut))?;
    }
    Ok(())
}

/// Number of lines worth drawing; a final empty line after a trailing
/// line break is dropped
fn visible_line_count(codebox: &CodeBox) -> usize {
    let count = codebox.line_count();
    if count > 1 && codebox.buffer().line_len(count) == 0 {
        count - 1
    } else {
        count
    }
}

/// Write the highlighted content of `codebox` to `out`
pub fn render_to<W: Write>(out: &mut W, codebox: &CodeBox, options: &RenderOptions) -> Result<()> {
    let buffer = codebox.buffer();
    let scheme = codebox.scheme();
    let tab_width = codebox.tab_width().max(1);
    let line_count = visible_line_count(codebox);
    let gutter = if options.line_numbers {
        line_count.to_string().len()
    } else {
        0
    };
    let background = if options.colors { scheme.background() } else { None };
    let default_style = Style {
        fg: scheme.foreground(),
        ..Style::default()
    };

    let widest = (1..=line_count)
        .map(|line| expand_tabs(buffer.line_text(line), 0, tab_width).width())
        .max()
        .unwrap_or(0);

    for line in 1..=line_count {
        if options.line_numbers {
            if options.colors {
                apply_style(out, &default_style, background)?;
                queue!(out, SetAttribute(Attribute::Dim))?;
            }
            queue!(out, Print(format!("{:>width$} ", line, width = gutter)))?;
        }

        let mut width = 0;
        let text = match buffer.line(line) {
            Some(text) => text,
            None => continue,
        };
        let tags = codebox.line_tags(line);
        for segment in segments(&tags, text.char_len()) {
            let chunk = expand_tabs(text.slice(segment.start, segment.end), width, tab_width);
            width += chunk.width();
            if options.colors {
                let mut style = match &segment.token {
                    Some(name) => codebox.tag_style(name),
                    None => default_style.clone(),
                };
                if segment.selected {
                    let selection = codebox.tag_style(SELECTION_TAG);
                    style.bg = selection.bg.or(style.bg);
                    style.fg = selection.fg.or(style.fg);
                }
                apply_style(out, &style, background)?;
            }
            queue!(out, Print(chunk))?;
        }

        if let Some(bg) = background {
            queue!(out, SetAttribute(Attribute::Reset), SetBackgroundColor(term_color(bg)))?;
            let padding = widest.saturating_sub(width);
            queue!(out, Print(" ".repeat(padding)))?;
        }
        if options.colors {
            queue!(out, SetAttribute(Attribute::Reset))?;
        }
        queue!(out, Print("\n"))?;
    }
    out.flush()?;
    tracing::debug!(lines = line_count, "rendered buffer");
    Ok(())
}
