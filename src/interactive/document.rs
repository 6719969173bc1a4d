//! A page laid out as styled lines at a fixed width
//!
//! Pages are built top to bottom into a `Document`, which the body pane
//! scrolls through. Anything the user can focus (bars, breakdown toggles,
//! overview pillars) is recorded with the line it landed on, so the app can
//! move focus and keep it on screen without knowing how a page is drawn.

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use super::breakdown::Disclosure;
use super::utils::wrap_text;
use super::{overview_page, question_card};
use crate::route::Route;
use crate::survey::Page;

/// Something on a page that can hold focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// A bar of the chart on card `card`
    Bar { card: usize, item: usize },
    /// A breakdown toggle, numbered across the whole page
    Toggle(usize),
    /// An overview pillar linking to another page
    Pillar(Route),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Focusable {
    pub line: usize,
    pub anchor: Anchor,
}

#[derive(Debug, Default)]
pub struct Document {
    pub lines: Vec<Line<'static>>,
    pub focusables: Vec<Focusable>,
}

impl Document {
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    pub fn anchor(&self, focus: usize) -> Option<Anchor> {
        self.focusables.get(focus).map(|f| f.anchor)
    }

    pub fn line_of(&self, focus: usize) -> Option<usize> {
        self.focusables.get(focus).map(|f| f.line)
    }

    /// Lines with styling dropped and trailing blanks trimmed
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
            out.push_str(text.trim_end());
            out.push('\n');
        }
        out
    }
}

pub struct DocumentBuilder {
    width: usize,
    focus: Option<usize>,
    lines: Vec<Line<'static>>,
    focusables: Vec<Focusable>,
}

impl DocumentBuilder {
    pub fn new(width: u16, focus: Option<usize>) -> Self {
        Self {
            width: usize::from(width).max(20),
            focus,
            lines: Vec::new(),
            focusables: Vec::new(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn push(&mut self, line: Line<'static>) {
        self.lines.push(line);
    }

    pub fn blank(&mut self) {
        self.lines.push(Line::from(""));
    }

    /// Word-wrapped paragraph with a left indent
    pub fn paragraph(&mut self, text: &str, indent: usize, style: Style) {
        let pad = " ".repeat(indent);
        for row in wrap_text(text, self.width.saturating_sub(indent)) {
            self.lines.push(Line::from(vec![
                Span::raw(pad.clone()),
                Span::styled(row, style),
            ]));
        }
    }

    /// Paragraph whose first line starts with a styled lead-in
    pub fn lead_paragraph(
        &mut self,
        lead: &str,
        lead_style: Style,
        text: &str,
        indent: usize,
        style: Style,
    ) {
        let pad = " ".repeat(indent);
        let joined = format!("{} {}", lead, text);
        for (i, row) in wrap_text(&joined, self.width.saturating_sub(indent))
            .into_iter()
            .enumerate()
        {
            if i == 0 && row.starts_with(lead) {
                let rest = row[lead.len()..].to_string();
                self.lines.push(Line::from(vec![
                    Span::raw(pad.clone()),
                    Span::styled(lead.to_string(), lead_style),
                    Span::styled(rest, style),
                ]));
            } else {
                self.lines.push(Line::from(vec![
                    Span::raw(pad.clone()),
                    Span::styled(row, style),
                ]));
            }
        }
    }

    /// Register the next pushed line as focusable; returns whether it holds focus
    pub fn focusable(&mut self, anchor: Anchor) -> bool {
        let index = self.focusables.len();
        self.focusables.push(Focusable {
            line: self.lines.len(),
            anchor,
        });
        self.focus == Some(index)
    }

    pub fn finish(self) -> Document {
        Document {
            lines: self.lines,
            focusables: self.focusables,
        }
    }
}

/// Lay out a page at `width` columns
pub fn build(page: Page, disclosures: &[Disclosure], focus: Option<usize>, width: u16) -> Document {
    let mut builder = DocumentBuilder::new(width, focus);
    match page {
        Page::Overview(overview) => overview_page::render(&mut builder, overview),
        Page::Section(section) => question_card::render_section(&mut builder, section, disclosures),
    }
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focusable_records_next_line() {
        let mut b = DocumentBuilder::new(40, Some(1));
        b.blank();
        assert!(!b.focusable(Anchor::Toggle(0)));
        b.push(Line::from("first"));
        assert!(b.focusable(Anchor::Toggle(1)));
        b.push(Line::from("second"));
        let doc = b.finish();
        assert_eq!(doc.line_of(0), Some(1));
        assert_eq!(doc.line_of(1), Some(2));
        assert_eq!(doc.anchor(1), Some(Anchor::Toggle(1)));
        assert_eq!(doc.anchor(2), None);
    }

    #[test]
    fn test_paragraph_wraps_to_width() {
        let mut b = DocumentBuilder::new(20, None);
        b.paragraph("one two three four five six seven", 2, Style::default());
        let doc = b.finish();
        assert!(doc.height() > 1);
        for line in doc.plain_text().lines() {
            assert!(line.len() <= 20);
            assert!(line.starts_with("  "));
        }
    }

    #[test]
    fn test_lead_paragraph_keeps_lead_first() {
        let mut b = DocumentBuilder::new(60, None);
        b.lead_paragraph("Insight:", Style::default(), "short text", 0, Style::default());
        let doc = b.finish();
        assert_eq!(doc.plain_text(), "Insight: short text\n");
        assert_eq!(doc.lines[0].spans[1].content, "Insight:");
    }

    #[test]
    fn test_every_page_builds() {
        for route in Route::ALL {
            let page = Page::for_route(route);
            let disclosures = vec![Disclosure::default(); page.breakdown_count()];
            let doc = build(page, &disclosures, None, 100);
            assert!(doc.height() > 10, "{} is nearly empty", route);
        }
    }
}
