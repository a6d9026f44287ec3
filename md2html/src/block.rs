//! Block classification and the container state machine
//!
//! Each preprocessed line is classified into a [`LineKind`] and fed to
//! [`BlockState::step`], which closes and opens the `<p>`, `<ul>` and `<ol>`
//! containers as needed and appends fragments to the output.
//!
//! Classification precedence, first match wins:
//!
//! 1. heading: starts with `#`
//! 2. unordered item: starts with `-`
//! 3. ordered item: starts with `* ` (the space is required)
//! 4. text: anything else that is non-empty
//! 5. blank
//!
//! A bare `*` is not a list marker, so `**bold** text` stays a paragraph line
//! while a bare `-` is enough for an unordered item.

use crate::directives::is_line_space;
use crate::inline::rewrite_inline;
use tracing::trace;

/// Ordered output fragments, joined by line breaks when rendered.
pub type Fragments = Vec<String>;

/// A single classified line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `level` counts every `#` on the line, not only the leading run.
    Heading { level: usize, text: &'a str },
    UnorderedItem(&'a str),
    OrderedItem(&'a str),
    Text(&'a str),
    Blank,
}

impl<'a> LineKind<'a> {
    /// Classify an already trimmed and preprocessed line.
    pub fn classify(line: &'a str) -> Self {
        if line.starts_with('#') {
            LineKind::Heading {
                level: line.matches('#').count(),
                text: line.trim_matches('#').trim_matches(is_line_space),
            }
        } else if let Some(rest) = line.strip_prefix('-') {
            LineKind::UnorderedItem(rest.trim_start())
        } else if let Some(rest) = line.strip_prefix("* ") {
            LineKind::OrderedItem(rest.trim_start())
        } else if line.is_empty() {
            LineKind::Blank
        } else {
            LineKind::Text(line)
        }
    }
}

/// Which containers are open, plus the paragraph line counter.
///
/// The counter is only reset by a blank line. A paragraph closed by a heading
/// or a list therefore leaves it running, and the next paragraph starts with a
/// `<br/>` right after its `<p>`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BlockState {
    ul_open: bool,
    ol_open: bool,
    p_open: bool,
    p_counter: usize,
}

impl BlockState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unordered_open(&self) -> bool {
        self.ul_open
    }

    pub fn ordered_open(&self) -> bool {
        self.ol_open
    }

    pub fn paragraph_open(&self) -> bool {
        self.p_open
    }

    pub fn paragraph_counter(&self) -> usize {
        self.p_counter
    }

    /// True when no container is open.
    pub fn is_idle(&self) -> bool {
        !(self.ul_open || self.ol_open || self.p_open)
    }

    /// Advance the machine by one classified line.
    pub fn step(&mut self, kind: &LineKind<'_>, out: &mut Fragments) {
        match *kind {
            LineKind::Heading { level, text } => {
                self.close_unordered(out);
                self.close_ordered(out);
                self.close_paragraph(out);
                out.push(format!("<h{level}>{}</h{level}>", rewrite_inline(text)));
            }
            LineKind::UnorderedItem(text) => {
                if !self.ul_open {
                    self.close_paragraph(out);
                    self.close_ordered(out);
                    trace!(container = "ul", "open");
                    out.push("<ul>".to_string());
                    self.ul_open = true;
                }
                out.push(format!("<li>{}</li>", rewrite_inline(text)));
            }
            LineKind::OrderedItem(text) => {
                if !self.ol_open {
                    self.close_paragraph(out);
                    self.close_unordered(out);
                    trace!(container = "ol", "open");
                    out.push("<ol>".to_string());
                    self.ol_open = true;
                }
                out.push(format!("<li>{}</li>", rewrite_inline(text)));
            }
            LineKind::Text(line) => {
                self.close_unordered(out);
                self.close_ordered(out);
                if !self.p_open {
                    trace!(container = "p", "open");
                    out.push("<p>".to_string());
                    self.p_counter += 1;
                    self.p_open = true;
                }
                if self.p_counter > 1 {
                    out.push("<br/>".to_string());
                }
                self.p_counter += 1;
                out.push(rewrite_inline(line));
            }
            LineKind::Blank => {
                self.close_unordered(out);
                self.close_ordered(out);
                self.close_paragraph(out);
                self.p_counter = 0;
            }
        }
    }

    /// Close whatever is still open: paragraph, then unordered, then ordered.
    pub fn finish(&mut self, out: &mut Fragments) {
        self.close_paragraph(out);
        self.close_unordered(out);
        self.close_ordered(out);
    }

    fn close_unordered(&mut self, out: &mut Fragments) {
        if self.ul_open {
            trace!(container = "ul", "close");
            out.push("</ul>".to_string());
            self.ul_open = false;
        }
    }

    fn close_ordered(&mut self, out: &mut Fragments) {
        if self.ol_open {
            trace!(container = "ol", "close");
            out.push("</ol>".to_string());
            self.ol_open = false;
        }
    }

    fn close_paragraph(&mut self, out: &mut Fragments) {
        if self.p_open {
            trace!(container = "p", "close");
            out.push("</p>".to_string());
            self.p_open = false;
        }
    }
}
