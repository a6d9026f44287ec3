//! The line-oriented transducer
//!
//! Every line goes through the same three stages:
//!
//! ```text
//! raw line ── trim + directives ──▶ LineKind ── BlockState::step ──▶ fragments
//! ```
//!
//! [`Transducer`] owns the state for one conversion run; the free functions are
//! shortcuts for the common whole-document case.

use crate::block::{BlockState, Fragments, LineKind};
use crate::directives::preprocess_line;
use crate::render::{render, RenderOptions};
use tracing::debug;

/// Counters collected while converting, reported by callers that log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionStats {
    pub lines: usize,
    pub fragments: usize,
    pub headings: usize,
    pub list_items: usize,
    pub paragraph_lines: usize,
    pub blank_lines: usize,
}

/// One conversion run: fresh block state in, fragments out.
#[derive(Debug, Default)]
pub struct Transducer {
    state: BlockState,
    fragments: Fragments,
    stats: ConversionStats,
}

impl Transducer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Preprocess, classify and process one raw input line.
    pub fn push_line(&mut self, raw: &str) {
        let line = preprocess_line(raw);
        let kind = LineKind::classify(&line);

        self.stats.lines += 1;
        match kind {
            LineKind::Heading { .. } => self.stats.headings += 1,
            LineKind::UnorderedItem(_) | LineKind::OrderedItem(_) => self.stats.list_items += 1,
            LineKind::Text(_) => self.stats.paragraph_lines += 1,
            LineKind::Blank => self.stats.blank_lines += 1,
        }

        self.state.step(&kind, &mut self.fragments);
    }

    pub fn state(&self) -> &BlockState {
        &self.state
    }

    /// Close any open container and hand back the fragments.
    pub fn finish(mut self) -> (Fragments, ConversionStats) {
        self.state.finish(&mut self.fragments);
        self.stats.fragments = self.fragments.len();
        debug!(
            lines = self.stats.lines,
            fragments = self.stats.fragments,
            "conversion finished"
        );
        (self.fragments, self.stats)
    }
}

/// Split source text into lines on `\n`.
///
/// Every piece counts, so a trailing newline yields a final empty line. A `\r`
/// before the `\n` is left for the per-line trim; a lone `\r` does not end a
/// line and stays inside it.
pub fn split_lines(source: &str) -> Vec<&str> {
    source.split('\n').collect()
}

/// Convert an ordered sequence of lines into fragments.
pub fn convert_lines<I, S>(lines: I) -> Fragments
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    convert_lines_with_stats(lines).0
}

/// Like [`convert_lines`], also returning the run's counters.
pub fn convert_lines_with_stats<I, S>(lines: I) -> (Fragments, ConversionStats)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut transducer = Transducer::new();
    for line in lines {
        transducer.push_line(line.as_ref());
    }
    transducer.finish()
}

/// Convert a whole markdown document to HTML with default rendering.
pub fn markdown_to_html(source: &str) -> String {
    markdown_to_html_with_options(source, &RenderOptions::default())
}

pub fn markdown_to_html_with_options(source: &str, options: &RenderOptions) -> String {
    let fragments = convert_lines(split_lines(source));
    render(&fragments, options)
}
