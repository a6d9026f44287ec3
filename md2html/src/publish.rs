//! Document publishing pipeline.
//!
//! Bridges the transducer and the outside world. The transducer only needs two
//! things from its surroundings: the input as a sequence of lines, and somewhere
//! to write the finished text. Those are the [`LineSource`] and [`HtmlSink`]
//! traits; file-backed and in-memory implementations are provided.
//!
//! ```ignore
//! let source = FileSource::open("README.md")?;
//! let sink = FileSink::new("README.html");
//! let stats = publish(source, sink, &RenderOptions::default())?;
//! ```

use crate::convert::{convert_lines_with_stats, split_lines, ConversionStats};
use crate::error::ConvertError;
use crate::render::{render, RenderOptions};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Supplies the whole input as ordered lines.
pub trait LineSource {
    fn read_lines(&mut self) -> Result<Vec<String>, ConvertError>;
}

/// Receives the whole rendered output at once.
pub trait HtmlSink {
    fn write_all(&mut self, html: &str) -> Result<(), ConvertError>;
}

/// A UTF-8 markdown file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Fails with [`ConvertError::MissingInput`] when `path` does not exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ConvertError> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(ConvertError::MissingInput(path));
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LineSource for FileSource {
    fn read_lines(&mut self) -> Result<Vec<String>, ConvertError> {
        let text = fs::read_to_string(&self.path).map_err(|source| ConvertError::Read {
            path: self.path.clone(),
            source,
        })?;
        Ok(split_lines(&text).into_iter().map(str::to_string).collect())
    }
}

impl LineSource for &str {
    fn read_lines(&mut self) -> Result<Vec<String>, ConvertError> {
        Ok(split_lines(self).into_iter().map(str::to_string).collect())
    }
}

/// Writes (creating or truncating) a file on disk.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HtmlSink for FileSink {
    fn write_all(&mut self, html: &str) -> Result<(), ConvertError> {
        fs::write(&self.path, html).map_err(|source| ConvertError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

impl HtmlSink for String {
    fn write_all(&mut self, html: &str) -> Result<(), ConvertError> {
        self.clear();
        self.push_str(html);
        Ok(())
    }
}

impl<T: HtmlSink + ?Sized> HtmlSink for &mut T {
    fn write_all(&mut self, html: &str) -> Result<(), ConvertError> {
        (**self).write_all(html)
    }
}

/// Read every line from `source`, convert, render and write to `sink`.
///
/// # Errors
///
/// Only the source and sink can fail; conversion itself always succeeds.
pub fn publish<S, K>(
    mut source: S,
    mut sink: K,
    options: &RenderOptions,
) -> Result<ConversionStats, ConvertError>
where
    S: LineSource,
    K: HtmlSink,
{
    let lines = source.read_lines()?;
    let (fragments, stats) = convert_lines_with_stats(&lines);
    let html = render(&fragments, options);
    sink.write_all(&html)?;
    info!(
        lines = stats.lines,
        fragments = stats.fragments,
        bytes = html.len(),
        "published document"
    );
    Ok(stats)
}
