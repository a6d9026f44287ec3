//! Joining fragments into the final HTML text

/// Separator placed between fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Output knobs. The defaults give a bare `\n` join with nothing appended.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderOptions {
    pub line_ending: LineEnding,
    /// Append one line ending after the last fragment (non-empty output only).
    pub trailing_newline: bool,
}

/// Join `fragments` according to `options`.
pub fn render(fragments: &[String], options: &RenderOptions) -> String {
    let separator = options.line_ending.as_str();
    let mut html = fragments.join(separator);
    if options.trailing_newline && !html.is_empty() {
        html.push_str(separator);
    }
    html
}
