//! Line-oriented conversion of a small markdown subset to HTML
//!
//!     The converter is a transducer: it walks the input one line at a time, keeps a tiny
//!     record of which block container is open (`<p>`, `<ul>` or `<ol>`), and appends HTML
//!     fragments as that record changes. Joined with line breaks, the fragments are the
//!     document.
//!
//!     This is a pure lib, that is, it powers the md2html cli but is shell agnostic: no code
//!     here prints, reads environment variables or exits. File access is confined to the
//!     publish module, behind the LineSource / HtmlSink traits.
//!
//!     The file structure :
//!     .
//!     ├── error.rs        # ConvertError
//!     ├── directives.rs   # [[hash]] and ((c-removal)) line directives
//!     ├── inline.rs       # **bold** and __italic__ rewriting
//!     ├── block.rs        # LineKind classification + BlockState machine
//!     ├── convert.rs      # Transducer and whole-document helpers
//!     ├── render.rs       # Fragment joining (line endings)
//!     ├── publish.rs      # Source / sink traits and file implementations
//!     └── lib.rs
//!
//! Supported Syntax
//!
//!     | Input            | Output                        | Notes                                   |
//!     |------------------|-------------------------------|-----------------------------------------|
//!     | `## Title`       | `<h2>Title</h2>`              | level = every `#` on the line, no clamp |
//!     | `- item`         | `<ul>` `<li>item</li>`        | bare `-` is enough                      |
//!     | `* item`         | `<ol>` `<li>item</li>`        | the space after `*` is required         |
//!     | other text       | `<p>` text, `<br/>` between   | closed by a blank line                  |
//!     | `**b**`/`__i__`  | `<b>b</b>` / `<em>i</em>`     | every block kind                        |
//!     | `[[text]]`       | md5 hex of `text`             | first span per line only                |
//!     | `((text))`       | `text`, minus `c`/`C` if any  | applied before classification           |
//!
//!     Nothing is HTML-escaped, and there is no nesting: a list item is one line.
//!
//! Core Algorithm
//!
//!     Per line: trim, run the directives (hash first), classify into a LineKind, then let
//!     BlockState close and open containers before emitting the line's fragment. After the
//!     last line, any container still open is closed. See ./block.rs for the transition
//!     table.
//!
//! Testing
//!     tests
//!     ├── convert         # end to end documents
//!     ├── fixtures        # kitchensink.md and friends
//!     └── properties.rs   # proptest invariants
//!
pub mod block;
pub mod convert;
pub mod directives;
pub mod error;
pub mod inline;
pub mod publish;
pub mod render;

pub use block::{BlockState, Fragments, LineKind};
pub use convert::{
    convert_lines, convert_lines_with_stats, markdown_to_html, markdown_to_html_with_options,
    split_lines, ConversionStats, Transducer,
};
pub use error::ConvertError;
pub use inline::rewrite_inline;
pub use publish::{publish, FileSink, FileSource, HtmlSink, LineSource};
pub use render::{render, LineEnding, RenderOptions};
