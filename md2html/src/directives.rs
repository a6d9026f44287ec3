//! Line directives applied before block classification
//!
//! Two directives rewrite a raw line before it is classified:
//!
//! | Syntax      | Effect                                                            |
//! |-------------|-------------------------------------------------------------------|
//! | `[[text]]`  | First span on the line becomes the lowercase MD5 hex of `text`   |
//! | `((text))`  | Spans containing `c`/`C` lose those letters; all `((`/`))` drop   |
//!
//! Hashing runs first, so a digest can never feed the character-removal pass
//! (digests are hex and carry no parentheses anyway). Both run before heading
//! and list markers are inspected, which lets a directive produce a marker.

use md5::{Digest, Md5};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;

static HASH_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\[(.+?)\]\]").expect("valid regex for hash directive"));

static C_SPAN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\(\([^()]*[Cc][^()]*\)\)").expect("valid regex for character-removal directive")
});

static PAREN_DELIMITERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(\(|\)\)").expect("valid regex for double parentheses"));

/// Lowercase hexadecimal MD5 digest of the UTF-8 bytes of `text`.
///
/// ```
/// use md2html::directives::md5_hex;
/// assert_eq!(md5_hex("abc"), "900150983cd24fb0d6963f7d28e17f72");
/// ```
pub fn md5_hex(text: &str) -> String {
    format!("{:x}", Md5::digest(text.as_bytes()))
}

/// Replace the first `[[text]]` span (delimiters included) with the digest of `text`.
///
/// Later spans on the same line are left verbatim.
pub fn substitute_hash(line: &str) -> Cow<'_, str> {
    let Some(caps) = HASH_SPAN.captures(line) else {
        return Cow::Borrowed(line);
    };
    let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
        return Cow::Borrowed(line);
    };

    let digest = md5_hex(inner.as_str());
    let mut out = String::with_capacity(line.len() - whole.len() + digest.len());
    out.push_str(&line[..whole.start()]);
    out.push_str(&digest);
    out.push_str(&line[whole.end()..]);
    Cow::Owned(out)
}

/// Apply the character-removal directive.
///
/// Every `((..))` span whose body contains a `c` or `C` (and no parentheses)
/// loses all of those letters. Afterwards every `((` and `))` left on the line
/// is removed, qualifying or not.
pub fn remove_c(line: &str) -> String {
    let stripped = C_SPAN.replace_all(line, |caps: &Captures| {
        caps[0].replace('c', "").replace('C', "")
    });
    PAREN_DELIMITERS.replace_all(&stripped, "").into_owned()
}

/// Whitespace for line trimming: Unicode whitespace plus the ASCII
/// separators `\x1c`..=`\x1f`, which `str::trim` keeps.
pub(crate) fn is_line_space(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Trim a raw line and run both directives over it, hash first.
pub fn preprocess_line(raw: &str) -> String {
    let line = raw.trim_matches(is_line_space);
    let hashed = substitute_hash(line);
    remove_c(&hashed)
}
