//! Whole-document conversions built from literal line lists.

use crate::common::fragments;
use md2html::markdown_to_html;

#[test]
fn test_heading_paragraph_and_list_document() {
    let out = fragments(&[
        "# Title",
        "",
        "Line one",
        "Line two",
        "",
        "- item a",
        "- item b",
    ]);
    assert_eq!(
        out,
        vec![
            "<h1>Title</h1>",
            "<p>",
            "Line one",
            "<br/>",
            "Line two",
            "</p>",
            "<ul>",
            "<li>item a</li>",
            "<li>item b</li>",
            "</ul>",
        ]
    );
}

#[test]
fn test_inline_spans_in_paragraph() {
    assert_eq!(
        fragments(&["**bold** and __em__"]),
        vec!["<p>", "<b>bold</b> and <em>em</em>", "</p>"]
    );
}

#[test]
fn test_hash_directive_paragraph() {
    assert_eq!(
        fragments(&["[[abc]]"]),
        vec!["<p>", "900150983cd24fb0d6963f7d28e17f72", "</p>"]
    );
}

#[test]
fn test_ordered_list_document() {
    assert_eq!(
        markdown_to_html("* one\n* **two**\n"),
        "<ol>\n<li>one</li>\n<li><b>two</b></li>\n</ol>"
    );
}

#[test]
fn test_unordered_then_ordered_switch() {
    assert_eq!(
        fragments(&["- a", "- b", "* c"]),
        vec!["<ul>", "<li>a</li>", "<li>b</li>", "</ul>", "<ol>", "<li>c</li>", "</ol>"]
    );
}

#[test]
fn test_heading_level_is_not_clamped() {
    assert_eq!(fragments(&["######## deep"]), vec!["<h8>deep</h8>"]);
}

#[test]
fn test_heading_made_only_of_hashes() {
    assert_eq!(fragments(&["###   "]), vec!["<h3></h3>"]);
}

#[test]
fn test_directives_inside_list_items_and_headings() {
    assert_eq!(
        fragments(&["# ((Cocoa)) [[abc]]", "- ((chic)) __x__"]),
        vec![
            "<h1>ooa 900150983cd24fb0d6963f7d28e17f72</h1>",
            "<ul>",
            "<li>hi <em>x</em></li>",
            "</ul>",
        ]
    );
}

#[test]
fn test_leading_whitespace_does_not_hide_markers() {
    assert_eq!(
        fragments(&["   ## Indented", "\t- tabbed"]),
        vec!["<h2>Indented</h2>", "<ul>", "<li>tabbed</li>", "</ul>"]
    );
}

#[test]
fn test_special_characters_are_not_escaped() {
    assert_eq!(
        fragments(&["a < b & c > d"]),
        vec!["<p>", "a < b & c > d", "</p>"]
    );
}

#[test]
fn test_whitespace_only_lines_are_blank() {
    assert_eq!(
        fragments(&["one", "   ", "two"]),
        vec!["<p>", "one", "</p>", "<p>", "two", "</p>"]
    );
}
