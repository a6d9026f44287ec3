//! Fixture documents rendered through the file pipeline.

use crate::common::{fixture_path, read_fixture};
use insta::assert_snapshot;
use md2html::{markdown_to_html, publish, FileSink, FileSource, RenderOptions};
use tempfile::tempdir;

#[test]
fn test_kitchensink_snapshot() {
    let html = markdown_to_html(&read_fixture("kitchensink.md"));
    assert_snapshot!(html, @r"
<h1>Kitchen sink</h1>
<p>
This is <b>bold</b> and <em>emphasis</em>.
<br/>
Second line with 5d41402abc4b2a76b9719d911017c592.
<br/>
Third old line warm.
</p>
<ul>
<li>first item</li>
<li>second <b>item</b></li>
</ul>
<ol>
<li>ordered one</li>
<li>ordered two</li>
</ol>
<h4>Notes</h4>
<p>
Closing paragraph
</p>
");
}

#[test]
fn test_kitchensink_through_files_matches_in_memory() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("kitchensink.html");

    let source = FileSource::open(fixture_path("kitchensink.md")).expect("fixture exists");
    let stats =
        publish(source, FileSink::new(&output), &RenderOptions::default()).expect("publish");

    let written = std::fs::read_to_string(&output).unwrap();
    assert_eq!(written, markdown_to_html(&read_fixture("kitchensink.md")));
    assert!(!written.ends_with('\n'));
    assert_eq!(stats.headings, 2);
    assert_eq!(stats.list_items, 4);
}
