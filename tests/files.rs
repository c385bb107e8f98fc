use std::fs;
use std::io::Write;

use foldgroups::catalog::{self, Category, Record};
use foldgroups::{collapse_file, Error, MarkupOptions, Options};
use indoc::indoc;
use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

const PAGE: &str = indoc! {r#"
    <div class="category-selector">
        <div class="category-group">
            <h4 class="group-title">Common Words</h4>
            <label class="category-label"><input type="checkbox" class="category-checkbox" value="common"> Top 100</label>
        </div>
        <div class="category-group">
            <h4 class="group-title">Places</h4>
            <label class="category-label"><input type="checkbox" class="category-checkbox" value="american-cities"> Cities</label>
            <label class="category-label"><input type="checkbox" class="category-checkbox" value="states"> States</label>
        </div>
    </div>
"#};

#[test]
fn collapse_overwrites_input() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{PAGE}").unwrap();
    let markup = MarkupOptions::default().compile().unwrap();

    let report = collapse_file(file.path(), None, &markup, Options::default()).unwrap();
    assert_eq!(report.headings, 2);
    assert_eq!(report.groups, 2);
    assert_eq!(report.wrapped, 2);

    let content = fs::read_to_string(file.path()).unwrap();
    assert_eq!(content.lines().count(), PAGE.lines().count() + 4);
    assert_eq!(content.matches(r#"<div class="category-items">"#).count(), 2);
    assert_eq!(content.matches("</div><!-- /category-items -->").count(), 2);
    assert!(content.ends_with("</div>\n"));

    // a second run is a no-op
    let report = collapse_file(file.path(), None, &markup, Options { strict: true }).unwrap();
    assert_eq!(report.wrapped, 0);
    assert_eq!(fs::read_to_string(file.path()).unwrap(), content);
}

#[test]
fn collapse_to_separate_output() {
    let mut input = NamedTempFile::new().unwrap();
    write!(input, "{PAGE}").unwrap();
    let output = NamedTempFile::new().unwrap();
    let markup = MarkupOptions::default().compile().unwrap();

    collapse_file(input.path(), Some(output.path()), &markup, Options::default()).unwrap();

    assert_eq!(fs::read_to_string(input.path()).unwrap(), PAGE);
    let lines: Vec<String> = fs::read_to_string(output.path())
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect();
    assert_eq!(
        lines[2],
        r#"        <h4 class="group-title collapsible"><span class="collapse-icon">▼</span>Common Words</h4>"#
    );
    assert_eq!(lines[3], r#"            <div class="category-items">"#);
    assert_eq!(lines[5], "            </div><!-- /category-items -->");
    assert_eq!(lines[6], "    </div>");
}

#[test]
fn strict_failure_leaves_file_alone() {
    let src = "<div class=\"category-group\">\n<div class=\"category-group\">\n</div>\n";
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{src}").unwrap();
    let markup = MarkupOptions::default().compile().unwrap();

    let err = collapse_file(file.path(), None, &markup, Options { strict: true }).unwrap_err();
    assert!(matches!(err, Error::NestedGroup { line: 2, open: 1 }));
    assert_eq!(fs::read_to_string(file.path()).unwrap(), src);
}

#[test]
fn missing_input_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let markup = MarkupOptions::default().compile().unwrap();
    let err = collapse_file(&dir.path().join("index.html"), None, &markup, Options::default())
        .unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn append_grows_catalog_by_one() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        "const wordCategories = {{\n    'common': [\n        {{ word: 'the', chord: '-T' }}\n    ]\n}};\n"
    )
    .unwrap();

    let cats = vec![Category {
        key: "states".to_string(),
        title: "US States".to_string(),
        records: vec![Record {
            word: "Ohio".to_string(),
            chord: "OEUP".to_string(),
        }],
    }];
    let report = catalog::append_to_file(file.path(), &cats).unwrap();
    assert_eq!((report.before, report.after), (1, 2));

    let content = fs::read_to_string(file.path()).unwrap();
    assert_eq!(catalog::count_records(&content), 2);
    assert_eq!(content.matches(catalog::TERMINATOR).count(), 1);
    assert!(content.ends_with(catalog::TERMINATOR));
    assert!(content.contains("    // US States Category\n    'states': [\n"));
}
