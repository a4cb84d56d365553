use std::io::Cursor;

use tracing_test::traced_test;

use super::*;
use crate::errors::IndexError;
use crate::io::{
    parse_edge_line,
    parse_edge_list,
};

const ROAD_DUMP: &str = "%%MatrixMarket matrix coordinate pattern symmetric
% minnesota excerpt

4 4 3
2 1
3 2
4 3
3 2
";

#[rstest]
fn test_parse_edge_list_skips_header_and_comments() {
    let parsed = parse_edge_list(Cursor::new(ROAD_DUMP)).unwrap();
    assert_eq!(parsed.start, Some(2));
    assert_eq!(parsed.skipped, 0);
    assert_eq!(parsed.graph, path4());
}

#[rstest]
fn test_parse_edge_list_tolerates_bad_lines() {
    let input = "1 2\none two\n7\n2 x\n2 3\n";
    let parsed = parse_edge_list(Cursor::new(input)).unwrap();
    assert_eq!(parsed.skipped, 3);
    assert_eq!(parsed.graph.edge_count(), 2);
    assert_eq!(parsed.start, Some(1));
}

#[rstest]
fn test_parse_empty_input() {
    let parsed = parse_edge_list(Cursor::new("% nothing here\n\n")).unwrap();
    assert!(parsed.graph.is_empty());
    assert_eq!(parsed.start, None);
}

#[rstest]
#[case("  5\t6  ", Some((5, 6)))]
#[case("% 1 2", None)]
#[case("", None)]
#[case("1 2 3", None)]
fn test_parse_edge_line(#[case] text: &str, #[case] expected: Option<(VertexId, VertexId)>) {
    assert_eq!(parse_edge_line(1, text).unwrap(), expected);
}

#[rstest]
#[case("12")]
#[case("a b")]
#[case("-1 2")]
fn test_parse_edge_line_malformed(#[case] text: &str) {
    let err = parse_edge_line(9, text).unwrap_err();
    assert!(matches!(err, IndexError::MalformedInput { line: 9, .. }));
}

#[rstest]
#[traced_test]
fn test_skipped_lines_are_logged() {
    let parsed = parse_edge_list(Cursor::new("1 2\nx y\n")).unwrap();
    assert_eq!(parsed.skipped, 1);
    assert!(logs_contain("skipping malformed line"));
}
