use json_delta_pointer::{
    format_json_pointer, get, is_child, is_valid_index, parse_json_pointer, PointerSyntaxError,
};
use serde_json::json;

#[test]
fn pointer_parse_format_roundtrip_matrix() {
    let cases = [
        "",
        "/",
        "/foo",
        "/foo/bar",
        "/a~0b/c~1d",
        "/arr/0",
        "/~0/~1",
        "//",
        "/ ",
    ];

    for pointer in cases {
        let path = parse_json_pointer(pointer).expect(pointer);
        assert_eq!(format_json_pointer(&path), pointer);
    }
}

#[test]
fn pointer_syntax_rejection_matrix() {
    let cases = [
        ("foo", PointerSyntaxError::NoLeadingSlash),
        ("foo/bar", PointerSyntaxError::NoLeadingSlash),
        ("~", PointerSyntaxError::NoLeadingSlash),
        ("/~", PointerSyntaxError::InvalidEscape),
        ("/~2", PointerSyntaxError::InvalidEscape),
        ("/ok/~x", PointerSyntaxError::InvalidEscape),
        ("/ok/end~", PointerSyntaxError::InvalidEscape),
    ];

    for (pointer, expected) in cases {
        assert_eq!(parse_json_pointer(pointer), Err(expected), "{pointer}");
    }
}

#[test]
fn escaped_segments_resolve_raw() {
    let doc = json!({"a/b": {"m~n": 1}});
    let path = parse_json_pointer("/a~1b/m~0n").unwrap();
    assert_eq!(path, vec!["a/b".to_string(), "m~n".to_string()]);
    assert_eq!(get(&doc, &path), Some(&json!(1)));
}

#[test]
fn index_literal_matrix() {
    for ok in ["0", "1", "10", "907"] {
        assert!(is_valid_index(ok), "{ok}");
    }
    for bad in ["", "-", "00", "01", "1.5", "-1", "+1", "1e2", " 1"] {
        assert!(!is_valid_index(bad), "{bad}");
    }
}

#[test]
fn child_relationship_uses_segments_not_text() {
    // "/foo" is not a prefix of "/foobar" even though the strings share one.
    let a = parse_json_pointer("/foo").unwrap();
    let b = parse_json_pointer("/foobar").unwrap();
    assert!(!is_child(&a, &b));

    let c = parse_json_pointer("/foo/bar").unwrap();
    assert!(is_child(&a, &c));
}
