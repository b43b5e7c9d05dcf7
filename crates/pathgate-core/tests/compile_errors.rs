//! Construction-time validation and pattern compilation.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::error::Error as _;

use pathgate_core::error::ErrorKind;
use pathgate_core::{CompiledFilter, ListKind, PathFilterConfig, PathFilterError};

#[test]
fn both_lists_empty_is_rejected() {
    let err = CompiledFilter::compile(&PathFilterConfig::default()).expect_err("must fail");
    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert_eq!(err.to_string(), "both allowlist and blocklist cannot be empty");
}

#[test]
fn both_lists_populated_is_rejected() {
    let cfg = PathFilterConfig {
        allowlist: vec!["^/api".into()],
        blocklist: vec!["^/admin".into()],
    };
    let err = CompiledFilter::compile(&cfg).expect_err("must fail");
    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert_eq!(err.to_string(), "both allowlist and blocklist cannot be populated");
}

#[test]
fn exclusivity_is_checked_before_patterns() {
    // Invalid pattern on both sides still reports the configuration error.
    let cfg = PathFilterConfig {
        allowlist: vec!["(".into()],
        blocklist: vec!["(".into()],
    };
    let err = CompiledFilter::compile(&cfg).expect_err("must fail");
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[test]
fn unbalanced_group_names_the_pattern() {
    let err = CompiledFilter::compile(&PathFilterConfig::allowlist(["("])).expect_err("must fail");
    assert_eq!(err.kind(), ErrorKind::PatternCompilation);
    assert_eq!(err.pattern(), Some("("));

    let msg = err.to_string();
    assert!(msg.starts_with("cannot compile regex in allowlist \"(\""), "msg={msg}");

    let source = err.source().expect("root cause must be kept");
    assert!(source.downcast_ref::<regex::Error>().is_some());
}

#[test]
fn blocklist_error_names_the_list() {
    let err = CompiledFilter::compile(&PathFilterConfig::blocklist(["^/ok", "[a-"]))
        .expect_err("must fail");
    match err {
        PathFilterError::PatternCompilation { list, pattern, .. } => {
            assert_eq!(list, ListKind::Blocklist);
            assert_eq!(pattern, "[a-");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn first_invalid_pattern_aborts_compilation() {
    // A second, different invalid pattern after the first must never be reported.
    let cfg = PathFilterConfig::allowlist(["^/api", "(", "[z-a]"]);
    let err = CompiledFilter::compile(&cfg).expect_err("must fail");
    assert_eq!(err.pattern(), Some("("));
}

#[test]
fn compiled_sets_preserve_order() {
    let cfg = PathFilterConfig::blocklist(["^/b", "^/a", "^/c"]);
    let filter = CompiledFilter::compile(&cfg).unwrap();
    let got: Vec<_> = filter.blocklist().patterns().collect();
    assert_eq!(got, vec!["^/b", "^/a", "^/c"]);
    assert!(filter.allowlist().is_empty());
}

#[test]
fn config_deserializes_with_defaults() {
    let cfg: PathFilterConfig = serde_json::from_str(r#"{"blocklist":["^/admin"]}"#).unwrap();
    assert!(cfg.allowlist.is_empty());
    assert_eq!(cfg.blocklist, vec!["^/admin".to_string()]);

    let bad = serde_json::from_str::<PathFilterConfig>(r#"{"blocklsit":["^/admin"]}"#);
    assert!(bad.is_err());
}

#[test]
fn literal_quoting_is_not_supported() {
    let err = CompiledFilter::compile(&PathFilterConfig::blocklist([r"\Q/a.b\E"]))
        .expect_err("must fail");
    assert_eq!(err.kind(), ErrorKind::PatternCompilation);

    // Backslash escapes express the same literal.
    let filter = CompiledFilter::compile(&PathFilterConfig::blocklist([r"/a\.b"])).unwrap();
    assert_eq!(filter.decide("/a.b"), pathgate_core::Decision::Deny);
    assert_eq!(filter.decide("/axb"), pathgate_core::Decision::Allow);
}
