//! Golden transcript test.
//!
//! Replays `fixtures/session.jsonl` through the server and compares the
//! output byte-for-byte with `expected/session.jsonl`.

#[path = "../common/mod.rs"]
mod common;

use std::fs;
use std::path::PathBuf;

use common::{run_server, FakeAnalyzer};

fn golden_path(kind: &str, name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/golden")
        .join(kind)
        .join(name)
}

fn read(kind: &str, name: &str) -> String {
    fs::read_to_string(golden_path(kind, name)).expect("golden file missing")
}

#[tokio::test]
async fn golden_session_transcript() {
    let input = read("fixtures", "session.jsonl");
    let expected = read("expected", "session.jsonl");
    let analyzer = FakeAnalyzer::answering("A short music video.");

    let output = run_server(&input, analyzer.clone()).await;

    assert_eq!(output, expected, "session transcript does not match golden");
    assert_eq!(
        analyzer.calls(),
        vec![(
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_string(),
            "Summarize the video".to_string()
        )]
    );
}

#[tokio::test]
async fn golden_session_is_deterministic() {
    let input = read("fixtures", "session.jsonl");

    let first = run_server(&input, FakeAnalyzer::answering("A short music video.")).await;
    let second = run_server(&input, FakeAnalyzer::answering("A short music video.")).await;

    assert_eq!(first, second, "identical input must produce identical output");
}

#[tokio::test]
async fn response_count_matches_answerable_requests() {
    let input = read("fixtures", "session.jsonl");
    let output = run_server(&input, FakeAnalyzer::answering("ok")).await;

    // 12 lines in: 1 notification, 1 broken, 1 blank are never answered.
    assert_eq!(input.lines().count(), 12);
    assert_eq!(output.lines().count(), 9);
}
