use crate::harness::TestHarness;
use crate::helpers::{parse_fixture, single_location};
use tower_lsp_server::lsp_types::Position;

#[tokio::test]
async fn cursor_on_whitespace_is_a_quiet_noop() {
    let (main, cursor) = parse_fixture("message Foo {\n}\n$0");

    let mut harness = TestHarness::new();
    harness
        .initialize_and_open(&[("main.proto", &main)], &["main.proto"])
        .await;

    let response = harness
        .goto_definition(harness.file_uri("main.proto"), cursor)
        .await;
    assert_eq!(response, None);
}

#[tokio::test]
async fn out_of_range_positions_are_clamped_not_fatal() {
    let mut harness = TestHarness::new();
    harness
        .initialize_and_open(&[("main.proto", "message Foo {}\n")], &["main.proto"])
        .await;

    let uri = harness.file_uri("main.proto");
    let response = harness
        .goto_definition(uri.clone(), Position::new(42, 7))
        .await;
    assert_eq!(response, None);

    // The server is still healthy afterwards.
    let response = harness.goto_definition(uri, Position::new(0, 9)).await;
    let location = single_location(response);
    assert_eq!(location.range.start, Position::new(0, 8));
}

#[tokio::test]
async fn unknown_document_yields_no_result() {
    let mut harness = TestHarness::new();
    harness.initialize(&[], None, None).await;

    let response = harness
        .goto_definition(harness.file_uri("ghost.proto"), Position::new(0, 0))
        .await;
    assert_eq!(response, None);
}

#[tokio::test]
async fn unsupported_document_kinds_are_ignored() {
    let mut harness = TestHarness::new();
    harness
        .initialize(
            &[
                ("notes.txt", "message Foo {}\nFoo f;\n"),
                ("main.proto", "message Foo {}\n"),
            ],
            None,
            None,
        )
        .await;

    let response = harness
        .goto_definition(harness.file_uri("notes.txt"), Position::new(1, 1))
        .await;
    assert_eq!(response, None);
}

#[tokio::test]
async fn malformed_initialization_options_fall_back_to_defaults() {
    let (main, cursor) = parse_fixture("message Foo {\n}\nmessage Uses {\n  F$0oo f = 1;\n}");

    let mut harness = TestHarness::new();
    harness
        .initialize(
            &[("main.proto", &main)],
            None,
            Some(serde_json::json!({ "includeHidden": "absolutely" })),
        )
        .await;
    harness.open_file("main.proto").await;

    let response = harness
        .goto_definition(harness.file_uri("main.proto"), cursor)
        .await;
    let location = single_location(response);
    assert_eq!(location.range.start, Position::new(0, 8));
}

#[tokio::test]
async fn emptied_buffer_resolves_to_nothing() {
    let mut harness = TestHarness::new();
    harness
        .initialize_and_open(&[("main.proto", "message Foo {}\n")], &["main.proto"])
        .await;

    let uri = harness.file_uri("main.proto");
    harness.change_file(uri.clone(), 2, "").await;

    let response = harness.goto_definition(uri, Position::new(0, 0)).await;
    assert_eq!(response, None);
}
