// crates/dispatch-board-feed/tests/sources.rs
// ============================================================================
// Module: Row Source Tests
// Description: Tests for the inline, file, and HTTP row sources.
// Purpose: Validate fetch semantics, confinement, and fail-closed errors.
// Dependencies: dispatch-board-feed, tempfile, tiny_http
// ============================================================================
//! ## Overview
//! Ensures each source delivers the complete decoded row set for one data
//! load and fails closed on missing files, root escapes, unsupported
//! schemes, and non-success HTTP responses.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use std::thread;

use dispatch_board_core::RawRow;
use dispatch_board_feed::FileSource;
use dispatch_board_feed::HttpSource;
use dispatch_board_feed::HttpSourceConfig;
use dispatch_board_feed::InlineSource;
use dispatch_board_feed::MAX_FEED_BYTES;
use dispatch_board_feed::RowSource;
use dispatch_board_feed::SourceError;
use tiny_http::Response;
use tiny_http::Server;

const FEED: &[u8] = b"PEDIDO #,NOMBRE,COD.\nP-1,Cliente A,D-1\nP-2,Cliente B,D-2\n";

fn order_ids(rows: &[RawRow]) -> Vec<&str> {
    rows.iter().filter_map(|row| row.get("PEDIDO #")).collect()
}

// ============================================================================
// SECTION: Inline Source
// ============================================================================

/// Verifies the inline source returns its preloaded rows on every fetch.
#[test]
fn inline_source_returns_preloaded_rows() {
    let source = InlineSource::from_csv(FEED).unwrap();
    let first = source.fetch_rows().unwrap();
    let second = source.fetch_rows().unwrap();
    assert_eq!(order_ids(&first), vec!["P-1", "P-2"]);
    assert_eq!(first, second);
}

/// Verifies constructing an inline source from invalid CSV fails closed.
#[test]
fn inline_source_rejects_invalid_csv() {
    let error = InlineSource::from_csv(b"PEDIDO #\n\xff\xfe\n").unwrap_err();
    assert!(matches!(error, SourceError::Decode(_)));
}

// ============================================================================
// SECTION: File Source
// ============================================================================

/// Verifies the file source reads and decodes a local feed export.
#[test]
fn file_source_reads_local_feed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("feed.csv");
    std::fs::write(&path, FEED).unwrap();

    let rows = FileSource::new(&path).fetch_rows().unwrap();
    assert_eq!(order_ids(&rows), vec!["P-1", "P-2"]);
}

/// Verifies a missing feed path maps to the not-found error.
#[test]
fn file_source_reports_missing_feed() {
    let dir = tempfile::tempdir().unwrap();
    let error = FileSource::new(dir.path().join("absent.csv")).fetch_rows().unwrap_err();
    assert!(matches!(error, SourceError::NotFound(_)));
}

/// Verifies a rooted source accepts paths that resolve inside the root.
#[test]
fn rooted_file_source_accepts_confined_paths() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("feed.csv");
    std::fs::write(&path, FEED).unwrap();

    let rows = FileSource::rooted(dir.path(), &path).fetch_rows().unwrap();
    assert_eq!(rows.len(), 2);
}

/// Verifies a path resolving outside the root fails closed.
#[test]
fn rooted_file_source_rejects_escaping_paths() {
    let root = tempfile::tempdir().unwrap();
    let outside = tempfile::tempdir().unwrap();
    let path = outside.path().join("feed.csv");
    std::fs::write(&path, FEED).unwrap();

    let error = FileSource::rooted(root.path(), &path).fetch_rows().unwrap_err();
    assert!(matches!(error, SourceError::InvalidTarget(_)));

    // Traversal through the root is caught after canonicalization.
    let sneaky = root.path().join("..").join("elsewhere").join("feed.csv");
    let error = FileSource::rooted(root.path(), sneaky).fetch_rows().unwrap_err();
    assert!(matches!(error, SourceError::NotFound(_) | SourceError::InvalidTarget(_)));
}

/// Verifies a feed above the byte cap is rejected before decoding.
#[test]
fn file_source_rejects_oversized_feed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("feed.csv");
    std::fs::write(&path, vec![b'a'; MAX_FEED_BYTES + 1]).unwrap();

    let error = FileSource::new(&path).fetch_rows().unwrap_err();
    assert!(matches!(
        error,
        SourceError::TooLarge { max_bytes, actual_bytes }
            if max_bytes == MAX_FEED_BYTES && actual_bytes > MAX_FEED_BYTES
    ));
}

// ============================================================================
// SECTION: HTTP Source
// ============================================================================

/// Verifies the HTTP source fetches and decodes a published CSV feed.
#[test]
fn http_source_fetches_published_feed() {
    let server = Server::http("127.0.0.1:0").expect("http server");
    let addr = server.server_addr();

    let handle = thread::spawn(move || {
        if let Ok(request) = server.recv() {
            request.respond(Response::from_data(FEED.to_vec())).expect("respond");
        }
    });

    let config = HttpSourceConfig::new(format!("http://{addr}/feed.csv"));
    let rows = HttpSource::new(&config).unwrap().fetch_rows().unwrap();
    assert_eq!(order_ids(&rows), vec!["P-1", "P-2"]);

    handle.join().expect("server thread");
}

/// Verifies non-success status codes fail closed.
#[test]
fn http_source_rejects_error_status() {
    let server = Server::http("127.0.0.1:0").expect("http server");
    let addr = server.server_addr();

    let handle = thread::spawn(move || {
        if let Ok(request) = server.recv() {
            let response =
                Response::from_string("gone").with_status_code(tiny_http::StatusCode(404));
            request.respond(response).expect("respond");
        }
    });

    let config = HttpSourceConfig::new(format!("http://{addr}/feed.csv"));
    let error = HttpSource::new(&config).unwrap().fetch_rows().unwrap_err();
    assert!(matches!(error, SourceError::Http(_)));

    handle.join().expect("server thread");
}

/// Verifies an oversized response body is rejected by the byte cap.
#[test]
fn http_source_rejects_oversized_feed() {
    let server = Server::http("127.0.0.1:0").expect("http server");
    let addr = server.server_addr();

    let handle = thread::spawn(move || {
        if let Ok(request) = server.recv() {
            let body = vec![b'a'; MAX_FEED_BYTES + 1];
            // The client may hang up as soon as it sees the content length.
            let _ = request.respond(Response::from_data(body));
        }
    });

    let config = HttpSourceConfig::new(format!("http://{addr}/feed.csv"));
    let error = HttpSource::new(&config).unwrap().fetch_rows().unwrap_err();
    assert!(matches!(
        error,
        SourceError::TooLarge { max_bytes, actual_bytes }
            if max_bytes == MAX_FEED_BYTES && actual_bytes > MAX_FEED_BYTES
    ));

    handle.join().expect("server thread");
}

/// Verifies unsupported schemes and malformed URLs are rejected up front.
#[test]
fn http_source_validates_target() {
    let ftp = HttpSourceConfig::new("ftp://feeds.example/feed.csv");
    assert!(matches!(
        HttpSource::new(&ftp).unwrap_err(),
        SourceError::UnsupportedScheme(scheme) if scheme == "ftp"
    ));

    let garbled = HttpSourceConfig::new("not a url");
    assert!(matches!(HttpSource::new(&garbled).unwrap_err(), SourceError::InvalidTarget(_)));
}
