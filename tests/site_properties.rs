//! End-to-end checks of record resolution, image links, loading with
//! retry against a local HTTP responder, and detail addressing.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use maha_idea::net::loader::{LoadState, RecordLoader};
use maha_idea::route::{select_detail, Route};
use maha_idea::{normalize_image_url, resolve_field, HttpRecordSource, Record, SiteConfig};

/// Answer one connection per scripted `(status, body)` pair, returning the
/// raw request lines seen.
fn spawn_scripted_http(script: Vec<(&'static str, &'static str)>) -> (String, thread::JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = thread::spawn(move || {
        let mut requests = Vec::new();
        for (status, body) in script {
            let (mut stream, _) = listener.accept().unwrap();
            let mut buf = [0u8; 2048];
            let n = stream.read(&mut buf).unwrap_or(0);
            let request = String::from_utf8_lossy(&buf[..n]).into_owned();
            requests.push(request.lines().next().unwrap_or_default().to_string());
            let head = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            stream.write_all(head.as_bytes()).unwrap();
            stream.write_all(body.as_bytes()).unwrap();
            let _ = stream.flush();
        }
        requests
    });
    (format!("http://{addr}/macros/exec"), handle)
}

fn wait_until_settled(loader: &mut RecordLoader) {
    let deadline = Instant::now() + Duration::from_secs(10);
    loop {
        loader.poll();
        if !loader.is_loading() || Instant::now() > deadline {
            break;
        }
        thread::sleep(Duration::from_millis(10));
    }
}

#[test]
fn exact_key_beats_alias_and_whitespace_keys_match_trimmed() {
    let record: Record = serde_json::from_str(r#"{"ชื่อหนังสือ":"ทดสอบ","Title":""}"#).unwrap();
    assert_eq!(resolve_field(&record, &["ชื่อหนังสือ", "Title"]), "ทดสอบ");

    let record: Record = serde_json::from_str(r#"{" Title ":"Hello"}"#).unwrap();
    assert_eq!(resolve_field(&record, &["Title"]), "Hello");

    let record: Record = serde_json::from_str(r#"{"Title":"","Other":"x"}"#).unwrap();
    assert_eq!(resolve_field(&record, &["Title", "Name"]), "");
}

#[test]
fn drive_links_become_direct_image_links() {
    assert_eq!(
        normalize_image_url("https://drive.google.com/open?id=ABC123&other=1"),
        "https://lh3.googleusercontent.com/d/ABC123"
    );
    assert_eq!(
        normalize_image_url("https://example.com/a.jpg"),
        "https://example.com/a.jpg"
    );
    assert_eq!(normalize_image_url(""), "");
}

#[test]
fn failed_load_shows_error_then_retry_repeats_the_request() {
    let (url, server) = spawn_scripted_http(vec![
        ("500 Internal Server Error", "boom"),
        ("200 OK", r#"[{"ชื่อหนังสือ":"หนังสือเล่มแรก","ชื่อ-นามสกุล":"ใจดี"}]"#),
    ]);
    let config = SiteConfig::default()
        .with_endpoint(url)
        .with_timeout(Duration::from_secs(5));
    let source = HttpRecordSource::new(&config).unwrap();
    let mut loader = RecordLoader::new(Arc::new(source));

    loader.start(|| {});
    wait_until_settled(&mut loader);
    assert!(matches!(loader.state(), LoadState::Failed(_)));
    assert!(loader.records().is_empty());
    assert_eq!(loader.error(), Some("ไม่สามารถโหลดข้อมูลได้ในขณะนี้"));

    loader.retry(|| {});
    wait_until_settled(&mut loader);
    assert_eq!(loader.records().len(), 1);
    assert_eq!(loader.requests_issued(), 2);

    let requests = server.join().unwrap();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0], requests[1]);
    assert!(requests[0].starts_with("GET /macros/exec "));
}

#[test]
fn routed_detail_out_of_range_is_not_found() {
    let records: Vec<Record> = ["ก", "ข"]
        .iter()
        .map(|title| [("ชื่อหนังสือ", *title)].into_iter().collect())
        .collect();

    let Ok(Route::HumanBook { id }) = Route::parse("/human-book/7") else {
        panic!("expected a human book route");
    };
    assert!(select_detail(&records, &id).is_none());
    assert!(select_detail(&[], "0").is_none());
    assert!(select_detail(&records, "-1").is_none());

    let (index, _) = select_detail(&records, "1abc").unwrap();
    assert_eq!(index, 1);
    let (index, _) = select_detail(&records, "%E0%B8%82").unwrap();
    assert_eq!(index, 1);
}
