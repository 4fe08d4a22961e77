use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::process::{Child, Command, Stdio};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

fn reserve_addr() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("reserve addr");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    addr.to_string()
}

fn wait_for_http(addr: &str) {
    for _ in 0..80 {
        if TcpStream::connect(addr).is_ok() {
            return;
        }
        std::thread::sleep(Duration::from_millis(25));
    }
    panic!("http server not ready on {addr}");
}

fn send_http(addr: &str, method: &str, path: &str, body: &str) -> String {
    let mut stream = TcpStream::connect(addr).expect("connect http");
    let request = format!(
        "{method} {path} HTTP/1.1\r\nHost: {addr}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        body.len(),
        body
    );
    stream.write_all(request.as_bytes()).expect("write request");
    stream.flush().expect("flush");
    let mut buf = String::new();
    stream.read_to_string(&mut buf).expect("read response");
    buf
}

fn response_body(response: &str) -> &str {
    response.split("\r\n\r\n").nth(1).unwrap_or("")
}

fn response_header(response: &str) -> &str {
    response.split("\r\n\r\n").next().unwrap_or("")
}

fn temp_path(tag: &str) -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    std::env::temp_dir()
        .join(format!("friction-http-{tag}-{}-{now}", std::process::id()))
        .display()
        .to_string()
}

fn spawn_daemon(addr: &str, journal: &str, identity: &str) -> Child {
    Command::new(env!("CARGO_BIN_EXE_friction-indexd"))
        .env("FRICTION_HTTP_ADDR", addr)
        .env("FRICTION_SINK", "journal")
        .env("FRICTION_JOURNAL_PATH", journal)
        .env("FRICTION_IDENTITY_PATH", identity)
        .env("RUST_LOG", "warn")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .expect("spawn friction-indexd")
}

#[test]
fn http_health_and_static_results_work() {
    let journal = temp_path("journal.json");
    let identity = temp_path("identity");
    let addr = reserve_addr();
    let mut child = spawn_daemon(&addr, &journal, &identity);

    wait_for_http(&addr);

    let health = send_http(&addr, "GET", "/health", "");
    assert!(health.starts_with("HTTP/1.1 200"));
    assert!(response_body(&health).contains("\"status\":\"ok\""));
    assert!(response_body(&health).contains("\"sink\":\"journal\""));

    let results = send_http(&addr, "GET", "/results/5.0-5.9", "");
    assert!(results.starts_with("HTTP/1.1 200"));
    let value: serde_json::Value =
        serde_json::from_str(response_body(&results)).expect("results json");
    assert_eq!(value["score"], 5.5);
    assert_eq!(value["score_range"], "5.0-5.9");

    let bad = send_http(&addr, "GET", "/results/banana", "");
    assert!(bad.starts_with("HTTP/1.1 303 See Other"));
    assert!(response_header(&bad).contains("Location: /"));

    let csv = send_http(&addr, "GET", "/results/5.0-5.9/export?format=csv", "");
    assert!(csv.starts_with("HTTP/1.1 200"));
    assert!(response_header(&csv).contains("Content-Type: text/csv"));
    assert!(response_body(&csv).contains("SCORE INFORMATION"));

    let _ = child.kill();
    let _ = child.wait();
    let _ = std::fs::remove_file(journal);
    let _ = std::fs::remove_file(identity);
}

#[test]
fn http_questionnaire_persists_submission() {
    let journal = temp_path("journal-flow.json");
    let identity = temp_path("identity-flow");
    let addr = reserve_addr();
    let mut child = spawn_daemon(&addr, &journal, &identity);

    wait_for_http(&addr);

    let start = send_http(&addr, "POST", "/questions/session", "");
    assert!(start.starts_with("HTTP/1.1 201"));
    let start_json: serde_json::Value =
        serde_json::from_str(response_body(&start)).expect("start json");
    let session_id = start_json["session_id"]
        .as_str()
        .expect("session id")
        .to_string();
    let user_id = start_json["user_id"].as_str().expect("user id").to_string();
    assert!(user_id.starts_with("user-"));

    let blocked = send_http(
        &addr,
        "POST",
        &format!("/questions/next?session={session_id}"),
        "",
    );
    assert!(blocked.starts_with("HTTP/1.1 409"));

    let mut last = String::new();
    for _ in 0..18 {
        let answered = send_http(
            &addr,
            "POST",
            &format!("/questions/answer?session={session_id}"),
            r#"{"label":"A"}"#,
        );
        assert!(answered.starts_with("HTTP/1.1 200"));
        last = send_http(
            &addr,
            "POST",
            &format!("/questions/next?session={session_id}"),
            "",
        );
    }
    let done: serde_json::Value = serde_json::from_str(response_body(&last)).expect("done json");
    assert_eq!(done["status"], "completed");
    assert_eq!(done["redirect"], "/results/1.0-1.9");

    let mut saved = serde_json::Value::Null;
    for _ in 0..100 {
        if let Ok(content) = std::fs::read_to_string(&journal) {
            if let Ok(value) = serde_json::from_str::<serde_json::Value>(&content) {
                if value["submissions"].as_array().is_some_and(|s| !s.is_empty()) {
                    saved = value;
                    break;
                }
            }
        }
        std::thread::sleep(Duration::from_millis(25));
    }
    assert_eq!(saved["submissions"][0]["user_id"], user_id.as_str());
    assert_eq!(saved["submissions"][0]["score"], 1.0);

    let stored_id = std::fs::read_to_string(&identity).expect("identity file");
    assert_eq!(stored_id.trim(), user_id);

    let _ = child.kill();
    let _ = child.wait();
    let _ = std::fs::remove_file(journal);
    let _ = std::fs::remove_file(identity);
}
