use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use friction_server::protocol::{HttpRequest, HttpResponse};
use friction_server::FrictionServer;
use friction_store::providers::JournalSink;
use friction_store::DisabledSink;
use serde_json::{json, Value};

static TEMP_SEQ: AtomicU64 = AtomicU64::new(1);

fn temp_journal_path() -> std::path::PathBuf {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    let seq = TEMP_SEQ.fetch_add(1, Ordering::Relaxed);
    let pid = std::process::id();
    std::env::temp_dir().join(format!("friction-route-{pid}-{now}-{seq}.json"))
}

fn disabled_server() -> FrictionServer {
    FrictionServer::with_sink(Arc::new(DisabledSink), "user-route0000-1".to_string())
        .expect("server")
}

fn call(server: &FrictionServer, method: &str, target: &str, body: Value) -> HttpResponse {
    let bytes = if body.is_null() {
        Vec::new()
    } else {
        serde_json::to_vec(&body).expect("encode body")
    };
    server.handle_http(HttpRequest::new(method, target, bytes))
}

fn body(res: &HttpResponse) -> Value {
    res.json_body().expect("json body")
}

fn start_session(server: &FrictionServer) -> String {
    let res = call(server, "POST", "/questions/session", Value::Null);
    assert_eq!(res.status, 201);
    body(&res)["session_id"]
        .as_str()
        .expect("session id")
        .to_string()
}

#[test]
fn start_screen_lists_explore_cards() {
    let server = disabled_server();
    let res = call(&server, "GET", "/", Value::Null);
    assert_eq!(res.status, 200);
    let value = body(&res);
    assert_eq!(value["title"], "Product-User Fit Framework");
    assert_eq!(value["question_count"], 18);
    assert_eq!(value["explore"].as_array().map(Vec::len), Some(10));
    assert_eq!(value["explore"][9]["label"], "Gigachad-layer");

    let ranges = body(&call(&server, "GET", "/ranges", Value::Null));
    assert_eq!(ranges["ranges"][0], "1.0-1.9");
    assert_eq!(ranges["bands"][4]["representative"], 5.5);
}

#[test]
fn questionnaire_flow_blocks_then_completes() {
    let path = temp_journal_path();
    let journal = Arc::new(JournalSink::open(&path).expect("journal"));
    let server =
        FrictionServer::with_sink(journal.clone(), "user-route0000-2".to_string()).expect("server");
    let session = start_session(&server);
    let q = |route: &str| format!("{route}?session={session}");

    let blocked = call(&server, "POST", &q("/questions/next"), Value::Null);
    assert_eq!(blocked.status, 409);
    assert_eq!(
        body(&blocked)["message"],
        "Please select an answer before proceeding."
    );

    let bad = call(&server, "POST", &q("/questions/answer"), json!({"label": "Q"}));
    assert_eq!(bad.status, 400);
    assert_eq!(body(&bad)["error"], "invalid_answer");

    let early = call(&server, "GET", &q("/results"), Value::Null);
    assert_eq!(early.status, 303);
    assert_eq!(early.header("Location"), Some("/questions"));

    let mut last = Value::Null;
    for _ in 0..18 {
        let answered = call(&server, "POST", &q("/questions/answer"), json!({"label": "F"}));
        assert_eq!(answered.status, 200);
        let next = call(&server, "POST", &q("/questions/next"), Value::Null);
        assert_eq!(next.status, 200);
        last = body(&next);
    }
    assert_eq!(last["status"], "completed");
    assert_eq!(last["score"], 10.0);
    assert_eq!(last["redirect"], "/results/10.0-10.0");

    let results = body(&call(&server, "GET", &q("/results"), Value::Null));
    assert_eq!(results["score_range"], "10.0-10.0");
    assert_eq!(results["categories"]["sample"], false);
    assert_eq!(results["categories"]["scores"].as_array().map(Vec::len), Some(9));
    assert_eq!(results["interpretation"]["level"], 10);

    let deadline = Instant::now() + Duration::from_secs(3);
    while journal.submissions().is_empty() && Instant::now() < deadline {
        std::thread::sleep(Duration::from_millis(20));
    }
    let saved = journal.submissions();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].user_id, "user-route0000-2");
    assert_eq!(saved[0].answers.len(), 18);

    drop(server);
    let _ = std::fs::remove_file(path);
}

#[test]
fn completed_session_is_submitted_once() {
    let path = temp_journal_path();
    let journal = Arc::new(JournalSink::open(&path).expect("journal"));
    let server =
        FrictionServer::with_sink(journal.clone(), "user-route0000-4".to_string()).expect("server");
    let session = start_session(&server);
    let q = |route: &str| format!("{route}?session={session}");

    let finish = || {
        for _ in 0..20 {
            let next = body(&call(&server, "POST", &q("/questions/next"), Value::Null));
            if next["status"] == "completed" {
                return next;
            }
        }
        Value::Null
    };
    let wait_for = |count: usize| {
        let deadline = Instant::now() + Duration::from_secs(3);
        while journal.submissions().len() < count && Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(20));
        }
    };

    for _ in 0..18 {
        call(&server, "POST", &q("/questions/answer"), json!({"label": "C"}));
        call(&server, "POST", &q("/questions/next"), Value::Null);
    }
    for _ in 0..3 {
        let again = body(&call(&server, "POST", &q("/questions/next"), Value::Null));
        assert_eq!(again["status"], "completed");
    }
    wait_for(1);
    std::thread::sleep(Duration::from_millis(100));
    assert_eq!(journal.submissions().len(), 1);

    call(&server, "POST", &q("/questions/answer"), json!({"index": 17, "label": "C"}));
    assert_eq!(finish()["status"], "completed");
    std::thread::sleep(Duration::from_millis(100));
    assert_eq!(journal.submissions().len(), 1);

    call(&server, "POST", &q("/questions/answer"), json!({"index": 0, "label": "F"}));
    assert_eq!(finish()["status"], "completed");
    wait_for(2);
    let saved = journal.submissions();
    assert_eq!(saved.len(), 2);
    assert_eq!(saved[1].answers.get(0), Some("F"));

    drop(server);
    let _ = std::fs::remove_file(path);
}

#[test]
fn previous_and_reset_navigate() {
    let server = disabled_server();
    let session = start_session(&server);
    let q = |route: &str| format!("{route}?session={session}");

    let exit = body(&call(&server, "POST", &q("/questions/previous"), Value::Null));
    assert_eq!(exit["status"], "exit");
    assert_eq!(exit["redirect"], "/");

    call(&server, "POST", &q("/questions/answer"), json!({"label": "B"}));
    call(&server, "POST", &q("/questions/next"), Value::Null);
    let revisit = body(&call(
        &server,
        "POST",
        &q("/questions/answer"),
        json!({"index": 0, "label": "D"}),
    ));
    assert_eq!(revisit["index"], 0);
    assert_eq!(revisit["answers"]["0"], "D");

    let reset = body(&call(&server, "POST", &q("/questions/reset"), Value::Null));
    assert_eq!(reset["index"], 0);
    assert_eq!(reset["answers"], json!({}));
}

#[test]
fn static_results_use_range_links() {
    let server = disabled_server();

    let res = call(&server, "GET", "/results/7.0-7.9", Value::Null);
    assert_eq!(res.status, 200);
    let value = body(&res);
    assert_eq!(value["score"], 7.5);
    assert_eq!(value["categories"]["sample"], true);
    assert_eq!(value["interpretation"]["insights"], json!([]));
    assert!(value["interpretation"]["narrative"]
        .as_str()
        .is_some_and(|n| n.starts_with("Your product scores a 7.5 on the Friction Index.")));
    assert!(!value["similar_products"].as_array().expect("products").is_empty());

    let tampered = call(&server, "GET", "/results/3.0-3.95", Value::Null);
    assert_eq!(tampered.status, 303);
    assert_eq!(tampered.header("Location"), Some("/"));
}

#[test]
fn exports_json_and_csv() {
    let server = disabled_server();

    let json_res = call(&server, "GET", "/results/3.0-3.9/export", Value::Null);
    assert_eq!(json_res.status, 200);
    assert_eq!(body(&json_res)["scoreRange"], "3.0-3.9");
    assert!(json_res
        .header("Content-Disposition")
        .is_some_and(|d| d.contains("product-user-fit-analysis-3-0-3.9-")));

    let csv_res = call(&server, "GET", "/results/3.0-3.9/export?format=csv", Value::Null);
    assert_eq!(csv_res.status, 200);
    assert_eq!(csv_res.content_type, "text/csv; charset=utf-8");
    let csv = String::from_utf8(csv_res.body).expect("utf8");
    assert!(csv.starts_with("Product-User Fit Analysis Report\nGenerated on: "));
    assert!(csv.contains("\nScore Range,3.0-3.9\n"));

    let pdf = call(&server, "GET", "/results/3.0-3.9/export?format=pdf", Value::Null);
    assert_eq!(pdf.status, 400);
}

#[test]
fn feedback_is_accepted_and_saved() {
    let path = temp_journal_path();
    let journal = Arc::new(JournalSink::open(&path).expect("journal"));
    let server =
        FrictionServer::with_sink(journal.clone(), "user-route0000-3".to_string()).expect("server");

    let res = call(
        &server,
        "POST",
        "/feedback",
        json!({
            "item_category": "growthTactics",
            "item_index": 1,
            "item_text": "Run an ambassador program",
            "feedback_type": "like"
        }),
    );
    assert_eq!(res.status, 202);

    let bad = call(
        &server,
        "POST",
        "/feedback",
        json!({
            "item_category": "growthTactics",
            "item_index": 1,
            "item_text": "Run an ambassador program",
            "feedback_type": "love"
        }),
    );
    assert_eq!(bad.status, 400);

    let deadline = Instant::now() + Duration::from_secs(3);
    while journal.feedback().is_empty() && Instant::now() < deadline {
        std::thread::sleep(Duration::from_millis(20));
    }
    let saved = journal.feedback();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].user_id, "user-route0000-3");

    drop(server);
    let _ = std::fs::remove_file(path);
}
