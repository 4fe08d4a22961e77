use std::collections::HashMap;
use std::io::{self, BufReader};
use std::net::{TcpListener, TcpStream};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use friction_core::{
    all_score_ranges, calculate_category_scores, calculate_score, interpret, is_valid_score_range,
    range_string_to_score, round_one_decimal, score_level, score_to_range_string,
    similar_products, synthesize, Band, Catalog, CategoryScore, CoreError, Questionnaire, Report,
    Step, BANDS, MAX_SCORE, MIN_SCORE,
};
use friction_store::identity::DEFAULT_IDENTITY_PATH;
use friction_store::{
    build_record_sink, load_or_create_user_id, Dispatcher, Feedback, FeedbackType, RecordSink,
    SinkConfig, StoreError, Submission,
};
use parking_lot::Mutex;
use serde_json::{json, Value};
use tokio::runtime::Runtime;

use crate::protocol::{AnswerBody, FeedbackBody, HttpRequest, HttpResponse, StartSessionBody};

pub const APP_TITLE: &str = "Product-User Fit Framework";
const APP_TAGLINE: &str = "Find out who actually gets your crypto product.";
const DEFAULT_EXPLORE_SCORE: f64 = 5.0;
const MAX_BODY_BYTES: usize = 64 * 1024;
const SHUTDOWN_GRACE: Duration = Duration::from_secs(2);

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub http_addr: String,
    pub identity_path: PathBuf,
    pub sink: SinkConfig,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, StoreError> {
        let http_addr = std::env::var("FRICTION_HTTP_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8788".to_string());
        let identity_path = std::env::var("FRICTION_IDENTITY_PATH")
            .unwrap_or_else(|_| DEFAULT_IDENTITY_PATH.to_string());
        Ok(Self {
            http_addr,
            identity_path: PathBuf::from(identity_path),
            sink: SinkConfig::from_env()?,
        })
    }
}

struct SessionState {
    user_id: String,
    flow: Questionnaire<'static>,
    /// Set once the current answers have been handed to the sink.
    submitted: bool,
}

pub struct FrictionServer {
    catalog: &'static Catalog,
    sessions: Mutex<HashMap<String, SessionState>>,
    session_counter: Mutex<u64>,
    dispatcher: Dispatcher,
    default_user_id: String,
    runtime: Option<Runtime>,
}

impl FrictionServer {
    pub fn from_config(config: &ServerConfig) -> Result<Self, String> {
        let sink = build_record_sink(config.sink.clone())
            .map_err(|e| format!("record sink initialization failed: {e}"))?;
        let user_id = load_or_create_user_id(&config.identity_path)
            .map_err(|e| format!("user id initialization failed: {e}"))?;
        Self::with_sink(sink, user_id)
    }

    pub fn with_sink(sink: Arc<dyn RecordSink>, default_user_id: String) -> Result<Self, String> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("friction-sink")
            .enable_all()
            .build()
            .map_err(|e| format!("sink runtime initialization failed: {e}"))?;
        let dispatcher = Dispatcher::new(sink, runtime.handle().clone());
        tracing::info!(
            sink = dispatcher.sink_name(),
            user_id = %default_user_id,
            "friction server ready"
        );
        Ok(Self {
            catalog: Catalog::standard(),
            sessions: Mutex::new(HashMap::new()),
            session_counter: Mutex::new(1),
            dispatcher,
            default_user_id,
            runtime: Some(runtime),
        })
    }

    pub fn serve_http(&self, addr: &str) -> io::Result<()> {
        let listener = TcpListener::bind(addr)?;
        tracing::info!(addr = %listener.local_addr()?, "friction-server http listening");
        for stream in listener.incoming() {
            match stream {
                Ok(stream) => {
                    if let Err(err) = self.handle_http_connection(stream) {
                        tracing::warn!(error = %err, "http request error");
                    }
                }
                Err(err) => {
                    tracing::warn!(error = %err, "http accept error");
                }
            }
        }
        Ok(())
    }

    fn handle_http_connection(&self, mut stream: TcpStream) -> io::Result<()> {
        let mut reader = BufReader::new(stream.try_clone()?);
        let Some(req) = HttpRequest::read_from(&mut reader, MAX_BODY_BYTES)? else {
            return Ok(());
        };
        self.handle_http(req).write_to(&mut stream)
    }

    /// Routes one request. Used by the TCP loop and directly by tests.
    pub fn handle_http(&self, req: HttpRequest) -> HttpResponse {
        let method = req.method.clone();
        let path = req.path.clone();
        let response = self.dispatch_http_request(req);
        tracing::debug!(%method, %path, status = response.status, "http request");
        response
    }

    fn dispatch_http_request(&self, req: HttpRequest) -> HttpResponse {
        if req.method == "GET" && req.path == "/health" {
            return HttpResponse::json(
                200,
                json!({"status":"ok","sink": self.dispatcher.sink_name()}),
            );
        }

        if req.method == "GET" && req.path == "/" {
            return HttpResponse::json(200, self.start_screen());
        }

        if req.method == "GET" && req.path == "/ranges" {
            return HttpResponse::json(
                200,
                json!({"ranges": all_score_ranges(), "bands": &BANDS}),
            );
        }

        if req.method == "POST" && req.path == "/questions/session" {
            return self.start_session(&req);
        }

        if req.path == "/questions" && req.method == "GET" {
            return self.with_session(&req, |id, state| {
                HttpResponse::json(200, question_view(id, state))
            });
        }

        if req.method == "POST" && req.path == "/questions/answer" {
            let body: AnswerBody = match serde_json::from_slice(&req.body) {
                Ok(v) => v,
                Err(err) => {
                    return HttpResponse::error(
                        400,
                        "invalid_request",
                        format!("invalid answer body: {err}"),
                    )
                }
            };
            return self.with_session(&req, |id, state| {
                if let Some(index) = body.index {
                    if let Err(err) = state.flow.go_to(index) {
                        return core_error_response(&err);
                    }
                }
                let before = state.flow.answers().clone();
                match state.flow.select(&body.label) {
                    Ok(()) => {
                        if *state.flow.answers() != before {
                            state.submitted = false;
                        }
                        HttpResponse::json(200, question_view(id, state))
                    }
                    Err(err) => core_error_response(&err),
                }
            });
        }

        if req.method == "POST" && req.path == "/questions/next" {
            return self.with_session(&req, |id, state| match state.flow.next() {
                Step::Blocked { prompt } => HttpResponse::error(409, "answer_required", prompt),
                Step::Completed { score, score_range } => {
                    if !state.submitted {
                        self.dispatcher.submit(Submission::new(
                            state.user_id.clone(),
                            score,
                            state.flow.answers().clone(),
                        ));
                        state.submitted = true;
                    }
                    HttpResponse::json(
                        200,
                        json!({
                            "status": "completed",
                            "session_id": id,
                            "score": score,
                            "score_range": score_range,
                            "redirect": format!("/results/{score_range}"),
                        }),
                    )
                }
                Step::Question { .. } | Step::Exit => {
                    HttpResponse::json(200, question_view(id, state))
                }
            });
        }

        if req.method == "POST" && req.path == "/questions/previous" {
            return self.with_session(&req, |id, state| match state.flow.previous() {
                Step::Exit => HttpResponse::json(200, json!({"status":"exit","redirect":"/"})),
                _ => HttpResponse::json(200, question_view(id, state)),
            });
        }

        if req.method == "POST" && req.path == "/questions/reset" {
            return self.with_session(&req, |id, state| {
                state.flow.reset();
                state.submitted = false;
                HttpResponse::json(200, question_view(id, state))
            });
        }

        if req.method == "GET" && req.path == "/results" {
            return self.session_results(&req);
        }

        if req.method == "GET" && req.path == "/explore" {
            return self.explore(&req);
        }

        if req.method == "POST" && req.path == "/feedback" {
            return self.accept_feedback(&req);
        }

        if req.method == "GET" {
            if let Some(rest) = req.path.strip_prefix("/results/") {
                return match rest.strip_suffix("/export") {
                    Some(range) => self.export_results(range, &req),
                    None => self.static_results(rest),
                };
            }
        }

        HttpResponse::error(
            404,
            "not_found",
            format!("no route for {} {}", req.method, req.path),
        )
    }

    fn start_screen(&self) -> Value {
        let explore: Vec<Value> = BANDS
            .iter()
            .map(|band| {
                json!({
                    "range": band.range,
                    "label": band.label,
                    "description": band.description,
                    "examples": band.examples,
                    "href": format!("/results/{}", band.range),
                })
            })
            .collect();
        json!({
            "title": APP_TITLE,
            "tagline": APP_TAGLINE,
            "question_count": self.catalog.len(),
            "categories": self.catalog.categories(),
            "start": "/questions/session",
            "explore": explore,
        })
    }

    fn start_session(&self, req: &HttpRequest) -> HttpResponse {
        let body: StartSessionBody = if req.body.is_empty() {
            StartSessionBody::default()
        } else {
            match serde_json::from_slice(&req.body) {
                Ok(v) => v,
                Err(err) => {
                    return HttpResponse::error(
                        400,
                        "invalid_request",
                        format!("invalid session body: {err}"),
                    )
                }
            }
        };
        let user_id = body
            .user_id
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| self.default_user_id.clone());

        let id = {
            let mut counter = self.session_counter.lock();
            let id = format!("sess-{}-{}", Utc::now().timestamp_millis(), *counter);
            *counter = counter.saturating_add(1);
            id
        };
        let state = SessionState {
            user_id,
            flow: Questionnaire::new(self.catalog),
            submitted: false,
        };
        let view = question_view(&id, &state);
        self.sessions.lock().insert(id.clone(), state);
        tracing::debug!(session_id = %id, "questionnaire session started");
        HttpResponse::json(201, view)
    }

    fn with_session(
        &self,
        req: &HttpRequest,
        f: impl FnOnce(&str, &mut SessionState) -> HttpResponse,
    ) -> HttpResponse {
        let Some(session_id) = req.query.get("session") else {
            return HttpResponse::error(400, "invalid_request", "missing query param: session");
        };
        let mut sessions = self.sessions.lock();
        let Some(state) = sessions.get_mut(session_id) else {
            return HttpResponse::error(404, "session_not_found", "unknown session id");
        };
        f(session_id, state)
    }

    fn session_results(&self, req: &HttpRequest) -> HttpResponse {
        self.with_session(req, |id, state| {
            let answers = state.flow.answers();
            if !answers.is_complete(self.catalog) {
                return HttpResponse::redirect("/questions");
            }
            let score = calculate_score(answers, self.catalog);
            let categories = calculate_category_scores(answers, self.catalog);
            let mut view = results_view(score, &categories, false, true);
            if let Some(obj) = view.as_object_mut() {
                obj.insert("session_id".to_string(), json!(id));
            }
            HttpResponse::json(200, view)
        })
    }

    fn static_results(&self, range: &str) -> HttpResponse {
        if !is_valid_score_range(range) {
            return HttpResponse::redirect("/");
        }
        let score = range_string_to_score(range);
        let categories = self.sample_categories(score);
        HttpResponse::json(200, results_view(score, &categories, true, false))
    }

    fn export_results(&self, range: &str, req: &HttpRequest) -> HttpResponse {
        if !is_valid_score_range(range) {
            return HttpResponse::redirect("/");
        }
        let report = Report::from_interpretation(&interpret(range_string_to_score(range), &[]));
        let stem = format!("{}-{}", report.file_stem(), Utc::now().timestamp_millis());

        match req.query.get("format").map_or("json", String::as_str) {
            "json" => match report.to_json() {
                Ok(body) => HttpResponse::text(200, "application/json", body).with_header(
                    "Content-Disposition",
                    format!("attachment; filename=\"{stem}.json\""),
                ),
                Err(err) => core_error_response(&err),
            },
            "csv" => {
                let generated_on = Utc::now().format("%-m/%-d/%Y").to_string();
                HttpResponse::text(200, "text/csv; charset=utf-8", report.to_csv(&generated_on))
                    .with_header(
                        "Content-Disposition",
                        format!("attachment; filename=\"{stem}.csv\""),
                    )
            }
            other => HttpResponse::error(
                400,
                "invalid_request",
                format!("unsupported export format {other:?}, use json or csv"),
            ),
        }
    }

    fn explore(&self, req: &HttpRequest) -> HttpResponse {
        let raw = match req.query.get("score") {
            None => DEFAULT_EXPLORE_SCORE,
            Some(v) => match v.trim().parse::<f64>() {
                Ok(score) if score.is_finite() => score,
                _ => {
                    return HttpResponse::error(
                        400,
                        "invalid_request",
                        format!("score must be a number, got {v:?}"),
                    )
                }
            },
        };
        // one decimal keeps bucket and range selection on the same band
        let score = round_one_decimal(raw).clamp(MIN_SCORE, MAX_SCORE);
        let categories = self.sample_categories(score);
        let mut view = results_view(score, &categories, true, false);
        if let Some(obj) = view.as_object_mut() {
            obj.insert("level".to_string(), json!(score_level(score)));
            obj.insert("band".to_string(), json!(Band::for_score(score)));
        }
        HttpResponse::json(200, view)
    }

    fn accept_feedback(&self, req: &HttpRequest) -> HttpResponse {
        let body: FeedbackBody = match serde_json::from_slice(&req.body) {
            Ok(v) => v,
            Err(err) => {
                return HttpResponse::error(
                    400,
                    "invalid_request",
                    format!("invalid feedback body: {err}"),
                )
            }
        };
        let Some(feedback_type) = FeedbackType::parse(&body.feedback_type) else {
            return HttpResponse::error(
                400,
                "invalid_request",
                "feedback_type must be like or dislike",
            );
        };
        let feedback = Feedback {
            user_id: body
                .user_id
                .filter(|u| !u.trim().is_empty())
                .unwrap_or_else(|| self.default_user_id.clone()),
            item_category: body.item_category,
            item_index: body.item_index,
            item_text: body.item_text,
            feedback_type,
            created_at: None,
        };
        if let Err(err) = feedback.validate() {
            return HttpResponse::error(400, "invalid_request", err.to_string());
        }
        self.dispatcher.feedback(feedback);
        HttpResponse::json(202, json!({"status":"accepted"}))
    }

    fn sample_categories(&self, score: f64) -> Vec<CategoryScore> {
        let answers = synthesize(score, self.catalog);
        calculate_category_scores(&answers, self.catalog)
    }
}

impl Drop for FrictionServer {
    fn drop(&mut self) {
        // give in-flight saves a moment before the workers stop
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_timeout(SHUTDOWN_GRACE);
        }
    }
}

fn question_view(session_id: &str, state: &SessionState) -> Value {
    let flow = &state.flow;
    let index = flow.current_index();
    let question = flow.current_question().map(|q| {
        json!({
            "id": q.id,
            "category": q.category,
            "text": q.text,
            "options": q
                .options
                .iter()
                .map(|o| json!({"label": o.label, "text": o.text}))
                .collect::<Vec<_>>(),
        })
    });
    json!({
        "session_id": session_id,
        "user_id": state.user_id,
        "index": index,
        "total": flow.catalog().len(),
        "progress": flow.progress(),
        "is_last": flow.is_last(),
        "question": question,
        "selected": flow.answers().get(index),
        "answers": flow.answers(),
        "prompt": flow.prompt(),
    })
}

fn results_view(
    score: f64,
    categories: &[CategoryScore],
    sample: bool,
    with_insights: bool,
) -> Value {
    let interpretation = if with_insights {
        interpret(score, categories)
    } else {
        interpret(score, &[])
    };
    json!({
        "score": score,
        "score_range": score_to_range_string(score),
        "categories": {"sample": sample, "scores": categories},
        "interpretation": interpretation,
        "similar_products": similar_products(score),
    })
}

fn core_error_response(err: &CoreError) -> HttpResponse {
    match err {
        CoreError::UnknownOption { .. } => {
            HttpResponse::error(400, "invalid_answer", err.to_string())
        }
        CoreError::UnknownQuestion(_) => {
            HttpResponse::error(400, "invalid_question", err.to_string())
        }
        CoreError::InvalidCatalog(_) | CoreError::Serde(_) => {
            HttpResponse::error(500, "internal_error", err.to_string())
        }
    }
}
