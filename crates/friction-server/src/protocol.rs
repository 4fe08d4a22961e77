use std::collections::HashMap;
use std::io::{self, BufRead, Write};

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: String,
    pub path: String,
    pub query: HashMap<String, String>,
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

impl HttpRequest {
    /// Builds a request from a method and a `path?query` target.
    pub fn new(method: &str, target: &str, body: impl Into<Vec<u8>>) -> Self {
        let (path, query) = parse_path_query(target);
        Self {
            method: method.to_ascii_uppercase(),
            path,
            query,
            headers: HashMap::new(),
            body: body.into(),
        }
    }

    /// Reads one request head and its `Content-Length` body.
    ///
    /// `Ok(None)` means the peer closed or sent an empty request line.
    pub fn read_from<R: BufRead>(reader: &mut R, max_body: usize) -> io::Result<Option<Self>> {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let mut parts = line.split_whitespace();
        let (Some(method), Some(target)) = (parts.next(), parts.next()) else {
            if line.trim().is_empty() {
                return Ok(None);
            }
            return Err(invalid_data(format!("malformed request line {:?}", line.trim_end())));
        };
        let mut req = Self::new(method, target, Vec::new());

        loop {
            let mut header = String::new();
            if reader.read_line(&mut header)? == 0 {
                break;
            }
            let header = header.trim_end_matches(['\r', '\n']);
            if header.is_empty() {
                break;
            }
            if let Some((name, value)) = header.split_once(':') {
                req.headers
                    .insert(name.trim().to_ascii_lowercase(), value.trim().to_string());
            }
        }

        let length = match req.headers.get("content-length") {
            Some(raw) => raw
                .parse::<usize>()
                .map_err(|_| invalid_data(format!("bad content-length {raw:?}")))?,
            None => 0,
        };
        if length > max_body {
            return Err(invalid_data(format!(
                "request body of {length} bytes exceeds {max_body}"
            )));
        }
        req.body = vec![0_u8; length];
        reader.read_exact(&mut req.body)?;
        Ok(Some(req))
    }
}

fn invalid_data(message: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, message)
}

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub headers: Vec<(&'static str, String)>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn json(status: u16, value: Value) -> Self {
        let body = serde_json::to_vec(&value).unwrap_or_else(|_| b"{}".to_vec());
        Self {
            status,
            content_type: "application/json",
            headers: Vec::new(),
            body,
        }
    }

    pub fn text(status: u16, content_type: &'static str, body: String) -> Self {
        Self {
            status,
            content_type,
            headers: Vec::new(),
            body: body.into_bytes(),
        }
    }

    pub fn error(status: u16, code: &str, message: impl Into<String>) -> Self {
        Self::json(
            status,
            serde_json::json!({"error": code, "message": message.into()}),
        )
    }

    /// `303 See Other` pointing at `location`.
    pub fn redirect(location: &str) -> Self {
        Self::json(303, serde_json::json!({"redirect": location}))
            .with_header("Location", location.to_string())
    }

    pub fn with_header(mut self, name: &'static str, value: String) -> Self {
        self.headers.push((name, value));
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn json_body(&self) -> Option<Value> {
        serde_json::from_slice(&self.body).ok()
    }

    /// Writes status line, headers and body, then closes the exchange.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(
            out,
            "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\n",
            self.status,
            http_reason_phrase(self.status),
            self.content_type,
            self.body.len()
        )?;
        for (name, value) in &self.headers {
            write!(out, "{name}: {value}\r\n")?;
        }
        out.write_all(b"Connection: close\r\n\r\n")?;
        out.write_all(&self.body)?;
        out.flush()
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct StartSessionBody {
    #[serde(default)]
    pub user_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AnswerBody {
    /// Question to answer; the current one when absent.
    #[serde(default)]
    pub index: Option<usize>,
    pub label: String,
}

#[derive(Debug, Deserialize)]
pub struct FeedbackBody {
    #[serde(default)]
    pub user_id: Option<String>,
    pub item_category: String,
    pub item_index: usize,
    pub item_text: String,
    pub feedback_type: String,
}

pub fn parse_path_query(raw: &str) -> (String, HashMap<String, String>) {
    let (path, query_str) = match raw.split_once('?') {
        Some((p, q)) => (p.to_string(), q),
        None => (raw.to_string(), ""),
    };
    let mut query = HashMap::new();
    for pair in query_str.split('&') {
        if pair.is_empty() {
            continue;
        }
        if let Some((k, v)) = pair.split_once('=') {
            query.insert(k.to_string(), v.to_string());
        } else {
            query.insert(pair.to_string(), String::new());
        }
    }
    (path, query)
}

pub fn http_reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        202 => "Accepted",
        204 => "No Content",
        303 => "See Other",
        400 => "Bad Request",
        404 => "Not Found",
        405 => "Method Not Allowed",
        409 => "Conflict",
        500 => "Internal Server Error",
        _ => "OK",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_path_and_query() {
        let (path, query) = parse_path_query("/explore?score=7.5&flag");
        assert_eq!(path, "/explore");
        assert_eq!(query.get("score").map(String::as_str), Some("7.5"));
        assert_eq!(query.get("flag").map(String::as_str), Some(""));
    }

    #[test]
    fn reads_request_with_body() {
        let raw = "post /questions/answer?session=s1 HTTP/1.1\r\nContent-Type: application/json\r\nContent-Length: 13\r\n\r\n{\"label\":\"A\"}";
        let req = HttpRequest::read_from(&mut raw.as_bytes(), 1024)
            .unwrap()
            .unwrap();
        assert_eq!(req.method, "POST");
        assert_eq!(req.path, "/questions/answer");
        assert_eq!(req.query.get("session").map(String::as_str), Some("s1"));
        assert_eq!(
            req.headers.get("content-type").map(String::as_str),
            Some("application/json")
        );
        assert_eq!(req.body, br#"{"label":"A"}"#);
    }

    #[test]
    fn rejects_oversized_and_malformed_requests() {
        let big = "POST / HTTP/1.1\r\nContent-Length: 99\r\n\r\n";
        let err = HttpRequest::read_from(&mut big.as_bytes(), 10).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);

        let bad = "GET\r\n\r\n";
        assert!(HttpRequest::read_from(&mut bad.as_bytes(), 10).is_err());

        assert!(HttpRequest::read_from(&mut "".as_bytes(), 10).unwrap().is_none());
        assert!(HttpRequest::read_from(&mut "\r\n".as_bytes(), 10).unwrap().is_none());
    }

    #[test]
    fn writes_status_headers_and_body() {
        let res = HttpResponse::redirect("/").with_header("X-Trace", "t1".to_string());
        let mut out = Vec::new();
        res.write_to(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("HTTP/1.1 303 See Other\r\nContent-Type: application/json\r\n"));
        assert!(text.contains("\r\nLocation: /\r\nX-Trace: t1\r\nConnection: close\r\n\r\n"));
        assert!(text.ends_with(r#"{"redirect":"/"}"#));
    }

    #[test]
    fn redirect_sets_location() {
        let res = HttpResponse::redirect("/questions");
        assert_eq!(res.status, 303);
        assert_eq!(res.header("location"), Some("/questions"));
    }
}
