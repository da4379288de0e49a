//! HTTP transport for the advisor
//!
//! A deliberately small HTTP/1.1 handler: one request per connection, JSON in,
//! JSON out, permissive CORS. Routing is a pure function over a parsed request
//! so it can be tested without sockets.

use crate::catalog;
use crate::config::ServerConfig;
use crate::engine::RecommendationEngine;
use crate::types::AnalyzeRequest;
use anyhow::Result;
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};

/// Budget for the request line plus all headers
pub const MAX_HEADER_BYTES: usize = 16 * 1024;

/// A parsed HTTP request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: String,
    pub path: String,
    pub body: Vec<u8>,
}

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("connection closed before request line")]
    Empty,
    #[error("malformed request: {0}")]
    Malformed(String),
    #[error("request body of {0} bytes exceeds limit")]
    BodyTooLarge(usize),
    #[error(transparent)]
    Io(std::io::Error),
}

impl From<std::io::Error> for RequestError {
    fn from(e: std::io::Error) -> Self {
        // read_line reports non UTF-8 input as InvalidData
        match e.kind() {
            std::io::ErrorKind::InvalidData => {
                RequestError::Malformed("Request head is not valid UTF-8".to_string())
            }
            _ => RequestError::Io(e),
        }
    }
}

/// A response ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn json<T: Serialize>(status: u16, value: &T) -> Self {
        match serde_json::to_string(value) {
            Ok(body) => Self { status, body },
            Err(e) => Self::error(500, &format!("Failed to encode response: {}", e)),
        }
    }

    pub fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            body: json!({ "error": message }).to_string(),
        }
    }

    pub fn no_content() -> Self {
        Self {
            status: 204,
            body: String::new(),
        }
    }

    fn reason(&self) -> &'static str {
        match self.status {
            200 => "OK",
            204 => "No Content",
            400 => "Bad Request",
            404 => "Not Found",
            405 => "Method Not Allowed",
            413 => "Payload Too Large",
            _ => "Internal Server Error",
        }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut head = format!("HTTP/1.1 {} {}\r\n", self.status, self.reason());
        if !self.body.is_empty() {
            head.push_str("Content-Type: application/json\r\n");
        }
        head.push_str(&format!(
            "Content-Length: {}\r\n\
             Access-Control-Allow-Origin: *\r\n\
             Access-Control-Allow-Methods: GET, POST, OPTIONS\r\n\
             Access-Control-Allow-Headers: Content-Type\r\n\
             Connection: close\r\n\r\n",
            self.body.len()
        ));
        let mut bytes = head.into_bytes();
        bytes.extend_from_slice(self.body.as_bytes());
        bytes
    }
}

/// Bind the configured address and serve until the process exits
pub async fn run(config: ServerConfig) -> Result<()> {
    let listener = TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(
        addr = %config.bind_addr(),
        strict = config.strict_validation,
        "Listening on http://{}/analyze-inference",
        config.bind_addr()
    );
    serve(listener, Arc::new(config)).await
}

/// Accept loop over an already bound listener
pub async fn serve(listener: TcpListener, config: Arc<ServerConfig>) -> Result<()> {
    let engine = RecommendationEngine::new();

    loop {
        let (stream, peer) = listener.accept().await?;
        let config = Arc::clone(&config);

        // Handle each connection
        tokio::spawn(async move {
            if let Err(e) = handle_connection(stream, engine, &config).await {
                tracing::warn!(%peer, "Request error: {}", e);
            }
        });
    }
}

async fn handle_connection(
    mut stream: TcpStream,
    engine: RecommendationEngine,
    config: &ServerConfig,
) -> Result<()> {
    let start = Instant::now();
    let (read_half, mut write_half) = stream.split();
    let mut reader = BufReader::new(read_half);

    let parsed = tokio::time::timeout(
        config.request_timeout,
        read_request(&mut reader, config.max_body_bytes),
    )
    .await;

    let (label, response) = match parsed {
        Err(_) => {
            tracing::warn!("Request timed out after {:?}", config.request_timeout);
            return Ok(());
        }
        Ok(Err(RequestError::Empty)) => return Ok(()),
        Ok(Err(RequestError::BodyTooLarge(len))) => (
            "-".to_string(),
            HttpResponse::error(413, &format!("Request body too large ({} bytes)", len)),
        ),
        Ok(Err(RequestError::Malformed(msg))) => ("-".to_string(), HttpResponse::error(400, &msg)),
        Ok(Err(RequestError::Io(e))) => return Err(e.into()),
        Ok(Ok(request)) => (
            format!("{} {}", request.method, request.path),
            route(&request, &engine, config),
        ),
    };

    write_half.write_all(&response.to_bytes()).await?;
    write_half.flush().await?;

    tracing::info!(
        request = %label,
        status = response.status,
        elapsed_us = start.elapsed().as_micros() as u64,
        "handled"
    );
    Ok(())
}

/// Read one line without letting it grow past the remaining head budget
async fn read_line_capped<R>(
    reader: &mut R,
    line: &mut String,
    budget: &mut usize,
) -> Result<usize, RequestError>
where
    R: AsyncBufRead + Unpin,
{
    let too_large = || RequestError::Malformed("Request head too large".to_string());
    if *budget == 0 {
        return Err(too_large());
    }

    let n = (&mut *reader).take(*budget as u64).read_line(line).await?;
    if n == *budget && !line.ends_with('\n') {
        return Err(too_large());
    }
    *budget -= n;
    Ok(n)
}

/// Read one request: request line, headers, then a Content-Length body
pub async fn read_request<R>(reader: &mut R, max_body: usize) -> Result<HttpRequest, RequestError>
where
    R: AsyncBufRead + Unpin,
{
    let mut budget = MAX_HEADER_BYTES;
    let mut request_line = String::new();
    if read_line_capped(reader, &mut request_line, &mut budget).await? == 0 {
        return Err(RequestError::Empty);
    }

    let mut parts = request_line.split_whitespace();
    let (method, target) = match (parts.next(), parts.next()) {
        (Some(m), Some(t)) => (m.to_uppercase(), t),
        _ => {
            return Err(RequestError::Malformed(format!(
                "Bad request line: {}",
                request_line.trim()
            )))
        }
    };
    let path = target.split('?').next().unwrap_or(target).to_string();

    // Read headers
    let mut content_length: usize = 0;
    loop {
        let mut header = String::new();
        let n = read_line_capped(reader, &mut header, &mut budget).await?;
        if n == 0 || header.trim().is_empty() {
            break;
        }
        if let Some((name, value)) = header.split_once(':') {
            if name.trim().eq_ignore_ascii_case("content-length") {
                content_length = value.trim().parse().map_err(|_| {
                    RequestError::Malformed(format!("Bad Content-Length: {}", value.trim()))
                })?;
            }
        }
    }

    if content_length > max_body {
        return Err(RequestError::BodyTooLarge(content_length));
    }

    // Read body
    let mut body = vec![0u8; content_length];
    if content_length > 0 {
        reader.read_exact(&mut body).await?;
    }

    Ok(HttpRequest { method, path, body })
}

/// Dispatch a parsed request
pub fn route(
    request: &HttpRequest,
    engine: &RecommendationEngine,
    config: &ServerConfig,
) -> HttpResponse {
    match (request.method.as_str(), request.path.as_str()) {
        ("OPTIONS", _) => HttpResponse::no_content(),
        ("POST", "/analyze-inference") => analyze(&request.body, engine, config),
        ("GET", "/catalog") => HttpResponse::json(200, &catalog::list()),
        ("GET", "/health") => HttpResponse::json(200, &json!({ "status": "ok" })),
        (_, "/analyze-inference") | (_, "/catalog") | (_, "/health") => {
            HttpResponse::error(405, &format!("Method {} not allowed", request.method))
        }
        (_, path) => HttpResponse::error(404, &format!("Unknown route: {}", path)),
    }
}

fn analyze(body: &[u8], engine: &RecommendationEngine, config: &ServerConfig) -> HttpResponse {
    // An absent body behaves like an empty object
    let parsed: Result<AnalyzeRequest, _> = if body.iter().all(u8::is_ascii_whitespace) {
        Ok(AnalyzeRequest::default())
    } else {
        serde_json::from_slice(body)
    };

    let request = match parsed {
        Ok(r) => r,
        Err(e) => {
            tracing::debug!("Rejected body: {}", e);
            return HttpResponse::error(400, &format!("Invalid JSON body: {}", e));
        }
    };

    let constraints = request.normalize();
    if config.strict_validation {
        if let Err(e) = constraints.validate() {
            tracing::debug!("Rejected constraints: {}", e);
            return HttpResponse::error(400, e.message());
        }
    }

    let recommendation = engine.recommend(&constraints);
    tracing::debug!(recommended = %recommendation.recommended, "analysis complete");
    HttpResponse::json(200, &recommendation)
}
