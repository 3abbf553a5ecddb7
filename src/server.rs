//! HTTP upload form and ranking endpoint.
//!
//! One logical endpoint, two effective operations multiplexed by multipart
//! form fields, matching the upload page it serves:
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET`  | `/` | Render the staging buffer and an empty candidate table |
//! | `POST` | `/` | `resume` file field stages one file; `upload_all` commits the batch |
//! | `GET`  | `/health` | Health check (returns version) |
//!
//! Commit guard failures come back as plain text with the default 200
//! status (`"No resumes selected for upload"`, `"Maximum N resumes
//! allowed"`). Extraction or disk failures fail the request with a 500 and
//! leave the buffer as it was.
//!
//! # CORS
//!
//! All origins, methods, and headers are permitted.

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};

use crate::config::Config;
use crate::models::Candidate;
use crate::staging::{BatchError, StagingBuffer};

/// Shared application state passed to all route handlers via Axum's `State`
/// extractor.
#[derive(Clone)]
struct AppState {
    config: Arc<Config>,
    buffer: Arc<StagingBuffer>,
}

/// Builds the application router. Exposed separately from [`run_server`] so
/// tests can drive it in-process.
pub fn build_router(config: Arc<Config>, buffer: Arc<StagingBuffer>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let state = AppState { config, buffer };

    Router::new()
        .route("/", get(handle_index).post(handle_upload))
        .route("/health", get(handle_health))
        .layer(cors)
        .with_state(state)
}

/// Starts the HTTP server on the address configured in `[server].bind`.
/// Runs until the process is terminated.
pub async fn run_server(config: &Config) -> anyhow::Result<()> {
    let bind_addr = config.server.bind.clone();
    let app = build_router(Arc::new(config.clone()), Arc::new(StagingBuffer::new()));

    info!(bind = %bind_addr, "resume-rank listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ============ GET /health ============

/// JSON response body for `GET /health`.
#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ============ GET / ============

async fn handle_index(State(state): State<AppState>) -> Html<String> {
    Html(render_page(&state.buffer.staged_names(), &[]))
}

// ============ POST / ============

/// Handles a multipart form post. A `resume` field stages its file (silently
/// dropped if the extension is not allowed); a truthy `upload_all` field
/// triggers the batch commit after any staging in the same request.
async fn handle_upload(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    let mut commit_requested = false;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                return (StatusCode::BAD_REQUEST, format!("invalid form data: {}", e))
                    .into_response();
            }
        };

        let name = field.name().map(|s| s.to_string());
        match name.as_deref() {
            Some("resume") => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let content = match field.bytes().await {
                    Ok(bytes) => bytes.to_vec(),
                    Err(e) => {
                        return (StatusCode::BAD_REQUEST, format!("upload failed: {}", e))
                            .into_response();
                    }
                };
                if !filename.is_empty() {
                    state.buffer.stage(&filename, content);
                }
            }
            Some("upload_all") => {
                let value = field.text().await.unwrap_or_default();
                if !value.is_empty() {
                    commit_requested = true;
                }
            }
            _ => {}
        }
    }

    if !commit_requested {
        return Html(render_page(&state.buffer.staged_names(), &[])).into_response();
    }

    match state.buffer.commit(&state.config) {
        Ok(candidates) => Html(render_page(&[], &candidates)).into_response(),
        Err(BatchError::EmptyBatch) => "No resumes selected for upload".into_response(),
        Err(BatchError::BatchTooLarge(max)) => {
            format!("Maximum {} resumes allowed", max).into_response()
        }
        Err(e) => {
            error!(error = %e, "batch commit failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("resume processing failed: {}", e),
            )
                .into_response()
        }
    }
}

// ============ HTML rendering ============

fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders the single-page UI: upload form, currently staged files, and the
/// ranked candidate table from the last commit (empty outside a commit
/// response — candidates are never stored).
fn render_page(staged: &[String], candidates: &[Candidate]) -> String {
    let mut html = String::new();
    html.push_str(
        "<!DOCTYPE html>\n<html>\n<head><title>Resume Rank</title></head>\n<body>\n\
         <h1>Resume Rank</h1>\n\
         <form method=\"post\" enctype=\"multipart/form-data\">\n\
         <input type=\"file\" name=\"resume\" accept=\".pdf,.docx\">\n\
         <button type=\"submit\">Add resume</button>\n\
         </form>\n\
         <form method=\"post\" enctype=\"multipart/form-data\">\n\
         <input type=\"hidden\" name=\"upload_all\" value=\"1\">\n\
         <button type=\"submit\">Rank all</button>\n\
         </form>\n",
    );

    html.push_str("<h2>Staged resumes</h2>\n<ul>\n");
    for name in staged {
        html.push_str(&format!("<li>{}</li>\n", html_escape(name)));
    }
    html.push_str("</ul>\n");

    if !candidates.is_empty() {
        html.push_str(
            "<h2>Ranked candidates</h2>\n<table border=\"1\">\n\
             <tr><th>Rank</th><th>Resume</th><th>Score</th><th>Extract</th></tr>\n",
        );
        for c in candidates {
            let snippet: String = c.text.chars().take(200).collect();
            html.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{:.2}</td><td>{}</td></tr>\n",
                c.rank,
                html_escape(&c.filename),
                c.score,
                html_escape(&snippet),
            ));
        }
        html.push_str("</table>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}
