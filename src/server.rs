//! HTTP server exposing summaries as JSON and HTML views.

use crate::discovery::split_patterns;
use crate::error::Result;
use crate::summary::{ProjectSummarizer, Summary, SummaryOptions};
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    routing::get,
};
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::error;

struct ServerState {
    project_root: PathBuf,
}

#[derive(Debug, Deserialize)]
struct SummarizeQuery {
    patterns: Option<String>,
}

/// Serve the project root on `127.0.0.1:port` until the task is aborted.
pub async fn run(project_root: PathBuf, port: u16) -> Result<()> {
    let state = Arc::new(ServerState { project_root });
    let app = Router::new()
        .route("/api/summarize", get(api_summarize))
        .route("/view/summarize", get(view_summarize))
        .route("/view/structure", get(view_structure))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port)).await?;
    println!("Server running at http://localhost:{port}");
    println!("Available endpoints:");
    println!("  - Full summary:   http://localhost:{port}/view/summarize");
    println!("  - Structure only: http://localhost:{port}/view/structure");
    println!("  - JSON API:       http://localhost:{port}/api/summarize");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Run one summary on a blocking worker; a fresh summarizer per request keeps
/// the one-shot ignore initialization from leaking across calls.
async fn generate(
    state: &ServerState,
    patterns: Option<Vec<String>>,
    structure_only: bool,
) -> std::result::Result<Summary, StatusCode> {
    let options = SummaryOptions {
        project_path: state.project_root.clone(),
        patterns,
    };

    let result = tokio::task::spawn_blocking(move || {
        let mut summarizer = ProjectSummarizer::new();
        if structure_only {
            summarizer.structure_only(&options)
        } else {
            summarizer.summarize(&options)
        }
    })
    .await;

    match result {
        Ok(Ok(summary)) => Ok(summary),
        Ok(Err(e)) => {
            error!(error = %e, "Failed to generate summary");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
        Err(e) => {
            error!(error = %e, "Summary task failed");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

async fn api_summarize(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<SummarizeQuery>,
) -> std::result::Result<Json<Summary>, StatusCode> {
    let patterns = query.patterns.as_deref().map(split_patterns);
    generate(&state, patterns, false).await.map(Json)
}

async fn view_summarize(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<SummarizeQuery>,
) -> std::result::Result<Html<String>, StatusCode> {
    let patterns = query.patterns.as_deref().map(split_patterns);
    let summary = generate(&state, patterns, false).await?;
    Ok(Html(render_page("Project Summary", &summary.markdown)))
}

async fn view_structure(
    State(state): State<Arc<ServerState>>,
) -> std::result::Result<Html<String>, StatusCode> {
    let summary = generate(&state, None, true).await?;
    Ok(Html(render_page("Project Structure", &summary.markdown)))
}

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>__TITLE__</title>
    <style>
        body {
            font-family: monospace;
            max-width: 1200px;
            margin: 0 auto;
            padding: 20px;
            background: #f5f5f5;
        }
        pre {
            background: #fff;
            padding: 15px;
            border-radius: 5px;
            overflow-x: auto;
            tab-size: 2;
            white-space: pre;
        }
        button {
            position: fixed;
            top: 20px;
            right: 20px;
            padding: 10px 20px;
            background: #4CAF50;
            color: white;
            border: none;
            border-radius: 5px;
            cursor: pointer;
            z-index: 1000;
        }
        button:hover {
            background: #45a049;
        }
        #content {
            margin-top: 60px;
        }
    </style>
</head>
<body>
    <button onclick="copyToClipboard()">Copy to Clipboard</button>
    <pre id="content">__CONTENT__</pre>
    <script>
        async function copyToClipboard() {
            const content = document.getElementById('content').innerText;
            try {
                await navigator.clipboard.writeText(content);
            } catch (err) {
                alert('Failed to copy: ' + err);
            }
        }
    </script>
</body>
</html>"#;

fn escape_html(text: &str) -> String {
    text.replace('<', "&lt;").replace('>', "&gt;")
}

fn render_page(title: &str, markdown: &str) -> String {
    PAGE_TEMPLATE
        .replace("__TITLE__", title)
        .replace("__CONTENT__", &escape_html(markdown))
}
