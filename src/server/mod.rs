//! HTTP server - JSON API over the markdown content, plus the UI's static files

use anyhow::Result;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::content::landmark::{self, Landmark, LandmarkInfo};
use crate::content::{Biography, BlogPost, BlogPostSummary, CareerLocation};
use crate::config::SiteConfig;
use crate::Portfolio;

/// Server state
struct ServerState {
    portfolio: Portfolio,
}

/// JSON error response: `{"error": "..."}`
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.message }));
        (self.status, body).into_response()
    }
}

/// Run a filesystem read off the async workers
async fn read_blocking<T, F>(what: &'static str, f: F) -> Result<T, ApiError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await.map_err(|e| {
        tracing::error!("Error fetching {}: {}", what, e);
        ApiError::internal(format!("Failed to fetch {}", what))
    })
}

/// Build the application router
pub fn router(portfolio: &Portfolio) -> Router {
    let state = Arc::new(ServerState {
        portfolio: portfolio.clone(),
    });

    let static_files =
        ServeDir::new(&portfolio.public_dir).append_index_html_on_directories(true);

    let app = Router::new()
        .route("/api/biography", get(biography_handler))
        .route("/api/blog-posts", get(blog_posts_handler))
        .route("/api/blog", get(blog_posts_handler))
        .route("/api/blog/:id", get(blog_post_handler))
        .route("/api/career-locations", get(career_locations_handler))
        .route("/api/career-locations/nearest", get(nearest_location_handler))
        .route("/api/landmarks", get(landmarks_handler))
        .fallback_service(static_files)
        .with_state(state);

    let prefix = portfolio.config.route_prefix();
    let app = if prefix.is_empty() {
        app
    } else {
        Router::new().nest(&prefix, app)
    };

    app.layer(TraceLayer::new_for_http())
}

/// Start the server
pub async fn start(portfolio: &Portfolio, ip: &str, port: u16, open: bool) -> Result<()> {
    let app = router(portfolio);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    let url = format!(
        "http://{}:{}{}/",
        ip,
        port,
        portfolio.config.route_prefix()
    );
    println!("{}", banner(&portfolio.config, &url));
    println!("Press Ctrl+C to stop.");

    if open {
        open_browser(&url);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// GET /api/biography
async fn biography_handler(
    State(state): State<Arc<ServerState>>,
) -> Result<Json<Biography>, ApiError> {
    let portfolio = state.portfolio.clone();
    let biography = read_blocking("biography", move || portfolio.biography()).await?;
    Ok(Json(biography))
}

/// GET /api/blog-posts and GET /api/blog
async fn blog_posts_handler(
    State(state): State<Arc<ServerState>>,
) -> Result<Json<Vec<BlogPostSummary>>, ApiError> {
    let portfolio = state.portfolio.clone();
    let posts = read_blocking("blog posts", move || portfolio.blog_posts())
        .await?
        .map_err(|e| {
            tracing::error!("Error fetching blog posts: {}", e);
            ApiError::internal("Failed to fetch blog posts")
        })?;

    Ok(Json(posts.iter().map(BlogPostSummary::from).collect()))
}

/// GET /api/blog/:id
async fn blog_post_handler(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
) -> Result<Json<BlogPost>, ApiError> {
    let portfolio = state.portfolio.clone();
    let lookup = id.clone();
    let post = read_blocking("blog post", move || portfolio.blog_post(&lookup))
        .await?
        .map_err(|e| {
            tracing::error!("Error fetching blog post {}: {}", id, e);
            ApiError::internal("Failed to fetch blog post")
        })?;

    post.map(Json)
        .ok_or_else(|| ApiError::not_found("Blog post not found"))
}

/// GET /api/career-locations
async fn career_locations_handler(
    State(state): State<Arc<ServerState>>,
) -> Result<Json<Vec<CareerLocation>>, ApiError> {
    let portfolio = state.portfolio.clone();
    let locations =
        read_blocking("career locations", move || portfolio.career_locations()).await?;
    Ok(Json(locations))
}

#[derive(Debug, Deserialize)]
struct NearestQuery {
    x: f64,
    y: f64,
}

/// GET /api/career-locations/nearest?x=..&y=..
async fn nearest_location_handler(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<NearestQuery>,
) -> Result<Json<CareerLocation>, ApiError> {
    let portfolio = state.portfolio.clone();
    let locations =
        read_blocking("career locations", move || portfolio.career_locations()).await?;

    landmark::nearest_location(&locations, query.x, query.y)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::not_found("No location nearby"))
}

/// GET /api/landmarks
async fn landmarks_handler() -> Json<Vec<LandmarkInfo>> {
    Json(Landmark::ALL.into_iter().map(Landmark::info).collect())
}

fn banner(config: &SiteConfig, url: &str) -> String {
    format!("{} by {} running at {}", config.title, config.author, url)
}

/// Platform launcher for URLs, as program and leading arguments
fn url_launcher() -> Option<(&'static str, &'static [&'static str])> {
    match std::env::consts::OS {
        "macos" => Some(("open", &[])),
        "windows" => Some(("cmd", &["/c", "start", ""])),
        "linux" | "freebsd" | "openbsd" | "netbsd" => Some(("xdg-open", &[])),
        _ => None,
    }
}

/// Hand the site URL to the desktop's browser. Failure only logs.
fn open_browser(url: &str) {
    let Some((program, args)) = url_launcher() else {
        tracing::warn!("Don't know how to open a browser on {}", std::env::consts::OS);
        return;
    };

    match std::process::Command::new(program).args(args).arg(url).spawn() {
        Ok(_) => tracing::debug!("Opened {} with {}", url, program),
        Err(e) => tracing::warn!("Failed to open browser with {}: {}", program, e),
    }
}
