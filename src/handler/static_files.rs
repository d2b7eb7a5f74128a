//! Static file serving module
//!
//! Resolves request paths against the document root and builds the
//! response: file bytes, index files, directory listings, trailing-slash
//! redirects, or the matching error status.

use crate::config::AppState;
use crate::http::path::{percent_decode, percent_encode};
use crate::http::{self, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::fmt::Write as _;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

/// Failures while resolving or reading a file, each mapping to one HTTP
/// error status.
#[derive(Debug, Error)]
pub enum ServeError {
    #[error("not found")]
    NotFound,
    #[error("forbidden")]
    Forbidden,
    #[error("{0}")]
    Io(io::Error),
}

impl From<io::Error> for ServeError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound,
            io::ErrorKind::PermissionDenied => Self::Forbidden,
            _ => Self::Io(err),
        }
    }
}

/// Successful resolution outcomes
enum Resolved {
    File(PathBuf),
    Listing(PathBuf),
    Redirect(String),
}

/// Serve a GET/HEAD request for `url_path`.
pub async fn serve(state: &AppState, url_path: &str, is_head: bool) -> Response<Full<Bytes>> {
    match resolve(state, url_path).await {
        Ok(Resolved::File(file_path)) => match fs::read(&file_path).await {
            Ok(content) => {
                let content_type = mime::content_type_for(&file_path);
                http::build_file_response(Bytes::from(content), content_type, is_head)
            }
            Err(err) => error_response(url_path, &ServeError::from(err)),
        },
        Ok(Resolved::Listing(dir_path)) => match render_listing(&dir_path, url_path).await {
            Ok(html) => http::build_html_response(html, is_head),
            Err(err) => error_response(url_path, &err),
        },
        Ok(Resolved::Redirect(target)) => http::build_redirect_response(&target),
        Err(err) => error_response(url_path, &err),
    }
}

/// Translate a serve error into its HTTP error response
fn error_response(url_path: &str, err: &ServeError) -> Response<Full<Bytes>> {
    match err {
        // Missing files are routine, not worth an error log line
        ServeError::NotFound => http::build_404_response(),
        ServeError::Forbidden => {
            logger::log_warning(&format!("Forbidden: {url_path}"));
            http::build_403_response()
        }
        ServeError::Io(io_err) => {
            logger::log_error(&format!("Failed to serve '{url_path}': {io_err}"));
            http::build_500_response()
        }
    }
}

/// Resolve a URL path to a file, listing, or redirect.
///
/// The decoded path is joined to the document root and canonicalized; a
/// target that resolves outside the root is refused even when it exists.
async fn resolve(state: &AppState, url_path: &str) -> Result<Resolved, ServeError> {
    let decoded = percent_decode(url_path);
    if decoded.contains('\0') {
        return Err(ServeError::NotFound);
    }

    let relative = decoded.trim_start_matches('/');
    let candidate = state.root.join(relative);
    let canonical = candidate.canonicalize()?;
    if !canonical.starts_with(&state.root) {
        return Err(ServeError::Forbidden);
    }

    let metadata = fs::metadata(&canonical).await?;
    if !metadata.is_dir() {
        return Ok(Resolved::File(canonical));
    }

    // Directories are always addressed with a trailing slash
    if !url_path.ends_with('/') {
        return Ok(Resolved::Redirect(format!("{url_path}/")));
    }

    for index in &state.config.http.index_files {
        let index_path = canonical.join(index);
        if fs::metadata(&index_path).await.is_ok_and(|m| m.is_file()) {
            return Ok(Resolved::File(index_path));
        }
    }

    if state.config.http.directory_listing {
        Ok(Resolved::Listing(canonical))
    } else {
        Err(ServeError::Forbidden)
    }
}

/// Render an index page for a directory: entries sorted by name,
/// directories suffixed with `/`, names escaped, hrefs percent-encoded.
async fn render_listing(dir_path: &Path, url_path: &str) -> Result<String, ServeError> {
    let mut read_dir = fs::read_dir(dir_path).await?;
    let mut entries = Vec::new();
    while let Some(entry) = read_dir.next_entry().await? {
        let mut name = entry.file_name().to_string_lossy().into_owned();
        if entry.file_type().await.is_ok_and(|t| t.is_dir()) {
            name.push('/');
        }
        entries.push(name);
    }
    entries.sort();

    let title = format!("Directory listing for {}", percent_decode(url_path));
    let mut html = String::new();
    html.push_str("<!DOCTYPE HTML>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(html, "<title>{}</title>", escape_html(&title));
    html.push_str("</head>\n<body>\n");
    let _ = writeln!(html, "<h1>{}</h1>", escape_html(&title));
    html.push_str("<hr>\n<ul>\n");
    for name in &entries {
        let _ = writeln!(
            html,
            "<li><a href=\"{}\">{}</a></li>",
            percent_encode(name),
            escape_html(name)
        );
    }
    html.push_str("</ul>\n<hr>\n</body>\n</html>\n");
    Ok(html)
}

/// Escape text for inclusion in generated HTML
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
