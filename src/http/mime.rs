//! MIME type resolution module
//!
//! Maps file paths to Content-Type values. Paths ending in the literal
//! suffix `.js` are pinned to `application/javascript` so browsers accept
//! them as module scripts; every other path goes through the extension
//! table.

use std::path::Path;

/// MIME type forced for `.js` paths.
pub const JAVASCRIPT: &str = "application/javascript";

/// Resolve the Content-Type for the file at `path`.
///
/// # Examples
/// ```ignore
/// assert_eq!(content_type_for(Path::new("app/main.js")), "application/javascript");
/// assert_eq!(content_type_for(Path::new("style.css")), "text/css");
/// ```
pub fn content_type_for(path: &Path) -> &'static str {
    // Exact-suffix rule runs before the table lookup
    if path.as_os_str().to_string_lossy().ends_with(".js") {
        return JAVASCRIPT;
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    from_extension(extension.as_deref())
}

/// Extension-table lookup, the fallback for everything that is not `.js`
fn from_extension(extension: Option<&str>) -> &'static str {
    match extension {
        // Text
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("txt" | "md") => "text/plain; charset=utf-8",
        Some("xml") => "application/xml",

        // Scripts and data
        Some("js" | "mjs") => JAVASCRIPT,
        Some("json" | "map") => "application/json",
        Some("wasm") => "application/wasm",

        // Images
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("webp") => "image/webp",

        // Media
        Some("mp3") => "audio/mpeg",
        Some("mp4") => "video/mp4",
        Some("webm") => "video/webm",

        // Fonts
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("otf") => "font/otf",

        // Documents
        Some("pdf") => "application/pdf",
        Some("zip") => "application/zip",
        Some("gz") => "application/gzip",

        // Default
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_suffix_forced() {
        assert_eq!(content_type_for(Path::new("main.js")), JAVASCRIPT);
        assert_eq!(content_type_for(Path::new("dist/bundle.min.js")), JAVASCRIPT);
    }

    #[test]
    fn test_mjs_is_not_the_js_suffix() {
        // `.mjs` does not end in the literal `.js`, the table handles it
        assert_eq!(content_type_for(Path::new("mod.mjs")), JAVASCRIPT);
    }

    #[test]
    fn test_other_extensions_use_table() {
        assert_eq!(content_type_for(Path::new("style.css")), "text/css");
        assert_eq!(
            content_type_for(Path::new("index.html")),
            "text/html; charset=utf-8"
        );
        assert_eq!(content_type_for(Path::new("logo.png")), "image/png");
    }

    #[test]
    fn test_extension_lookup_is_case_insensitive() {
        assert_eq!(content_type_for(Path::new("STYLE.CSS")), "text/css");
        assert_eq!(content_type_for(Path::new("MAIN.JS")), JAVASCRIPT);
    }

    #[test]
    fn test_unknown_extension_defaults() {
        assert_eq!(
            content_type_for(Path::new("data.xyz")),
            "application/octet-stream"
        );
        assert_eq!(
            content_type_for(Path::new("Makefile")),
            "application/octet-stream"
        );
    }
}
