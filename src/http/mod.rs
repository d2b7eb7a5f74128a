//! HTTP protocol layer module
//!
//! Protocol-level helpers shared by every handler path: response builders,
//! the fixed response header set, MIME resolution and URL path decoding.

pub mod headers;
pub mod mime;
pub mod path;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_403_response, build_404_response, build_500_response, build_501_response,
    build_file_response, build_html_response, build_options_response, build_redirect_response,
};
