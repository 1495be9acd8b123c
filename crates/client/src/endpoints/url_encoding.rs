//! Percent-encoding for values interpolated into Business Central URL paths.
//!
//! Tenant IDs, environment names and company IDs come straight from user input.
//! Encoding them keeps a value like `Sandbox/../x` from changing the request path.
//!
//! # Example
//!
//! ```
//! use bc_client::endpoints::url_encoding::encode_path_segment;
//!
//! assert_eq!(encode_path_segment("My Sandbox"), "My%20Sandbox");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters percent-encoded in a single URL path segment.
///
/// RFC 3986 section 3.3 delimiters plus characters that are unsafe in URLs.
/// Parentheses are left alone so OData keys such as `companies(id)` stay readable.
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'+')
    .add(b',')
    .add(b';')
    .add(b'\'')
    .add(b'[')
    .add(b']');

/// Percent-encode a string for use as one URL path segment.
///
/// ```
/// use bc_client::endpoints::url_encoding::encode_path_segment;
///
/// assert_eq!(encode_path_segment("Production"), "Production");
/// assert_eq!(encode_path_segment("a/b"), "a%2Fb");
/// assert_eq!(encode_path_segment("100%"), "100%25");
/// ```
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}
