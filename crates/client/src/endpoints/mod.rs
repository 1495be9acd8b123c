//! HTTP endpoint implementations.

mod request;
mod token;
pub mod url_encoding;

pub use request::{AuthGetResponse, GetOptions, ResponseBody, auth_get};
pub use token::request_token;
pub use url_encoding::encode_path_segment;
