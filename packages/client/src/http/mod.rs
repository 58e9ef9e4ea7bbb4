//! HTTP types shared by transports, the decorator and clients
//!
//! Requests and responses are plain `http` crate values over one boxed body
//! type, so any transport implementation can sit behind the same seam.

pub mod body;
pub mod headers;
pub mod request;
pub mod response;

pub use body::Body;
pub use headers::{HeaderSet, header_set, merge_headers};
pub use request::{HttpRequest, clone_request};
pub use response::HttpResponse;
