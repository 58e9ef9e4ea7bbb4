use super::body::Body;

/// Response returned by every transport.
pub type HttpResponse = http::Response<Body>;
