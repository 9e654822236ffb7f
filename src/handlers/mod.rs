//! HTTP request handlers and extractors.

pub mod extract;
pub mod forms;
pub mod http;

pub use extract::Payload;
pub use forms::*;
pub use http::*;
