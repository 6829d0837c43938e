//! Recognizer adapters.

mod fixed;
mod http;

pub use fixed::FixedRecognizer;
pub use http::HttpRecognizer;
