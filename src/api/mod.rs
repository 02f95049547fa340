pub mod client;
pub mod models;
pub mod response;

pub use client::{request_generate, request_proxy};
pub use models::{Content, GenerateRequest, Part, ProxyGenerateRequest};
pub use response::{extract_proxy_result, extract_reply};
