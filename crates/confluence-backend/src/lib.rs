pub mod client;
mod confluence_impl;
pub mod error;
pub mod models;


pub use client::{ConfluenceClient, WikiSession};
pub use confluence_impl::ConfluencePublisher;
pub use error::{ConfluenceError, Result};
pub use models::*;

// Re-export report-core types for convenience
pub use report_core::{Credentials, PagePublisher, ReportError};
