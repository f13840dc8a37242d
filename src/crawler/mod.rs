//! Crawler module for fetching pages and driving the crawl
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching behind a swappable transport
//! - HTML parsing into a title and classified links
//! - The join counter for recursively spawned tasks
//! - Overall crawl coordination

mod coordinator;
mod fetcher;
mod parser;
mod tasks;

pub use coordinator::{crawl, run_crawl, Crawler};
pub use fetcher::{build_http_client, fetch_page, user_agent_string, HttpTransport, Transport};
pub use parser::extract_page;
pub use tasks::{TaskCounter, TaskGuard};
