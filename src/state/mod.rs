//! State module for tracking crawl progress
//!
//! # Components
//!
//! - `Page`: The extracted title and classified links of one fetched document
//! - `VisitState`: Whether a known URL has been fetched yet
//! - `VisitedRegistry`: The set of claimed URLs and their states
//! - `Site`: The aggregate shared by all crawl tasks, guarding the registry
//!   and the page map with a single lock

mod page;
mod registry;
mod site;
mod visit_state;

// Re-export main types
pub use page::Page;
pub use registry::VisitedRegistry;
pub use site::Site;
pub use visit_state::VisitState;
