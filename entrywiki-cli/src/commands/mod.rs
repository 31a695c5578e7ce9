//! CLI command implementations.

pub mod build;
pub mod init;
pub mod search;
pub mod verify;

pub use build::build_site;
pub use init::init_project;
pub use search::{search_site, SearchOptions};
pub use verify::verify_site;
