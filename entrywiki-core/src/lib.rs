//! # entrywiki-core
//!
//! Core library for the entrywiki static site generator.
//!
//! This crate loads a JSON collection of wiki entries, validates it into a
//! site index, and provides the title linkifier used when rendering entry
//! content. Writing files is left to the CLI.

pub mod builder;
pub mod config;
pub mod linkify;
pub mod models;
pub mod registry;
pub mod search;
pub mod slug;

pub use builder::{load_entries, BuildError, SiteBuilder};
pub use config::Config;
pub use linkify::{escape, linkify, segments, Segment};
pub use models::{
    Categories, Category, ContentBlock, Diagnostic, DiagnosticSeverity, Entry, Page, SiteIndex,
};
pub use registry::{RegistryBuilder, RegistryError, TitleRegistry};
pub use search::{build_search_index, perform_search, SearchEntry};
pub use slug::slugify;
