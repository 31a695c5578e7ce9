//! # entrywiki-render
//!
//! Template rendering library for entrywiki.
//!
//! This crate handles HTML template rendering using Askama.

pub mod pages;
pub mod templates;

pub use pages::{render_blocks, PageRenderer};
pub use templates::{
    CategoriesTemplate, CategoryLink, CategoryRef, CategoryTemplate, EntryTemplate,
    IndexTemplate, Layout, ListItem, SeeAlsoLink, SidebarLink,
};
