//! Askama template definitions.

use askama::Template;

/// A link in the entry sidebar
#[derive(Debug, Clone)]
pub struct SidebarLink {
    pub url: String,
    pub title: String,
}

/// A link in the categories sidebar
#[derive(Debug, Clone)]
pub struct CategoryLink {
    pub url: String,
    pub name: String,
    pub count: usize,
}

/// Everything the shared layout needs; built once per site and borrowed by every page
#[derive(Debug, Clone)]
pub struct Layout {
    pub site_title: String,
    pub site_author: Option<String>,
    pub lang: String,
    pub base_url: String,
    pub year: i32,
    pub sidebar: Vec<SidebarLink>,
    pub categories: Vec<CategoryLink>,
}

/// An entry in a list (home page, category page)
#[derive(Debug, Clone)]
pub struct ListItem {
    pub url: String,
    pub title: String,
    pub summary: Option<String>,
}

/// A category named by an entry; `url` is None when no category page exists
#[derive(Debug, Clone)]
pub struct CategoryRef {
    pub name: String,
    pub url: Option<String>,
}

/// A "see also" target; `url` is None when the title is not an entry
#[derive(Debug, Clone)]
pub struct SeeAlsoLink {
    pub title: String,
    pub url: Option<String>,
}

/// Entry page template
#[derive(Template)]
#[template(path = "entry.html")]
pub struct EntryTemplate<'a> {
    pub layout: &'a Layout,

    pub title: String,
    pub summary: Option<String>,
    pub aliases: Vec<String>,
    pub categories: Vec<CategoryRef>,

    /// Content blocks, already rendered to HTML
    pub blocks: Vec<String>,

    pub see_also: Vec<SeeAlsoLink>,
}

/// Single category page template
#[derive(Template)]
#[template(path = "category.html")]
pub struct CategoryTemplate<'a> {
    pub layout: &'a Layout,
    pub name: String,
    pub entries: Vec<ListItem>,
}

/// Category list page template
#[derive(Template)]
#[template(path = "categories.html")]
pub struct CategoriesTemplate<'a> {
    pub layout: &'a Layout,
}

/// Home page template
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub layout: &'a Layout,
    pub site_description: String,
    pub entries: Vec<ListItem>,
}
