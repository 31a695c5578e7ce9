//! Page assembly: turns the site index into rendered HTML documents.

use crate::templates::*;
use askama::Template;
use entrywiki_core::{
    linkify, Category, Config, ContentBlock, Page, SiteIndex, TitleRegistry,
};

/// Render content blocks: plain text is linkified inside a paragraph, HTML passes through
pub fn render_blocks(blocks: &[ContentBlock], registry: &TitleRegistry) -> Vec<String> {
    blocks
        .iter()
        .map(|block| match block {
            ContentBlock::Text(text) => format!("<p>{}</p>", linkify(text, registry)),
            ContentBlock::Html(html) => html.clone(),
        })
        .collect()
}

/// Renders every page of a site. Holds only shared borrows, so one renderer
/// can be used from many threads at once.
pub struct PageRenderer<'a> {
    index: &'a SiteIndex,
    layout: Layout,
    site_description: String,
}

impl<'a> PageRenderer<'a> {
    /// `year` is the copyright year shown in the footer
    pub fn new(config: &Config, index: &'a SiteIndex, year: i32) -> Self {
        let sidebar = index
            .pages
            .iter()
            .map(|page| SidebarLink {
                url: page.url.clone(),
                title: page.entry.title.clone(),
            })
            .collect();

        let categories = index
            .categories
            .iter()
            .map(|category| CategoryLink {
                url: category.url.clone(),
                name: category.name.clone(),
                count: category.members.len(),
            })
            .collect();

        let layout = Layout {
            site_title: config.site.title.clone(),
            site_author: config
                .site
                .author
                .clone()
                .filter(|author| !author.trim().is_empty()),
            lang: config.site.language.clone(),
            base_url: config.normalized_base_url(),
            year,
            sidebar,
            categories,
        };

        Self {
            index,
            layout,
            site_description: config.site.description.clone(),
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Render the page of a single entry
    pub fn entry_page(&self, page: &Page) -> askama::Result<String> {
        let entry = &page.entry;
        let registry = &self.index.registry;

        let categories = page
            .categories
            .iter()
            .map(|name| CategoryRef {
                name: name.clone(),
                url: self.index.find_category(name).map(|c| c.url.clone()),
            })
            .collect();

        let see_also = entry
            .see_also
            .iter()
            .map(|title| SeeAlsoLink {
                title: title.clone(),
                url: registry.get(title).map(str::to_string),
            })
            .collect();

        let template = EntryTemplate {
            layout: &self.layout,
            title: entry.title.clone(),
            summary: entry.summary().map(str::to_string),
            aliases: entry.aliases.clone(),
            categories,
            blocks: render_blocks(&entry.content, registry),
            see_also,
        };

        let html = template.render()?;
        tracing::debug!("Rendered entry: {}", entry.title);
        Ok(html)
    }

    /// Render the page listing one category's entries
    pub fn category_page(&self, category: &Category) -> askama::Result<String> {
        let template = CategoryTemplate {
            layout: &self.layout,
            name: category.name.clone(),
            entries: self.index.members(category).map(list_item).collect(),
        };
        template.render()
    }

    /// Render the page listing all categories
    pub fn categories_page(&self) -> askama::Result<String> {
        CategoriesTemplate {
            layout: &self.layout,
        }
        .render()
    }

    /// Render the home page listing every entry
    pub fn home_page(&self) -> askama::Result<String> {
        let template = IndexTemplate {
            layout: &self.layout,
            site_description: self.site_description.clone(),
            entries: self.index.pages.iter().map(list_item).collect(),
        };
        template.render()
    }
}

fn list_item(page: &Page) -> ListItem {
    ListItem {
        url: page.url.clone(),
        title: page.entry.title.clone(),
        summary: page.entry.summary().map(str::to_string),
    }
}
