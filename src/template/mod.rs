pub mod parser;
pub mod role;
pub mod cache;

pub use cache::{Template, TemplateCache};
pub use role::TemplateRole;

use crate::content::{ContentNode, ContentTree, NodeId};
use crate::utils::error::SiteResult;

/// Render one node of `tree` with the template for `role`.
///
/// The node's attached listing, if any, feeds `{{#each pages}}` blocks.
pub fn render_node(
    tree: &ContentTree,
    id: NodeId,
    role: TemplateRole,
    cache: &mut TemplateCache,
) -> SiteResult<String> {
    let node = tree.node(id);
    let listing: Option<Vec<&ContentNode>> = node
        .attached_listing
        .as_ref()
        .map(|ids| ids.iter().map(|item| tree.node(*item)).collect());

    cache.get(role)?.render(node, listing.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{section_listing, ContentNode};
    use crate::markdown::Document;
    use std::fs;
    use tempfile::TempDir;

    fn doc(title: &str, date: &str) -> Document {
        Document {
            title: title.to_string(),
            date: date.to_string(),
            draft: false,
            html: format!("<p>{}</p>", title),
        }
    }

    #[test]
    fn test_render_section_with_listing() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("base.html"), "<main>{{content}}</main>").unwrap();
        fs::write(
            dir.path().join("list.html"),
            concat!(
                "<h1>{{title}}</h1><ul>{{#each pages}}",
                "<li><a href=\"{{this.url}}\">{{this.title}}</a></li>",
                "{{/each}}</ul>"
            ),
        )
        .unwrap();

        let mut tree = ContentTree::new();
        let root = tree.ensure_section("", "", None);
        let posts = tree.ensure_section("posts", "posts", Some(root));
        let index = ContentNode::section_index(doc("Posts", "2024-01-01"), "posts", "_index.md");
        let index = tree.set_index_page(posts, index).unwrap();
        tree.add_page(posts, ContentNode::page(doc("Old", "2023-01-01"), "posts", "old.md"));
        let new = ContentNode::page(doc("New", "2024-03-01"), "posts", "new.md");
        let new = tree.add_page(posts, new);

        let listing = section_listing(&tree, posts);
        tree.attach_listing(index, listing);

        let mut cache = TemplateCache::new(dir.path());
        let role = TemplateRole::for_node(tree.node(index), false);
        assert_eq!(role, TemplateRole::List);
        assert_eq!(
            render_node(&tree, index, role, &mut cache).unwrap(),
            concat!(
                "<h1>Posts</h1><ul><li><a href=\"/posts/new/\">New</a></li>",
                "<li><a href=\"/posts/old/\">Old</a></li></ul>"
            )
        );

        // post.html is absent, so pages use base
        let page = render_node(&tree, new, TemplateRole::Post, &mut cache).unwrap();
        assert_eq!(page, "<main><p>New</p></main>");
    }

    #[test]
    fn test_homepage_role_is_base() {
        let home = ContentNode::homepage(doc("Home", "2024-01-01"), "index.md");
        assert_eq!(TemplateRole::for_node(&home, true), TemplateRole::Base);
        assert_eq!(TemplateRole::for_node(&home, false), TemplateRole::Post);
        assert_eq!(TemplateRole::List.file_name(), "list.html");
    }
}
