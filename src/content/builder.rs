use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::Path;

use log::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::content::node::ContentNode;
use crate::content::tree::{ContentTree, SectionId};
use crate::markdown::load_document;
use crate::utils::error::{SiteError, SiteResult};
use crate::utils::fs::is_hidden;

/// Marks the index page of the directory it sits in
pub const SECTION_INDEX_FILE: &str = "_index.md";

/// Homepage source, only recognised at the content root
pub const HOMEPAGE_FILE: &str = "index.md";

const MARKDOWN_EXT: &str = ".md";

/// Map the directory hierarchy under `content_root` onto a [`ContentTree`].
///
/// Every directory becomes a section, `_index.md` becomes its index page and
/// every other `.md` file one of its pages. The root `index.md` is loaded
/// separately as the homepage. The first error aborts the walk.
pub fn build(content_root: &Path) -> SiteResult<ContentTree> {
    check_root(content_root)?;

    let mut tree = ContentTree::new();
    let root = tree.ensure_section("", "", None);
    walk_section(&mut tree, content_root, root, "")?;
    load_homepage(&mut tree, content_root)?;

    info!(
        "Content tree: {} sections, {} nodes from {}",
        tree.section_count(),
        tree.node_count(),
        content_root.display()
    );
    Ok(tree)
}

fn check_root(root: &Path) -> SiteResult<()> {
    match fs::metadata(root) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(SiteError::NotADirectory(root.to_path_buf())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(SiteError::DirectoryNotFound(root.to_path_buf()))
        }
        Err(e) => Err(SiteError::io(root, e)),
    }
}

fn walk_section(
    tree: &mut ContentTree,
    dir: &Path,
    section: SectionId,
    section_path: &str,
) -> SiteResult<()> {
    debug!("Scanning section '{}' in {}", section_path, dir.display());
    let entries = read_entries(dir)?;

    if let Some(entry) = entries
        .iter()
        .find(|e| e.file_type().is_file() && e.file_name() == OsStr::new(SECTION_INDEX_FILE))
    {
        let doc = load_document(entry.path())?;
        let node = ContentNode::section_index(doc, section_path, SECTION_INDEX_FILE);
        tree.set_index_page(section, node)?;
    }

    for entry in entries.iter().filter(|e| e.file_type().is_dir()) {
        let name = entry.file_name().to_string_lossy().into_owned();
        let child_path = join_section_path(section_path, &name);
        let child = tree.ensure_section(&child_path, &name, Some(section));
        walk_section(tree, entry.path(), child, &child_path)?;
    }

    for entry in entries.iter().filter(|e| e.file_type().is_file()) {
        let name = entry.file_name().to_string_lossy().into_owned();

        if name == SECTION_INDEX_FILE || (section_path.is_empty() && name == HOMEPAGE_FILE) {
            continue;
        }
        if !name.ends_with(MARKDOWN_EXT) {
            debug!("Skipping non-Markdown file {}", entry.path().display());
            continue;
        }

        let doc = load_document(entry.path())?;
        tree.add_page(section, ContentNode::page(doc, section_path, &name));
    }

    Ok(())
}

/// Direct children of `dir` in file-name order, hidden entries removed
fn read_entries(dir: &Path) -> SiteResult<Vec<DirEntry>> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_hidden(&e.file_name().to_string_lossy()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| SiteError::walk(dir, e))
}

fn load_homepage(tree: &mut ContentTree, content_root: &Path) -> SiteResult<()> {
    let path = content_root.join(HOMEPAGE_FILE);
    if !path.is_file() {
        warn!("No homepage found at {}", path.display());
        return Ok(());
    }

    let doc = load_document(&path)?;
    tree.set_homepage(ContentNode::homepage(doc, HOMEPAGE_FILE));
    Ok(())
}

/// Join a parent section path and a directory name with `/`
pub fn join_section_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", parent, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::listing::section_listing;
    use crate::content::node::NodeKind;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, title: &str, date: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(
            &path,
            format!("---\ntitle: {}\ndate: {}\n---\nBody of {}\n", title, date, title),
        )
        .unwrap();
    }

    #[test]
    fn test_builds_blog_tree() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        write(root, "index.md", "Home", "2024-01-01");
        write(root, "posts/_index.md", "Posts", "2024-01-01");
        write(root, "posts/a.md", "A", "2023-01-01");
        write(root, "posts/b.md", "B", "2024-02-01");

        let tree = build(root).unwrap();

        let home = tree.node(tree.homepage().unwrap());
        assert_eq!(home.url, "/");
        assert_eq!(home.output_path, "index.html");
        assert_eq!(home.title, "Home");

        let posts = tree.section(tree.section_by_path("posts").unwrap());
        assert_eq!(posts.name, "posts");
        let index = tree.node(posts.index_page.unwrap());
        assert_eq!(index.kind, NodeKind::Section);
        assert_eq!(index.url, "/posts/");

        let discovered: Vec<_> = posts
            .pages
            .iter()
            .map(|id| tree.node(*id).title.as_str())
            .collect();
        assert_eq!(discovered, vec!["A", "B"]);

        let listed: Vec<_> = section_listing(&tree, tree.section_by_path("posts").unwrap())
            .into_iter()
            .map(|id| tree.node(id).title.clone())
            .collect();
        assert_eq!(listed, vec!["B", "A"]);

        // The homepage is not double-counted as a root page
        let root_section = tree.section(tree.root().unwrap());
        assert!(root_section.pages.is_empty());
        assert_eq!(tree.node_count(), 4);
    }

    #[test]
    fn test_nested_sections_and_skips() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        write(root, "about.md", "About", "2024-01-01");
        write(root, "docs/guide/intro.md", "Intro", "2024-01-01");
        write(root, "docs/guide/index.md", "Guide index page", "2024-01-01");
        write(root, ".drafts/secret.md", "Secret", "2024-01-01");
        write(root, "docs/.hidden.md", "Hidden", "2024-01-01");
        fs::write(root.join("docs/diagram.png"), [0u8, 1, 2]).unwrap();

        let tree = build(root).unwrap();

        assert!(tree.homepage().is_none());
        assert!(tree.section_by_path(".drafts").is_none());

        let docs = tree.section_by_path("docs").unwrap();
        assert!(tree.section(docs).pages.is_empty());

        let guide = tree.section(tree.section_by_path("docs/guide").unwrap());
        assert_eq!(guide.name, "guide");
        let urls: Vec<_> = guide.pages.iter().map(|id| tree.node(*id).url.as_str()).collect();
        // index.md below the root is an ordinary page
        assert_eq!(urls, vec!["/docs/guide/index/", "/docs/guide/intro/"]);

        let about = tree.node(tree.section(tree.root().unwrap()).pages[0]);
        assert_eq!(about.url, "/about/");
        assert_eq!(about.section_path.as_deref(), Some(""));
    }

    #[test]
    fn test_missing_root() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(build(&missing), Err(SiteError::DirectoryNotFound(p)) if p == missing));
    }

    #[test]
    fn test_root_is_a_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("content");
        fs::write(&file, "x").unwrap();
        assert!(matches!(build(&file), Err(SiteError::NotADirectory(_))));
    }

    #[test]
    fn test_bad_file_aborts_build() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        write(root, "good.md", "Good", "2024-01-01");
        fs::write(root.join("broken.md"), "no front matter here").unwrap();

        match build(root) {
            Err(SiteError::InvalidContent { path, .. }) => {
                assert_eq!(path, PathBuf::from(root.join("broken.md")));
            }
            other => panic!("unexpected result: {:?}", other.map(|t| t.node_count())),
        }
    }

    #[test]
    fn test_join_section_path() {
        assert_eq!(join_section_path("", "posts"), "posts");
        assert_eq!(join_section_path("a", "b"), "a/b");
    }
}
