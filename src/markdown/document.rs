use std::path::Path;

use log::debug;

use crate::front_matter;
use crate::markdown::{render_markdown, rewrite_math};
use crate::utils::fs;
use crate::utils::error::{SiteError, SiteResult};

/// One parsed source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub title: String,
    pub date: String,
    pub draft: bool,
    /// Markdown body rendered to HTML, math delimiters rewritten
    pub html: String,
}

/// Read a Markdown source file and turn it into a [`Document`]
pub fn load_document(path: &Path) -> SiteResult<Document> {
    let bytes = fs::read_bytes(path)?;
    let text = String::from_utf8(bytes).map_err(|_| SiteError::InvalidUtf8(path.to_path_buf()))?;

    let (front_matter, body) =
        front_matter::parse(&text).map_err(|source| SiteError::InvalidContent {
            path: path.to_path_buf(),
            source,
        })?;

    debug!("Parsed {} ({:?}, {})", path.display(), front_matter.title, front_matter.date);

    Ok(Document {
        title: front_matter.title,
        date: front_matter.date,
        draft: front_matter.draft,
        html: rewrite_math(&render_markdown(body)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::front_matter::FrontMatterError;
    use tempfile::TempDir;

    #[test]
    fn test_load_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hello.md");
        std::fs::write(
            &path,
            "---\ntitle: \"Hello\"\ndate: 2024-03-01\n---\n# Hi\n\nInline $x$.\n",
        )
        .unwrap();

        let doc = load_document(&path).unwrap();

        assert_eq!(doc.title, "Hello");
        assert_eq!(doc.date, "2024-03-01");
        assert!(!doc.draft);
        assert!(doc.html.contains("<h1>Hi</h1>"));
        assert!(doc.html.contains("<span class=\"math inline\">x</span>"));
    }

    #[test]
    fn test_invalid_utf8() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.md");
        std::fs::write(&path, [0x2d, 0x2d, 0x2d, 0x0a, 0xff, 0xfe]).unwrap();

        assert!(matches!(load_document(&path), Err(SiteError::InvalidUtf8(_))));
    }

    #[test]
    fn test_front_matter_errors_carry_the_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nofm.md");
        std::fs::write(&path, "# no front matter\n").unwrap();

        match load_document(&path) {
            Err(SiteError::InvalidContent { path: p, source }) => {
                assert_eq!(p, path);
                assert_eq!(source, FrontMatterError::MissingDelimiter);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
