use std::fmt::Write as _;
use std::path::Path;

use log::info;

use crate::sitemap::SitemapEntry;
use crate::utils::error::SiteResult;
use crate::utils::fs::write_file;

/// XML namespace for sitemap
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Written at the root of the output directory
pub const SITEMAP_FILE: &str = "sitemap.xml";

/// Serialize entries as a sitemap document
pub fn render_xml(entries: &[SitemapEntry]) -> String {
    let mut xml = String::with_capacity(128 + entries.len() * 160);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    xml.push('\n');
    let _ = writeln!(xml, r#"<urlset xmlns="{}">"#, SITEMAP_NS);

    for entry in entries {
        xml.push_str("  <url>\n");
        let _ = writeln!(xml, "    <loc>{}</loc>", html_escape::encode_text(&entry.absolute_url));
        if let Some(lastmod) = &entry.lastmod {
            let _ = writeln!(xml, "    <lastmod>{}</lastmod>", html_escape::encode_text(lastmod));
        }
        let _ = writeln!(xml, "    <changefreq>{}</changefreq>", entry.changefreq);
        let _ = writeln!(xml, "    <priority>{:.1}</priority>", entry.priority);
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

/// Write `sitemap.xml` into `output_dir`
pub fn write_sitemap(output_dir: &Path, entries: &[SitemapEntry]) -> SiteResult<()> {
    let path = output_dir.join(SITEMAP_FILE);
    write_file(&path, &render_xml(entries))?;
    info!("Wrote {} with {} entries", path.display(), entries.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sitemap::ChangeFreq;
    use tempfile::TempDir;

    fn entry(url: &str, lastmod: Option<&str>, priority: f32) -> SitemapEntry {
        SitemapEntry {
            absolute_url: url.to_string(),
            lastmod: lastmod.map(str::to_string),
            changefreq: ChangeFreq::Monthly,
            priority,
        }
    }

    #[test]
    fn test_sitemap_empty() {
        let xml = render_xml(&[]);
        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(&format!(r#"<urlset xmlns="{}">"#, SITEMAP_NS)));
        assert!(xml.ends_with("</urlset>\n"));
        assert!(!xml.contains("<url>"));
    }

    #[test]
    fn test_sitemap_single_entry() {
        let xml = render_xml(&[entry("https://example.com/posts/a/", Some("2024-01-01"), 0.6)]);
        assert!(xml.contains("<loc>https://example.com/posts/a/</loc>"));
        assert!(xml.contains("<lastmod>2024-01-01</lastmod>"));
        assert!(xml.contains("<changefreq>monthly</changefreq>"));
        assert!(xml.contains("<priority>0.6</priority>"));
    }

    #[test]
    fn test_sitemap_escapes_and_omits_lastmod() {
        let xml = render_xml(&[entry("https://example.com/?a=1&b=<2>", None, 1.0)]);
        assert!(xml.contains("<loc>https://example.com/?a=1&amp;b=&lt;2&gt;</loc>"));
        assert!(!xml.contains("<lastmod>"));
        assert!(xml.contains("<priority>1.0</priority>"));
    }

    #[test]
    fn test_write_sitemap() {
        let dir = TempDir::new().unwrap();
        write_sitemap(dir.path(), &[entry("https://example.com/", None, 1.0)]).unwrap();
        let written = std::fs::read_to_string(dir.path().join(SITEMAP_FILE)).unwrap();
        assert!(written.contains("<loc>https://example.com/</loc>"));
    }
}
