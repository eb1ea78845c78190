use comrak::Options;
use lazy_static::lazy_static;

lazy_static! {
    // Built once per process and shared by every build
    static ref COMRAK_OPTIONS: Options<'static> = create_comrak_options();
}

/// Create ComrakOptions with the GitHub Flavored Markdown extensions
fn create_comrak_options() -> Options<'static> {
    let mut options = Options::default();

    // Extension options - GitHub Flavored Markdown
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;

    // Raw HTML in content is passed through untouched
    options.render.unsafe_ = true;

    options
}

/// Render a Markdown body (front matter already removed) to HTML
pub fn render_markdown(content: &str) -> String {
    comrak::markdown_to_html(content, &COMRAK_OPTIONS)
}
