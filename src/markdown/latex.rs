const DISPLAY_OPEN: &str = "<div class=\"math display\">";
const DISPLAY_CLOSE: &str = "</div>";
const INLINE_OPEN: &str = "<span class=\"math inline\">";
const INLINE_CLOSE: &str = "</span>";

/// Wrap `$$…$$` and `$…$` spans in math containers for a client-side
/// renderer. A single linear pass; an unterminated delimiter is copied
/// through verbatim.
pub fn rewrite_math(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];

        if let Some(after) = rest.strip_prefix("$$") {
            match after.find("$$") {
                Some(end) => {
                    out.push_str(DISPLAY_OPEN);
                    out.push_str(&after[..end]);
                    out.push_str(DISPLAY_CLOSE);
                    rest = &after[end + 2..];
                }
                None => {
                    out.push_str("$$");
                    rest = after;
                }
            }
            continue;
        }

        let after = &rest[1..];
        match after.find('$') {
            Some(end) => {
                out.push_str(INLINE_OPEN);
                out.push_str(&after[..end]);
                out.push_str(INLINE_CLOSE);
                rest = &after[end + 1..];
            }
            None => {
                out.push('$');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
