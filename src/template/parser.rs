/// Opening tag of the only block construct
pub const EACH_OPEN: &str = "{{#each pages}}";

/// Closing tag of the only block construct
pub const EACH_CLOSE: &str = "{{/each}}";

/// A scalar substitution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placeholder {
    Title,
    Content,
    Date,
    Url,
    ItemTitle,
    ItemUrl,
    ItemDate,
    /// Consumed, renders as nothing
    Unknown(String),
}

impl Placeholder {
    pub fn from_name(name: &str) -> Self {
        match name {
            "title" => Placeholder::Title,
            "content" => Placeholder::Content,
            "date" => Placeholder::Date,
            "url" => Placeholder::Url,
            "this.title" => Placeholder::ItemTitle,
            "this.url" => Placeholder::ItemUrl,
            "this.date" => Placeholder::ItemDate,
            other => Placeholder::Unknown(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateNode {
    Text(String),
    Placeholder(Placeholder),
    /// `{{#each pages}}` body, rendered once per listing item
    Each(Vec<TemplateNode>),
}

/// Parse template source into a node sequence.
///
/// The only error is a `{{/each}}` that closes nothing.
pub fn parse(source: &str) -> Result<Vec<TemplateNode>, String> {
    parse_nodes(source, false)
}

fn parse_nodes(source: &str, in_block: bool) -> Result<Vec<TemplateNode>, String> {
    let mut nodes = Vec::new();
    let mut text = String::new();
    let mut rest = source;

    while let Some(pos) = rest.find('{') {
        text.push_str(&rest[..pos]);
        rest = &rest[pos..];

        if in_block {
            // Only one level of iteration: nested tags are plain text, the
            // placeholders between them still render
            if let Some(tag) = [EACH_OPEN, EACH_CLOSE].into_iter().find(|t| rest.starts_with(t)) {
                text.push_str(tag);
                rest = &rest[tag.len()..];
                continue;
            }
        } else if let Some(after_open) = rest.strip_prefix(EACH_OPEN) {
            let Some(close) = find_matching_close(after_open) else {
                // Unterminated: the tag and everything after it stay literal
                text.push_str(rest);
                rest = "";
                break;
            };

            flush_text(&mut nodes, &mut text);
            nodes.push(TemplateNode::Each(parse_nodes(&after_open[..close], true)?));
            rest = &after_open[close + EACH_CLOSE.len()..];
            continue;
        }

        if rest.starts_with(EACH_CLOSE) {
            return Err(format!(
                "'{}' at byte {} has no matching '{}'",
                EACH_CLOSE,
                source.len() - rest.len(),
                EACH_OPEN
            ));
        }

        if let Some((name, len)) = double_brace_token(rest).or_else(|| single_brace_token(rest)) {
            flush_text(&mut nodes, &mut text);
            nodes.push(TemplateNode::Placeholder(Placeholder::from_name(name)));
            rest = &rest[len..];
            continue;
        }

        text.push('{');
        rest = &rest[1..];
    }

    text.push_str(rest);
    flush_text(&mut nodes, &mut text);
    Ok(nodes)
}

fn flush_text(nodes: &mut Vec<TemplateNode>, text: &mut String) {
    if !text.is_empty() {
        nodes.push(TemplateNode::Text(std::mem::take(text)));
    }
}

/// Byte offset of the `{{/each}}` that balances an already consumed
/// `{{#each pages}}`, counting literal occurrences of both tags.
fn find_matching_close(body: &str) -> Option<usize> {
    let mut depth = 1usize;
    let mut offset = 0;

    loop {
        let rest = &body[offset..];
        let next_open = rest.find(EACH_OPEN);
        let next_close = rest.find(EACH_CLOSE)?;

        match next_open {
            Some(open) if open < next_close => {
                depth += 1;
                offset += open + EACH_OPEN.len();
            }
            _ => {
                depth -= 1;
                if depth == 0 {
                    return Some(offset + next_close);
                }
                offset += next_close + EACH_CLOSE.len();
            }
        }
    }
}

/// `{{ name }}`: any single-line content without braces, trimmed
fn double_brace_token(text: &str) -> Option<(&str, usize)> {
    let inner_start = text.strip_prefix("{{")?;
    let end = inner_start.find("}}")?;
    let inner = &inner_start[..end];

    if inner.contains(|c: char| matches!(c, '{' | '}' | '\n')) {
        return None;
    }
    Some((inner.trim(), end + 4))
}

/// `{name}`: only name characters, no whitespace, so CSS and script
/// blocks pass through untouched
fn single_brace_token(text: &str) -> Option<(&str, usize)> {
    let inner_start = text.strip_prefix('{')?;
    let end = inner_start.find('}')?;
    let inner = &inner_start[..end];

    let is_name = !inner.is_empty()
        && inner
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'));
    if !is_name {
        return None;
    }
    Some((inner, end + 2))
}
