use serde_yaml::Value;

use crate::front_matter::types::{FrontMatter, FrontMatterError};

const DELIMITER: &str = "---";

/// Split a source file into its front matter and Markdown body.
///
/// The block must open on the very first line with a line that is exactly
/// `---` and close with another such line. The lines between are YAML;
/// `title` and `date` are required and non-empty, other keys are ignored.
pub fn parse(source: &str) -> Result<(FrontMatter, &str), FrontMatterError> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);

    let (first, block) = split_line(source);
    if first != DELIMITER {
        return Err(FrontMatterError::MissingDelimiter);
    }

    let mut rest = block;
    loop {
        if rest.is_empty() {
            return Err(FrontMatterError::Unterminated);
        }

        let (line, remaining) = split_line(rest);
        if line == DELIMITER {
            let yaml = &block[..block.len() - rest.len()];
            let front_matter = parse_yaml(yaml)?;
            check_required(&front_matter)?;
            return Ok((front_matter, remaining));
        }
        rest = remaining;
    }
}

fn parse_yaml(yaml: &str) -> Result<FrontMatter, FrontMatterError> {
    if yaml.trim().is_empty() {
        return Ok(FrontMatter::default());
    }

    let invalid = |e: serde_yaml::Error| FrontMatterError::InvalidYaml(e.to_string());
    match serde_yaml::from_str::<Value>(yaml).map_err(invalid)? {
        // Comments only
        Value::Null => Ok(FrontMatter::default()),
        value => serde_yaml::from_value(value).map_err(invalid),
    }
}

fn check_required(front_matter: &FrontMatter) -> Result<(), FrontMatterError> {
    let mut missing = Vec::new();
    if front_matter.title.is_empty() {
        missing.push("title");
    }
    if front_matter.date.is_empty() {
        missing.push("date");
    }
    if missing.is_empty() {
        Ok(())
    } else {
        Err(FrontMatterError::MissingRequiredFields(missing))
    }
}

/// Split off the first line, dropping its terminator (`\n` or `\r\n`)
fn split_line(text: &str) -> (&str, &str) {
    match text.find('\n') {
        Some(pos) => {
            let line = &text[..pos];
            (line.strip_suffix('\r').unwrap_or(line), &text[pos + 1..])
        }
        None => (text.strip_suffix('\r').unwrap_or(text), ""),
    }
}
