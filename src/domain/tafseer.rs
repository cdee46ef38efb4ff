//! Tafseer (verse commentary) records.

use serde::{Deserialize, Serialize};

/// A published commentary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TafseerEdition {
    pub identifier: String,
    pub language: String,
    pub name: String,
    pub author_name: String,
}

/// Commentary on a single ayah.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tafseer {
    pub text: String,
    pub author_name: String,
    pub resource_name: String,
}

/// Reduce the HTML markup some commentaries carry to plain text.
///
/// Tags are dropped, `<p>` and `<br>` become line breaks and the common
/// entities are decoded.
#[must_use]
pub fn strip_markup(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut tag = String::new();
    let mut in_tag = false;

    for c in html.chars() {
        match (in_tag, c) {
            (false, '<') => {
                in_tag = true;
                tag.clear();
            }
            (true, '>') => {
                in_tag = false;
                let name = tag
                    .trim_start_matches('/')
                    .split(|c: char| c.is_whitespace() || c == '/')
                    .next()
                    .unwrap_or("")
                    .to_ascii_lowercase();
                if (name == "p" || name == "br") && !text.ends_with('\n') && !text.is_empty() {
                    text.push('\n');
                }
            }
            (true, c) => tag.push(c),
            (false, c) => text.push(c),
        }
    }

    text.replace("&nbsp;", " ")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
        .trim()
        .to_string()
}
