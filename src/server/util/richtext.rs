//! Sanitization and mention extraction for comment bodies.
//!
//! Comment text arrives as user-authored HTML. We keep a small whitelist
//! of formatting tags and the anchor attributes the editor emits
//! (`href` and `data-user-id` for mentions); everything else is dropped.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

const ALLOWED_TAGS: &[&str] = &[
    "a",
    "p",
    "br",
    "em",
    "strong",
    "ul",
    "ol",
    "li",
    "blockquote",
];

static SCRIPT_BLOCK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<(script|style)\b[^>]*>.*?</(script|style)\s*>").unwrap()
});
static TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<\s*(/?)([a-zA-Z][a-zA-Z0-9]*)([^>]*)>").unwrap());
static HREF_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)\bhref\s*=\s*"([^"]*)""#).unwrap());
static USER_ID_ATTR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)\bdata-user-id\s*=\s*"(\d+)""#).unwrap());
static MENTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)<a\b[^>]*\bdata-user-id\s*=\s*"(\d+)"[^>]*>"#).unwrap());

/// Strips disallowed markup from a comment body.
///
/// Script and style blocks are removed along with their contents. Other
/// disallowed tags are removed but their inner text survives. Anchors
/// keep only `href` (non-javascript) and `data-user-id`.
pub fn sanitize(text: &str) -> String {
    let text = SCRIPT_BLOCK_RE.replace_all(text, "");
    TAG_RE
        .replace_all(&text, |caps: &Captures| {
            let tag = caps[2].to_lowercase();
            if !ALLOWED_TAGS.contains(&tag.as_str()) {
                return String::new();
            }
            if &caps[1] == "/" {
                return format!("</{}>", tag);
            }
            if tag == "a" {
                return rebuild_anchor(&caps[3]);
            }
            format!("<{}>", tag)
        })
        .into_owned()
}

fn rebuild_anchor(attrs: &str) -> String {
    let mut kept = String::new();
    if let Some(href) = HREF_RE.captures(attrs).and_then(|caps| caps.get(1)) {
        let href = href.as_str();
        if !href.trim_start().to_lowercase().starts_with("javascript:") {
            kept.push_str(&format!(" href=\"{}\"", href));
        }
    }
    if let Some(user_id) = USER_ID_ATTR_RE.captures(attrs).and_then(|caps| caps.get(1)) {
        kept.push_str(&format!(" data-user-id=\"{}\"", user_id.as_str()));
    }
    format!("<a{}>", kept)
}

/// Extracts the distinct user ids mentioned in a sanitized comment body,
/// in order of first appearance.
pub fn user_mentions(text: &str) -> Vec<i32> {
    let mut ids = Vec::new();
    for caps in MENTION_RE.captures_iter(text) {
        if let Ok(id) = caps[1].parse::<i32>() {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
    }
    ids
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_whitelisted_formatting() {
        let input = "<p>Hello <strong>world</strong> and <em>friends</em></p>";
        assert_eq!(sanitize(input), input);
    }

    #[test]
    fn removes_script_blocks_with_contents() {
        let input = "<p>before</p><script>alert('x')</script><p>after</p>";
        assert_eq!(sanitize(input), "<p>before</p><p>after</p>");
    }

    #[test]
    fn strips_disallowed_tags_but_keeps_text() {
        let input = "<div><p>kept</p></div><iframe src=\"x\">inner</iframe>";
        assert_eq!(sanitize(input), "<p>kept</p>inner");
    }

    #[test]
    fn anchors_lose_event_handlers_and_keep_href() {
        let input = r#"<a href="https://example.com" onclick="steal()">link</a>"#;
        assert_eq!(sanitize(input), r#"<a href="https://example.com">link</a>"#);
    }

    #[test]
    fn anchors_drop_javascript_hrefs() {
        let input = r#"<a href="javascript:alert(1)">link</a>"#;
        assert_eq!(sanitize(input), "<a>link</a>");
    }

    #[test]
    fn anchors_keep_mention_attribute() {
        let input = r#"<a data-user-id="17" class="mention">@Ada</a>"#;
        assert_eq!(sanitize(input), r#"<a data-user-id="17">@Ada</a>"#);
    }

    #[test]
    fn mentions_are_distinct_in_first_appearance_order() {
        let text = r#"<p><a data-user-id="5">@A</a> <a data-user-id="3">@B</a> <a data-user-id="5">@A</a></p>"#;
        assert_eq!(user_mentions(text), vec![5, 3]);
    }

    #[test]
    fn mentions_ignore_anchors_without_user_id() {
        let text = r#"<p><a href="https://example.com">link</a></p>"#;
        assert!(user_mentions(text).is_empty());
    }

    #[test]
    fn mentions_inside_scripts_never_survive_sanitization() {
        let input = r#"<script><a data-user-id="9">@X</a></script><p>hi</p>"#;
        let clean = sanitize(input);
        assert!(user_mentions(&clean).is_empty());
    }
}
