use std::collections::HashSet;

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::markdown::toc::types::HeadingRecord;

lazy_static! {
    // The closing level is captured separately since the regex crate has no backreferences
    static ref HEADING_REGEX: Regex = Regex::new(
        r"(?is)<h([1-6])(\s[^>]*)?>(.*?)</h([1-6])\s*>"
    ).unwrap();

    // Leading whitespace keeps `data-id` and friends from matching
    static ref ID_REGEX: Regex = Regex::new(r#"(?i)(?:^|\s)id\s*=\s*["']([^"']+)["']"#).unwrap();

    static ref OPEN_TAG_REGEX: Regex = Regex::new(r"<[A-Za-z][A-Za-z0-9]*(\s[^>]*)?>").unwrap();

    static ref TAG_REGEX: Regex = Regex::new(r"<[^>]*>").unwrap();
}

/// Extract heading records from rendered HTML.
///
/// The anchor is the heading's own `id`, then an `id` on an element nested
/// inside it (comrak puts it on an inner `<a>`), and finally a slug of the
/// heading text made unique with `-1`, `-2`, ... suffixes.
pub fn extract_headings_from_html(html: &str) -> Vec<HeadingRecord> {
    let mut headings = Vec::new();
    let mut used_ids: HashSet<String> = HashSet::new();

    for cap in HEADING_REGEX.captures_iter(html) {
        if cap[1] != cap[4] {
            debug!("Skipping heading with mismatched tags: h{} / h{}", &cap[1], &cap[4]);
            continue;
        }

        let depth: i32 = match cap[1].parse() {
            Ok(depth) => depth,
            Err(_) => continue,
        };

        let inner = &cap[3];
        let text = strip_html_tags(inner);

        let id = cap
            .get(2)
            .and_then(|attrs| find_id(attrs.as_str()))
            .or_else(|| nested_id(inner))
            .unwrap_or_else(|| unique_id(&generate_id_from_text(&text), &used_ids));

        used_ids.insert(id.clone());
        headings.push(HeadingRecord::new(text, depth, format!("#{}", id)));
    }

    debug!("Extracted {} headings from HTML", headings.len());
    headings
}

fn find_id(attrs: &str) -> Option<String> {
    ID_REGEX.captures(attrs).map(|id| id[1].to_string())
}

/// First `id` attribute on any element inside the heading
fn nested_id(inner: &str) -> Option<String> {
    OPEN_TAG_REGEX
        .captures_iter(inner)
        .filter_map(|tag| tag.get(1))
        .find_map(|attrs| find_id(attrs.as_str()))
}

/// Append the first free `-N` suffix, the way comrak numbers repeated anchors
fn unique_id(base: &str, used_ids: &HashSet<String>) -> String {
    let mut candidate = base.to_string();
    let mut suffix = 0;
    while used_ids.contains(&candidate) {
        suffix += 1;
        candidate = format!("{}-{}", base, suffix);
    }
    candidate
}

/// Strip HTML tags from text and decode entities
fn strip_html_tags(text: &str) -> String {
    let stripped = TAG_REGEX.replace_all(text, "");
    html_escape::decode_html_entities(stripped.trim()).to_string()
}

fn generate_id_from_text(text: &str) -> String {
    slug::slugify(text)
}
