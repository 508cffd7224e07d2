use serde::{Deserialize, Serialize};

/// A single heading extracted from a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingRecord {
    /// Display text
    pub value: String,
    /// Heading level, nominally 1-6 but never validated
    pub depth: i32,
    /// Anchor target, e.g. `#installation`
    pub url: String,
}

impl HeadingRecord {
    pub fn new(value: impl Into<String>, depth: i32, url: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            depth,
            url: url.into(),
        }
    }
}

/// Heading texts to leave out of the table of contents.
///
/// Accepts either a single string or a list of strings in configuration
/// files. Entries are split on `|` into alternatives; each alternative is
/// literal text matched against the whole heading text, ignoring case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Exclude {
    Single(String),
    Many(Vec<String>),
}

impl Default for Exclude {
    fn default() -> Self {
        Exclude::Single(String::new())
    }
}

impl From<&str> for Exclude {
    fn from(pattern: &str) -> Self {
        Exclude::Single(pattern.to_string())
    }
}

impl From<String> for Exclude {
    fn from(pattern: String) -> Self {
        Exclude::Single(pattern)
    }
}

impl From<Vec<String>> for Exclude {
    fn from(patterns: Vec<String>) -> Self {
        Exclude::Many(patterns)
    }
}

impl From<Vec<&str>> for Exclude {
    fn from(patterns: Vec<&str>) -> Self {
        Exclude::Many(patterns.into_iter().map(String::from).collect())
    }
}

impl Exclude {
    /// Build the case-folded matcher for these alternatives
    pub fn matcher(&self) -> ExcludeSet {
        match self {
            Exclude::Single(pattern) => ExcludeSet::new([pattern.as_str()]),
            Exclude::Many(patterns) => ExcludeSet::new(patterns.iter().map(String::as_str)),
        }
    }
}

/// Whole-string, case-insensitive matcher over a set of literal alternatives.
///
/// `|` separates alternatives; every other character is matched as is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExcludeSet {
    alternatives: Vec<String>,
}

impl ExcludeSet {
    /// An empty set of alternatives behaves like the single empty
    /// alternative: it only ever matches empty text.
    pub fn new<'a, I>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut alternatives: Vec<String> = alternatives
            .into_iter()
            .flat_map(|pattern| pattern.split('|'))
            .map(|alt| alt.to_lowercase())
            .collect();

        if alternatives.is_empty() {
            alternatives.push(String::new());
        }

        alternatives.sort();
        alternatives.dedup();

        Self { alternatives }
    }

    pub fn is_match(&self, text: &str) -> bool {
        let folded = text.to_lowercase();
        self.alternatives.iter().any(|alt| *alt == folded)
    }
}

/// Options for rendering an inline table of contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocOptions {
    /// Headings at or below this level (numerically at or above) get indented
    #[serde(default = "defaults::indent_depth")]
    pub indent_depth: i32,

    /// Shallowest heading level to include
    #[serde(default = "defaults::from_heading")]
    pub from_heading: i32,

    /// Deepest heading level to include
    #[serde(default = "defaults::to_heading")]
    pub to_heading: i32,

    /// Wrap the list in a `<details open>` disclosure
    #[serde(default = "defaults::as_disclosure")]
    pub as_disclosure: bool,

    #[serde(default)]
    pub exclude: Exclude,

    /// Summary label shown on the disclosure toggle
    #[serde(default = "defaults::label")]
    pub label: String,
}

impl Default for TocOptions {
    fn default() -> Self {
        Self {
            indent_depth: defaults::indent_depth(),
            from_heading: defaults::from_heading(),
            to_heading: defaults::to_heading(),
            as_disclosure: defaults::as_disclosure(),
            exclude: Exclude::default(),
            label: defaults::label(),
        }
    }
}

mod defaults {
    pub fn indent_depth() -> i32 {
        3
    }

    pub fn from_heading() -> i32 {
        1
    }

    pub fn to_heading() -> i32 {
        6
    }

    pub fn as_disclosure() -> bool {
        true
    }

    pub fn label() -> String {
        "Table of Contents".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = TocOptions::default();
        assert_eq!(options.indent_depth, 3);
        assert_eq!(options.from_heading, 1);
        assert_eq!(options.to_heading, 6);
        assert!(options.as_disclosure);
        assert_eq!(options.exclude, Exclude::Single(String::new()));
        assert_eq!(options.label, "Table of Contents");
    }

    #[test]
    fn test_empty_exclude_matches_only_empty_text() {
        let set = Exclude::default().matcher();
        assert!(!set.is_match("Introduction"));
        assert!(set.is_match(""));

        let set = Exclude::Many(Vec::new()).matcher();
        assert!(!set.is_match("FAQ"));
        assert!(set.is_match(""));
    }

    #[test]
    fn test_exclude_is_whole_string_and_case_insensitive() {
        let set = Exclude::from(vec!["Introduction", "FAQ"]).matcher();
        assert!(set.is_match("Introduction"));
        assert!(set.is_match("introduction"));
        assert!(set.is_match("faq"));
        assert!(!set.is_match("Introduction to X"));
        assert!(!set.is_match("The FAQ"));
    }

    #[test]
    fn test_exclude_pipe_separates_alternatives() {
        let set = Exclude::from("a|b").matcher();
        assert!(set.is_match("A"));
        assert!(set.is_match("b"));
        assert!(!set.is_match("a|b"));

        let set = Exclude::from(vec!["Introduction|FAQ", "Credits"]).matcher();
        assert!(set.is_match("faq"));
        assert!(set.is_match("credits"));
        assert!(!set.is_match("Introduction|FAQ"));
    }

    #[test]
    fn test_exclude_alternatives_are_otherwise_literal() {
        let set = Exclude::from(".*").matcher();
        assert!(!set.is_match("anything"));
        assert!(set.is_match(".*"));
    }

    #[test]
    fn test_deserialize_exclude_string_or_list() {
        let options: TocOptions = serde_yaml::from_str("exclude: FAQ\n").unwrap();
        assert_eq!(options.exclude, Exclude::Single("FAQ".to_string()));

        let options: TocOptions =
            serde_yaml::from_str("exclude:\n  - FAQ\n  - Credits\nindent_depth: 2\n").unwrap();
        assert_eq!(
            options.exclude,
            Exclude::Many(vec!["FAQ".to_string(), "Credits".to_string()])
        );
        assert_eq!(options.indent_depth, 2);
        assert_eq!(options.to_heading, 6);
        assert!(options.as_disclosure);
    }
}
