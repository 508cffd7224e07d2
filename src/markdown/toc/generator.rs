use log::debug;

use crate::markdown::toc::types::{HeadingRecord, TocOptions};

/// A single rendered entry of the table of contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocItem {
    pub text: String,
    pub url: String,
    pub depth: i32,
    pub indented: bool,
}

impl TocItem {
    fn to_html(&self) -> String {
        let class = if self.indented {
            " class=\"toc-indent\""
        } else {
            ""
        };

        format!(
            "<li{}><a class=\"toc-link\" href=\"{}\">{}</a></li>\n",
            class,
            html_escape::encode_double_quoted_attribute(&self.url),
            html_escape::encode_text(&self.text)
        )
    }
}

/// The flat list of links making up a table of contents
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TocList {
    pub items: Vec<TocItem>,
}

impl TocList {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn to_html(&self) -> String {
        let mut html = String::from("<ul class=\"toc-list\">\n");
        for item in &self.items {
            html.push_str(&item.to_html());
        }
        html.push_str("</ul>");
        html
    }
}

/// A rendered table of contents, either bare or behind a disclosure toggle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TocFragment {
    List(TocList),
    Disclosure {
        label: String,
        open: bool,
        list: TocList,
    },
}

impl TocFragment {
    /// The list of links, regardless of wrapping
    pub fn list(&self) -> &TocList {
        match self {
            TocFragment::List(list) => list,
            TocFragment::Disclosure { list, .. } => list,
        }
    }

    pub fn to_html(&self) -> String {
        match self {
            TocFragment::List(list) => list.to_html(),
            TocFragment::Disclosure { label, open, list } => {
                let open_attr = if *open { " open" } else { "" };
                format!(
                    "<details{}>\n<summary class=\"toc-summary\">{}</summary>\n<div class=\"toc-body\">\n{}\n</div>\n</details>",
                    open_attr,
                    html_escape::encode_text(label),
                    list.to_html()
                )
            }
        }
    }
}

/// Keep the headings inside the configured level range that are not excluded.
///
/// Order of the input is preserved.
pub fn filter_headings<'a>(
    headings: &'a [HeadingRecord],
    options: &TocOptions,
) -> Vec<&'a HeadingRecord> {
    let excluded = options.exclude.matcher();

    let filtered: Vec<&HeadingRecord> = headings
        .iter()
        .filter(|heading| {
            heading.depth >= options.from_heading
                && heading.depth <= options.to_heading
                && !excluded.is_match(&heading.value)
        })
        .collect();

    debug!(
        "TOC keeps {} of {} headings (levels {}..={})",
        filtered.len(),
        headings.len(),
        options.from_heading,
        options.to_heading
    );

    filtered
}

/// Build the inline table of contents for a sequence of headings
pub fn generate_toc(headings: &[HeadingRecord], options: &TocOptions) -> TocFragment {
    let items = filter_headings(headings, options)
        .into_iter()
        .map(|heading| TocItem {
            text: heading.value.clone(),
            url: heading.url.clone(),
            depth: heading.depth,
            indented: heading.depth >= options.indent_depth,
        })
        .collect();

    let list = TocList { items };

    if options.as_disclosure {
        TocFragment::Disclosure {
            label: options.label.clone(),
            open: true,
            list,
        }
    } else {
        TocFragment::List(list)
    }
}
