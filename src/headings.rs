//! Heading pass: annotate every group heading and open its wrapper.

use regex::Captures;

use crate::markup::Markup;

/// Output of [`rewrite_headings`].
#[derive(Debug)]
pub struct HeadingRewrite {
    pub text: String,
    /// Captured titles, in document order.
    pub titles: Vec<String>,
}

impl HeadingRewrite {
    pub fn count(&self) -> usize {
        self.titles.len()
    }
}

/// Replace each heading match with the annotated heading, followed on the next
/// line by the open wrapper marker. Text outside the matches is left alone.
pub fn rewrite_headings(text: &str, markup: &Markup) -> HeadingRewrite {
    let mut titles = Vec::new();
    let rewritten = markup.heading.replace_all(text, |caps: &Captures<'_>| {
        let title = caps.name("title").or_else(|| caps.get(1));
        titles.push(title.map_or_else(String::new, |m| m.as_str().to_string()));

        let mut out = String::new();
        caps.expand(&markup.heading_template, &mut out);
        out.push('\n');
        out.push_str(&markup.open_marker);
        out
    });
    log::debug!("rewrote {} heading(s)", titles.len());

    HeadingRewrite {
        text: rewritten.into_owned(),
        titles,
    }
}
