//! Inline span rendering: code spans, links and emphasis.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// First code point handed out for held markup (Supplementary Private Use
/// Area-B, which runs to `U+10FFFD`).
const HOLD_BASE: u32 = 0x10_0000;
const HOLD_CAPACITY: usize = 0xFFFE;

/// Markup emitted by earlier passes, each piece replaced in the working line
/// by a single private-use character that no pattern matches.
#[derive(Debug, Default)]
struct Held {
    pieces: Vec<String>,
}

impl Held {
    /// Store `markup` and return the character standing in for it.
    fn hold(&mut self, markup: String) -> String {
        if self.pieces.len() >= HOLD_CAPACITY {
            return markup;
        }
        match char::from_u32(HOLD_BASE + self.pieces.len() as u32) {
            Some(marker) => {
                self.pieces.push(markup);
                marker.to_string()
            }
            None => markup,
        }
    }

    fn index(&self, c: char) -> Option<usize> {
        let index = (c as u32).checked_sub(HOLD_BASE)? as usize;
        (index < self.pieces.len()).then_some(index)
    }

    /// Swap every marker back for its markup.
    fn restore(&self, line: &str) -> String {
        let mut out = String::with_capacity(line.len());
        for c in line.chars() {
            match self.index(c) {
                Some(index) => out.push_str(&self.pieces[index]),
                None => out.push(c),
            }
        }
        out
    }
}

static CODE_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]+)`").expect("code span pattern is valid"));

/// Tags written directly in the source.
static RAW_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?[A-Za-z][^<>]*>").expect("raw tag pattern is valid"));

static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.*?)\]\((.*?)\)").expect("link pattern is valid"));

/// Emphasis delimiters in precedence order, with the markup they produce.
static EMPHASIS: LazyLock<Vec<(Regex, &'static str, &'static str)>> = LazyLock::new(|| {
    [
        (r"\*\*\*(.+?)\*\*\*", "<strong><em>", "</em></strong>"),
        (r"___(.+?)___", "<strong><em>", "</em></strong>"),
        (r"\*\*(.+?)\*\*", "<strong>", "</strong>"),
        (r"__(.+?)__", "<strong>", "</strong>"),
        (r"\*(.+?)\*", "<em>", "</em>"),
        (r"_(.+?)_", "<em>", "</em>"),
    ]
    .into_iter()
    .map(|(pattern, open, close)| {
        (
            Regex::new(pattern).expect("emphasis pattern is valid"),
            open,
            close,
        )
    })
    .collect()
});

/// Render the inline markup of a single line.
///
/// Code spans are matched first and their contents escaped, then raw tags and
/// links, then emphasis from the longest delimiter run to the shortest. Every
/// tag a pass emits is held out of the line, so later passes can match around
/// it but never inside it.
pub fn render_inline(line: &str) -> String {
    let mut held = Held::default();

    // Source characters that collide with markers are held as themselves.
    let mut work: String = line
        .chars()
        .map(|c| {
            if (c as u32) >= HOLD_BASE {
                held.hold(c.to_string())
            } else {
                c.to_string()
            }
        })
        .collect();

    work = CODE_SPAN
        .replace_all(&work, |caps: &Captures<'_>| {
            let code = escape_html(&held.restore(&caps[1]));
            held.hold(format!("<code>{code}</code>"))
        })
        .into_owned();

    work = RAW_TAG
        .replace_all(&work, |caps: &Captures<'_>| held.hold(caps[0].to_string()))
        .into_owned();

    work = LINK
        .replace_all(&work, |caps: &Captures<'_>| {
            let open = held.hold(format!(r#"<a href="{}">"#, &caps[2]));
            let close = held.hold("</a>".to_string());
            format!("{open}{}{close}", &caps[1])
        })
        .into_owned();

    for (pattern, open, close) in EMPHASIS.iter() {
        work = pattern
            .replace_all(&work, |caps: &Captures<'_>| {
                let open = held.hold((*open).to_string());
                let close = held.hold((*close).to_string());
                format!("{open}{}{close}", &caps[1])
            })
            .into_owned();
    }

    held.restore(&work)
}

/// Escape the characters that would otherwise be read as markup.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Reduce rendered inline HTML to its text content.
///
/// Only `<` followed by a letter or `/` starts a tag, so stray angle brackets
/// in source text survive.
pub(crate) fn plain_text(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut chars = html.chars().peekable();

    while let Some(c) = chars.next() {
        let starts_tag = c == '<'
            && chars
                .peek()
                .is_some_and(|next| next.is_ascii_alphabetic() || *next == '/');
        if starts_tag {
            for skipped in chars.by_ref() {
                if skipped == '>' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }

    out.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_emphasis_by_precedence() {
        assert_eq!(
            render_inline("***bold-italic***"),
            "<strong><em>bold-italic</em></strong>"
        );
        assert_eq!(
            render_inline("___bold-italic___"),
            "<strong><em>bold-italic</em></strong>"
        );
        assert_eq!(
            render_inline("**a** *b*"),
            "<strong>a</strong> <em>b</em>"
        );
        assert_eq!(render_inline("__a__ _b_"), "<strong>a</strong> <em>b</em>");
    }

    #[test]
    fn emphasis_is_non_greedy() {
        assert_eq!(
            render_inline("*one* and *two*"),
            "<em>one</em> and <em>two</em>"
        );
    }

    #[test]
    fn nests_single_inside_double() {
        assert_eq!(
            render_inline("**bold *and* more**"),
            "<strong>bold <em>and</em> more</strong>"
        );
    }

    #[test]
    fn leaves_unmatched_markers_literal() {
        assert_eq!(render_inline("2 * 3 = 6"), "2 * 3 = 6");
        assert_eq!(render_inline("**"), "**");
        assert_eq!(render_inline("[broken](link"), "[broken](link");
        assert_eq!(render_inline("`open"), "`open");
    }

    #[test]
    fn code_spans_are_opaque() {
        assert_eq!(
            render_inline("run `cargo *build*` now"),
            "run <code>cargo *build*</code> now"
        );
        assert_eq!(
            render_inline("`<div>` & `a && b`"),
            "<code>&lt;div&gt;</code> & <code>a &amp;&amp; b</code>"
        );
    }

    #[test]
    fn renders_links_without_touching_url() {
        assert_eq!(
            render_inline("see [the *guide*](/guides/my_setup_page.html)"),
            r#"see <a href="/guides/my_setup_page.html">the <em>guide</em></a>"#
        );
    }

    #[test]
    fn emphasis_encloses_code_and_links() {
        assert_eq!(
            render_inline("**Run `cargo build` first**"),
            "<strong>Run <code>cargo build</code> first</strong>"
        );
        assert_eq!(
            render_inline("*see [docs](d.html) now*"),
            r#"<em>see <a href="d.html">docs</a> now</em>"#
        );
    }

    #[test]
    fn nests_double_inside_single() {
        assert_eq!(
            render_inline("*a **b** c*"),
            "<em>a <strong>b</strong> c</em>"
        );
    }

    #[test]
    fn code_inside_emphasis_stays_literal() {
        assert_eq!(
            render_inline("_see `a_b_c` here_"),
            "<em>see <code>a_b_c</code> here</em>"
        );
    }

    #[test]
    fn raw_tag_attributes_are_untouched() {
        assert_eq!(
            render_inline(r#"<span class="a_b_c">*hi*</span>"#),
            r#"<span class="a_b_c"><em>hi</em></span>"#
        );
    }

    #[test]
    fn private_use_characters_survive() {
        assert_eq!(
            render_inline("\u{10FFFD} and \u{100000} *x*"),
            "\u{10FFFD} and \u{100000} <em>x</em>"
        );
    }

    #[test]
    fn extracts_plain_text() {
        assert_eq!(
            plain_text("Using <code>&lt;div&gt;</code> <em>well</em>"),
            "Using <div> well"
        );
        assert_eq!(plain_text("a < b"), "a < b");
    }
}
