//! Line scanner that groups source lines into blocks.

use crate::inline::{escape_html, plain_text, render_inline};

const FENCE: &str = "```";

/// Deepest heading level recognised.
const MAX_HEADING_LEVEL: usize = 4;

/// The result of rendering one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// HTML fragment for the document body
    pub html: String,

    /// Text of the first level-1 heading, markup stripped
    pub title: Option<String>,
}

/// Kind of a flat list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    fn tag(self) -> &'static str {
        match self {
            Self::Unordered => "ul",
            Self::Ordered => "ol",
        }
    }
}

/// Classification of a single source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Line<'a> {
    Blank,
    Fence,
    Heading { level: usize, text: &'a str },
    Item { kind: ListKind, text: &'a str },
    Text(&'a str),
}

impl<'a> Line<'a> {
    fn classify(line: &'a str) -> Self {
        if line.trim().is_empty() {
            return Self::Blank;
        }
        if line.starts_with(FENCE) {
            return Self::Fence;
        }

        let hashes = line.bytes().take_while(|b| *b == b'#').count();
        if (1..=MAX_HEADING_LEVEL).contains(&hashes) {
            if let Some(text) = line[hashes..].strip_prefix(' ') {
                return Self::Heading {
                    level: hashes,
                    text: text.trim_end(),
                };
            }
        }

        if let Some(text) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
            return Self::Item {
                kind: ListKind::Unordered,
                text,
            };
        }

        let digits = line.bytes().take_while(u8::is_ascii_digit).count();
        if digits > 0 {
            if let Some(text) = line[digits..].strip_prefix(". ") {
                return Self::Item {
                    kind: ListKind::Ordered,
                    text,
                };
            }
        }

        Self::Text(line)
    }
}

/// The block currently accepting lines.
#[derive(Debug, Default)]
enum Open<'a> {
    #[default]
    Nothing,
    Paragraph(Vec<&'a str>),
    List(ListKind, Vec<&'a str>),
}

#[derive(Debug, Default)]
struct Scanner<'a> {
    blocks: Vec<String>,
    open: Open<'a>,
    title: Option<String>,
}

impl<'a> Scanner<'a> {
    /// Emit the open paragraph or list, if any.
    fn close(&mut self) {
        match std::mem::take(&mut self.open) {
            Open::Nothing => {}
            Open::Paragraph(lines) => {
                let body = lines
                    .iter()
                    .map(|line| render_inline(line))
                    .collect::<Vec<_>>()
                    .join("\n");
                // A block written as raw HTML is not wrapped.
                let block = if lines[0].starts_with('<') {
                    body
                } else {
                    format!("<p>{}</p>", body.trim())
                };
                self.blocks.push(block);
            }
            Open::List(kind, items) => {
                let mut block = format!("<{}>\n", kind.tag());
                for item in items {
                    block.push_str("<li>");
                    block.push_str(&render_inline(item));
                    block.push_str("</li>\n");
                }
                block.push_str(&format!("</{}>", kind.tag()));
                self.blocks.push(block);
            }
        }
    }

    fn text(&mut self, line: &'a str) {
        if let Open::Paragraph(lines) = &mut self.open {
            lines.push(line);
            return;
        }
        self.close();
        self.open = Open::Paragraph(vec![line]);
    }

    fn item(&mut self, kind: ListKind, text: &'a str) {
        if let Open::List(open_kind, items) = &mut self.open {
            if *open_kind == kind {
                items.push(text);
                return;
            }
        }
        self.close();
        self.open = Open::List(kind, vec![text]);
    }

    fn heading(&mut self, level: usize, text: &str) {
        self.close();
        let inner = render_inline(text);
        if level == 1 && self.title.is_none() {
            self.title = Some(plain_text(&inner));
        }
        self.blocks.push(format!("<h{level}>{inner}</h{level}>"));
    }

    fn code_block(&mut self, lines: &[&str]) {
        self.close();
        let mut block = String::from("<pre><code>");
        for line in lines {
            block.push_str(&escape_html(line));
            block.push('\n');
        }
        block.push_str("</code></pre>");
        self.blocks.push(block);
    }

    fn finish(mut self) -> Rendered {
        self.close();
        Rendered {
            html: self.blocks.join("\n"),
            title: self.title,
        }
    }
}

/// Render a Markdown document to an HTML fragment.
///
/// Never fails: markup that does not match is emitted as literal text. A code
/// fence without a closing line is treated as ordinary text.
pub fn render(source: &str) -> Rendered {
    let lines: Vec<&str> = source.lines().collect();
    let mut scanner = Scanner::default();

    let mut i = 0;
    while i < lines.len() {
        match Line::classify(lines[i]) {
            Line::Blank => scanner.close(),
            Line::Fence => {
                let body = &lines[i + 1..];
                if let Some(end) = body.iter().position(|line| line.starts_with(FENCE)) {
                    scanner.code_block(&body[..end]);
                    i += end + 2;
                    continue;
                }
                scanner.text(lines[i]);
            }
            Line::Heading { level, text } => scanner.heading(level, text),
            Line::Item { kind, text } => scanner.item(kind, text),
            Line::Text(text) => scanner.text(text),
        }
        i += 1;
    }

    scanner.finish()
}
