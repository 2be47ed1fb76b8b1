//! Markdown renderer for risotto documentation sites.
//!
//! Renders a fixed subset of Markdown: headings up to level four, emphasis,
//! fenced and inline code, links, flat lists and paragraphs. Rendering is
//! total; markers that do not pair up are emitted as literal text.

pub mod inline;
pub mod renderer;

pub use inline::{escape_html, render_inline};
pub use renderer::{render, Rendered};
