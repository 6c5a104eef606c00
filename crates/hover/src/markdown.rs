//! Hover contents to markdown, and markdown to HTML.
//!
//! Hovers from every provider at a position are flattened into one markdown
//! document, separated by horizontal rules. Before rendering, absolute
//! `file:///` links are rewritten into the panel's `openfile://` scheme so
//! the panel can intercept clicks on them.

use lsp_types::{Hover, HoverContents, MarkedString, MarkupContent, MarkupKind};

use crate::{HoverError, MarkdownRenderer};

/// Placed between the contents of consecutive hovers.
pub const HOVER_SEPARATOR: &str = "\n \n <hr> \n \n";

/// Link prefix for local files as produced by language servers.
pub const FILE_LINK_PREFIX: &str = "file:///";

/// Link prefix the panel intercepts to open files.
pub const OPEN_FILE_LINK_PREFIX: &str = "openfile://";

/// Flattens hovers into one markdown string.
///
/// Empty parts are skipped. Returns an empty string when no hover has
/// content.
pub fn markdown_from_hovers(hovers: &[Hover]) -> String {
	hovers
		.iter()
		.flat_map(|hover| contents_to_markdown(&hover.contents))
		.filter(|part| !part.is_empty())
		.collect::<Vec<_>>()
		.join(HOVER_SEPARATOR)
}

fn contents_to_markdown(contents: &HoverContents) -> Vec<String> {
	match contents {
		HoverContents::Scalar(marked) => vec![marked_to_markdown(marked)],
		HoverContents::Array(parts) => parts.iter().map(marked_to_markdown).collect(),
		HoverContents::Markup(markup) => vec![markup_to_markdown(markup)],
	}
}

fn marked_to_markdown(marked: &MarkedString) -> String {
	match marked {
		MarkedString::String(s) => s.clone(),
		MarkedString::LanguageString(ls) => code_block(&ls.language, &ls.value),
	}
}

fn markup_to_markdown(markup: &MarkupContent) -> String {
	match markup.kind {
		MarkupKind::Markdown => markup.value.clone(),
		MarkupKind::PlainText if markup.value.is_empty() => String::new(),
		MarkupKind::PlainText => code_block("", &markup.value),
	}
}

fn code_block(language: &str, value: &str) -> String {
	format!("```{language}\n{value}\n```")
}

/// Rewrites every `file:///` link into the `openfile://` scheme.
pub fn rewrite_file_links(markdown: &str) -> String {
	markdown.replace(FILE_LINK_PREFIX, OPEN_FILE_LINK_PREFIX)
}

/// Rewrites file links, then renders the markdown to an HTML fragment.
pub async fn markdown_to_html<R>(renderer: &R, markdown: &str) -> Result<String, HoverError>
where
	R: MarkdownRenderer + ?Sized,
{
	renderer.render(&rewrite_file_links(markdown)).await
}
