//! Text extraction from supported document formats

use crate::error::Result;
use pulldown_cmark::{Event, Parser, Tag};
use std::path::Path;

pub struct PlainTextExtractor;

impl PlainTextExtractor {
    pub async fn extract(&self, path: &Path) -> Result<String> {
        let content = tokio::fs::read_to_string(path).await?;
        Ok(content)
    }
}

/// Flattens markdown to plain text so downstream regexes never see
/// formatting syntax
pub struct MarkdownExtractor;

impl MarkdownExtractor {
    pub async fn extract(&self, path: &Path) -> Result<String> {
        let content = tokio::fs::read_to_string(path).await?;
        Ok(Self::strip_markdown(&content))
    }

    fn strip_markdown(markdown: &str) -> String {
        let mut text = String::with_capacity(markdown.len());

        for event in Parser::new(markdown) {
            match event {
                Event::Text(t) | Event::Code(t) => text.push_str(&t),
                Event::SoftBreak | Event::HardBreak => text.push(' '),
                Event::End(Tag::Paragraph)
                | Event::End(Tag::Heading(..))
                | Event::End(Tag::Item) => text.push('\n'),
                _ => {}
            }
        }

        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_markdown_removes_formatting() {
        let markdown = "# John Doe\n\n**Software Engineer** with `React` and *Node.js*\n\n- 5 years experience\n";
        let text = MarkdownExtractor::strip_markdown(markdown);

        assert!(text.contains("John Doe"));
        assert!(text.contains("React"));
        assert!(text.contains("Node.js"));
        assert!(!text.contains("**"));
        assert!(!text.contains('#'));
        assert!(!text.contains('`'));
    }
}
