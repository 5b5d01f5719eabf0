//! Plain-text document normalization.
//!
//! Loads a markdown-lite text document into blocks: `#` runs mark
//! headings, `![alt](uri)` image references are captured (first one per
//! line wins) and stripped from the text, empty lines become blank
//! boundary blocks.

use regex::Regex;
use std::fs;
use std::path::Path;

use super::DocumentSource;
use crate::error::Result;
use crate::model::{Block, BlockStyle};

/// A text document loaded into memory.
pub struct TextSource {
    name: String,
    content: String,
    image_markup: Regex,
}

impl TextSource {
    /// Load a text document from a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        Ok(Self::named(path.display().to_string(), content))
    }

    /// Wrap an in-memory string as a text document.
    pub fn from_string(content: impl Into<String>) -> Self {
        Self::named("<string>", content)
    }

    fn named(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            image_markup: Regex::new(r"!\[[^\]]*\]\(([^)\s]+)\)").unwrap(),
        }
    }

    /// Normalize one line into a block.
    fn normalize_line(&self, line: &str) -> Block {
        let image = self
            .image_markup
            .captures(line)
            .map(|captures| captures[1].to_string());
        let text = self.image_markup.replace_all(line, "");

        let trimmed = text.trim_start();
        let marks = trimmed.bytes().take_while(|&b| b == b'#').count();
        let block = if (1..=6).contains(&marks) && trimmed[marks..].starts_with(' ') {
            Block::new(&trimmed[marks + 1..], BlockStyle::heading(marks as u8))
        } else {
            Block::normal(text.as_ref())
        };

        match image {
            Some(uri) => block.with_image(uri),
            None => block,
        }
    }
}

impl DocumentSource for TextSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn blocks(&self) -> Result<Vec<Block>> {
        Ok(self
            .content
            .lines()
            .map(|line| self.normalize_line(line))
            .collect())
    }
}
