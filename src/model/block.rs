//! Block-level types.

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

/// One normalized line of document content.
///
/// Blocks are the uniform shape the host document collaborator hands to
/// the core: paragraph text, a style tag, and at most one resolved image
/// reference. Text is trimmed and NFC-normalized at construction time and
/// blocks are immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Paragraph text, trimmed of surrounding whitespace
    pub text: String,

    /// Paragraph style
    pub style: BlockStyle,

    /// Resolved image URI carried by this block, if any (first found wins)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Block {
    /// Create a new block with the given style.
    pub fn new(text: impl Into<String>, style: BlockStyle) -> Self {
        let text: String = text.into();
        Self {
            text: text.trim().nfc().collect(),
            style,
            image: None,
        }
    }

    /// Create a normal text block.
    pub fn normal(text: impl Into<String>) -> Self {
        Self::new(text, BlockStyle::Normal)
    }

    /// Create a heading block. The level is clamped to 1..=6.
    pub fn heading(text: impl Into<String>, level: u8) -> Self {
        Self::new(text, BlockStyle::heading(level))
    }

    /// Create an empty normal block (a segmentation boundary).
    pub fn empty() -> Self {
        Self::normal("")
    }

    /// Attach an image reference to the block.
    pub fn with_image(mut self, uri: impl Into<String>) -> Self {
        self.image = Some(uri.into());
        self
    }

    /// Check if this block is a heading.
    pub fn is_heading(&self) -> bool {
        self.style.is_heading()
    }

    /// Get the heading level (1-6) or None.
    pub fn heading_level(&self) -> Option<u8> {
        self.style.heading_level()
    }

    /// Check if the block carries neither text nor an image.
    ///
    /// Blank blocks act as segmentation boundaries during parsing and are
    /// skipped (without counting) by the context-window walks.
    pub fn is_blank(&self) -> bool {
        self.text.is_empty() && self.image.is_none()
    }
}

/// Paragraph style of a block.
///
/// Converts to and from the host tag vocabulary (`NORMAL_TEXT`,
/// `HEADING_1` .. `HEADING_6`). Unknown tags degrade to `Normal` rather
/// than failing: document content is untrusted free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BlockStyle {
    /// Body text
    #[default]
    Normal,
    /// Heading with level 1..=6
    Heading(u8),
}

impl BlockStyle {
    /// Create a heading style. The level is clamped to 1..=6.
    pub fn heading(level: u8) -> Self {
        BlockStyle::Heading(level.clamp(1, 6))
    }

    /// Parse a host style tag. Anything that is not `HEADING_<1..6>` is
    /// normal text.
    pub fn from_tag(tag: &str) -> Self {
        match tag.strip_prefix("HEADING_") {
            Some(level) => match level.parse::<u8>() {
                Ok(level @ 1..=6) => BlockStyle::Heading(level),
                _ => BlockStyle::Normal,
            },
            None => BlockStyle::Normal,
        }
    }

    /// The host tag string for this style.
    pub fn tag(&self) -> String {
        match self {
            BlockStyle::Normal => "NORMAL_TEXT".to_string(),
            BlockStyle::Heading(level) => format!("HEADING_{}", level),
        }
    }

    /// Check if this is a heading style.
    pub fn is_heading(&self) -> bool {
        matches!(self, BlockStyle::Heading(_))
    }

    /// Get the heading level (1-6) or None.
    pub fn heading_level(&self) -> Option<u8> {
        match self {
            BlockStyle::Normal => None,
            BlockStyle::Heading(level) => Some(*level),
        }
    }
}

impl From<String> for BlockStyle {
    fn from(tag: String) -> Self {
        BlockStyle::from_tag(&tag)
    }
}

impl From<BlockStyle> for String {
    fn from(style: BlockStyle) -> Self {
        style.tag()
    }
}
