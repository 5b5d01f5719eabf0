//! Parsing options and configuration.

/// Default name of the document section holding the knowledge base.
pub const DEFAULT_SECTION: &str = "Metadata";

/// Options for parsing a document into an entry map.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Named section to parse, or `None` for the whole document body
    pub section: Option<String>,

    /// Whether to backfill blank descriptions from child entry names
    pub backfill: bool,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the given named section instead of the default.
    pub fn with_section(mut self, name: impl Into<String>) -> Self {
        self.section = Some(name.into());
        self
    }

    /// Parse the whole document body instead of a named section.
    pub fn whole_body(mut self) -> Self {
        self.section = None;
        self
    }

    /// Enable or disable the description backfill pass.
    pub fn with_backfill(mut self, backfill: bool) -> Self {
        self.backfill = backfill;
        self
    }

    /// Disable the description backfill pass.
    pub fn without_backfill(mut self) -> Self {
        self.backfill = false;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            section: Some(DEFAULT_SECTION.to_string()),
            backfill: true,
        }
    }
}
