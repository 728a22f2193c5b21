/// Configuration for the CSS3 parser
pub struct ParserConfig {
    /// Source of the stream (filename, url, etc.), recorded on the stylesheet
    pub source: Option<String>,
    /// Maximum nesting depth of blocks and functions. Exceeding the cap aborts the parse so
    /// adversarial input cannot exhaust the stack.
    pub max_nesting_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            source: None,
            max_nesting_depth: 256,
        }
    }
}
