//! Builder‐style helper for constructing **Markdown prompts**.
//!
//! Writing verbose Markdown strings inline is tedious and error‐prone.
//! `PromptBuilder` offers a fluent API that lets you focus on the *content*
//! instead of the syntax.  Every method returns `self`, enabling
//! call-chaining:
//!
//! ```rust
//! use signpost_prompt::builder::PromptBuilder;
//!
//! let md = PromptBuilder::new()
//!     .add_section_h1("Routing Decision")
//!     .add_blank_line()
//!     .add_line("Pick exactly one option below.")
//!     .add_bullet_code("plan")
//!     .add_bullet_code("abort")
//!     .add_blank_line()
//!     .add_key_value("Respond with", "a single JSON object")
//!     .finalize();
//!
//! assert!(md.starts_with("# Routing Decision"));
//! ```
//!
//! The builder performs **no validation** besides `expect`ing that writing to
//! the internal `String` never fails (which it shouldn’t).  It also refrains
//! from smart-formatting to stay predictable—newlines and whitespace are
//! emitted exactly as requested, and pre-rendered blocks (such as routing
//! schema text) pass through verbatim.

use std::fmt::{Display, Write as _};

/// Fluent helper to produce markdown fragments.
///
/// Internally it owns a `String` buffer that grows with each chained call.
/// Once you’re done, call [`Self::finalize`] to obtain the assembled markdown.
pub struct PromptBuilder {
    buffer: String,
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptBuilder {
    /// Create a fresh, empty builder.
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    /// Add a level-1 (`#`) heading.
    pub fn add_section_h1(mut self, line: impl Display) -> Self {
        writeln!(self.buffer, "# {line}").expect("failed to write buffer");
        self
    }

    /// Add a level-2 (`##`) heading.
    pub fn add_section_h2(mut self, line: impl Display) -> Self {
        writeln!(self.buffer, "## {line}").expect("failed to write buffer");
        self
    }

    /// Add a plain line of text and a trailing newline.
    pub fn add_line(mut self, line: impl Display) -> Self {
        writeln!(self.buffer, "{line}").expect("failed to write buffer");
        self
    }

    /// Add a bold line (`**text**`) and a trailing newline.
    pub fn add_line_bold(mut self, line: impl Display) -> Self {
        writeln!(self.buffer, "**{line}**").expect("failed to write buffer");
        self
    }

    /// Add a key–value pair in **bold**:
    /// `**Key**: Value`
    pub fn add_key_value(mut self, key: impl Display, value: impl Display) -> Self {
        writeln!(self.buffer, "**{key}**: {value}").expect("failed to write buffer");
        self
    }

    /// Add a `- ` bullet line.
    pub fn add_bullet(mut self, line: impl Display) -> Self {
        writeln!(self.buffer, "- {line}").expect("failed to write buffer");
        self
    }

    /// Add a bullet whose content is rendered as inline code:
    /// `` - `item` ``
    pub fn add_bullet_code(mut self, line: impl Display) -> Self {
        writeln!(self.buffer, "- `{line}`").expect("failed to write buffer");
        self
    }

    /// Append a pre-rendered multi-line block **verbatim**.
    ///
    /// Unlike [`Self::add_line`] this adds no trailing newline of its own;
    /// generated routing text already ends with one.
    pub fn add_block(mut self, block: impl AsRef<str>) -> Self {
        self.buffer.push_str(block.as_ref());
        self
    }

    /// Embed a code block fenced as `json`.
    pub fn add_text_json(self, content: impl Display) -> Self {
        self.add_line("```json").add_line(content).add_line("```")
    }

    /// Insert a single blank line.
    pub fn add_blank_line(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Insert a "---" delimiter.
    pub fn add_delimiter(self) -> Self {
        self.add_line("---")
    }

    /// Retrieve the accumulated markdown and consume the builder.
    pub fn finalize(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bullets_and_blocks_compose() {
        let md = PromptBuilder::new()
            .add_line_bold("Routing options:")
            .add_bullet_code("plan")
            .add_bullet("fallback text")
            .finalize();

        assert_eq!(md, "**Routing options:**\n- `plan`\n- fallback text\n");
    }

    #[test]
    fn blocks_pass_through_verbatim() {
        let block = "Return a routing object with exactly one of:\n- **plan**\n";
        let md = PromptBuilder::new()
            .add_delimiter()
            .add_block(block)
            .finalize();

        assert_eq!(md, format!("---\n{block}"));
    }
}
