//! Pretty-printing for parenthesized logical formulas.
//!
//! Formulas are laid out in one left-to-right pass over their tokens. At each opening
//! parenthesis the whole subtree is measured once; if it fits the column budget it is crammed
//! onto the current line, otherwise its children go on their own indented lines. Lines that are
//! still too long afterwards are word-wrapped under their original indentation.

mod error;
pub mod layout;
pub mod token;
pub mod wrap;

use log::debug;

pub use error::{check_balanced, MalformedInput};
pub use layout::{layout, measure, Subtree, SubtreeTable};
pub use token::{tokenize, Token};
pub use wrap::{word_wrap, wrap_line, wrap_lines};

pub const DEFAULT_COLUMN_WIDTH: usize = 80;
pub const DEFAULT_INDENT_WIDTH: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Lines must be strictly narrower than this.
    pub column_width: usize,
    /// Spaces per nesting level.
    pub indent_width: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            column_width: DEFAULT_COLUMN_WIDTH,
            indent_width: DEFAULT_INDENT_WIDTH,
        }
    }
}

/// Formats `input`; every line of the result ends in `\n`. Unbalanced input is laid out anyway,
/// use [`try_format_sexpression`] to reject it.
pub fn format_sexpression(input: &str, config: &LayoutConfig) -> String {
    let tokens = tokenize(input);
    debug!("formatting {} tokens", tokens.len());
    wrap_lines(&layout(&tokens, config), config)
}

pub fn try_format_sexpression(
    input: &str,
    config: &LayoutConfig,
) -> Result<String, MalformedInput> {
    let tokens = tokenize(input);
    check_balanced(&tokens)?;
    Ok(wrap_lines(&layout(&tokens, config), config))
}

/// A numbered markdown section presenting an already formatted formula in a code block.
pub fn markdown_section(n: usize, formatted: &str) -> String {
    format!("## Formula {n}\n\nFormula {n} states:\n```\n{formatted}```\n\n")
}
