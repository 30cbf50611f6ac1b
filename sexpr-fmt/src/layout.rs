use log::{debug, trace};

use crate::{token::Token, LayoutConfig};

/// The tokens enclosed by one opening parenthesis, including its matching close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subtree {
    /// Exclusive end index: one past the matching `)`, or the token count if there is none.
    pub end: usize,
    /// Sum of the widths of the tokens in the span.
    pub width: usize,
}

impl Subtree {
    /// Estimated width of the subtree crammed onto one line at the given depth. The separating
    /// spaces are not counted; the line wrapper absorbs the difference.
    pub fn fit_length(&self, depth: usize, config: &LayoutConfig) -> usize {
        config
            .indent_width
            .saturating_mul(depth)
            .saturating_add(self.width)
    }
}

/// Scans forward from `start`, the index just after an opening parenthesis, to the matching close.
pub fn measure(tokens: &[Token<'_>], start: usize) -> Subtree {
    let mut depth = 0usize;
    let mut width = 0;
    for (idx, token) in tokens.iter().enumerate().skip(start) {
        width += token.width();
        match token {
            Token::Open => depth += 1,
            Token::Close if depth == 0 => return Subtree { end: idx + 1, width },
            Token::Close => depth -= 1,
            Token::Atom(_) => {}
        }
    }
    Subtree {
        end: tokens.len(),
        width,
    }
}

/// Every subtree of a token sequence, precomputed in one pass so that the layout engine never
/// rescans. Answers the same question as [`measure`] for each opening parenthesis.
pub struct SubtreeTable {
    prefix_widths: Vec<usize>,
    ends: Vec<usize>,
}

impl SubtreeTable {
    pub fn new(tokens: &[Token<'_>]) -> Self {
        let mut prefix_widths = Vec::with_capacity(tokens.len() + 1);
        prefix_widths.push(0);
        let mut ends = vec![tokens.len(); tokens.len()];
        let mut open = Vec::new();
        for (idx, token) in tokens.iter().enumerate() {
            prefix_widths.push(prefix_widths[idx] + token.width());
            match token {
                Token::Open => open.push(idx),
                Token::Close => {
                    if let Some(opened_at) = open.pop() {
                        ends[opened_at] = idx + 1;
                    }
                }
                Token::Atom(_) => {}
            }
        }
        Self {
            prefix_widths,
            ends,
        }
    }

    /// The subtree opened by the parenthesis at index `open`.
    pub fn subtree(&self, open: usize) -> Subtree {
        let end = self.ends[open];
        Subtree {
            end,
            width: self.prefix_widths[end] - self.prefix_widths[open + 1],
        }
    }
}

/// What the last thing written to the output was. Decides the separator before the next token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Emitted {
    Nothing,
    OpenParen,
    Token,
}

struct Layout<'c> {
    config: &'c LayoutConfig,
    out: String,
    depth: usize,
    /// Depth at which the active cram decision was made.
    cram: Option<usize>,
    last: Emitted,
}

impl<'c> Layout<'c> {
    fn new(config: &'c LayoutConfig, capacity: usize) -> Self {
        Self {
            config,
            out: String::with_capacity(capacity),
            depth: 0,
            cram: None,
            last: Emitted::Nothing,
        }
    }

    fn push(&mut self, idx: usize, token: Token<'_>, subtrees: &SubtreeTable) {
        match token {
            Token::Open => {
                if self.cram.is_none() {
                    let fit = subtrees.subtree(idx).fit_length(self.depth, self.config);
                    if fit < self.config.column_width {
                        trace!("cramming subtree at token {idx}, depth {}: {fit}", self.depth);
                        self.cram = Some(self.depth);
                    }
                }
                self.separate();
                self.out.push('(');
                self.last = Emitted::OpenParen;
                self.depth += 1;
            }
            Token::Close => {
                self.depth = self.depth.saturating_sub(1);
                self.out.push(')');
                self.last = Emitted::Token;
                if self.cram == Some(self.depth) {
                    self.cram = None;
                }
            }
            Token::Atom(text) => {
                self.separate();
                self.out.push_str(text);
                self.last = Emitted::Token;
            }
        }
    }

    fn separate(&mut self) {
        match self.last {
            Emitted::Nothing | Emitted::OpenParen => {}
            Emitted::Token if self.cram.is_some() => self.out.push(' '),
            Emitted::Token => {
                self.out.push('\n');
                let indent = self.depth.saturating_mul(self.config.indent_width);
                self.out.extend(std::iter::repeat(' ').take(indent));
            }
        }
    }
}

/// Lays tokens out as indented lines, cramming each subtree that fits the column budget onto one
/// line. The result has no trailing newline and is not yet wrapped.
pub fn layout(tokens: &[Token<'_>], config: &LayoutConfig) -> String {
    let subtrees = SubtreeTable::new(tokens);
    let layout = tokens
        .iter()
        .enumerate()
        .fold(Layout::new(config, tokens.len() * 4), |mut layout, (idx, token)| {
            layout.push(idx, *token, &subtrees);
            layout
        });
    debug!(
        "laid out {} tokens into {} lines",
        tokens.len(),
        layout.out.lines().count()
    );
    layout.out
}
