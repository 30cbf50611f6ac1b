use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token<'a> {
    Open,
    Close,
    Atom(&'a str),
}

impl<'a> Token<'a> {
    pub fn text(&self) -> &'a str {
        match self {
            Token::Open => "(",
            Token::Close => ")",
            Token::Atom(text) => text,
        }
    }

    /// Number of columns the token occupies when printed. Operators such as `∧` or `≺` are one
    /// column each even though they are several bytes long.
    pub fn width(&self) -> usize {
        match self {
            Token::Open | Token::Close => 1,
            Token::Atom(text) => text.chars().count(),
        }
    }
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}

/// Splits formula text into parentheses and whitespace-delimited atoms, in source order.
///
/// Parentheses never need surrounding whitespace: `¬(Tag e1)` yields `¬`, `(`, `Tag`, `e1`, `)`.
/// Any input tokenizes, balanced or not.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    for chunk in input.split_whitespace() {
        let mut rest = chunk;
        while let Some(idx) = rest.find(|c: char| c == '(' || c == ')') {
            if idx > 0 {
                tokens.push(Token::Atom(&rest[..idx]));
            }
            tokens.push(if rest[idx..].starts_with('(') {
                Token::Open
            } else {
                Token::Close
            });
            rest = &rest[idx + 1..];
        }
        if !rest.is_empty() {
            tokens.push(Token::Atom(rest));
        }
    }
    tokens
}
