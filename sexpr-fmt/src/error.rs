use crate::token::Token;

/// Parenthesization problems that make a formula's layout meaningless.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedInput {
    #[error("unexpected `)` at token {index}: no parenthesis is open")]
    UnexpectedClose { index: usize },

    #[error("input ended with {open} unclosed `(`")]
    Unclosed { open: usize },
}

/// Checks that every `)` closes an earlier `(` and that nothing is left open.
pub fn check_balanced(tokens: &[Token<'_>]) -> Result<(), MalformedInput> {
    let mut depth = 0usize;
    for (index, token) in tokens.iter().enumerate() {
        match token {
            Token::Open => depth += 1,
            Token::Close => {
                depth = depth
                    .checked_sub(1)
                    .ok_or(MalformedInput::UnexpectedClose { index })?;
            }
            Token::Atom(_) => {}
        }
    }
    if depth > 0 {
        return Err(MalformedInput::Unclosed { open: depth });
    }
    Ok(())
}
