//! Ordered token sequence with a read cursor for the expression parser

use crate::tokens::token::{Symbol, Token};

/// Tokens in source order plus a cursor; the tokens themselves never change
#[derive(Debug, Clone, Default)]
pub struct TokenStream {
    tokens: Vec<Token>,
    position: usize,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    // === CORE NAVIGATION ===

    /// Token under the cursor
    pub fn current(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    /// Token after the current one
    pub fn peek(&self) -> Option<&Token> {
        self.peek_ahead(1)
    }

    /// Token `n` positions past the cursor (`0` is the current token)
    pub fn peek_ahead(&self, n: usize) -> Option<&Token> {
        self.tokens.get(self.position + n)
    }

    /// Move past the current token and return the new current one
    pub fn advance(&mut self) -> Option<&Token> {
        if self.position < self.tokens.len() {
            self.position += 1;
        }
        self.current()
    }

    /// Advance if the current token is the given symbol
    pub fn advance_if_symbol(&mut self, symbol: Symbol) -> bool {
        if self.current().is_some_and(|token| token.is_symbol(symbol)) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    // === BACKTRACKING ===

    /// Save the cursor for a later `restore`
    pub fn checkpoint(&self) -> usize {
        self.position
    }

    pub fn restore(&mut self, checkpoint: usize) {
        self.position = checkpoint.min(self.tokens.len());
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining_count(&self) -> usize {
        self.tokens.len().saturating_sub(self.position)
    }

    // === WHOLE-SEQUENCE ACCESS ===

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Canonical source text of the whole sequence, space separated
    pub fn to_source(&self) -> String {
        self.tokens
            .iter()
            .map(Token::to_source)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Short description of the cursor state for diagnostics
    pub fn diagnostic(&self) -> String {
        let current = self
            .current()
            .map(|token| format!("{} '{}'", token.kind_name(), token.to_source()))
            .unwrap_or_else(|| "<end>".to_string());

        format!(
            "TokenStream(pos: {}/{}, current: {})",
            self.position,
            self.tokens.len(),
            current
        )
    }
}

impl PartialEq for TokenStream {
    fn eq(&self, other: &Self) -> bool {
        self.tokens == other.tokens
    }
}

impl From<Vec<Token>> for TokenStream {
    fn from(tokens: Vec<Token>) -> Self {
        Self::new(tokens)
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl IntoIterator for TokenStream {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::token::Constant;

    fn sample() -> TokenStream {
        TokenStream::new(vec![
            Token::Name("a".into()),
            Token::Symbol(Symbol::Plus),
            Token::Number(1.0),
        ])
    }

    #[test]
    fn test_navigation() {
        let mut stream = sample();
        assert_eq!(stream.current(), Some(&Token::Name("a".into())));
        assert_eq!(stream.peek(), Some(&Token::Symbol(Symbol::Plus)));
        assert_eq!(stream.peek_ahead(2), Some(&Token::Number(1.0)));
        assert_eq!(stream.peek_ahead(3), None);

        stream.advance();
        assert!(stream.advance_if_symbol(Symbol::Plus));
        assert!(!stream.advance_if_symbol(Symbol::Plus));
        assert_eq!(stream.remaining_count(), 1);

        assert_eq!(stream.advance(), None);
        assert!(stream.is_at_end());
        assert_eq!(stream.advance(), None);
        assert_eq!(stream.position(), 3);
    }

    #[test]
    fn test_checkpoint_restore() {
        let mut stream = sample();
        let saved = stream.checkpoint();
        stream.advance();
        stream.advance();
        stream.restore(saved);
        assert_eq!(stream.position(), 0);

        stream.restore(99);
        assert!(stream.is_at_end());
    }

    #[test]
    fn test_equality_ignores_cursor() {
        let mut moved = sample();
        moved.advance();
        assert_eq!(moved, sample());
        assert_ne!(moved, TokenStream::new(vec![Token::Constant(Constant::None)]));
    }

    #[test]
    fn test_to_source_and_diagnostic() {
        let stream = sample();
        assert_eq!(stream.to_source(), "a + 1");
        assert_eq!(stream.diagnostic(), "TokenStream(pos: 0/3, current: name 'a')");
        assert_eq!(TokenStream::default().diagnostic(), "TokenStream(pos: 0/0, current: <end>)");
        assert_eq!(stream.iter().count(), 3);
        assert_eq!(stream.into_tokens().len(), 3);
    }
}
