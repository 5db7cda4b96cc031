//! Grammar-agnostic token sequencing with a single-slot lookahead.
//!
//! A concrete scanner implements [`TokenSource`]; [`TokenStream`] wraps it by
//! composition and provides `next`, `peek`, and drain-to-list on top.
//!
//! # Lookahead Contract
//!
//! [`TokenStream::next`] *always* reads a fresh token from the source and
//! overwrites the lookahead slot. It never hands back a token cached by an
//! earlier [`TokenStream::peek`]. Because peeking already consumed that
//! token's characters, `peek()` followed by `next()` returns the token
//! *after* the peeked one, and the peeked token is lost:
//!
//! ```text
//! source:   {"x":1}
//! peek()  -> LeftBrace     (cursor now past `{`)
//! next()  -> String "x"    (LeftBrace is never returned by next)
//! peek()  -> String "x"    (the slot holds what next() returned)
//! ```
//!
//! Callers that want "consume what I peeked" semantics must use the peeked
//! value directly instead of calling `next()`.

use std::fmt;
use std::iter::FusedIterator;

use crate::ScanError;

/// The scanning half of a token stream.
pub trait TokenSource {
    /// Token type produced by this source.
    type Token: Clone;

    /// Consume characters and produce the next token.
    ///
    /// Once input is exhausted this must keep returning the end token, so
    /// that the stream's end is stable.
    fn read_token(&mut self) -> Result<Self::Token, ScanError>;

    /// Returns `true` for the token that terminates the stream.
    fn is_end_token(token: &Self::Token) -> bool;
}

/// Token sequencer over a [`TokenSource`].
pub struct TokenStream<S: TokenSource> {
    source: S,
    /// Last token produced by `next()` or `peek()`.
    lookahead: Option<S::Token>,
}

impl<S: TokenSource> TokenStream<S> {
    pub fn new(source: S) -> Self {
        TokenStream {
            source,
            lookahead: None,
        }
    }

    /// Read a fresh token, cache it, and return it.
    ///
    /// Does not consult the lookahead slot; see the module docs. On error
    /// the slot keeps its previous value.
    #[allow(
        clippy::should_implement_trait,
        reason = "fallible; iteration goes through `tokens()`"
    )]
    pub fn next(&mut self) -> Result<S::Token, ScanError> {
        let token = self.source.read_token()?;
        Ok(self.lookahead.insert(token).clone())
    }

    /// Returns the cached token, reading one first if the slot is empty.
    ///
    /// Repeated calls without an intervening `next()` return the same token.
    pub fn peek(&mut self) -> Result<&S::Token, ScanError> {
        let token = match self.lookahead.take() {
            Some(token) => token,
            None => self.source.read_token()?,
        };
        Ok(self.lookahead.insert(token))
    }

    /// Call `next()` until the end token, collecting every token read.
    ///
    /// The end token is included as the last element.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn drain_to_vec(&mut self) -> Result<Vec<S::Token>, ScanError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next()?;
            let is_end = S::is_end_token(&token);
            tokens.push(token);
            if is_end {
                break;
            }
        }
        tracing::debug!(count = tokens.len(), "drained token stream");
        Ok(tokens)
    }

    /// Iterate over tokens up to, but excluding, the end token.
    ///
    /// Built on [`next()`](Self::next), so the lookahead contract applies.
    /// The iterator stops after the end token or after the first error.
    pub fn tokens(&mut self) -> Tokens<'_, S> {
        Tokens {
            stream: self,
            done: false,
        }
    }

    /// The cached token, if any, without scanning.
    pub fn lookahead(&self) -> Option<&S::Token> {
        self.lookahead.as_ref()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Unwrap the source, discarding the lookahead slot.
    pub fn into_inner(self) -> S {
        self.source
    }
}

impl<S> fmt::Debug for TokenStream<S>
where
    S: TokenSource + fmt::Debug,
    S::Token: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenStream")
            .field("source", &self.source)
            .field("lookahead", &self.lookahead)
            .finish()
    }
}

/// Iterator returned by [`TokenStream::tokens`].
pub struct Tokens<'s, S: TokenSource> {
    stream: &'s mut TokenStream<S>,
    done: bool,
}

impl<S: TokenSource> Iterator for Tokens<'_, S> {
    type Item = Result<S::Token, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.stream.next() {
            Ok(token) if S::is_end_token(&token) => {
                self.done = true;
                None
            }
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

impl<S: TokenSource> FusedIterator for Tokens<'_, S> {}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
