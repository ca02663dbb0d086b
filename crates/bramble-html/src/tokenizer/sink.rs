//! The seam between the tokenizer and whatever consumes its tokens.
//!
//! [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
//!
//! "When a token is emitted, it must immediately be handled by the tree
//! construction stage. The tree construction stage can affect the state of
//! the tokenization stage."

use super::state::TokenizerState;
use super::token::Token;

/// What a sink may do to the tokenizer while handling a token.
pub trait TokenizerControl {
    /// Switch the tokenizer to `state` before it consumes the next character.
    fn switch_to(&mut self, state: TokenizerState);

    /// The tokenizer's state at the time of the call.
    fn state(&self) -> TokenizerState;

    /// Code point offset of the tokenizer in the normalized input.
    fn position(&self) -> usize;
}

/// Receives tokens as soon as the tokenizer emits them.
pub trait TokenSink {
    /// Handle one token. The call is synchronous; the tokenizer does not
    /// consume more input until it returns.
    fn process_token(&mut self, token: Token, control: &mut dyn TokenizerControl);

    /// [§ 13.2.5.42 Markup declaration open state](https://html.spec.whatwg.org/multipage/parsing.html#markup-declaration-open-state)
    ///
    /// "If there is an adjusted current node and it is not an element in the
    /// HTML namespace, then switch to the CDATA section state."
    fn cdata_allowed(&self) -> bool {
        false
    }
}

/// Collects tokens, for tests and the token dump in the CLI.
impl TokenSink for Vec<Token> {
    fn process_token(&mut self, token: Token, _control: &mut dyn TokenizerControl) {
        self.push(token);
    }
}

/// The control handed to a sink for one emission.
pub(super) struct Control<'a> {
    pub(super) state: &'a mut TokenizerState,
    pub(super) position: usize,
}

impl TokenizerControl for Control<'_> {
    fn switch_to(&mut self, state: TokenizerState) {
        log::trace!("tree builder switched tokenizer to {state}");
        *self.state = state;
    }

    fn state(&self) -> TokenizerState {
        *self.state
    }

    fn position(&self) -> usize {
        self.position
    }
}
