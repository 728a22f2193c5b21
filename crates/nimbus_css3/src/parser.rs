use crate::tokenizer::Token;
use crate::Css3;
use nimbus_shared::byte_stream::Location;

mod at_rule;
mod block;
mod declaration;
mod function;
mod rule;
mod selector;
mod selector_list;
mod stylesheet;
mod value;

impl Css3<'_> {
    /// Returns the next token from the tokenizer, honoring a pending reconsume. The parser
    /// owns a single current token; preserved tokens are cloned out of it.
    pub(crate) fn next_token(&mut self) -> Token {
        if self.reconsume {
            self.reconsume = false;
            if let Some(token) = &self.current {
                return token.clone();
            }
        }

        let token = self.tokenizer.next_token();
        self.current = Some(token.clone());
        token
    }

    /// Pushes the current token back so the next read will return the same token. Only a
    /// single token of push-back is ever needed.
    pub(crate) fn reconsume(&mut self) {
        self.reconsume = true;
    }

    /// Reports a recovered parse error to the side channel
    pub(crate) fn parse_error(&mut self, message: &str, location: Location) {
        self.tokenizer.parse_error(message, location);
    }
}
