use crate::stylesheet::{BlockType, ComponentValue};
use crate::tokenizer::TokenType;
use crate::Css3;
use nimbus_shared::errors::CssResult;

impl Css3<'_> {
    /// 5.4.7. [Consume a component value](https://www.w3.org/TR/css-syntax-3/#consume-component-value)
    ///
    /// An opening bracket starts a simple block, a function token starts a function, and
    /// anything else flows through as a preserved token.
    pub(crate) fn consume_component_value(&mut self) -> CssResult<ComponentValue> {
        let t = self.next_token();

        match t.token_type {
            TokenType::LCurly => Ok(ComponentValue::Block(
                self.consume_simple_block(BlockType::Curly, t.location)?,
            )),
            TokenType::LBracket => Ok(ComponentValue::Block(
                self.consume_simple_block(BlockType::Bracket, t.location)?,
            )),
            TokenType::LParen => Ok(ComponentValue::Block(
                self.consume_simple_block(BlockType::Paren, t.location)?,
            )),
            TokenType::Function(name) => Ok(ComponentValue::Function(
                self.consume_function(name, t.location)?,
            )),
            _ => Ok(ComponentValue::Token(t)),
        }
    }
}
