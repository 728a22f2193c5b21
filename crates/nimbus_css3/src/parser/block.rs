use crate::stylesheet::{BlockType, SimpleBlock};
use crate::tokenizer::TokenType;
use crate::Css3;
use nimbus_shared::byte_stream::Location;
use nimbus_shared::errors::{CssError, CssResult};

impl Css3<'_> {
    /// 5.4.8. [Consume a simple block](https://www.w3.org/TR/css-syntax-3/#consume-simple-block)
    ///
    /// The opening bracket has already been consumed. Everything up to the mirrored closing
    /// bracket becomes the block's component values; EOF is tolerated and returns what has
    /// been collected.
    pub(crate) fn consume_simple_block(
        &mut self,
        block_type: BlockType,
        location: Location,
    ) -> CssResult<SimpleBlock> {
        log::trace!("consume_simple_block");

        self.depth += 1;
        if self.depth > self.config.max_nesting_depth {
            self.depth -= 1;
            return Err(CssError::with_location(
                "maximum nesting depth exceeded",
                location,
            ));
        }

        // the depth must unwind on the error path too
        let result = self.consume_simple_block_values(block_type, location);
        self.depth -= 1;

        result
    }

    fn consume_simple_block_values(
        &mut self,
        block_type: BlockType,
        location: Location,
    ) -> CssResult<SimpleBlock> {
        let mirror = mirror(block_type);
        let mut block = SimpleBlock::new(block_type, location);

        loop {
            let t = self.next_token();
            if t.token_type == mirror {
                break;
            }
            if t.token_type == TokenType::Eof {
                self.parse_error("unexpected end of stream in block", t.location);
                break;
            }

            self.reconsume();
            let value = self.consume_component_value()?;
            block.values.push(value);
        }

        Ok(block)
    }
}

/// Closing bracket that pairs with the given opening bracket
fn mirror(block_type: BlockType) -> TokenType {
    match block_type {
        BlockType::Curly => TokenType::RCurly,
        BlockType::Bracket => TokenType::RBracket,
        BlockType::Paren => TokenType::RParen,
    }
}
