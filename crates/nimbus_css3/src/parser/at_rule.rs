use crate::stylesheet::{BlockType, CssAtRule};
use crate::tokenizer::TokenType;
use crate::Css3;
use nimbus_shared::byte_stream::Location;
use nimbus_shared::errors::CssResult;

impl Css3<'_> {
    /// 5.4.2. [Consume an at-rule](https://www.w3.org/TR/css-syntax-3/#consume-at-rule)
    ///
    /// The at-keyword token has already been consumed; its name and location are passed in.
    /// A `;` ends a statement at-rule, a `{` starts its block. EOF is a parse error but
    /// still yields the partial rule.
    pub(crate) fn consume_at_rule(&mut self, name: String, location: Location) -> CssResult<CssAtRule> {
        log::trace!("consume_at_rule");

        let mut at_rule = CssAtRule {
            name,
            prelude: Vec::new(),
            block: None,
            location,
        };

        loop {
            let t = self.next_token();
            match t.token_type {
                TokenType::Semicolon => break,
                TokenType::Eof => {
                    self.parse_error("unexpected end of stream in at-rule", t.location);
                    break;
                }
                TokenType::LCurly => {
                    at_rule.block = Some(self.consume_simple_block(BlockType::Curly, t.location)?);
                    break;
                }
                _ => {
                    self.reconsume();
                    let value = self.consume_component_value()?;
                    at_rule.prelude.push(value);
                }
            }
        }

        Ok(at_rule)
    }
}
