use crate::stylesheet::{BlockType, CssQualifiedRule};
use crate::tokenizer::TokenType;
use crate::Css3;
use nimbus_shared::byte_stream::Location;
use nimbus_shared::errors::CssResult;

impl Css3<'_> {
    /// 5.4.3. [Consume a qualified rule](https://www.w3.org/TR/css-syntax-3/#consume-qualified-rule)
    ///
    /// Returns None when the rule runs into EOF before its block starts; the whole rule is
    /// discarded in that case. The selector and declaration passes run later, over the
    /// returned prelude and block.
    pub(crate) fn consume_qualified_rule(&mut self) -> CssResult<Option<CssQualifiedRule>> {
        log::trace!("consume_qualified_rule");

        let mut prelude = Vec::new();
        let mut location: Option<Location> = None;

        loop {
            let t = self.next_token();
            if location.is_none() {
                location = Some(t.location.clone());
            }

            match t.token_type {
                TokenType::Eof => {
                    self.parse_error("unexpected end of stream in qualified rule", t.location);
                    return Ok(None);
                }
                TokenType::LCurly => {
                    let block = self.consume_simple_block(BlockType::Curly, t.location)?;
                    return Ok(Some(CssQualifiedRule {
                        prelude,
                        selectors: None,
                        declarations: Vec::new(),
                        block,
                        location: location.unwrap_or_default(),
                    }));
                }
                _ => {
                    self.reconsume();
                    let value = self.consume_component_value()?;
                    prelude.push(value);
                }
            }
        }
    }
}
