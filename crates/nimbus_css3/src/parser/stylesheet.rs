use crate::stylesheet::CssRule;
use crate::tokenizer::TokenType;
use crate::Css3;
use nimbus_shared::errors::CssResult;

impl Css3<'_> {
    /// 5.4.1. [Consume a list of rules](https://www.w3.org/TR/css-syntax-3/#consume-list-of-rules)
    ///
    /// At the top level CDO and CDC tokens are skipped; anywhere else they start a qualified
    /// rule. A failed qualified rule is discarded, the list itself always survives.
    pub(crate) fn consume_rule_list(&mut self, top_level: bool) -> CssResult<Vec<CssRule>> {
        log::trace!("consume_rule_list");

        let mut rules = Vec::new();

        loop {
            let t = self.next_token();
            match t.token_type {
                TokenType::Whitespace => {}
                TokenType::Eof => break,
                TokenType::Cdo | TokenType::Cdc => {
                    if top_level {
                        continue;
                    }

                    self.reconsume();
                    if let Some(rule) = self.consume_qualified_rule()? {
                        rules.push(CssRule::Qualified(rule));
                    }
                }
                TokenType::AtKeyword(name) => {
                    let at_rule = self.consume_at_rule(name, t.location)?;
                    rules.push(CssRule::At(at_rule));
                }
                _ => {
                    self.reconsume();
                    if let Some(rule) = self.consume_qualified_rule()? {
                        rules.push(CssRule::Qualified(rule));
                    }
                }
            }
        }

        Ok(rules)
    }
}
