use crate::stylesheet::FunctionCall;
use crate::tokenizer::TokenType;
use crate::Css3;
use nimbus_shared::byte_stream::Location;
use nimbus_shared::errors::{CssError, CssResult};

impl Css3<'_> {
    /// 5.4.9. [Consume a function](https://www.w3.org/TR/css-syntax-3/#consume-function)
    ///
    /// The function token has already been consumed. The closing `)` never ends up in the
    /// argument list; EOF is a parse error that returns the partial function.
    pub(crate) fn consume_function(&mut self, name: String, location: Location) -> CssResult<FunctionCall> {
        log::trace!("consume_function");

        self.depth += 1;
        if self.depth > self.config.max_nesting_depth {
            self.depth -= 1;
            return Err(CssError::with_location(
                "maximum nesting depth exceeded",
                location,
            ));
        }

        // the depth must unwind on the error path too
        let result = self.consume_function_arguments(name, location);
        self.depth -= 1;

        result
    }

    fn consume_function_arguments(
        &mut self,
        name: String,
        location: Location,
    ) -> CssResult<FunctionCall> {
        let mut function = FunctionCall::new(name.as_str(), location);

        loop {
            let t = self.next_token();
            if t.token_type == TokenType::RParen {
                break;
            }
            if t.token_type == TokenType::Eof {
                self.parse_error("unexpected end of stream in function", t.location);
                break;
            }

            self.reconsume();
            let value = self.consume_component_value()?;
            function.arguments.push(value);
        }

        Ok(function)
    }
}
