use crate::stylesheet::{
    AttributeSelector, BlockType, ComplexSelector, ComponentValue, CompoundSelector, Combinator,
    MatcherType, SimpleBlock, SimpleSelector,
};
use crate::tokenizer::TokenType;
use nimbus_shared::byte_stream::Location;
use nimbus_shared::errors::{CssError, CssResult};

/// Read cursor over a slice of component values. The selector grammar needs no push-back,
/// a peek is enough.
struct Cursor<'v> {
    values: &'v [ComponentValue],
    pos: usize,
}

impl<'v> Cursor<'v> {
    fn new(values: &'v [ComponentValue]) -> Self {
        Self { values, pos: 0 }
    }

    fn peek(&self) -> Option<&'v ComponentValue> {
        self.values.get(self.pos)
    }

    fn next(&mut self) -> Option<&'v ComponentValue> {
        let value = self.values.get(self.pos);
        if value.is_some() {
            self.pos += 1;
        }
        value
    }

    fn eof(&self) -> bool {
        self.pos >= self.values.len()
    }

    /// Skips a whitespace run, returning whether there was any
    fn skip_whitespace(&mut self) -> bool {
        let mut skipped = false;
        while matches!(self.peek(), Some(cv) if cv.is_whitespace()) {
            self.pos += 1;
            skipped = true;
        }

        skipped
    }

    fn location(&self) -> Location {
        self.values
            .get(self.pos)
            .or_else(|| self.values.last())
            .map(ComponentValue::location)
            .unwrap_or_default()
    }
}

/// Parses one comma-separated segment of a rule prelude into a complex selector: compound
/// selectors joined by explicit (`>`, `+`, `~`) or descendant (whitespace) combinators.
pub(crate) fn parse_complex_selector(values: &[ComponentValue]) -> CssResult<ComplexSelector> {
    let mut cursor = Cursor::new(values);
    cursor.skip_whitespace();

    let mut compounds = vec![parse_compound_selector(&mut cursor)?];
    let mut combinators = Vec::new();

    loop {
        let had_whitespace = cursor.skip_whitespace();
        let Some(cv) = cursor.peek() else {
            break;
        };

        let combinator = match cv.as_delim() {
            Some('>') => Some(Combinator::Child),
            Some('+') => Some(Combinator::NextSibling),
            Some('~') => Some(Combinator::SubsequentSibling),
            _ => None,
        };

        let combinator = match combinator {
            Some(combinator) => {
                cursor.next();
                cursor.skip_whitespace();
                combinator
            }
            None if had_whitespace => Combinator::Descendant,
            None => {
                return Err(CssError::with_location(
                    "unexpected token in selector",
                    cv.location(),
                ));
            }
        };

        // a compound selector is required after every combinator
        compounds.push(parse_compound_selector(&mut cursor)?);
        combinators.push(combinator);
    }

    Ok(ComplexSelector {
        compounds,
        combinators,
    })
}

/// Parses a compound selector: an optional leading type or universal selector followed by
/// any number of subclass selectors. At least one simple selector must be present.
fn parse_compound_selector(cursor: &mut Cursor) -> CssResult<CompoundSelector> {
    let mut selectors = Vec::new();

    // a type or universal selector is only allowed first
    if let Some(cv) = cursor.peek() {
        if let Some(name) = cv.as_ident() {
            selectors.push(SimpleSelector::Type(name.to_string()));
            cursor.next();
        } else if cv.as_delim() == Some('*') {
            selectors.push(SimpleSelector::Universal);
            cursor.next();
        }
    }

    loop {
        let Some(cv) = cursor.peek() else {
            break;
        };
        if cv.is_whitespace() {
            break;
        }

        match cv {
            ComponentValue::Block(block) if block.block_type == BlockType::Bracket => {
                selectors.push(SimpleSelector::Attribute(parse_attribute_selector(block)?));
                cursor.next();
            }
            ComponentValue::Token(token) => match &token.token_type {
                TokenType::Hash(name) | TokenType::IDHash(name) => {
                    selectors.push(SimpleSelector::Id(name.clone()));
                    cursor.next();
                }
                TokenType::Delim('.') => {
                    cursor.next();
                    selectors.push(SimpleSelector::Class(expect_ident(cursor)?));
                }
                TokenType::Colon => {
                    cursor.next();
                    if matches!(cursor.peek(), Some(cv) if cv.is_colon()) {
                        cursor.next();
                        selectors.push(SimpleSelector::PseudoElement(expect_ident(cursor)?));
                    } else {
                        selectors.push(SimpleSelector::PseudoClass(expect_ident(cursor)?));
                    }
                }
                _ => break,
            },
            _ => break,
        }
    }

    if selectors.is_empty() {
        return Err(CssError::with_location(
            "expected a selector",
            cursor.location(),
        ));
    }

    Ok(CompoundSelector { selectors })
}

/// Parses an attribute selector from the contents of a `[…]` block: a required attribute
/// name, an optional match operator with its value, and an optional trailing case flag
/// (`i` for case-insensitive, `s` for the case-sensitive default).
fn parse_attribute_selector(block: &SimpleBlock) -> CssResult<AttributeSelector> {
    let mut cursor = Cursor::new(&block.values);

    cursor.skip_whitespace();
    let name = expect_ident(&mut cursor)?;
    cursor.skip_whitespace();

    if cursor.eof() {
        return Ok(AttributeSelector {
            name,
            matcher: MatcherType::Exists,
            value: None,
            case_insensitive: false,
        });
    }

    let matcher = parse_attribute_matcher(&mut cursor)?;
    cursor.skip_whitespace();

    // a value is required once an operator was seen
    let value = match cursor.peek() {
        Some(cv) => match cv.as_ident().or_else(|| cv.as_string()) {
            Some(value) => {
                let value = value.to_string();
                cursor.next();
                value
            }
            None => {
                return Err(CssError::with_location(
                    "expected an attribute value",
                    cv.location(),
                ));
            }
        },
        None => {
            return Err(CssError::with_location(
                "expected an attribute value",
                cursor.location(),
            ));
        }
    };

    cursor.skip_whitespace();

    let mut case_insensitive = false;
    if let Some(cv) = cursor.peek() {
        match cv.as_ident() {
            Some(flag) if flag.eq_ignore_ascii_case("i") => {
                case_insensitive = true;
                cursor.next();
            }
            Some(flag) if flag.eq_ignore_ascii_case("s") => {
                cursor.next();
            }
            _ => {
                return Err(CssError::with_location(
                    "unexpected token in attribute selector",
                    cv.location(),
                ));
            }
        }
    }

    cursor.skip_whitespace();
    if !cursor.eof() {
        return Err(CssError::with_location(
            "unexpected token in attribute selector",
            cursor.location(),
        ));
    }

    Ok(AttributeSelector {
        name,
        matcher,
        value: Some(value),
        case_insensitive,
    })
}

/// Parses the attribute match operator: a lone `=` is exact, the two code point operators
/// `~=`, `|=`, `^=`, `$=` and `*=` arrive as two adjacent delim tokens.
fn parse_attribute_matcher(cursor: &mut Cursor) -> CssResult<MatcherType> {
    let Some(cv) = cursor.peek() else {
        return Err(CssError::new("expected an attribute matcher"));
    };
    let location = cv.location();

    let matcher = match cv.as_delim() {
        Some('=') => {
            cursor.next();
            return Ok(MatcherType::Equals);
        }
        Some('~') => MatcherType::Includes,
        Some('|') => MatcherType::DashMatch,
        Some('^') => MatcherType::PrefixMatch,
        Some('$') => MatcherType::SuffixMatch,
        Some('*') => MatcherType::SubstringMatch,
        _ => {
            return Err(CssError::with_location(
                "expected an attribute matcher",
                location,
            ));
        }
    };
    cursor.next();

    match cursor.peek() {
        Some(cv) if cv.is_delim('=') => {
            cursor.next();
            Ok(matcher)
        }
        _ => Err(CssError::with_location("expected '='", location)),
    }
}

fn expect_ident(cursor: &mut Cursor) -> CssResult<String> {
    match cursor.peek() {
        Some(cv) => match cv.as_ident() {
            Some(name) => {
                let name = name.to_string();
                cursor.next();
                Ok(name)
            }
            None => Err(CssError::with_location(
                "expected an identifier",
                cv.location(),
            )),
        },
        None => Err(CssError::new("expected an identifier")),
    }
}
