use crate::stylesheet::CssLog;
use crate::unicode::UnicodeChar;
use lazy_static::lazy_static;
use nimbus_shared::byte_stream::Character::Ch;
use nimbus_shared::byte_stream::{ByteStream, Character, Location, Stream};
use std::fmt;

pub type Number = f64;

/// Type flag of a numeric token: integers have no fractional part and no exponent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberType {
    Integer,
    Number,
}

#[derive(Debug, PartialEq, Clone)]
pub enum TokenType {
    /// A [`<at-keyword-token>`](https://drafts.csswg.org/css-syntax/#at-keyword-token-diagram)
    ///
    /// The value does not include the `@` marker.
    AtKeyword(String),
    Ident(String),
    Function(String),
    Url(String),
    BadUrl(String),
    Dimension {
        value: Number,
        unit: String,
        number_type: NumberType,
    },
    Percentage {
        value: Number,
        number_type: NumberType,
    },
    Number {
        value: Number,
        number_type: NumberType,
    },
    /// A [`<string-token>`](https://drafts.csswg.org/css-syntax/#string-token-diagram)
    ///
    /// The value does not include the quotes.
    QuotedString(String),
    /// A `<bad-string-token>`
    ///
    /// This token always indicates a parse error.
    BadString(String),
    /// A [`<whitespace-token>`](https://drafts.csswg.org/css-syntax/#whitespace-token-diagram)
    Whitespace,
    /// A [`<hash-token>`](https://drafts.csswg.org/css-syntax/#hash-token-diagram) with the type flag set to "unrestricted"
    ///
    /// The value does not include the `#` marker.
    Hash(String),
    /// A [`<hash-token>`](https://drafts.csswg.org/css-syntax/#hash-token-diagram) with the type flag set to "id"
    ///
    /// Hash whose value would form a valid identifier sequence.
    IDHash(String),
    /// A `<delim-token>`
    Delim(char),
    /// A `<{-token>`
    LCurly,
    /// A `<}-token>`
    RCurly,
    /// A `<(-token>`
    LParen,
    /// A `<)-token>`
    RParen,
    /// A `<[-token>`
    LBracket,
    /// A `<]-token>`
    RBracket,
    /// A `<comma-token>`
    Comma,
    /// A `:` `<colon-token>`
    Colon,
    /// A `;` `<semicolon-token>`
    Semicolon,
    // A `<!--` `<CDO-token>`
    Cdo,
    // A `-->` `<CDC-token>`
    Cdc,
    // A `<EOF-token>`
    Eof,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Token {
    /// Type of the token
    pub token_type: TokenType,
    /// Location of the token in the stream
    pub location: Location,
}

impl Token {
    /// Returns a new token for the given type on the given location
    fn new(token_type: TokenType, location: Location) -> Token {
        Token {
            token_type,
            location,
        }
    }

    fn new_delim(c: char, location: Location) -> Token {
        Token::new(TokenType::Delim(c), location)
    }

    fn new_id_hash(value: &str, location: Location) -> Token {
        Token::new(TokenType::IDHash(value.to_string()), location)
    }

    fn new_hash(value: &str, location: Location) -> Token {
        Token::new(TokenType::Hash(value.to_string()), location)
    }

    fn new_atkeyword(keyword: &str, location: Location) -> Token {
        Token::new(TokenType::AtKeyword(keyword.to_string()), location)
    }

    fn new_number(value: Number, number_type: NumberType, location: Location) -> Token {
        Token::new(TokenType::Number { value, number_type }, location)
    }

    fn new_percentage(value: Number, number_type: NumberType, location: Location) -> Token {
        Token::new(TokenType::Percentage { value, number_type }, location)
    }

    fn new_dimension(value: Number, unit: &str, number_type: NumberType, location: Location) -> Token {
        Token::new(
            TokenType::Dimension {
                value,
                unit: unit.to_string(),
                number_type,
            },
            location,
        )
    }

    fn new_ident(value: &str, location: Location) -> Token {
        Token::new(TokenType::Ident(value.to_string()), location)
    }

    fn new_function(value: &str, location: Location) -> Token {
        Token::new(TokenType::Function(value.to_string()), location)
    }

    fn new_quoted_string(value: &str, location: Location) -> Token {
        Token::new(TokenType::QuotedString(value.to_string()), location)
    }

    fn new_bad_string(value: &str, location: Location) -> Token {
        Token::new(TokenType::BadString(value.to_string()), location)
    }

    fn new_url(value: &str, location: Location) -> Token {
        Token::new(TokenType::Url(value.to_string()), location)
    }

    fn new_bad_url(value: &str, location: Location) -> Token {
        Token::new(TokenType::BadUrl(value.to_string()), location)
    }
}

impl Token {
    pub(crate) fn is_eof(&self) -> bool {
        matches!(self.token_type, TokenType::Eof)
    }

    pub(crate) fn is_whitespace(&self) -> bool {
        matches!(self.token_type, TokenType::Whitespace)
    }

    pub(crate) fn is_colon(&self) -> bool {
        matches!(self.token_type, TokenType::Colon)
    }

    pub(crate) fn is_semicolon(&self) -> bool {
        matches!(self.token_type, TokenType::Semicolon)
    }

    pub(crate) fn is_comma(&self) -> bool {
        matches!(self.token_type, TokenType::Comma)
    }

    pub(crate) fn is_delim(&self, delim: char) -> bool {
        matches!(self.token_type, TokenType::Delim(c) if c == delim)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let string = match self.token_type.clone() {
            TokenType::AtKeyword(val)
            | TokenType::Url(val)
            | TokenType::BadUrl(val)
            | TokenType::Hash(val)
            | TokenType::IDHash(val)
            | TokenType::Ident(val)
            | TokenType::Function(val)
            | TokenType::QuotedString(val)
            | TokenType::BadString(val) => val,
            TokenType::Delim(val) => val.to_string(),
            TokenType::Number { value, .. } => value.to_string(),
            TokenType::Percentage { value, .. } => format!("{}%", value),
            TokenType::Dimension { value, unit, .. } => format!("{}{}", value, unit),
            TokenType::Cdc => "-->".into(),
            TokenType::Cdo => "<!--".into(),
            TokenType::Colon => ":".into(),
            TokenType::Semicolon => ";".into(),
            TokenType::Comma => ",".into(),
            TokenType::LBracket => "[".into(),
            TokenType::RBracket => "]".into(),
            TokenType::LCurly => "{".into(),
            TokenType::RCurly => "}".into(),
            TokenType::LParen => "(".into(),
            TokenType::RParen => ")".into(),
            TokenType::Whitespace => " ".into(),
            TokenType::Eof => "eof".into(),
        };

        write!(f, "{string}")
    }
}

lazy_static! {
    /// Parse errors are silent unless this environment variable is set
    static ref VERBOSE_PARSE_ERRORS: bool = std::env::var_os("CSSPARSER_PARSE_ERRORS").is_some();
}

/// CSS Tokenizer according to the [w3 specification](https://www.w3.org/TR/css-syntax-3/#tokenization)
///
/// The tokenizer is pull based: each call to [`next_token`](Tokenizer::next_token) produces
/// exactly one token. Once the stream runs out it keeps producing EOF tokens.
pub struct Tokenizer<'stream> {
    stream: &'stream mut ByteStream,
    /// Current position of the stream
    cur_location: Location,
    /// Recovered tokenizer errors, drained into the stylesheet parse log
    parse_log: Vec<CssLog>,
    /// Set once an EOF token has been produced, so iteration terminates
    eof: bool,
}

impl<'stream> Tokenizer<'stream> {
    /// Creates a new tokenizer for the given stream
    pub fn new(stream: &'stream mut ByteStream) -> Self {
        Self {
            stream,
            cur_location: Location::default(),
            parse_log: Vec::new(),
            eof: false,
        }
    }

    /// Returns the location of the next character that will be consumed
    pub fn current_location(&self) -> Location {
        self.cur_location.clone()
    }

    /// Returns true when there is no more data in the stream
    pub fn eof(&self) -> bool {
        self.stream.eof()
    }

    /// Drains the accumulated parse errors
    pub fn take_parse_log(&mut self) -> Vec<CssLog> {
        std::mem::take(&mut self.parse_log)
    }

    /// Produces the next token from the stream. At the end of the stream this returns an EOF
    /// token, and keeps returning EOF tokens on any call after that.
    pub fn next_token(&mut self) -> Token {
        let token = self.consume_token();
        if token.is_eof() {
            self.eof = true;
        }

        log::trace!("{:?}", token);

        token
    }

    /// Reports a recovered parse error to the side channel. Errors never abort tokenization.
    pub(crate) fn parse_error(&mut self, message: &str, location: Location) {
        if *VERBOSE_PARSE_ERRORS {
            log::warn!("{}:{}: parse error: {}", location.line, location.column, message);
        }
        self.parse_log.push(CssLog::warn(message, location));
    }

    /// 4.3.1. [Consume a token](https://www.w3.org/TR/css-syntax-3/#consume-token)
    fn consume_token(&mut self) -> Token {
        while self.look_ahead_slice(2) == "/*" {
            self.consume_comment();
        }

        let current = self.current_char();
        let loc = self.current_location();

        match current {
            Character::StreamEnd => Token::new(TokenType::Eof, loc),
            Ch(c) if is_whitespace(c) => {
                self.consume_whitespace();
                Token::new(TokenType::Whitespace, loc)
            }
            Ch('"' | '\'') => self.consume_string_token(),
            Ch(c @ '#') => {
                // consume '#'
                self.next_char();

                if self.is_ident_char_at(0) || self.is_start_of_escape(0) {
                    return if self.is_next_3_points_starts_ident_seq(0) {
                        Token::new_id_hash(self.consume_ident().as_str(), loc)
                    } else {
                        Token::new_hash(self.consume_ident().as_str(), loc)
                    };
                }

                Token::new_delim(c, loc)
            }
            Ch('(') => {
                self.next_char();
                Token::new(TokenType::LParen, loc)
            }
            Ch(')') => {
                self.next_char();
                Token::new(TokenType::RParen, loc)
            }
            Ch('[') => {
                self.next_char();
                Token::new(TokenType::LBracket, loc)
            }
            Ch(']') => {
                self.next_char();
                Token::new(TokenType::RBracket, loc)
            }
            Ch('{') => {
                self.next_char();
                Token::new(TokenType::LCurly, loc)
            }
            Ch('}') => {
                self.next_char();
                Token::new(TokenType::RCurly, loc)
            }
            Ch(',') => {
                self.next_char();
                Token::new(TokenType::Comma, loc)
            }
            Ch(':') => {
                self.next_char();
                Token::new(TokenType::Colon, loc)
            }
            Ch(';') => {
                self.next_char();
                Token::new(TokenType::Semicolon, loc)
            }
            Ch(c @ ('+' | '.')) => {
                if self.starts_number(0) {
                    return self.consume_numeric_token();
                }

                // consume '+' or '.'
                self.next_char();
                Token::new_delim(c, loc)
            }
            Ch(c @ '-') => {
                if self.starts_number(0) {
                    return self.consume_numeric_token();
                }

                let cdc_token = "-->";
                if self.look_ahead_slice(cdc_token.len()) == cdc_token {
                    // consume '-->'
                    self.consume_chars(cdc_token.len());
                    return Token::new(TokenType::Cdc, loc);
                }

                if self.is_next_3_points_starts_ident_seq(0) {
                    return self.consume_ident_like_seq();
                }

                // consume '-'
                self.next_char();
                Token::new_delim(c, loc)
            }
            Ch(c @ '<') => {
                let cdo_token = "<!--";
                if self.look_ahead_slice(cdo_token.len()) == cdo_token {
                    // consume '<!--'
                    self.consume_chars(cdo_token.len());
                    return Token::new(TokenType::Cdo, loc);
                }

                // consume '<'
                self.next_char();
                Token::new_delim(c, loc)
            }
            Ch(c @ '@') => {
                // consume '@'
                self.next_char();

                if self.is_next_3_points_starts_ident_seq(0) {
                    return Token::new_atkeyword(self.consume_ident().as_str(), loc);
                }

                Token::new_delim(c, loc)
            }
            Ch(c @ '\\') => {
                if self.is_start_of_escape(0) {
                    return self.consume_ident_like_seq();
                }

                self.parse_error("invalid escape", loc.clone());

                // consume '\'
                self.next_char();
                Token::new_delim(c, loc)
            }
            Ch(c) if c.is_ascii_digit() => self.consume_numeric_token(),
            Ch(c) if is_ident_start(c) => self.consume_ident_like_seq(),
            Ch(c) => {
                self.next_char();
                Token::new(TokenType::Delim(c), loc)
            }
        }
    }

    /// 4.3.2. [Consume comments](https://www.w3.org/TR/css-syntax-3/#consume-comment)
    ///
    /// Comments are not emitted as tokens. An unterminated comment is a parse error that
    /// swallows the rest of the stream.
    fn consume_comment(&mut self) {
        let loc = self.current_location();

        // consume '/*'
        self.consume_chars(2);

        loop {
            if self.stream.eof() {
                self.parse_error("unterminated comment", loc);
                return;
            }

            if self.look_ahead_slice(2) == "*/" {
                // consume '*/'
                self.consume_chars(2);
                return;
            }

            self.next_char();
        }
    }

    /// 4.3.3. [Consume a numeric token](https://www.w3.org/TR/css-syntax-3/#consume-numeric-token)
    ///
    /// Returns either a `<number-token>`, `<percentage-token>`, or `<dimension-token>`.
    fn consume_numeric_token(&mut self) -> Token {
        let loc = self.current_location();

        let (value, number_type) = self.consume_number();

        if self.is_next_3_points_starts_ident_seq(0) {
            let unit = self.consume_ident();

            return Token::new_dimension(value, unit.as_str(), number_type, loc);
        } else if self.current_char() == Ch('%') {
            // consume '%'
            self.next_char();
            return Token::new_percentage(value, number_type, loc);
        }

        Token::new_number(value, number_type, loc)
    }

    /// 4.3.5. [Consume a string token](https://www.w3.org/TR/css-syntax-3/#consume-string-token)
    ///
    /// Returns either a `<string-token>` or `<bad-string-token>`.
    fn consume_string_token(&mut self) -> Token {
        let loc = self.current_location();

        // consume string starting: (') or (") ...
        let ending = self.next_char();
        let mut value = String::new();

        loop {
            if self.stream.eof() {
                // parse error, but the consumed value still forms a normal string token
                self.parse_error("unterminated string", self.current_location());
                return Token::new_quoted_string(value.as_str(), loc);
            }

            if self.current_char() == ending {
                // consume string ending
                self.next_char();
                return Token::new_quoted_string(value.as_str(), loc);
            }

            // newline: parse error. Note: the newline is NOT consumed, it becomes the next
            // whitespace token.
            if self.current_char() == Ch('\n') {
                self.parse_error("newline in string", self.current_location());
                return Token::new_bad_string(value.as_str(), loc);
            }

            if self.current_char() == Ch('\\') {
                match self.stream.look_ahead(1) {
                    // escaped newline is a continuation and produces nothing
                    Ch('\n') => {
                        self.consume_chars(2);
                        continue;
                    }
                    // backslash just before the end of the stream is dropped
                    Character::StreamEnd => {
                        self.next_char();
                        continue;
                    }
                    _ => {
                        value.push(self.consume_escaped());
                        continue;
                    }
                }
            }

            value.push(self.next_char().into());
        }
    }

    /// 4.3.12. [Consume a number](https://www.w3.org/TR/css-syntax-3/#consume-number)
    ///
    /// Returns the parsed value together with its integer/number type flag.
    fn consume_number(&mut self) -> (Number, NumberType) {
        let mut value = String::new();
        let mut number_type = NumberType::Integer;

        if matches!(self.current_char(), Ch('+' | '-')) {
            value.push(self.next_char().into());
        }

        value.push_str(&self.consume_digits());

        if self.current_char() == Ch('.') && self.stream.look_ahead(1).is_numeric() {
            value.push_str(&self.consume_chars(2));
            value.push_str(&self.consume_digits());
            number_type = NumberType::Number;
        }

        let c1 = self.current_char();
        let c2 = self.stream.look_ahead(1);
        let c3 = self.stream.look_ahead(2);
        if matches!(c1, Ch('e' | 'E'))
            && (c2.is_numeric() || (matches!(c2, Ch('+' | '-')) && c3.is_numeric()))
        {
            value.push(self.next_char().into());
            value.push(self.next_char().into());
            value.push_str(&self.consume_digits());
            number_type = NumberType::Number;
        }

        (value.parse().unwrap_or(0.0), number_type)
    }

    /// 4.3.4. [Consume an ident-like token](https://www.w3.org/TR/css-syntax-3/#consume-ident-like-token)
    ///
    /// Returns: `<ident-token>`, `<function-token>`, `<url-token>`, or `<bad-url-token>`.
    fn consume_ident_like_seq(&mut self) -> Token {
        let loc = self.current_location();

        let value = self.consume_ident();

        if self.current_char() != Ch('(') {
            return Token::new_ident(value.as_str(), loc);
        }

        // consume '('
        self.next_char();

        if value.eq_ignore_ascii_case("url") {
            self.consume_whitespace();

            if matches!(self.current_char(), Ch('"' | '\'')) {
                // the quoted argument is tokenized as a normal string on subsequent calls
                return Token::new_function(value.as_str(), loc);
            }

            return self.consume_url(loc);
        }

        Token::new_function(value.as_str(), loc)
    }

    /// 4.3.6. [Consume a url token](https://www.w3.org/TR/css-syntax-3/#consume-a-url-token)
    ///
    /// Returns either a `<url-token>` or a `<bad-url-token>`. Whitespace is only allowed as a
    /// trailing run just before the closing parenthesis.
    fn consume_url(&mut self, loc: Location) -> Token {
        let mut url = String::new();

        self.consume_whitespace();

        loop {
            match self.current_char() {
                Ch(')') => {
                    // consume ')'
                    self.next_char();
                    break;
                }
                Character::StreamEnd => {
                    self.parse_error("unterminated url", self.current_location());
                    break;
                }
                Ch(c) if is_whitespace(c) => {
                    self.consume_whitespace();
                    if self.current_char() == Ch(')') {
                        self.next_char();
                        break;
                    }
                    if self.stream.eof() {
                        self.parse_error("unterminated url", self.current_location());
                        break;
                    }

                    self.parse_error("unexpected characters in url", self.current_location());
                    self.consume_remnants_of_bad_url();
                    return Token::new_bad_url(url.as_str(), loc);
                }
                Ch('"' | '\'' | '(') => {
                    self.parse_error("unexpected character in url", self.current_location());
                    self.consume_remnants_of_bad_url();
                    return Token::new_bad_url(url.as_str(), loc);
                }
                Ch(c) if is_non_printable(c) => {
                    self.parse_error("non-printable character in url", self.current_location());
                    self.consume_remnants_of_bad_url();
                    return Token::new_bad_url(url.as_str(), loc);
                }
                Ch('\\') => {
                    if self.is_start_of_escape(0) {
                        url.push(self.consume_escaped());
                        continue;
                    }

                    self.parse_error("invalid escape in url", self.current_location());
                    self.consume_remnants_of_bad_url();
                    return Token::new_bad_url(url.as_str(), loc);
                }
                Ch(c) => {
                    url.push(c);
                    self.next_char();
                }
            }
        }

        Token::new_url(url.as_str(), loc)
    }

    /// 4.3.14. [Consume the remnants of a bad url](https://www.w3.org/TR/css-syntax-3/#consume-remnants-of-bad-url)
    ///
    /// Consumes enough of the input stream to reach a recovery point where normal tokenizing
    /// can resume. Valid escapes are honored, so an escaped ')' does not end the remnants.
    fn consume_remnants_of_bad_url(&mut self) {
        loop {
            match self.current_char() {
                Ch(')') => {
                    self.next_char();
                    break;
                }
                Character::StreamEnd => break,
                Ch('\\') if self.is_start_of_escape(0) => {
                    self.consume_escaped();
                }
                _ => {
                    self.next_char();
                }
            }
        }
    }

    /// 4.3.7. [Consume an escaped code point](https://www.w3.org/TR/css-syntax-3/#consume-an-escaped-code-point)
    ///
    /// A hex escape of value zero, a surrogate, or a value beyond U+10FFFF maps to U+FFFD.
    fn consume_escaped(&mut self) -> char {
        // consume '\'
        self.next_char();

        if self.stream.eof() {
            self.parse_error("unexpected end of stream in escape", self.current_location());
            return UnicodeChar::REPLACEMENT_CHARACTER;
        }

        if !matches!(self.current_char(), Ch(c) if c.is_ascii_hexdigit()) {
            // not a hex escape, the escaped code point is the next code point verbatim
            return self.next_char().into();
        }

        let mut value = String::new();
        while matches!(self.current_char(), Ch(c) if c.is_ascii_hexdigit()) && value.len() <= 5 {
            value.push(self.next_char().into());
        }

        // a single trailing whitespace code point is part of the escape
        if self.current_char().is_whitespace() {
            self.next_char();
        }

        let as_u32 = u32::from_str_radix(&value, 16).unwrap_or(0);
        if as_u32 == 0 || as_u32 > UnicodeChar::MAX_ALLOWED as u32 {
            return UnicodeChar::REPLACEMENT_CHARACTER;
        }

        // from_u32 rejects the surrogate range
        char::from_u32(as_u32).unwrap_or(UnicodeChar::REPLACEMENT_CHARACTER)
    }

    /// 4.3.11. [Consume an ident sequence](https://www.w3.org/TR/css-syntax-3/#consume-name)
    ///
    /// Note: this algorithm does not do the verification that is necessary to ensure the
    /// returned code points would constitute an `<ident-token>`. The caller should check
    /// that the stream starts with an ident sequence first.
    fn consume_ident(&mut self) -> String {
        let mut value = String::new();

        loop {
            match self.current_char() {
                Ch('\\') if self.is_start_of_escape(0) => {
                    value.push(self.consume_escaped());
                }
                Ch(c) if is_ident_char(c) => {
                    value.push(c);
                    self.next_char();
                }
                _ => break,
            }
        }

        value
    }

    fn consume_digits(&mut self) -> String {
        let mut value = String::new();

        while matches!(self.current_char(), Ch(c) if c.is_ascii_digit()) {
            value.push(self.next_char().into());
        }

        value
    }

    fn consume_chars(&mut self, mut len: usize) -> String {
        let mut value = String::new();

        while len > 0 {
            value.push(self.next_char().into());
            len -= 1;
        }

        value
    }

    fn consume_whitespace(&mut self) {
        while matches!(self.current_char(), Ch(c) if is_whitespace(c)) {
            self.next_char();
        }
    }

    fn is_ident_char_at(&self, start: usize) -> bool {
        matches!(self.stream.look_ahead(start), Ch(c) if is_ident_char(c))
    }

    /// 4.3.8. [Check if two code points are a valid escape](https://www.w3.org/TR/css-syntax-3/#starts-with-a-valid-escape)
    ///
    /// A backslash with nothing after it is not an escape; a lone `\` at the end of the
    /// stream tokenizes as a delim.
    fn is_start_of_escape(&self, start: usize) -> bool {
        let current_char = self.stream.look_ahead(start);
        let next_char = self.stream.look_ahead(start + 1);

        current_char == Ch('\\') && !matches!(next_char, Ch('\n') | Character::StreamEnd)
    }

    /// 4.3.9. [Check if three code points would start an ident sequence](https://www.w3.org/TR/css-syntax-3/#check-if-three-code-points-would-start-an-ident-sequence)
    fn is_next_3_points_starts_ident_seq(&self, start: usize) -> bool {
        let first = self.stream.look_ahead(start);
        let second = self.stream.look_ahead(start + 1);

        if first == Ch('-') {
            return matches!(second, Ch(c) if is_ident_start(c))
                || second == Ch('-')
                || self.is_start_of_escape(start + 1);
        }

        if first == Ch('\\') {
            return self.is_start_of_escape(start);
        }

        matches!(first, Ch(c) if is_ident_start(c))
    }

    /// 4.3.10. [Check if three code points would start a number](https://www.w3.org/TR/css-syntax-3/#starts-with-a-number)
    fn starts_number(&self, start: usize) -> bool {
        let first = self.stream.look_ahead(start);
        let second = self.stream.look_ahead(start + 1);
        let third = self.stream.look_ahead(start + 2);

        match first {
            Ch('+' | '-') => second.is_numeric() || (second == Ch('.') && third.is_numeric()),
            Ch('.') => second.is_numeric(),
            _ => first.is_numeric(),
        }
    }

    fn current_char(&self) -> Character {
        self.stream.read()
    }

    fn next_char(&mut self) -> Character {
        let c = self.stream.read_and_next();
        match c {
            Ch('\n') => {
                self.cur_location.line += 1;
                self.cur_location.column = 1;
                self.cur_location.offset += 1;
            }
            Ch(_) => {
                self.cur_location.column += 1;
                self.cur_location.offset += 1;
            }
            Character::StreamEnd => {}
        }

        c
    }

    fn look_ahead_slice(&self, len: usize) -> String {
        let mut s = String::new();

        for i in 0..len {
            match self.stream.look_ahead(i) {
                Ch(c) => s.push(c),
                Character::StreamEnd => break,
            }
        }

        s
    }
}

/// Tokens can be pulled lazily through iteration; the final EOF token is produced once.
impl Iterator for Tokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.eof {
            return None;
        }

        Some(self.next_token())
    }
}

/// [whitespace](https://www.w3.org/TR/css-syntax-3/#whitespace): the stream is
/// newline-normalized, so only space, tab and LF remain
fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n')
}

/// [ident-start code point](https://www.w3.org/TR/css-syntax-3/#ident-start-code-point)
fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || !c.is_ascii() || c == '_'
}

/// [ident code point](https://www.w3.org/TR/css-syntax-3/#ident-code-point)
fn is_ident_char(c: char) -> bool {
    is_ident_start(c) || c.is_ascii_digit() || c == '-'
}

/// [non-printable code point](https://www.w3.org/TR/css-syntax-3/#non-printable-code-point)
fn is_non_printable(c: char) -> bool {
    (c >= UnicodeChar::NULL && c <= UnicodeChar::BACKSPACE)
        || c == UnicodeChar::LINE_TABULATION
        || (c >= UnicodeChar::SHIFT_OUT && c <= UnicodeChar::INFORMATION_SEPARATOR_ONE)
        || c == UnicodeChar::DELETE
}
