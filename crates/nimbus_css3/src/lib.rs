extern crate core;

use crate::errors::Error;
use crate::parser_config::ParserConfig;
use crate::stylesheet::{CssRule, CssStylesheet};
use crate::tokenizer::{Token, Tokenizer};
use nimbus_shared::byte_stream::ByteStream;
use nimbus_shared::errors::CssResult;

pub mod errors;
pub mod parser;
pub mod parser_config;
pub mod stylesheet;
pub mod tokenizer;
mod unicode;
pub mod walker;

/// CSS3 parser: drives the tokenizer through the CSS Syntax Level 3 consume algorithms and
/// post-processes qualified rules into selector lists and declarations.
pub struct Css3<'stream> {
    /// The tokenizer is responsible for reading the input stream
    tokenizer: Tokenizer<'stream>,
    /// The single token the parser owns; preserved tokens are cloned out of this slot
    current: Option<Token>,
    /// One-shot flag: when set the next read returns the current token again
    reconsume: bool,
    /// Current nesting depth of blocks and functions
    depth: usize,
    /// The parser configuration as given
    config: ParserConfig,
}

impl<'stream> Css3<'stream> {
    /// Creates a new parser with the given byte stream so only `parse()` needs to be called.
    fn new(stream: &'stream mut ByteStream, config: ParserConfig) -> Self {
        Self {
            tokenizer: Tokenizer::new(stream),
            current: None,
            reconsume: false,
            depth: 0,
            config,
        }
    }

    /// Parses a direct string to a `CssStylesheet`
    pub fn parse_str(data: &str, config: ParserConfig) -> Result<CssStylesheet, Error> {
        let mut stream = ByteStream::new(None);
        stream.read_from_str(data);

        Css3::parse_stream(&mut stream, config)
    }

    /// Parses a byte buffer to a `CssStylesheet`. The bytes are assumed to be UTF8 encoded;
    /// invalid sequences are replaced with U+FFFD.
    pub fn parse_bytes(data: &[u8], config: ParserConfig) -> Result<CssStylesheet, Error> {
        let mut stream = ByteStream::new(None);
        stream.read_from_bytes(data);

        Css3::parse_stream(&mut stream, config)
    }

    /// Parses a direct stream to a `CssStylesheet`
    pub fn parse_stream(
        stream: &mut ByteStream,
        config: ParserConfig,
    ) -> Result<CssStylesheet, Error> {
        Ok(Css3::new(stream, config).parse()?)
    }

    fn parse(&mut self) -> CssResult<CssStylesheet> {
        log::trace!("parse");

        let mut rules = self.consume_rule_list(true)?;

        // post-processing passes: selectors from preludes, declarations from block contents
        for rule in &mut rules {
            if let CssRule::Qualified(rule) = rule {
                let selectors = self.parse_selector_list(&rule.prelude);
                let declarations = self.parse_declarations_from_block(&rule.block);
                rule.selectors = selectors;
                rule.declarations = declarations;
            }
        }

        Ok(CssStylesheet {
            rules,
            url: self.config.source.clone().unwrap_or_default(),
            parse_log: self.tokenizer.take_parse_log(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stylesheet::{Combinator, ComponentValue, Specificity};
    use crate::tokenizer::TokenType;
    use crate::walker::Walker;

    macro_rules! test {
        ($input:expr, $expected:expr) => {
            let sheet = Css3::parse_str($input, ParserConfig::default()).unwrap();

            let w = Walker::new(&sheet);
            assert_eq!(w.walk_to_string(), $expected);
        };
    }

    fn parse(input: &str) -> CssStylesheet {
        Css3::parse_str(input, ParserConfig::default()).unwrap()
    }

    fn qualified(sheet: &CssStylesheet, index: usize) -> &crate::stylesheet::CssQualifiedRule {
        match &sheet.rules[index] {
            CssRule::Qualified(rule) => rule,
            CssRule::At(_) => panic!("expected a qualified rule"),
        }
    }

    #[test]
    fn parse_empty_stylesheet() {
        let sheet = parse("");
        assert!(sheet.rules.is_empty());
        assert!(sheet.parse_log.is_empty());

        let sheet = parse("   \n\t  /* only a comment */  ");
        assert!(sheet.rules.is_empty());
    }

    #[test]
    fn parse_single_rule() {
        test!("body { color: red; }", "STYLESHEET\n  QUALIFIED_RULE\n    SELECTOR_LIST (1)\n      COMPLEX_SELECTOR\n        COMPOUND_SELECTOR\n          <type \"body\">\n    prelude:\n      <ident \"body\">\n      <whitespace>\n    BLOCK {}\n      DECLARATION \"color\"\n        <ident \"red\">\n");
    }

    #[test]
    fn parse_pseudo_element_rule() {
        test!("/* comment */ a::before { content: \"x\" }", "STYLESHEET\n  QUALIFIED_RULE\n    SELECTOR_LIST (1)\n      COMPLEX_SELECTOR\n        COMPOUND_SELECTOR\n          <type \"a\">\n          <pseudo-element \"before\">\n    prelude:\n      <ident \"a\">\n      <colon>\n      <colon>\n      <ident \"before\">\n      <whitespace>\n    BLOCK {}\n      DECLARATION \"content\"\n        <string \"x\">\n");
    }

    #[test]
    fn parse_combinators_and_important() {
        let sheet = parse(".a > .b + p { x: 1 !IMPORTANT }");
        let rule = qualified(&sheet, 0);

        assert_eq!(rule.declarations.len(), 1);
        let declaration = &rule.declarations[0];
        assert_eq!(declaration.property, "x");
        assert!(declaration.important);
        assert_eq!(declaration.value.len(), 1);
        assert!(matches!(
            declaration.value[0],
            ComponentValue::Token(Token {
                token_type: TokenType::Number { value, .. },
                ..
            }) if value == 1.0
        ));

        let selectors = rule.selectors.as_ref().unwrap();
        assert_eq!(selectors.selectors.len(), 1);
        let complex = &selectors.selectors[0];
        assert_eq!(complex.compounds.len(), 3);
        assert_eq!(
            complex.combinators,
            vec![Combinator::Child, Combinator::NextSibling]
        );
        assert_eq!(complex.specificity(), Specificity::new(0, 2, 1));
    }

    #[test]
    fn parse_at_rule_with_block() {
        // nested rules inside an at-rule block stay raw component values
        test!("@media screen { p { color: blue } }", "STYLESHEET\n  AT_RULE \"media\"\n    prelude:\n      <whitespace>\n      <ident \"screen\">\n      <whitespace>\n    BLOCK {}\n      <whitespace>\n      <ident \"p\">\n      <whitespace>\n      BLOCK {}\n        <whitespace>\n        <ident \"color\">\n        <colon>\n        <whitespace>\n        <ident \"blue\">\n        <whitespace>\n      <whitespace>\n");
    }

    #[test]
    fn parse_statement_at_rule() {
        let sheet = parse("@import url(style.css);");
        assert_eq!(sheet.rules.len(), 1);

        let CssRule::At(at_rule) = &sheet.rules[0] else {
            panic!("expected an at-rule");
        };
        assert_eq!(at_rule.name, "import");
        assert!(at_rule.block.is_none());
        assert!(at_rule
            .prelude
            .iter()
            .any(|cv| matches!(cv, ComponentValue::Token(t) if t.token_type == TokenType::Url("style.css".to_string()))));
    }

    #[test]
    fn selector_list_specificities() {
        let sheet = parse("#a, #b#c, .x[href^=\"/docs\" i] { }");
        let rule = qualified(&sheet, 0);

        let selectors = rule.selectors.as_ref().unwrap();
        assert_eq!(selectors.selectors.len(), 3);
        assert_eq!(selectors.selectors[0].specificity(), Specificity::new(1, 0, 0));
        assert_eq!(selectors.selectors[1].specificity(), Specificity::new(2, 0, 0));
        assert_eq!(selectors.selectors[2].specificity(), Specificity::new(0, 2, 0));
    }

    #[test]
    fn selector_list_render_is_stable() {
        // re-rendering the parsed selector list gives back the same significant tokens
        let sheet = parse("#a, #b#c, .x[href^=\"/docs\" i] { }");
        let rendered = qualified(&sheet, 0).selectors.as_ref().unwrap().to_string();
        assert_eq!(rendered, "#a, #b#c, .x[href^=\"/docs\" i]");

        let sheet = parse(&format!("{} {{ }}", rendered));
        let re_rendered = qualified(&sheet, 0).selectors.as_ref().unwrap().to_string();
        assert_eq!(re_rendered, rendered);
    }

    #[test]
    fn cdo_cdc_skipped_at_top_level() {
        let sheet = parse("<!-- body { color: red } -->");
        assert_eq!(sheet.rules.len(), 1);
        assert!(qualified(&sheet, 0).selectors.is_some());
    }

    #[test]
    fn unterminated_block_is_tolerated() {
        let sheet = parse("p { color: red");
        assert_eq!(sheet.rules.len(), 1);

        let rule = qualified(&sheet, 0);
        assert_eq!(rule.declarations.len(), 1);
        assert_eq!(rule.declarations[0].property, "color");
        assert!(!sheet.parse_log.is_empty());
    }

    #[test]
    fn qualified_rule_without_block_is_discarded() {
        let sheet = parse("p .foo");
        assert!(sheet.rules.is_empty());
        assert!(!sheet.parse_log.is_empty());
    }

    #[test]
    fn rule_order_is_source_order() {
        let sheet = parse("a { } @media x { } b { }");
        assert_eq!(sheet.rules.len(), 3);
        assert!(matches!(sheet.rules[0], CssRule::Qualified(_)));
        assert!(matches!(sheet.rules[1], CssRule::At(_)));
        assert!(matches!(sheet.rules[2], CssRule::Qualified(_)));
    }

    #[test]
    fn function_values_exclude_closing_paren() {
        let sheet = parse("p { color: rgb(1, 2, 3); }");
        let rule = qualified(&sheet, 0);

        let declaration = &rule.declarations[0];
        let ComponentValue::Function(function) = &declaration.value[0] else {
            panic!("expected a function component value");
        };

        assert_eq!(function.name, "rgb");
        assert!(!function
            .arguments
            .iter()
            .any(|cv| matches!(cv, ComponentValue::Token(t) if t.token_type == TokenType::RParen)));
    }

    #[test]
    fn nesting_depth_cap_aborts_parse() {
        let mut input = String::from("p { x: ");
        input.push_str(&"(".repeat(300));

        let result = Css3::parse_str(&input, ParserConfig::default());
        assert!(result.is_err());

        // a deep but in-bounds nesting parses fine
        let mut input = String::from("p { x: ");
        input.push_str(&"(".repeat(100));
        input.push_str(&")".repeat(100));
        input.push_str(" }");
        assert!(Css3::parse_str(&input, ParserConfig::default()).is_ok());
    }

    #[test]
    fn malformed_utf8_is_replaced() {
        let sheet = Css3::parse_bytes(b"p { content: \"a\xFFb\" }", ParserConfig::default())
            .expect("parse failed");
        let rule = qualified(&sheet, 0);
        assert_eq!(rule.declarations.len(), 1);

        let ComponentValue::Token(token) = &rule.declarations[0].value[0] else {
            panic!("expected a preserved token");
        };
        assert_eq!(
            token.token_type,
            TokenType::QuotedString("a\u{FFFD}b".to_string())
        );
    }

    #[test]
    fn stylesheet_url_comes_from_config() {
        let config = ParserConfig {
            source: Some("test.css".to_string()),
            ..Default::default()
        };
        let sheet = Css3::parse_str("a { }", config).unwrap();
        assert_eq!(sheet.url, "test.css");
    }

    #[test]
    #[ignore]
    fn parser() {
        use simple_logger::SimpleLogger;

        let filename = "../../tests/data/example.css";

        SimpleLogger::new().init().unwrap();

        let config = ParserConfig {
            source: Some(filename.to_string()),
            ..Default::default()
        };

        let css = std::fs::read_to_string(filename).unwrap();
        let res = Css3::parse_str(css.as_str(), config);
        if res.is_err() {
            println!("{:?}", res.err().unwrap());
        }
    }
}
