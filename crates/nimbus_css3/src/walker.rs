use crate::stylesheet::{
    ComplexSelector, ComponentValue, CssDeclaration, CssQualifiedRule, CssRule, CssStylesheet,
    SelectorList, SimpleBlock, SimpleSelector,
};
use crate::tokenizer::{Number, NumberType, Token, TokenType};
use std::io::Write;

/// The walker is used to walk the parsed stylesheet and print it to stdout.
pub struct Walker<'a> {
    root: &'a CssStylesheet,
}

impl<'a> Walker<'a> {
    #[must_use]
    pub fn new(root: &'a CssStylesheet) -> Self {
        Self { root }
    }

    pub fn walk_stdout(&self) {
        let _ = inner_walk(self.root, &mut std::io::stdout());
    }

    #[must_use]
    pub fn walk_to_string(&self) -> String {
        let mut output: Vec<u8> = Vec::new();

        let _ = inner_walk(self.root, &mut output);

        String::from_utf8_lossy(&output).into_owned()
    }
}

fn inner_walk(sheet: &CssStylesheet, f: &mut dyn Write) -> Result<(), std::io::Error> {
    writeln!(f, "STYLESHEET")?;
    for rule in &sheet.rules {
        walk_rule(rule, 1, f)?;
    }

    Ok(())
}

fn walk_rule(rule: &CssRule, depth: usize, f: &mut dyn Write) -> Result<(), std::io::Error> {
    let prefix = "  ".repeat(depth);

    match rule {
        CssRule::At(at_rule) => {
            writeln!(f, "{}AT_RULE \"{}\"", prefix, at_rule.name)?;
            if !at_rule.prelude.is_empty() {
                writeln!(f, "{prefix}  prelude:")?;
                for value in &at_rule.prelude {
                    walk_component_value(value, depth + 2, f)?;
                }
            }
            if let Some(block) = &at_rule.block {
                walk_simple_block(block, depth + 1, f)?;
            }
        }
        CssRule::Qualified(rule) => {
            writeln!(f, "{prefix}QUALIFIED_RULE")?;
            if let Some(selectors) = &rule.selectors {
                walk_selector_list(selectors, depth + 1, f)?;
            }
            if !rule.prelude.is_empty() {
                writeln!(f, "{prefix}  prelude:")?;
                for value in &rule.prelude {
                    walk_component_value(value, depth + 2, f)?;
                }
            }
            walk_rule_block(rule, depth + 1, f)?;
        }
    }

    Ok(())
}

/// The body of a qualified rule prints its parsed declarations. When the declaration pass
/// produced nothing the raw component values are shown instead.
fn walk_rule_block(
    rule: &CssQualifiedRule,
    depth: usize,
    f: &mut dyn Write,
) -> Result<(), std::io::Error> {
    let prefix = "  ".repeat(depth);
    let block = &rule.block;

    writeln!(
        f,
        "{}BLOCK {}{}",
        prefix,
        block.block_type.open(),
        block.block_type.close()
    )?;

    if rule.declarations.is_empty() {
        for value in &block.values {
            walk_component_value(value, depth + 1, f)?;
        }
        return Ok(());
    }

    for declaration in &rule.declarations {
        walk_declaration(declaration, depth + 1, f)?;
    }

    Ok(())
}

fn walk_declaration(
    declaration: &CssDeclaration,
    depth: usize,
    f: &mut dyn Write,
) -> Result<(), std::io::Error> {
    let prefix = "  ".repeat(depth);

    write!(f, "{}DECLARATION \"{}\"", prefix, declaration.property)?;
    if declaration.important {
        write!(f, " !important")?;
    }
    writeln!(f)?;

    for value in &declaration.value {
        walk_component_value(value, depth + 1, f)?;
    }

    Ok(())
}

fn walk_simple_block(
    block: &SimpleBlock,
    depth: usize,
    f: &mut dyn Write,
) -> Result<(), std::io::Error> {
    let prefix = "  ".repeat(depth);

    writeln!(
        f,
        "{}BLOCK {}{}",
        prefix,
        block.block_type.open(),
        block.block_type.close()
    )?;
    for value in &block.values {
        walk_component_value(value, depth + 1, f)?;
    }

    Ok(())
}

fn walk_component_value(
    value: &ComponentValue,
    depth: usize,
    f: &mut dyn Write,
) -> Result<(), std::io::Error> {
    let prefix = "  ".repeat(depth);

    match value {
        ComponentValue::Token(token) => {
            writeln!(f, "{}{}", prefix, token_literal(token))?;
        }
        ComponentValue::Block(block) => {
            walk_simple_block(block, depth, f)?;
        }
        ComponentValue::Function(function) => {
            writeln!(f, "{}FUNCTION \"{}\"", prefix, function.name)?;
            for argument in &function.arguments {
                walk_component_value(argument, depth + 1, f)?;
            }
        }
    }

    Ok(())
}

fn walk_selector_list(
    list: &SelectorList,
    depth: usize,
    f: &mut dyn Write,
) -> Result<(), std::io::Error> {
    let prefix = "  ".repeat(depth);

    writeln!(f, "{}SELECTOR_LIST ({})", prefix, list.selectors.len())?;
    for selector in &list.selectors {
        walk_complex_selector(selector, depth + 1, f)?;
    }

    Ok(())
}

fn walk_complex_selector(
    selector: &ComplexSelector,
    depth: usize,
    f: &mut dyn Write,
) -> Result<(), std::io::Error> {
    let prefix = "  ".repeat(depth);

    writeln!(f, "{prefix}COMPLEX_SELECTOR")?;

    for (i, compound) in selector.compounds.iter().enumerate() {
        // the combinator sits between this compound and the previous one
        if i > 0 {
            writeln!(f, "{}  COMBINATOR \"{}\"", prefix, selector.combinators[i - 1])?;
        }

        writeln!(f, "{prefix}  COMPOUND_SELECTOR")?;
        for simple in &compound.selectors {
            writeln!(f, "{}    {}", prefix, simple_selector_literal(simple))?;
        }
    }

    Ok(())
}

fn simple_selector_literal(selector: &SimpleSelector) -> String {
    match selector {
        SimpleSelector::Type(name) => format!("<type \"{name}\">"),
        SimpleSelector::Universal => "<universal>".to_string(),
        SimpleSelector::Class(name) => format!("<class \"{name}\">"),
        SimpleSelector::Id(name) => format!("<id \"{name}\">"),
        SimpleSelector::PseudoClass(name) => format!("<pseudo-class \"{name}\">"),
        SimpleSelector::PseudoElement(name) => format!("<pseudo-element \"{name}\">"),
        SimpleSelector::Attribute(attr) => {
            let mut out = format!("<attribute [{}", attr.name);
            if let Some(value) = &attr.value {
                out.push_str(&format!("{}\"{}\"", attr.matcher, value));
            }
            if attr.case_insensitive {
                out.push_str(" i");
            }
            out.push_str("]>");
            out
        }
    }
}

/// Formats a single token the way the AST dump shows it, e.g. `<ident "div">`.
#[must_use]
pub fn token_literal(token: &Token) -> String {
    match &token.token_type {
        TokenType::Ident(value) => format!("<ident \"{value}\">"),
        TokenType::Function(value) => format!("<function \"{value}\">"),
        TokenType::AtKeyword(value) => format!("<at-keyword \"{value}\">"),
        TokenType::Hash(value) => format!("<hash \"{value}\">"),
        TokenType::IDHash(value) => format!("<hash \"{value}\" id>"),
        TokenType::QuotedString(value) => format!("<string \"{value}\">"),
        TokenType::Url(value) => format!("<url \"{value}\">"),
        TokenType::Number { value, number_type } => {
            format!("<number {}>", format_number(*value, *number_type))
        }
        TokenType::Percentage { value, number_type } => {
            format!("<percentage {}>", format_number(*value, *number_type))
        }
        TokenType::Dimension {
            value,
            unit,
            number_type,
        } => format!("<dimension {} \"{}\">", format_number(*value, *number_type), unit),
        TokenType::Delim(c) => {
            if (*c as u32) < 0x80 {
                format!("<delim '{c}'>")
            } else {
                format!("<delim U+{:04X}>", *c as u32)
            }
        }
        TokenType::Whitespace => "<whitespace>".to_string(),
        TokenType::BadString(_) => "<bad-string>".to_string(),
        TokenType::BadUrl(_) => "<bad-url>".to_string(),
        TokenType::Cdo => "<CDO>".to_string(),
        TokenType::Cdc => "<CDC>".to_string(),
        TokenType::Colon => "<colon>".to_string(),
        TokenType::Semicolon => "<semicolon>".to_string(),
        TokenType::Comma => "<comma>".to_string(),
        TokenType::LCurly => "<{>".to_string(),
        TokenType::RCurly => "<}>".to_string(),
        TokenType::LParen => "<(>".to_string(),
        TokenType::RParen => "<)>".to_string(),
        TokenType::LBracket => "<[>".to_string(),
        TokenType::RBracket => "<]>".to_string(),
        TokenType::Eof => "<EOF>".to_string(),
    }
}

/// Integer flagged numerics print without a fractional part
fn format_number(value: Number, number_type: NumberType) -> String {
    match number_type {
        NumberType::Integer => format!("{}", value as i64),
        NumberType::Number => format!("{value}"),
    }
}
