use crate::stylesheet::{ComponentValue, CssDeclaration, SimpleBlock};
use crate::Css3;

impl Css3<'_> {
    /// Parses declarations out of a qualified rule's block contents.
    ///
    /// Runs as a post-processing pass over the block's component values:
    /// `<ident> <whitespace>* ':' <whitespace>* <values>` up to the next `;` or the end of
    /// the block. Nested at-rules are skipped up to the next `;` or nested block and not
    /// analyzed further. Error recovery is local to the current declaration, the rest of
    /// the block always gets scanned.
    pub(crate) fn parse_declarations_from_block(&mut self, block: &SimpleBlock) -> Vec<CssDeclaration> {
        log::trace!("parse_declarations_from_block");

        let values = &block.values;
        let mut declarations = Vec::new();
        let mut i = 0;

        while i < values.len() {
            // skip whitespace and stray semicolons
            while i < values.len() && (values[i].is_whitespace() || values[i].is_semicolon()) {
                i += 1;
            }
            if i >= values.len() {
                break;
            }

            if values[i].is_at_keyword() {
                // nested at-rules in a declaration block are swallowed, not analyzed
                while i < values.len() {
                    if values[i].is_semicolon() {
                        i += 1;
                        break;
                    }
                    if values[i].is_block() {
                        i += 1;
                        break;
                    }
                    i += 1;
                }
                continue;
            }

            let Some(property) = values[i].as_ident().map(str::to_string) else {
                self.parse_error("expected a declaration name", values[i].location());
                while i < values.len() && !values[i].is_semicolon() {
                    i += 1;
                }
                continue;
            };

            let name_idx = i;
            i += 1;

            while i < values.len() && values[i].is_whitespace() {
                i += 1;
            }

            if i >= values.len() || !values[i].is_colon() {
                self.parse_error("expected ':' in declaration", values[name_idx].location());
                i = name_idx + 1;
                while i < values.len() && !values[i].is_semicolon() {
                    i += 1;
                }
                continue;
            }
            // skip ':'
            i += 1;

            while i < values.len() && values[i].is_whitespace() {
                i += 1;
            }

            let mut value = Vec::new();
            while i < values.len() && !values[i].is_semicolon() {
                value.push(values[i].clone());
                i += 1;
            }

            trim_trailing_whitespace(&mut value);

            let mut declaration = CssDeclaration {
                property,
                value,
                important: false,
            };
            check_important(&mut declaration);

            declarations.push(declaration);
        }

        declarations
    }
}

fn trim_trailing_whitespace(values: &mut Vec<ComponentValue>) {
    while values.last().is_some_and(ComponentValue::is_whitespace) {
        values.pop();
    }
}

/// Detects a trailing `!` `important` (ASCII case-insensitive, whitespace tolerated in
/// between). When found, the flag is set and the `!important` tokens plus any whitespace
/// around them are stripped from the value list.
fn check_important(declaration: &mut CssDeclaration) {
    let mut bang_idx = None;
    let mut found_important = false;

    for (i, cv) in declaration.value.iter().enumerate().rev() {
        if cv.is_whitespace() {
            continue;
        }

        if !found_important {
            match cv.as_ident() {
                Some(value) if value.eq_ignore_ascii_case("important") => {
                    found_important = true;
                    continue;
                }
                _ => return,
            }
        }

        if cv.is_delim('!') {
            bang_idx = Some(i);
        }
        break;
    }

    let Some(bang_idx) = bang_idx else {
        return;
    };

    declaration.important = true;
    declaration.value.truncate(bang_idx);
    trim_trailing_whitespace(&mut declaration.value);
}
