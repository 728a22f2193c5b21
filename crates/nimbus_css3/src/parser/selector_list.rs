use crate::parser::selector::parse_complex_selector;
use crate::stylesheet::{ComponentValue, SelectorList};
use crate::Css3;

impl Css3<'_> {
    /// Parses a qualified rule prelude into a selector list.
    ///
    /// The prelude is split on top level commas; commas inside blocks or functions never
    /// show up at this level. Empty and whitespace-only segments are skipped. A parse
    /// failure in any segment invalidates the entire selector list and yields None; the
    /// qualified rule itself is kept by the caller.
    pub(crate) fn parse_selector_list(&mut self, prelude: &[ComponentValue]) -> Option<SelectorList> {
        log::trace!("parse_selector_list");

        let mut selectors = Vec::new();

        for segment in prelude.split(ComponentValue::is_comma) {
            if segment.iter().all(ComponentValue::is_whitespace) {
                continue;
            }

            match parse_complex_selector(segment) {
                Ok(selector) => selectors.push(selector),
                Err(e) => {
                    let location = e.location.clone().unwrap_or_default();
                    self.parse_error(&format!("invalid selector: {}", e.message), location);
                    return None;
                }
            }
        }

        if selectors.is_empty() {
            return None;
        }

        Some(SelectorList { selectors })
    }
}

#[cfg(test)]
mod test {
    use crate::parser_config::ParserConfig;
    use crate::stylesheet::{Combinator, CssRule, MatcherType, SimpleSelector, Specificity};
    use crate::Css3;

    fn selectors_of(input: &str) -> Option<crate::stylesheet::SelectorList> {
        let sheet = Css3::parse_str(input, ParserConfig::default()).expect("parse failed");
        match sheet.rules.first() {
            Some(CssRule::Qualified(rule)) => rule.selectors.clone(),
            _ => panic!("expected a qualified rule"),
        }
    }

    #[test]
    fn single_type_selector() {
        let list = selectors_of("body { }").expect("selector list");
        assert_eq!(list.selectors.len(), 1);
        assert_eq!(list.selectors[0].compounds.len(), 1);
        assert_eq!(
            list.selectors[0].compounds[0].selectors,
            vec![SimpleSelector::Type("body".to_string())]
        );
    }

    #[test]
    fn combinators_and_compounds() {
        let list = selectors_of(".a > .b + p ~ i d { }").expect("selector list");
        let complex = &list.selectors[0];

        assert_eq!(complex.compounds.len(), 5);
        assert_eq!(complex.combinators.len(), complex.compounds.len() - 1);
        assert_eq!(
            complex.combinators,
            vec![
                Combinator::Child,
                Combinator::NextSibling,
                Combinator::SubsequentSibling,
                Combinator::Descendant,
            ]
        );
    }

    #[test]
    fn comma_separated_list_with_specificities() {
        let list = selectors_of("#a, #b#c, .x[href^=\"/docs\" i] { }").expect("selector list");
        assert_eq!(list.selectors.len(), 3);

        assert_eq!(list.selectors[0].specificity(), Specificity::new(1, 0, 0));
        assert_eq!(list.selectors[1].specificity(), Specificity::new(2, 0, 0));
        assert_eq!(list.selectors[2].specificity(), Specificity::new(0, 2, 0));
    }

    #[test]
    fn compound_with_all_simple_selectors() {
        let list = selectors_of("div.foo#bar[href]:hover::before { }").expect("selector list");
        let compound = &list.selectors[0].compounds[0];

        assert_eq!(compound.selectors.len(), 6);
        assert!(matches!(compound.selectors[0], SimpleSelector::Type(_)));
        assert!(matches!(compound.selectors[1], SimpleSelector::Class(_)));
        assert!(matches!(compound.selectors[2], SimpleSelector::Id(_)));
        assert!(matches!(compound.selectors[3], SimpleSelector::Attribute(_)));
        assert!(matches!(compound.selectors[4], SimpleSelector::PseudoClass(_)));
        assert!(matches!(compound.selectors[5], SimpleSelector::PseudoElement(_)));
    }

    #[test]
    fn attribute_matchers() {
        let cases = vec![
            ("[href] {}", MatcherType::Exists, None, false),
            ("[a=b] {}", MatcherType::Equals, Some("b"), false),
            ("[a~=\"b\"] {}", MatcherType::Includes, Some("b"), false),
            ("[a|=b] {}", MatcherType::DashMatch, Some("b"), false),
            ("[a^=b] {}", MatcherType::PrefixMatch, Some("b"), false),
            ("[a$=b] {}", MatcherType::SuffixMatch, Some("b"), false),
            ("[a*=b] {}", MatcherType::SubstringMatch, Some("b"), false),
            ("[ a = b ] {}", MatcherType::Equals, Some("b"), false),
            ("[a=b i] {}", MatcherType::Equals, Some("b"), true),
            ("[a=b I] {}", MatcherType::Equals, Some("b"), true),
            ("[a=b s] {}", MatcherType::Equals, Some("b"), false),
        ];

        for (input, matcher, value, case_insensitive) in cases {
            let list = selectors_of(input).expect(input);
            let SimpleSelector::Attribute(attr) = &list.selectors[0].compounds[0].selectors[0]
            else {
                panic!("expected an attribute selector for {input}");
            };

            assert_eq!(attr.matcher, matcher, "{input}");
            assert_eq!(attr.value.as_deref(), value, "{input}");
            assert_eq!(attr.case_insensitive, case_insensitive, "{input}");
        }
    }

    #[test]
    fn universal_selector() {
        let list = selectors_of("* > p { }").expect("selector list");
        assert_eq!(
            list.selectors[0].compounds[0].selectors,
            vec![SimpleSelector::Universal]
        );
        assert_eq!(list.selectors[0].specificity(), Specificity::new(0, 0, 1));
    }

    #[test]
    fn invalid_segment_invalidates_whole_list() {
        // the second segment is invalid, so the whole selector list is dropped
        let list = selectors_of("div, 42 { color: red }");
        assert!(list.is_none());

        // bad attribute operator
        let list = selectors_of("[a==b] { }");
        assert!(list.is_none());

        // class without a name
        let list = selectors_of(".. { }");
        assert!(list.is_none());
    }

    #[test]
    fn rule_survives_invalid_selector_list() {
        let sheet =
            Css3::parse_str("div, 42 { color: red }", ParserConfig::default()).expect("parse");
        assert_eq!(sheet.rules.len(), 1);

        let CssRule::Qualified(rule) = &sheet.rules[0] else {
            panic!("expected a qualified rule");
        };
        assert!(rule.selectors.is_none());
        assert_eq!(rule.declarations.len(), 1);
        assert!(!sheet.parse_log.is_empty());
    }

    #[test]
    fn empty_segments_are_skipped() {
        let list = selectors_of("div, , p { }");
        // the empty middle segment is skipped, the rest parses
        let list = list.expect("selector list");
        assert_eq!(list.selectors.len(), 2);
    }
}
