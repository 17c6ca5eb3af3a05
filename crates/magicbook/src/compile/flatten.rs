//! Flattening nested style bodies into per-selector declaration maps.

use indexmap::IndexMap;

use super::key::SelectorKey;
use super::properties::PropertyAllowList;
use crate::style::{StyleBook, StyleValue};

/// Declarations and nested children collected for one selector.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rule {
    /// Property declarations in insertion order.
    pub declarations: IndexMap<String, StyleValue>,
    /// Fully resolved child selectors in the order they were nested.
    pub children: Vec<String>,
}

/// Flattened output: every resolved selector and its rule.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectorMap {
    rules: IndexMap<String, Rule>,
}

impl SelectorMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the rule for `selector`.
    pub fn get(&self, selector: &str) -> Option<&Rule> {
        self.rules.get(selector)
    }

    /// Iterates selectors in the order they were first reached.
    pub fn selectors(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// Number of selectors reached.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if nothing was flattened.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    fn rule_mut(&mut self, selector: &str) -> &mut Rule {
        self.rules.entry(selector.to_string()).or_default()
    }

    fn declare(&mut self, selector: &str, property: &str, value: &StyleValue) {
        self.rule_mut(selector)
            .declarations
            .insert(property.to_string(), value.clone());
    }

    fn adopt(&mut self, parent: &str, child: &str) {
        let rule = self.rule_mut(parent);
        if !rule.children.iter().any(|c| c == child) {
            rule.children.push(child.to_string());
        }
    }
}

/// Walks style bodies, splitting declarations from nested selectors.
#[derive(Debug, Clone, Copy)]
pub struct Flattener<'a> {
    properties: &'a PropertyAllowList,
}

impl<'a> Flattener<'a> {
    /// Creates a flattener that disambiguates with `properties`.
    pub fn new(properties: &'a PropertyAllowList) -> Self {
        Self { properties }
    }

    /// Flattens `body` into `out` under the already resolved `selector`.
    ///
    /// Terminal values become declarations of `selector`. Book values nest,
    /// unless their key is a known CSS property, in which case they are a
    /// compound declaration value. Absent values are skipped.
    pub fn flatten(&self, out: &mut SelectorMap, selector: &str, body: &StyleBook) {
        out.rule_mut(selector);

        for (key, value) in body.iter() {
            match value {
                StyleValue::Absent => {}
                StyleValue::Book(nested) if !self.properties.contains(key) => {
                    let child = SelectorKey::parse(key).convert(selector);
                    if child != selector {
                        out.adopt(selector, &child);
                    }
                    self.flatten(out, &child, nested);
                }
                _ => out.declare(selector, key, value),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style_book;

    fn flatten(selector: &str, body: &StyleBook) -> SelectorMap {
        let mut out = SelectorMap::new();
        Flattener::new(PropertyAllowList::standard()).flatten(&mut out, selector, body);
        out
    }

    #[test]
    fn test_terminal_values_become_declarations() {
        let out = flatten(".pad", &style_book! { "paddingTop" => "16px", "opacity" => 0.5 });
        let rule = out.get(".pad").unwrap();
        assert_eq!(rule.declarations.len(), 2);
        assert_eq!(rule.declarations.get("opacity"), Some(&StyleValue::Number(0.5)));
    }

    #[test]
    fn test_nested_selector_is_resolved() {
        let out = flatten(
            ".light .flex-grow-children",
            &style_book! { "& > *" => style_book! { "flexGrow" => 1 } },
        );
        assert_eq!(
            out.get(".light .flex-grow-children").unwrap().children,
            vec![".light .flex-grow-children > *".to_string()]
        );
        assert!(out.get(".light .flex-grow-children > *").is_some());
        assert!(out.selectors().all(|s| !s.contains('&')));
    }

    #[test]
    fn test_known_property_with_book_is_compound_value() {
        let out = flatten(
            ".origin",
            &style_book! { "transformOrigin" => style_book! { "x" => "left", "y" => "top" } },
        );
        assert_eq!(out.len(), 1);
        let rule = out.get(".origin").unwrap();
        assert!(rule.declarations.contains_key("transformOrigin"));
        assert!(rule.children.is_empty());
    }

    #[test]
    fn test_absent_values_are_skipped() {
        let out = flatten(".x", &style_book! { "color" => StyleValue::Absent, "gap" => "8px" });
        assert_eq!(out.get(".x").unwrap().declarations.len(), 1);
    }

    #[test]
    fn test_self_reference_merges_into_parent() {
        let out = flatten(".x", &style_book! { "&" => style_book! { "gap" => "8px" } });
        let rule = out.get(".x").unwrap();
        assert!(rule.children.is_empty());
        assert!(rule.declarations.contains_key("gap"));
    }

    #[test]
    fn test_flatten_is_idempotent() {
        let body = style_book! {
            "float" => "left",
            "&:first" => style_book! { "marginLeft" => "0px" },
        };
        let mut out = SelectorMap::new();
        let flattener = Flattener::new(PropertyAllowList::standard());
        flattener.flatten(&mut out, ".b", &body);
        let once = out.clone();
        flattener.flatten(&mut out, ".b", &body);
        assert_eq!(out, once);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn body_strategy() -> impl Strategy<Value = StyleBook> {
        let leaf = prop_oneof![
            "[a-z0-9]{1,6}".prop_map(StyleValue::from),
            (0u32..100).prop_map(StyleValue::from),
            Just(StyleValue::Absent),
        ];
        let key = prop_oneof![
            Just("color".to_string()),
            Just("gap".to_string()),
            Just("&:hover".to_string()),
            Just("& > *".to_string()),
            "[a-z]{1,6}",
        ];
        leaf.prop_recursive(3, 24, 4, move |inner| {
            prop::collection::vec((key.clone(), inner), 0..4)
                .prop_map(|entries| StyleValue::Book(entries.into_iter().collect()))
        })
        .prop_map(|value| match value {
            StyleValue::Book(book) => book,
            other => StyleBook::new().add("color", other),
        })
    }

    proptest! {
        #[test]
        fn flattened_selectors_are_resolved(body in body_strategy()) {
            let mut out = SelectorMap::new();
            Flattener::new(PropertyAllowList::standard()).flatten(&mut out, ".light .x", &body);

            for selector in out.selectors() {
                prop_assert!(!selector.contains('&'));
                prop_assert!(selector.starts_with(".light .x"));
            }
            for rule in out.rules.values() {
                prop_assert!(rule.declarations.values().all(|v| !v.is_absent()));
            }
        }
    }
}
