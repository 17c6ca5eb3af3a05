//! CSS text emission from flattened selector maps.

use std::collections::HashSet;

use super::flatten::SelectorMap;
use crate::util::dash_camel_case;

/// Emits CSS text for `selector` and everything nested below it.
///
/// Child rules are written depth-first before the parent's own block, in
/// the order they were nested. Blocks without declarations are left out.
pub fn emit(selector: &str, map: &SelectorMap) -> String {
    let mut out = String::new();
    let mut seen = HashSet::new();
    emit_into(&mut out, &mut seen, selector, map);
    out
}

fn emit_into<'m>(
    out: &mut String,
    seen: &mut HashSet<&'m str>,
    selector: &'m str,
    map: &'m SelectorMap,
) {
    let Some(rule) = map.get(selector) else {
        return;
    };
    if !seen.insert(selector) {
        return;
    }

    for child in &rule.children {
        emit_into(out, seen, child, map);
    }

    let block: String = rule
        .declarations
        .iter()
        .filter_map(|(property, value)| {
            let css = value.to_css()?;
            Some(format!("  {}: {};\n", property_name(property), css))
        })
        .collect();

    if !block.is_empty() {
        out.push_str(&format!("{} {{\n{}}}\n", selector, block));
    }
}

/// The CSS name of a style-book property key.
pub fn property_name(key: &str) -> String {
    if key.starts_with("--") {
        key.to_string()
    } else {
        dash_camel_case(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compile::{Flattener, PropertyAllowList};
    use crate::style::StyleBook;
    use crate::style_book;

    fn emit_body(selector: &str, body: &StyleBook) -> String {
        let mut map = SelectorMap::new();
        Flattener::new(PropertyAllowList::standard()).flatten(&mut map, selector, body);
        emit(selector, &map)
    }

    #[test]
    fn test_emit_single_block() {
        let css = emit_body(".pad-small", &style_book! { "padding" => "8px" });
        assert_eq!(css, ".pad-small {\n  padding: 8px;\n}\n");
    }

    #[test]
    fn test_emit_dash_cases_properties() {
        let css = emit_body(".v", &style_book! { "flexDirection" => "column", "rowGap" => "16px" });
        assert_eq!(css, ".v {\n  flex-direction: column;\n  row-gap: 16px;\n}\n");
    }

    #[test]
    fn test_children_come_before_parent() {
        let css = emit_body(
            ".block",
            &style_book! {
                "display" => "block",
                "& > *" => style_book! {
                    "float" => "left",
                    "&:first" => style_book! { "marginLeft" => "0px" },
                },
            },
        );
        assert_eq!(
            css,
            ".block > *:first {\n  margin-left: 0px;\n}\n\
             .block > * {\n  float: left;\n}\n\
             .block {\n  display: block;\n}\n"
        );
    }

    #[test]
    fn test_empty_blocks_are_suppressed() {
        let css = emit_body(
            ".grow",
            &style_book! { "& > *" => style_book! { "flexGrow" => 1 } },
        );
        assert_eq!(css, ".grow > * {\n  flex-grow: 1;\n}\n");
        assert_eq!(emit_body(".none", &StyleBook::new()), "");
    }

    #[test]
    fn test_empty_compound_value_is_dropped() {
        let css = emit_body(
            ".box",
            &style_book! { "transformOrigin" => StyleBook::new(), "zIndex" => 2 },
        );
        assert_eq!(css, ".box {\n  z-index: 2;\n}\n");
        let css = emit_body(".box", &style_book! { "transformOrigin" => StyleBook::new() });
        assert_eq!(css, "");
    }

    #[test]
    fn test_unknown_selector_emits_nothing() {
        assert_eq!(emit(".missing", &SelectorMap::new()), "");
    }

    #[test]
    fn test_custom_property_name_is_verbatim() {
        assert_eq!(property_name("--mainColor"), "--mainColor");
        assert_eq!(property_name("zIndex"), "z-index");
    }
}
