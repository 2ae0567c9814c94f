//! Style class registry and cascade, grounded in `azul-css`'s
//! class-map `Css` registration model: classes register once by name,
//! lookups during a pass never mutate the registry.

use std::collections::HashMap;

use crate::parser::parse_style_block;
use crate::style::ParsedStyle;

/// Named style classes, registered once and read many times during
/// layout passes. Re-registering a name overwrites it (one-way
/// registration — the core never needs removal).
#[derive(Debug, Default, Clone)]
pub struct StyleRegistry {
    classes: HashMap<String, ParsedStyle>,
}

impl StyleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_class(&mut self, name: &str, text: &str) {
        log::trace!(target: "layout_style::cascade", "registering style class '{name}'");
        self.classes.insert(name.to_string(), parse_style_block(text));
    }

    pub fn get_class(&self, name: &str) -> Option<&ParsedStyle> {
        self.classes.get(name)
    }

    /// Builds the ordered list of styles that apply to a node: one
    /// parsed style per recognized class name (unknown names skipped,
    /// in list order), followed by the parsed inline style.
    pub fn instance_styles(&self, classes_attr: &str, inline_style_text: &str) -> Vec<ParsedStyle> {
        let mut styles: Vec<ParsedStyle> = classes_attr
            .split_whitespace()
            .filter_map(|name| self.classes.get(name).cloned())
            .collect();
        styles.push(parse_style_block(inline_style_text));
        styles
    }

    /// Merges an ordered list of styles into the final computed style,
    /// honoring `!important`: a later write overwrites an earlier one
    /// unless the earlier was important and the later is not. Two
    /// competing important writes resolve last-wins (list order).
    pub fn compute(&self, classes_attr: &str, inline_style_text: &str) -> ParsedStyle {
        let sources = self.instance_styles(classes_attr, inline_style_text);
        merge_cascade(&sources)
    }
}

pub fn merge_cascade(sources: &[ParsedStyle]) -> ParsedStyle {
    let mut result = ParsedStyle::new();

    for source in sources {
        for (key, value) in &source.values {
            let incoming_important = source.is_important(key);
            let existing_important = result.is_important(key);

            if existing_important && !incoming_important {
                continue;
            }

            result.values.insert(key.clone(), value.clone());
            if incoming_important {
                result.important.insert(key.clone());
            } else {
                result.important.remove(key);
            }
        }
    }

    result
}
