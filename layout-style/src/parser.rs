//! Turns a CSS-like style text block into a `ParsedStyle`.
//!
//! Grounded in `azul-css-parser`'s declaration-splitting approach
//! (trim, split on `;`, split on the first `:`) generalized to a
//! single value coercion routine instead of one parse function per
//! property, since every recognized property in this engine shares the
//! same value grammar (number / zero-with-unit / percent / identifier).

use crate::style::ParsedStyle;
use crate::value::PropertyValue;

const IMPORTANT_SUFFIX: &str = "!important";

/// Units that collapse a literal `0` to the bare number `0`.
const ZERO_UNITS: &[&str] = &["px", "%", "em", "rem", "pt", "vh", "vw"];

/// Parses a style text block (`;`-terminated declarations, freely
/// spread across lines or packed onto one) into a style map plus the
/// set of properties marked `!important`.
pub fn parse_style_block(text: &str) -> ParsedStyle {
    let mut style = ParsedStyle::new();

    for raw_decl in text.split(|c: char| c == ';' || c == '\n') {
        let line = raw_decl.trim();
        if line.is_empty() {
            continue;
        }

        let Some(colon) = line.find(':') else {
            continue;
        };
        let (raw_key, raw_value) = line.split_at(colon);
        let raw_key = raw_key.trim();
        let raw_value = raw_value[1..].trim();

        if raw_key.is_empty() || raw_value.is_empty() {
            continue;
        }

        let key = kebab_to_camel(raw_key);

        let (value_text, important) = match raw_value.strip_suffix(IMPORTANT_SUFFIX) {
            Some(stripped) => (stripped.trim(), true),
            None => (raw_value, false),
        };

        let value = coerce_value(value_text);
        set_property(&mut style, &key, value, important);
    }

    expand_flex_shorthand(&mut style);
    style
}

/// Inserts a property into a style map honoring the "winning write" rule
/// used by the cascade: within a single block later lines simply
/// overwrite earlier ones (no two declarations for the same key in one
/// well-formed block compete on importance; that only happens across
/// cascade sources, see `crate::cascade`).
fn set_property(style: &mut ParsedStyle, key: &str, value: PropertyValue, important: bool) {
    style.values.insert(key.to_string(), value);
    if important {
        style.important.insert(key.to_string());
    } else {
        style.important.remove(key);
    }
}

/// `kebab-case` and `camelCase` both normalize to `camelCase`.
pub fn kebab_to_camel(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut uppercase_next = false;
    for ch in key.chars() {
        if ch == '-' {
            uppercase_next = true;
            continue;
        }
        if uppercase_next {
            out.extend(ch.to_uppercase());
            uppercase_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

fn coerce_value(value: &str) -> PropertyValue {
    if let Some(zero) = try_collapse_zero(value) {
        return zero;
    }
    if is_plain_number(value) {
        if let Ok(n) = value.parse::<f64>() {
            return PropertyValue::Number(n);
        }
    }
    PropertyValue::Str(value.to_string())
}

/// Matches `^-?\d+(\.\d+)?$`.
fn is_plain_number(value: &str) -> bool {
    let value = value.strip_prefix('-').unwrap_or(value);
    if value.is_empty() {
        return false;
    }
    let mut parts = value.splitn(2, '.');
    let int_part = parts.next().unwrap_or("");
    let frac_part = parts.next();

    if int_part.is_empty() || !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    match frac_part {
        Some(frac) => !frac.is_empty() && frac.bytes().all(|b| b.is_ascii_digit()),
        None => true,
    }
}

/// Matches `^0(px|%|em|rem|pt|vh|vw)$`.
fn try_collapse_zero(value: &str) -> Option<PropertyValue> {
    let rest = value.strip_prefix('0')?;
    if ZERO_UNITS.contains(&rest) {
        Some(PropertyValue::Number(0.0))
    } else {
        None
    }
}

/// Expands a `flex` shorthand property into `flexGrow` / `flexShrink` /
/// `flexBasis`, per the one/two/three-token grammar in the spec.
fn expand_flex_shorthand(style: &mut ParsedStyle) {
    let Some(raw) = style.values.get("flex").cloned() else {
        return;
    };
    let important = style.important.contains("flex");

    let (grow, shrink, basis) = match &raw {
        PropertyValue::Str(s) if s == "auto" => (1.0, 1.0, PropertyValue::from("auto")),
        PropertyValue::Str(s) if s == "none" => (0.0, 0.0, PropertyValue::from("auto")),
        PropertyValue::Str(s) if s == "initial" => (0.0, 1.0, PropertyValue::from("auto")),
        _ => {
            let tokens: Vec<&str> = match &raw {
                PropertyValue::Str(s) => s.split_whitespace().collect(),
                PropertyValue::Number(_) => vec![],
            };
            match tokens.len() {
                0 => {
                    // A single bare number, e.g. `flex: 2`.
                    let grow = raw.as_f64().unwrap_or(0.0);
                    (grow, 1.0, PropertyValue::from(0.0))
                }
                1 => {
                    let grow = tokens[0].parse::<f64>().unwrap_or(0.0);
                    (grow, 1.0, PropertyValue::from(0.0))
                }
                2 => {
                    let grow = tokens[0].parse::<f64>().unwrap_or(0.0);
                    if let Ok(shrink) = tokens[1].parse::<f64>() {
                        (grow, shrink, PropertyValue::from(0.0))
                    } else {
                        (grow, 1.0, coerce_value(tokens[1]))
                    }
                }
                _ => {
                    let grow = tokens[0].parse::<f64>().unwrap_or(0.0);
                    let shrink = tokens[1].parse::<f64>().unwrap_or(1.0);
                    (grow, shrink, coerce_value(tokens[2]))
                }
            }
        }
    };

    set_property(style, "flexGrow", PropertyValue::Number(grow), important);
    set_property(style, "flexShrink", PropertyValue::Number(shrink), important);
    set_property(style, "flexBasis", basis, important);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_number() {
        let style = parse_style_block("width: 200");
        assert_eq!(style.values.get("width"), Some(&PropertyValue::Number(200.0)));
        assert!(!style.important.contains("width"));
    }

    #[test]
    fn parses_important() {
        let style = parse_style_block("width: 200 !important");
        assert_eq!(style.values.get("width"), Some(&PropertyValue::Number(200.0)));
        assert!(style.important.contains("width"));
    }

    #[test]
    fn collapses_zero_with_unit() {
        let style = parse_style_block("width: 0px;");
        assert_eq!(style.values.get("width"), Some(&PropertyValue::Number(0.0)));
    }

    #[test]
    fn keeps_percent_as_string() {
        let style = parse_style_block("width: 50%;");
        assert_eq!(style.values.get("width"), Some(&PropertyValue::Str("50%".into())));
    }

    #[test]
    fn keeps_identifier_as_string() {
        let style = parse_style_block("display: vertical;");
        assert_eq!(style.values.get("display"), Some(&PropertyValue::Str("vertical".into())));
    }

    #[test]
    fn kebab_and_camel_collapse() {
        let a = parse_style_block("min-width: 100");
        let b = parse_style_block("minWidth: 100");
        assert_eq!(a.values.get("minWidth"), b.values.get("minWidth"));
    }

    #[test]
    fn flex_auto_expands() {
        let style = parse_style_block("flex: auto;");
        assert_eq!(style.values.get("flexGrow"), Some(&PropertyValue::Number(1.0)));
        assert_eq!(style.values.get("flexShrink"), Some(&PropertyValue::Number(1.0)));
        assert_eq!(style.values.get("flexBasis"), Some(&PropertyValue::Str("auto".into())));
    }

    #[test]
    fn flex_two_tokens_numeric_is_shrink() {
        let style = parse_style_block("flex: 2 3;");
        assert_eq!(style.values.get("flexGrow"), Some(&PropertyValue::Number(2.0)));
        assert_eq!(style.values.get("flexShrink"), Some(&PropertyValue::Number(3.0)));
        assert_eq!(style.values.get("flexBasis"), Some(&PropertyValue::Number(0.0)));
    }

    #[test]
    fn flex_two_tokens_non_numeric_is_basis() {
        let style = parse_style_block("flex: 2 30%;");
        assert_eq!(style.values.get("flexGrow"), Some(&PropertyValue::Number(2.0)));
        assert_eq!(style.values.get("flexShrink"), Some(&PropertyValue::Number(1.0)));
        assert_eq!(style.values.get("flexBasis"), Some(&PropertyValue::Str("30%".into())));
    }

    #[test]
    fn malformed_lines_are_dropped() {
        let style = parse_style_block("no colon here\n: empty key\nwidth:\n");
        assert!(style.values.is_empty());
    }
}
