//! Rendering JSON values as TypeScript literals
//!
//! The layout is two-space indented with `"key": value` pairs, matching
//! what the site's data modules look like when written by hand. Keys listed
//! in [`LiteralStyle::bare_keys`] render their string values as bare
//! identifiers (`icon: Zap`) so they reference imported components.

use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use solar_core::{AdminError, AdminResult};
use std::sync::LazyLock;

const INDENT: &str = "  ";

static IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]+$").unwrap());

/// Whether a string can be emitted as a bare identifier
pub fn is_identifier(text: &str) -> bool {
    IDENTIFIER.is_match(text)
}

/// Literal rendering options
#[derive(Debug, Clone, Copy, Default)]
pub struct LiteralStyle {
    /// Object keys whose identifier-like string values are emitted unquoted
    pub bare_keys: &'static [&'static str],
}

impl LiteralStyle {
    pub const PLAIN: LiteralStyle = LiteralStyle { bare_keys: &[] };

    pub const fn with_bare_keys(bare_keys: &'static [&'static str]) -> Self {
        Self { bare_keys }
    }
}

/// Serialize a value and render it as a literal
pub fn to_literal<T: Serialize>(value: &T, style: LiteralStyle) -> AdminResult<String> {
    let value = serde_json::to_value(value)
        .map_err(|e| AdminError::generation(format!("failed to serialize export data: {}", e)))?;
    let mut out = String::new();
    write_value(&mut out, &value, 0, style);
    Ok(out)
}

fn write_value(out: &mut String, value: &Value, depth: usize, style: LiteralStyle) {
    match value {
        Value::Array(items) if items.is_empty() => out.push_str("[]"),
        Value::Array(items) => {
            out.push_str("[\n");
            for (i, item) in items.iter().enumerate() {
                push_indent(out, depth + 1);
                write_value(out, item, depth + 1, style);
                if i + 1 < items.len() {
                    out.push(',');
                }
                out.push('\n');
            }
            push_indent(out, depth);
            out.push(']');
        }
        Value::Object(map) if map.is_empty() => out.push_str("{}"),
        Value::Object(map) => {
            out.push_str("{\n");
            let last = map.len() - 1;
            for (i, (key, item)) in map.iter().enumerate() {
                push_indent(out, depth + 1);
                match item.as_str() {
                    Some(name) if style.bare_keys.contains(&key.as_str()) && is_identifier(name) => {
                        out.push_str(key);
                        out.push_str(": ");
                        out.push_str(name);
                    }
                    _ => {
                        write_string(out, key);
                        out.push_str(": ");
                        write_value(out, item, depth + 1, style);
                    }
                }
                if i < last {
                    out.push(',');
                }
                out.push('\n');
            }
            push_indent(out, depth);
            out.push('}');
        }
        Value::String(s) => write_string(out, s),
        other => out.push_str(&other.to_string()),
    }
}

fn write_string(out: &mut String, s: &str) {
    // Display of a JSON string value is its escaped, quoted form
    out.push_str(&Value::String(s.to_string()).to_string());
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_layout() {
        let value = json!([{ "slug": "a", "tags": [], "meta": {}, "n": 3, "ok": true }]);
        let literal = to_literal(&value, LiteralStyle::PLAIN).unwrap();
        assert_eq!(
            literal,
            "[\n  {\n    \"slug\": \"a\",\n    \"tags\": [],\n    \"meta\": {},\n    \"n\": 3,\n    \"ok\": true\n  }\n]"
        );
    }

    #[test]
    fn test_empty_array() {
        let empty: Vec<u8> = Vec::new();
        assert_eq!(to_literal(&empty, LiteralStyle::PLAIN).unwrap(), "[]");
    }

    #[test]
    fn test_escaping_keeps_arabic() {
        let literal = to_literal(&json!({"t": "سطر \"أول\"\nثاني"}), LiteralStyle::PLAIN).unwrap();
        assert_eq!(literal, "{\n  \"t\": \"سطر \\\"أول\\\"\\nثاني\"\n}");
    }

    #[test]
    fn test_bare_icon_keys() {
        let style = LiteralStyle::with_bare_keys(&["icon"]);
        let literal = to_literal(&json!([{ "icon": "Zap" }, { "icon": "not-an-id" }]), style).unwrap();
        assert!(literal.contains("    icon: Zap\n"));
        assert!(literal.contains("\"icon\": \"not-an-id\""));
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("ArrowUpDown"));
        assert!(is_identifier("Building2"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("a b"));
    }
}
