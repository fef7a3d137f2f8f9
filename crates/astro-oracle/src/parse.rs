use serde_json::Value;

use crate::error::ParseError;

/// How the JSON object is located inside free-form model output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonExtraction {
    /// First `{` through the `}` that closes it, skipping braces inside
    /// string literals.
    #[default]
    Balanced,
    /// Leftmost `{` through rightmost `}`. Swallows any trailing prose that
    /// contains braces of its own.
    Greedy,
}

/// Locate the JSON object substring in raw model output.
pub fn extract_json_object(raw: &str, strategy: JsonExtraction) -> Option<&str> {
    match strategy {
        JsonExtraction::Balanced => extract_balanced(raw),
        JsonExtraction::Greedy => extract_greedy(raw),
    }
}

fn extract_greedy(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end <= start {
        return None;
    }
    Some(&raw[start..=end])
}

fn extract_balanced(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let body = &raw[start..];

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, ch) in body.char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&body[..=i]);
                }
            }
            _ => {}
        }
    }

    // Unterminated object.
    None
}

/// Extract and decode the JSON object in `raw`. No shape checks.
pub fn parse_json_object(raw: &str, strategy: JsonExtraction) -> Result<Value, ParseError> {
    let json_str = extract_json_object(raw, strategy).ok_or(ParseError::NoJson)?;
    serde_json::from_str(json_str).map_err(|e| ParseError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn no_brace_means_no_json() {
        for strategy in [JsonExtraction::Balanced, JsonExtraction::Greedy] {
            assert_eq!(
                parse_json_object("the stars are quiet today", strategy),
                Err(ParseError::NoJson)
            );
        }
    }

    #[test]
    fn object_surrounded_by_noise() {
        for strategy in [JsonExtraction::Balanced, JsonExtraction::Greedy] {
            let value = parse_json_object("noise {\"a\":1} trailing", strategy).unwrap();
            assert_eq!(value, json!({"a": 1}));
        }
    }

    #[test]
    fn fenced_code_block() {
        let raw = "Here you go:\n```json\n{\"sign\": \"leo\", \"nested\": {\"x\": [1, 2]}}\n```\n";
        let value = parse_json_object(raw, JsonExtraction::Balanced).unwrap();
        assert_eq!(value["nested"]["x"][1], 2);
    }

    #[test]
    fn malformed_object_reports_decode_reason() {
        let err = parse_json_object("{a:1,}", JsonExtraction::Balanced).unwrap_err();
        match err {
            ParseError::Decode(reason) => assert!(reason.contains("key must be a string")),
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn trailing_braces_split_the_strategies() {
        let raw = "{\"a\": {\"b\": 1}} and then {some aside}";
        assert_eq!(
            extract_json_object(raw, JsonExtraction::Balanced),
            Some("{\"a\": {\"b\": 1}}")
        );
        assert_eq!(extract_json_object(raw, JsonExtraction::Greedy), Some(raw));
        assert!(matches!(
            parse_json_object(raw, JsonExtraction::Greedy),
            Err(ParseError::Decode(_))
        ));
        assert_eq!(
            parse_json_object(raw, JsonExtraction::Balanced).unwrap(),
            json!({"a": {"b": 1}})
        );
    }

    #[test]
    fn braces_inside_strings_are_ignored() {
        let raw = r#"{"advice": "keep {calm} and \"carry\" on }"} tail }"#;
        let value = parse_json_object(raw, JsonExtraction::Balanced).unwrap();
        assert_eq!(value["advice"], "keep {calm} and \"carry\" on }");
    }

    #[test]
    fn unterminated_object() {
        assert_eq!(
            extract_json_object("{\"a\": {\"b\": 1}", JsonExtraction::Balanced),
            None
        );
        assert_eq!(extract_json_object("} before {", JsonExtraction::Greedy), None);
    }
}
