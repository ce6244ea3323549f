use serde_json::Value;

use crate::error::EventError;
use crate::models::ToolEvent;

/// Locations of the tool name, tried in order; the first non-empty string wins
const TOOL_NAME_LOOKUPS: [&str; 3] = ["/tool_name", "/tool/name", "/name"];

/// Locations of the argument object, tried in order; the first non-null value wins
const ARGS_LOOKUPS: [&str; 3] = ["/tool_input", "/tool/args", "/args"];

/// Parse one event payload (a single JSON document) into a [`ToolEvent`]
///
/// Missing arguments yield an empty argument map, and so does a first present value
/// that is not an object. Only a missing tool name rejects the event.
pub fn parse_event(payload: &str) -> Result<ToolEvent, EventError> {
    let value: Value = serde_json::from_str(payload)?;
    if !value.is_object() {
        return Err(EventError::NotAnObject);
    }

    let tool_name = TOOL_NAME_LOOKUPS
        .iter()
        .find_map(|pointer| {
            value.pointer(pointer).and_then(Value::as_str).filter(|name| !name.is_empty())
        })
        .ok_or(EventError::MissingToolName)?;

    let args = ARGS_LOOKUPS
        .iter()
        .find_map(|pointer| value.pointer(pointer).filter(|args| !args.is_null()))
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default();

    Ok(ToolEvent::new(tool_name, args))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_parse_top_level_fields() {
        let event = parse_event(r#"{"tool_name":"read_file","tool_input":{"file_path":"a.rs"}}"#).unwrap();
        assert_eq!(event.tool_name, "read_file");
        assert_eq!(event.args.get("file_path"), Some(&json!("a.rs")));
    }

    #[test]
    fn test_parse_nested_tool_object() {
        let event = parse_event(r#"{"tool":{"name":"glob","args":{"query":"*.md"}}}"#).unwrap();
        assert_eq!(event.tool_name, "glob");
        assert_eq!(event.args.get("query"), Some(&json!("*.md")));
    }

    #[test]
    fn test_parse_bare_name_and_args() {
        let event = parse_event(r#"{"name":"web_fetch","args":{"url":"https://example.com"}}"#).unwrap();
        assert_eq!(event.tool_name, "web_fetch");
        assert_eq!(event.args.len(), 1);
    }

    #[test]
    fn test_first_present_lookup_wins() {
        let payload = r#"{"name":"second","tool_name":"first","args":{"b":1},"tool_input":{"a":1}}"#;
        let event = parse_event(payload).unwrap();
        assert_eq!(event.tool_name, "first");
        assert!(event.args.contains_key("a"));
        assert!(!event.args.contains_key("b"));
    }

    #[test]
    fn test_non_string_name_falls_through() {
        let event = parse_event(r#"{"tool_name":42,"name":"replace"}"#).unwrap();
        assert_eq!(event.tool_name, "replace");
    }

    #[test]
    fn test_missing_args_is_empty_map() {
        let event = parse_event(r#"{"tool_name":"list_directory","tool_input":"oops"}"#).unwrap();
        assert!(event.args.is_empty());
    }

    #[test]
    fn test_non_object_args_stop_the_lookup() {
        let event = parse_event(r#"{"tool_name":"read_file","tool_input":"oops","args":{"file_path":"a.rs"}}"#).unwrap();
        assert!(event.args.is_empty());
    }

    #[test]
    fn test_null_args_fall_through() {
        let event = parse_event(r#"{"tool_name":"read_file","tool_input":null,"args":{"file_path":"a.rs"}}"#).unwrap();
        assert_eq!(event.args.get("file_path"), Some(&json!("a.rs")));
    }

    #[test]
    fn test_missing_tool_name() {
        let err = parse_event(r#"{"tool_input":{"file_path":"a.rs"}}"#).unwrap_err();
        assert!(matches!(err, EventError::MissingToolName));

        let err = parse_event(r#"{"tool_name":""}"#).unwrap_err();
        assert!(matches!(err, EventError::MissingToolName));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(parse_event("not json").unwrap_err(), EventError::InvalidJson(_)));
        assert!(matches!(parse_event("").unwrap_err(), EventError::InvalidJson(_)));
    }

    #[test]
    fn test_non_object_payload() {
        assert!(matches!(parse_event(r#"["read_file"]"#).unwrap_err(), EventError::NotAnObject));
    }
}
