use crate::error::HistoryError;
use serde_json::Value;

/// Human-readable name of a JSON value's type, for shape diagnostics.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Parse a complete pump-history export: a JSON array of event objects.
///
/// The shape check is strict up front so the aggregation pass can assume
/// every element is an object. Field contents are not validated here;
/// absence of optional fields is normal.
pub fn parse_history(input: &str) -> Result<Vec<Value>, HistoryError> {
    let parsed: Value = serde_json::from_str(input)?;

    let events = match parsed {
        Value::Array(events) => events,
        other => {
            return Err(HistoryError::NotAnArray {
                found: json_type_name(&other),
            })
        }
    };

    for (index, event) in events.iter().enumerate() {
        if !event.is_object() {
            return Err(HistoryError::NotAnObject {
                index,
                found: json_type_name(event),
            });
        }
    }

    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_array_of_objects() {
        let events = parse_history(r#"[{"_type":"Bolus","amount":2.5},{"_type":"PumpResume"}]"#)
            .unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0]["_type"], "Bolus");
    }

    #[test]
    fn parses_empty_array() {
        let events = parse_history("[]").unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn rejects_invalid_json() {
        let err = parse_history("not valid json").unwrap_err();
        assert!(matches!(err, HistoryError::Parse(_)));
    }

    #[test]
    fn rejects_top_level_object() {
        let err = parse_history(r#"{"_type":"Bolus"}"#).unwrap_err();
        match err {
            HistoryError::NotAnArray { found } => assert_eq!(found, "an object"),
            other => panic!("expected NotAnArray, got {other:?}"),
        }
    }

    #[test]
    fn rejects_top_level_string() {
        let err = parse_history(r#""history""#).unwrap_err();
        assert!(matches!(err, HistoryError::NotAnArray { found: "a string" }));
    }

    #[test]
    fn rejects_non_object_element_with_index() {
        let err = parse_history(r#"[{"_type":"Bolus"}, 42]"#).unwrap_err();
        match err {
            HistoryError::NotAnObject { index, found } => {
                assert_eq!(index, 1);
                assert_eq!(found, "a number");
            }
            other => panic!("expected NotAnObject, got {other:?}"),
        }
    }

    #[test]
    fn rejects_null_element() {
        let err = parse_history("[null]").unwrap_err();
        assert!(matches!(
            err,
            HistoryError::NotAnObject {
                index: 0,
                found: "null"
            }
        ));
    }
}
