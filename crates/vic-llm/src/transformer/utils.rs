use serde_json::Value;

/// Safe get from JSON value along a dotted path
pub fn safe_get<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(value, |current, part| match part.parse::<usize>() {
        Ok(index) => current.get(index),
        Err(_) => current.get(part),
    })
}

/// Safe get string from JSON
pub fn safe_get_str<'a>(value: &'a Value, path: &str) -> Option<&'a str> {
    safe_get(value, path)?.as_str()
}

/// Best-effort error text from a failed response body.
///
/// A JSON body yields `error.message` when present. A non-JSON body is
/// returned verbatim. Empty or message-less bodies yield `None`.
pub fn extract_error_message(body: &str) -> Option<String> {
    match serde_json::from_str::<Value>(body) {
        Ok(json) => safe_get_str(&json, "error.message")
            .filter(|message| !message.is_empty())
            .map(str::to_string),
        Err(_) => {
            let trimmed = body.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_safe_get_with_index() {
        let value = json!({"choices": [{"message": {"content": "hi"}}]});
        assert_eq!(safe_get_str(&value, "choices.0.message.content"), Some("hi"));
        assert!(safe_get(&value, "choices.1.message").is_none());
    }

    #[test]
    fn test_extract_error_message() {
        assert_eq!(
            extract_error_message(r#"{"error":{"message":"Rate limit reached"}}"#).as_deref(),
            Some("Rate limit reached")
        );
        assert_eq!(extract_error_message("Bad Gateway").as_deref(), Some("Bad Gateway"));
        assert_eq!(extract_error_message(r#"{"error":{}}"#), None);
        assert_eq!(extract_error_message(""), None);
    }
}
