use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

/// URL-encode form parameters in the given order (`application/x-www-form-urlencoded`).
///
/// The result is both the request body and the `params` line of the signed string, so the
/// two can never disagree.
pub fn encode_form(params: &[(String, String)]) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in params {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}

pub fn decode_json_response(body: &str) -> Result<Value, TransportError> {
    Ok(serde_json::from_str(body)?)
}

/// Best-effort decoding of an error response body.
///
/// Blank bodies become `null`; bodies that are not JSON are kept as a JSON string.
pub fn decode_error_body(body: &str) -> Value {
    if body.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_owned()))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn encode_form_preserves_order_and_escapes() {
        let params = vec![
            ("ucid".to_owned(), "TRVF".to_owned()),
            ("template".to_owned(), "CODE: $$CODE$$".to_owned()),
        ];
        assert_eq!(
            encode_form(&params),
            "ucid=TRVF&template=CODE%3A+%24%24CODE%24%24"
        );
    }

    #[test]
    fn encode_form_of_nothing_is_empty() {
        assert_eq!(encode_form(&[]), "");
    }

    #[test]
    fn decode_json_response_parses_objects() {
        let body = r#"{"reference_id":"abc","status":{"code":290}}"#;
        let value = decode_json_response(body).unwrap();
        assert_eq!(value["reference_id"], "abc");
        assert_eq!(value["status"]["code"], 290);
    }

    #[test]
    fn decode_json_response_rejects_garbage() {
        assert!(matches!(
            decode_json_response("{ not json }"),
            Err(TransportError::Json(_))
        ));
    }

    #[test]
    fn decode_error_body_falls_back_to_string_or_null() {
        assert_eq!(
            decode_error_body(r#"{"errors":[{"code":-30000}]}"#),
            json!({"errors": [{"code": -30000}]})
        );
        assert_eq!(
            decode_error_body("Bad Gateway"),
            Value::String("Bad Gateway".to_owned())
        );
        assert_eq!(decode_error_body("  \n"), Value::Null);
    }
}
