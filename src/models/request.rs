use serde_json::Value;

/// Fields the caller sends in the JSON request body.
///
/// Both are optional: a body that is missing or does not parse leaves them
/// `None`, and the authenticator and store decide what that means.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditableListRequest {
    /// Opaque token handed to the authenticator.
    pub token: Option<String>,
    /// Version key selecting one row of the shadow db.
    pub version: Option<String>,
}

impl EditableListRequest {
    /// Parse a raw request body. Never fails.
    ///
    /// Anything other than a JSON object yields an empty request; inside an
    /// object, a key whose value is not a string is treated as absent.
    pub fn from_body(body: &[u8]) -> Self {
        let Ok(Value::Object(fields)) = serde_json::from_slice::<Value>(body) else {
            return EditableListRequest::default();
        };

        let text = |key: &str| fields.get(key).and_then(Value::as_str).map(str::to_string);

        EditableListRequest {
            token: text("token"),
            version: text("version"),
        }
    }
}
