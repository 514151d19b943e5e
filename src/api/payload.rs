use serde::Deserialize;
use serde_json::Value;

/// Body of a POST request.
#[derive(Debug, Deserialize)]
pub struct InsertPayload {
    pub name: String,
}

/// Body of a PUT request.
#[derive(Debug, Deserialize)]
pub struct UpdatePayload {
    pub id: i64,
    pub name: String,
}

/// Body of a DELETE request.
#[derive(Debug, Deserialize)]
pub struct DeletePayload {
    pub id: i64,
}

/// Deserializes a request payload into its typed form.
///
/// Returns `None` when the payload is missing, is not an object, or a
/// required field is absent or mistyped; the caller answers 400 without
/// touching the store. Unknown fields are ignored.
pub fn extract<T>(payload: Option<&Value>) -> Option<T>
where
    T: serde::de::DeserializeOwned,
{
    let value = payload?;
    if !value.is_object() {
        return None;
    }
    serde_json::from_value(value.clone()).ok()
}
