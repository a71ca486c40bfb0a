use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
/// Body returned by `sms/message/deliver`, kept verbatim.
///
/// The API does not document a fixed schema for this object, so it is exposed as JSON.
pub struct DeliveryResponse(Value);

impl DeliveryResponse {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Look up a top-level field of the response object.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn as_json(&self) -> &Value {
        &self.0
    }

    pub fn into_json(self) -> Value {
        self.0
    }
}
