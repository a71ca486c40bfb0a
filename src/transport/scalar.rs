use serde::Deserialize;

/// Identifier the API may encode as either a JSON string or a JSON number.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TransportScalar {
    String(String),
    Number(serde_json::Number),
}

impl TransportScalar {
    pub fn into_string(self) -> String {
        match self {
            Self::String(value) => value,
            Self::Number(value) => value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TransportScalar;

    #[test]
    fn accepts_string_or_number() {
        let from_string: TransportScalar = serde_json::from_str(r#""c-7""#).unwrap();
        assert_eq!(from_string.into_string(), "c-7");

        let from_number: TransportScalar = serde_json::from_str("42").unwrap();
        assert_eq!(from_number.into_string(), "42");

        assert!(serde_json::from_str::<TransportScalar>("null").is_err());
    }
}
