use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Tolerant field decoders for index documents, which are not schema-checked upstream.
pub struct SerdeHelper;

impl SerdeHelper {
    /// Accepts strings, numbers and booleans as text; `null` and anything structured become `None`.
    pub fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(Value::String(text)) => Some(text),
            Some(Value::Number(number)) => Some(number.to_string()),
            Some(Value::Bool(flag)) => Some(flag.to_string()),
            _ => None,
        })
    }

    /// Decodes a nested object when it has the expected shape, otherwise yields `None`.
    pub fn lenient_object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(object @ Value::Object(_)) => serde_json::from_value(object).ok(),
            _ => None,
        })
    }
}
