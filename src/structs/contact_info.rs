use serde::Deserialize;
use crate::helpers::serde_helper::SerdeHelper;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContactInfo {
    #[serde(default, deserialize_with = "SerdeHelper::lenient_string")]
    pub app_custodian_name: Option<String>,

    #[serde(default, deserialize_with = "SerdeHelper::lenient_string")]
    pub app_custodian_email: Option<String>,
}
