use crate::domain::value::VerifyCode;

#[derive(Debug, Clone, PartialEq)]
pub struct Verification {
    /// Code delivered to the user, either supplied or generated.
    pub code: VerifyCode,
    /// Response body as returned by TeleSign.
    pub data: serde_json::Value,
}
