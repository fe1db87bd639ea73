use crate::domain::value::{Language, RawPhoneNumber, Template, UseCaseId, VerifyCode};

/// API resource for a verification call.
pub const VERIFY_CALL_RESOURCE: &str = "/v1/verify/call";
/// API resource for a verification SMS.
pub const VERIFY_SMS_RESOURCE: &str = "/v1/verify/sms";

#[derive(Debug, Clone, Default)]
pub struct VerifyOptions {
    /// Code to deliver; a random 5-digit code is generated when `None`.
    pub verify_code: Option<VerifyCode>,
    pub language: Language,
    pub ucid: UseCaseId,
}

#[derive(Debug, Clone)]
pub struct VerifyCall {
    phone: RawPhoneNumber,
    options: VerifyOptions,
}

impl VerifyCall {
    pub fn new(phone: RawPhoneNumber, options: VerifyOptions) -> Self {
        Self { phone, options }
    }

    pub fn phone(&self) -> &RawPhoneNumber {
        &self.phone
    }

    pub fn options(&self) -> &VerifyOptions {
        &self.options
    }
}

#[derive(Debug, Clone)]
pub struct VerifySms {
    phone: RawPhoneNumber,
    options: VerifyOptions,
    template: Option<Template>,
}

impl VerifySms {
    pub fn new(phone: RawPhoneNumber, options: VerifyOptions) -> Self {
        Self {
            phone,
            options,
            template: None,
        }
    }

    /// Replace the default SMS text with `template`.
    pub fn with_template(mut self, template: Template) -> Self {
        self.template = Some(template);
        self
    }

    pub fn phone(&self) -> &RawPhoneNumber {
        &self.phone
    }

    pub fn options(&self) -> &VerifyOptions {
        &self.options
    }

    pub fn template(&self) -> Option<&Template> {
        self.template.as_ref()
    }
}
