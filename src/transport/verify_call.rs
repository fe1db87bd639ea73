use crate::domain::{Language, RawPhoneNumber, UseCaseId, VerifyCall, VerifyCode, VerifyOptions};

pub fn encode_verify_call_form(request: &VerifyCall, code: &VerifyCode) -> Vec<(String, String)> {
    let mut params = Vec::<(String, String)>::new();
    push_verify_params(&mut params, request.phone(), request.options(), code);
    params
}

/// Parameters shared by `verify/call` and `verify/sms`, in wire order.
pub(super) fn push_verify_params(
    params: &mut Vec<(String, String)>,
    phone: &RawPhoneNumber,
    options: &VerifyOptions,
    code: &VerifyCode,
) {
    params.push((
        UseCaseId::FIELD.to_owned(),
        options.ucid.as_str().to_owned(),
    ));
    params.push((RawPhoneNumber::FIELD.to_owned(), phone.raw().to_owned()));
    params.push((
        Language::FIELD.to_owned(),
        options.language.as_str().to_owned(),
    ));
    params.push((VerifyCode::FIELD.to_owned(), code.as_str().to_owned()));
}
