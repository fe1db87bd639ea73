use crate::domain::{Template, VerifyCode, VerifySms};
use crate::transport::verify_call::push_verify_params;

pub fn encode_verify_sms_form(request: &VerifySms, code: &VerifyCode) -> Vec<(String, String)> {
    let mut params = Vec::<(String, String)>::new();
    push_verify_params(&mut params, request.phone(), request.options(), code);

    if let Some(template) = request.template() {
        params.push((Template::FIELD.to_owned(), template.as_str().to_owned()));
    }

    params
}

#[cfg(test)]
mod tests {
    use crate::domain::{RawPhoneNumber, VerifyOptions};
    use crate::transport::encode_form;

    use super::*;

    #[test]
    fn encode_verify_sms_form_appends_template() {
        let request = VerifySms::new(
            RawPhoneNumber::new("15554443333").unwrap(),
            VerifyOptions::default(),
        )
        .with_template(Template::new("CODE: $$CODE$$").unwrap());
        let code = VerifyCode::new("12345").unwrap();

        let body = encode_form(&encode_verify_sms_form(&request, &code));
        assert_eq!(
            body,
            "ucid=TRVF&phone_number=15554443333&language=en-US&verify_code=12345\
             &template=CODE%3A+%24%24CODE%24%24"
        );
    }

    #[test]
    fn encode_omits_missing_template() {
        let request = VerifySms::new(
            RawPhoneNumber::new("15554443333").unwrap(),
            VerifyOptions::default(),
        );
        let code = VerifyCode::new("12345").unwrap();

        let params = encode_verify_sms_form(&request, &code);
        assert_eq!(params.len(), 4);
        assert!(params.iter().all(|(key, _)| key != "template"));
    }
}
