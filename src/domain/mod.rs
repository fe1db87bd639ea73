//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{VERIFY_CALL_RESOURCE, VERIFY_SMS_RESOURCE, VerifyCall, VerifyOptions, VerifySms};
pub use response::Verification;
pub use validation::ValidationError;
pub use value::{Language, PhoneNumber, RawPhoneNumber, Template, UseCaseId, VerifyCode};

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn raw_phone_number_rejects_empty_and_trims() {
        assert!(matches!(
            RawPhoneNumber::new("   "),
            Err(ValidationError::Empty {
                field: RawPhoneNumber::FIELD
            })
        ));
        assert_eq!(
            RawPhoneNumber::new(" 15554443333 ").unwrap().raw(),
            "15554443333"
        );
    }

    #[test]
    fn phone_number_parses_with_region_and_trims() {
        let pn = PhoneNumber::parse(Some(phonenumber::country::Id::US), " 2015550123 ").unwrap();
        assert_eq!(pn.raw(), "2015550123");
        assert_eq!(pn.e164(), "+12015550123");
    }

    #[test]
    fn raw_phone_number_from_phone_number_drops_plus() {
        let pn = PhoneNumber::parse(None, "+1 201-555-0123").unwrap();
        let raw: RawPhoneNumber = pn.into();
        assert_eq!(raw.raw(), "12015550123");
    }

    #[test]
    fn phone_number_rejects_garbage() {
        assert!(matches!(
            PhoneNumber::parse(None, "not a number"),
            Err(ValidationError::InvalidPhoneNumber { .. })
        ));
    }

    #[test]
    fn generated_code_is_five_ascii_digits() {
        for _ in 0..200 {
            let code = VerifyCode::generate();
            assert_eq!(code.as_str().len(), VerifyCode::GENERATED_LEN);
            assert!(code.as_str().bytes().all(|b| b.is_ascii_digit()));
        }
    }

    #[test]
    fn generated_code_is_reproducible_from_seeded_rng() {
        let a = VerifyCode::generate_with(&mut StdRng::seed_from_u64(7));
        let b = VerifyCode::generate_with(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn verify_code_rejects_non_digits() {
        assert!(VerifyCode::new("12345").is_ok());
        assert!(matches!(
            VerifyCode::new(""),
            Err(ValidationError::Empty {
                field: VerifyCode::FIELD
            })
        ));
        assert!(matches!(
            VerifyCode::new("12a45"),
            Err(ValidationError::InvalidVerifyCode { .. })
        ));
    }

    #[test]
    fn template_requires_placeholder() {
        assert_eq!(
            Template::new("CODE: $$CODE$$").unwrap().as_str(),
            "CODE: $$CODE$$"
        );
        assert!(matches!(
            Template::new("no code here"),
            Err(ValidationError::MissingCodePlaceholder { .. })
        ));
        assert!(matches!(
            Template::new("  "),
            Err(ValidationError::Empty {
                field: Template::FIELD
            })
        ));
    }

    #[test]
    fn options_default_to_english_transaction_verification() {
        let options = VerifyOptions::default();
        assert!(options.verify_code.is_none());
        assert_eq!(options.language.as_str(), "en-US");
        assert_eq!(options.ucid.as_str(), "TRVF");
    }

    #[test]
    fn language_and_ucid_reject_empty() {
        assert!(Language::new(" ").is_err());
        assert!(UseCaseId::new("").is_err());
        assert_eq!(Language::new("fr-FR").unwrap().as_str(), "fr-FR");
    }

    #[test]
    fn verify_sms_template_is_optional() {
        let phone = RawPhoneNumber::new("15554443333").unwrap();
        let request = VerifySms::new(phone.clone(), VerifyOptions::default());
        assert!(request.template().is_none());

        let request = VerifySms::new(phone, VerifyOptions::default())
            .with_template(Template::new("$$CODE$$").unwrap());
        assert_eq!(request.template().map(Template::as_str), Some("$$CODE$$"));
    }
}
