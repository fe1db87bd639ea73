use rand::Rng;

use crate::domain::validation::ValidationError;

use phonenumber::country;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Unvalidated phone number as sent to TeleSign (`phone_number`).
///
/// Invariant: non-empty after trimming. This type does not normalize; if you want the
/// international digits-only form TeleSign expects, parse into [`PhoneNumber`] and convert
/// it into [`RawPhoneNumber`].
pub struct RawPhoneNumber(String);

impl RawPhoneNumber {
    /// Form field name used by TeleSign (`phone_number`).
    pub const FIELD: &'static str = "phone_number";

    /// Create a validated (non-empty) raw phone number.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Raw (trimmed) value as sent to TeleSign.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl From<PhoneNumber> for RawPhoneNumber {
    /// Convert an already-parsed phone number to country code + national number digits.
    fn from(value: PhoneNumber) -> Self {
        Self(value.digits().to_owned())
    }
}

#[derive(Debug, Clone)]
/// Parsed phone number with an E.164 representation.
///
/// Equality, ordering, and hashing are based on the E.164 form.
pub struct PhoneNumber {
    raw: String,
    e164: String,
    parsed: phonenumber::PhoneNumber,
}

impl PhoneNumber {
    /// Form field name used by TeleSign (`phone_number`).
    pub const FIELD: &'static str = "phone_number";

    /// Parse and normalize a phone number into E.164.
    ///
    /// `default_region` is used when the input does not contain an explicit country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { raw, e164, parsed })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation (`+15554443333`).
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// E.164 without the leading `+` (`15554443333`), the form TeleSign expects.
    pub fn digits(&self) -> &str {
        self.e164.trim_start_matches('+')
    }

    /// The parsed phone number from the `phonenumber` crate.
    pub fn parsed(&self) -> &phonenumber::PhoneNumber {
        &self.parsed
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Code the user is asked to read back (`verify_code`).
///
/// Invariant: non-empty, ASCII digits only.
pub struct VerifyCode(String);

impl VerifyCode {
    /// Form field name used by TeleSign (`verify_code`).
    pub const FIELD: &'static str = "verify_code";

    /// Number of digits in a generated code.
    pub const GENERATED_LEN: usize = 5;

    /// Create a validated code from caller input.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidVerifyCode {
                input: trimmed.to_owned(),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Generate a random [`VerifyCode::GENERATED_LEN`]-digit code.
    ///
    /// Not suitable for anything secret; it only has to be hard to guess over a phone line.
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::thread_rng())
    }

    /// Generate a code from the given random source.
    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let code = (0..Self::GENERATED_LEN)
            .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
            .collect();
        Self(code)
    }

    /// Borrow the code digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Language used for the spoken call or the SMS text (`language`).
///
/// Invariant: non-empty after trimming.
pub struct Language(String);

impl Language {
    /// Form field name used by TeleSign (`language`).
    pub const FIELD: &'static str = "language";

    /// Language used when none is configured.
    pub const DEFAULT: &'static str = "en-US";

    /// Create a validated language tag.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the language tag.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Language {
    fn default() -> Self {
        Self(Self::DEFAULT.to_owned())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Use case identifier (`ucid`) classifying why the verification is sent.
///
/// Invariant: non-empty after trimming.
pub struct UseCaseId(String);

impl UseCaseId {
    /// Form field name used by TeleSign (`ucid`).
    pub const FIELD: &'static str = "ucid";

    /// Transaction verification, used when none is configured.
    pub const DEFAULT: &'static str = "TRVF";

    /// Create a validated use case id.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the use case id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for UseCaseId {
    fn default() -> Self {
        Self(Self::DEFAULT.to_owned())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Custom SMS text (`template`).
///
/// Invariant: contains [`Template::PLACEHOLDER`], which TeleSign replaces with the code.
pub struct Template(String);

impl Template {
    /// Form field name used by TeleSign (`template`).
    pub const FIELD: &'static str = "template";

    /// Placeholder substituted with the verify code.
    pub const PLACEHOLDER: &'static str = "$$CODE$$";

    /// Create a validated template. The text is preserved as provided.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if !value.contains(Self::PLACEHOLDER) {
            return Err(ValidationError::MissingCodePlaceholder {
                placeholder: Self::PLACEHOLDER,
            });
        }
        Ok(Self(value))
    }

    /// Borrow the template text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
