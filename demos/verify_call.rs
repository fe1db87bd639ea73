use std::io;

use tracing_subscriber::EnvFilter;
use trust_me::{Language, RawPhoneNumber, VerifyCall, VerifyClient, VerifyCode, VerifyOptions};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = VerifyClient::from_env()?;

    let phone_raw = std::env::var("TELESIGN_PHONE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "TELESIGN_PHONE environment variable is required",
        )
    })?;
    let phone = RawPhoneNumber::new(phone_raw)?;

    let mut options = VerifyOptions::default();
    if let Ok(code) = std::env::var("TELESIGN_VERIFY_CODE") {
        options.verify_code = Some(VerifyCode::new(code)?);
    }
    if let Ok(language) = std::env::var("TELESIGN_LANGUAGE") {
        options.language = Language::new(language)?;
    }

    let verification = client
        .send_verification_call(VerifyCall::new(phone, options))
        .await?;
    println!("code: {}", verification.code.as_str());
    println!("response: {:#}", verification.data);

    Ok(())
}
