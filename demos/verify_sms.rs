use std::io;

use tracing_subscriber::EnvFilter;
use trust_me::{RawPhoneNumber, Template, VerifyClient, VerifyOptions, VerifySms};

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

    let mut request = VerifySms::new(RawPhoneNumber::new(phone_raw)?, VerifyOptions::default());
    if let Ok(template) = std::env::var("TELESIGN_TEMPLATE") {
        request = request.with_template(Template::new(template)?);
    }

    let verification = client.send_verification_sms(request).await?;
    println!("code: {}", verification.code.as_str());
    println!("response: {:#}", verification.data);

    Ok(())
}
