use std::io;

use smsaero::{Credentials, SendDate, SendSmsOptions, SmsAeroClient};

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let email = required_env("SMSAERO_EMAIL")?;
    let api_key = required_env("SMSAERO_API_KEY")?;
    let phone = required_env("SMSAERO_PHONE")?;
    let message = std::env::var("SMSAERO_MESSAGE")
        .unwrap_or_else(|_| "Hello from the smsaero demo.".to_owned());

    let date_to_send = std::env::var("SMSAERO_SEND_AT")
        .ok()
        .map(|value| SendDate::parse(&value))
        .transpose()?;

    let client = SmsAeroClient::builder(Credentials::new(email, api_key)?)
        .test_mode(std::env::var_os("SMSAERO_TEST_MODE").is_some())
        .logging(true)
        .build()?;
    let options = SendSmsOptions {
        sign: std::env::var("SMSAERO_SIGN").ok(),
        date_to_send,
        ..Default::default()
    };

    let response = client.send_sms(&phone, &message, &options).await?;
    println!("{}", response["data"]);

    Ok(())
}
