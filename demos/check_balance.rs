use smsaero::{Credentials, SmsAeroClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let email = std::env::var("SMSAERO_EMAIL")?;
    let api_key = std::env::var("SMSAERO_API_KEY")?;

    let client = SmsAeroClient::new(Credentials::new(email, api_key)?)?;
    let response = client.balance().await?;
    println!("balance: {}", response["data"]["balance"]);

    Ok(())
}
