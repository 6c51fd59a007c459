use std::io;

use actionkit::Connector;
use serde_json::json;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let username = std::env::var("ACTIONKIT_USERNAME").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "ACTIONKIT_USERNAME environment variable is required",
        )
    })?;
    let password = std::env::var("ACTIONKIT_PASSWORD").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "ACTIONKIT_PASSWORD environment variable is required",
        )
    })?;
    let base_url = std::env::var("ACTIONKIT_BASE_URL").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "ACTIONKIT_BASE_URL environment variable is required",
        )
    })?;

    let client = Connector::new(username, password, base_url);
    let submission = json!({
        "donationpage": {"name": "demo-donation", "payment_account": "Default"},
        "order": {"amount": "10.00", "exp_date_month": "12", "exp_date_year": "2030"},
        "user": {"email": "demo@example.com", "country": "United States"}
    });

    let response = client.create_donation_action(submission).await?;
    println!("status: {}, body: {}", response.status, response.body);

    Ok(())
}
