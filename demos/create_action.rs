use std::io;

use actionkit::{ActionOptions, Connector};

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
    let page = std::env::var("ACTIONKIT_PAGE_NAME").unwrap_or_else(|_| "demo-petition".to_owned());
    let email =
        std::env::var("ACTIONKIT_EMAIL").unwrap_or_else(|_| "demo@example.com".to_owned());

    let client = Connector::new(username, password, base_url);
    let options = ActionOptions::new()
        .with("ipAddress", "203.0.113.7")
        .with("action_comment", "Signed from the demo binary");

    let response = client.create_action(page, email, options).await?;
    println!("status: {}, body: {}", response.status, response.body);

    Ok(())
}
