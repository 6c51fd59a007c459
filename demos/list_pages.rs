use std::io;

use actionkit::{Connector, FindPages, ListPages};

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
    let client = Connector::new(
        required_env("ACTIONKIT_USERNAME")?,
        required_env("ACTIONKIT_PASSWORD")?,
        required_env("ACTIONKIT_BASE_URL")?,
    );

    let response = match std::env::var("ACTIONKIT_PAGE_NAME") {
        Ok(name) => client.find_petition_pages(FindPages::new(name)).await?,
        Err(_) => client.list_petition_pages(ListPages::default()).await?,
    };
    println!("status: {}", response.status);
    println!("{}", response.body);

    Ok(())
}
