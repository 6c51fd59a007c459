//! Typed Rust client for the ActionKit REST API.
//!
//! The crate has three layers: a domain layer of request types and the validation rules
//! that decide what may be sent, a transport layer that assembles the exact HTTP request for
//! each endpoint, and a small client layer that sends it with basic auth and hands back the
//! raw response.
//!
//! ```rust,no_run
//! use actionkit::{ActionOptions, Connector, ListPages};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), actionkit::ActionKitError> {
//!     let client = Connector::new("user", "secret", "https://act.example.org/rest/v1");
//!     let pages = client.list_petition_pages(ListPages::default()).await?;
//!     println!("{} {}", pages.status, pages.body);
//!
//!     let options = ActionOptions::new().with("ipAddress", "203.0.113.7");
//!     client
//!         .create_action("save-the-bees", "jane@example.com", options)
//!         .await?;
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{ActionKitError, Connector, ConnectorBuilder};
pub use domain::{
    ActionOptions, ApiResponse, BaseUrl, CreateAction, CreatePage, Credentials, DonationPush,
    FindPages, ListPages, PageId, PageKind, UserId, ValidationError, filter_action_options,
    validate_donation,
};
