//! Transport layer: HTTP and wire-format details (serialization/deserialization).
//!
//! Each encoder turns a domain request into a plain-data [`HttpRequest`]; nothing here touches
//! the network.

mod action;
mod donation;
mod page;
mod user;

pub use action::encode_create_action;
pub use donation::encode_donation_push;
pub use page::{encode_create_page, encode_find_pages, encode_get_page, encode_list_pages};
pub use user::encode_get_user;

const CONTENT_TYPE: &str = "Content-Type";
const APPLICATION_JSON: &str = "application/json";

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("failed to encode JSON body: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// An ActionKit request described as plain data. Basic auth is attached at dispatch time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    fn get(url: String) -> Self {
        Self {
            method: HttpMethod::Get,
            url,
            headers: Vec::new(),
            body: None,
        }
    }

    fn post_json<T: serde::Serialize + ?Sized>(
        url: String,
        body: &T,
    ) -> Result<Self, TransportError> {
        Ok(Self {
            method: HttpMethod::Post,
            url,
            headers: vec![(CONTENT_TYPE.to_owned(), APPLICATION_JSON.to_owned())],
            body: Some(serde_json::to_string(body)?),
        })
    }
}

fn query_string(pairs: &[(&str, String)]) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}
