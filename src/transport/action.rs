use serde_json::Value;

use crate::domain::{BaseUrl, CreateAction};
use crate::transport::{HttpRequest, TransportError};

const ACTION_PATH: &str = "/action/";

pub fn encode_create_action(
    base_url: &BaseUrl,
    request: &CreateAction,
) -> Result<HttpRequest, TransportError> {
    let mut body = request.options().filtered();
    body.insert("page".to_owned(), Value::from(request.page()));
    body.insert("email".to_owned(), Value::from(request.email()));
    HttpRequest::post_json(base_url.join(ACTION_PATH), &body)
}
