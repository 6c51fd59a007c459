use crate::domain::{BaseUrl, UserId};
use crate::transport::HttpRequest;

pub fn encode_get_user(base_url: &BaseUrl, id: UserId) -> HttpRequest {
    HttpRequest::get(base_url.join(&format!("/user/{id}/")))
}
