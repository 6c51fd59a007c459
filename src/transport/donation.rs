use crate::domain::{BaseUrl, DonationPush};
use crate::transport::{HttpRequest, TransportError};

const DONATION_PUSH_PATH: &str = "/donationpush/";

/// The validated submission is sent as is.
pub fn encode_donation_push(
    base_url: &BaseUrl,
    request: &DonationPush,
) -> Result<HttpRequest, TransportError> {
    HttpRequest::post_json(base_url.join(DONATION_PUSH_PATH), request.as_map())
}
