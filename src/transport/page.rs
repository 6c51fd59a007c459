use serde::Serialize;

use crate::domain::{BaseUrl, CreatePage, FindPages, ListPages, PageId, PageKind};
use crate::transport::{HttpRequest, TransportError, query_string};

#[derive(Debug, Serialize)]
struct PageJsonBody<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    hidden: bool,
    name: &'a str,
    title: &'a str,
    language: &'a str,
    canonical_url: &'a str,
}

fn collection_path(kind: PageKind) -> String {
    format!("/{}/", kind.resource())
}

pub fn encode_list_pages(base_url: &BaseUrl, request: &ListPages) -> HttpRequest {
    let query = query_string(&[
        ("_limit", request.limit().to_string()),
        ("_offset", request.offset().to_string()),
    ]);
    let path = collection_path(PageKind::Petition);
    HttpRequest::get(format!("{}?{query}", base_url.join(&path)))
}

pub fn encode_find_pages(base_url: &BaseUrl, request: &FindPages) -> HttpRequest {
    let query = query_string(&[
        ("_limit", request.limit().to_string()),
        ("_offset", request.offset().to_string()),
        ("name", request.name().to_owned()),
    ]);
    let path = collection_path(PageKind::Petition);
    HttpRequest::get(format!("{}?{query}", base_url.join(&path)))
}

pub fn encode_get_page(base_url: &BaseUrl, id: PageId) -> HttpRequest {
    let path = format!("/{}/{id}/", PageKind::Petition.resource());
    HttpRequest::get(base_url.join(&path))
}

pub fn encode_create_page(
    base_url: &BaseUrl,
    request: &CreatePage,
) -> Result<HttpRequest, TransportError> {
    let body = PageJsonBody {
        kind: request.kind().resource(),
        hidden: false,
        name: request.name(),
        title: request.title(),
        language: request.language(),
        canonical_url: request.canonical_url(),
    };
    HttpRequest::post_json(base_url.join(&collection_path(request.kind())), &body)
}
