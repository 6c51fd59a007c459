//! Domain layer: strong types with validation and invariants (no I/O).

mod action;
mod donation;
mod request;
mod response;
mod validation;
mod value;

pub use action::{
    ACTION_OPTION_FIELDS, ActionOptions, CUSTOM_ACTION_FIELD_PREFIX, CreateAction,
    filter_action_options,
};
pub use donation::{
    CARD_CODE_KEY, CARD_NUMBER_KEY, DEFAULT_CARD_CODE, DEFAULT_CARD_NUMBER, DONATION_PAGE_KEY,
    DonationPush, ORDER_KEY, USER_KEY, validate_donation, validate_donation_order,
    validate_donation_page, validate_donation_user,
};
pub use request::{
    CreatePage, FIND_PAGES_DEFAULT_LIMIT, FindPages, LIST_PAGES_DEFAULT_LIMIT, ListPages,
    PageKind,
};
pub use response::ApiResponse;
pub use validation::ValidationError;
pub use value::{BaseUrl, Credentials, PageId, UserId};
