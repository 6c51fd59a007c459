use serde_json::{Map, Value};

use crate::domain::validation::ValidationError;

pub const DONATION_PAGE_KEY: &str = "donationpage";
pub const ORDER_KEY: &str = "order";
pub const USER_KEY: &str = "user";

pub const CARD_NUMBER_KEY: &str = "card_num";
pub const CARD_CODE_KEY: &str = "card_code";

/// Placeholder card number injected when an order omits one.
pub const DEFAULT_CARD_NUMBER: &str = "4111111111111111";
/// Placeholder card code injected when an order omits one.
pub const DEFAULT_CARD_CODE: &str = "007";

const DONATION_REQUIRED: [&str; 3] = [DONATION_PAGE_KEY, ORDER_KEY, USER_KEY];
const DONATION_PAGE_REQUIRED: [&str; 2] = ["name", "payment_account"];
const ORDER_REQUIRED: [&str; 3] = ["amount", "exp_date_month", "exp_date_year"];
const USER_REQUIRED: [&str; 2] = ["email", "country"];

/// A donation push submission that passed every required-key gate.
///
/// Holds the submission as it will be sent, including any injected card defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct DonationPush(Map<String, Value>);

impl DonationPush {
    /// Validate a submission and inject order defaults. See [`validate_donation`].
    pub fn new(submission: Map<String, Value>) -> Result<Self, ValidationError> {
        validate_donation(submission).map(Self)
    }

    /// Same as [`DonationPush::new`]; anything but a JSON object fails the base-shape gate.
    pub fn from_value(submission: Value) -> Result<Self, ValidationError> {
        match submission {
            Value::Object(map) => Self::new(map),
            _ => Err(ValidationError::MissingDonationKeys),
        }
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

/// Run the donation gates in order: base shape, donation page, order, user.
///
/// The first failing gate is returned and later gates never run. On success the same
/// submission comes back with `order.card_num` / `order.card_code` filled in where they were
/// absent or `null`; explicit values are never overwritten.
///
/// Keys must use the wire spelling (`payment_account`, `card_num`); camelCase keys are not
/// recognized and are sent as they are.
pub fn validate_donation(
    mut submission: Map<String, Value>,
) -> Result<Map<String, Value>, ValidationError> {
    if !contains_all(&submission, &DONATION_REQUIRED) {
        return Err(ValidationError::MissingDonationKeys);
    }

    let page = submission
        .get(DONATION_PAGE_KEY)
        .ok_or(ValidationError::MissingDonationKeys)?;
    validate_donation_page(page)?;

    let order = submission
        .get_mut(ORDER_KEY)
        .ok_or(ValidationError::MissingDonationKeys)?;
    validate_donation_order(order)?;

    let user = submission
        .get(USER_KEY)
        .ok_or(ValidationError::MissingDonationKeys)?;
    validate_donation_user(user)?;

    Ok(submission)
}

/// `donationpage` must be an object with `name` and `payment_account`.
pub fn validate_donation_page(page: &Value) -> Result<(), ValidationError> {
    match page.as_object() {
        Some(fields) if contains_all(fields, &DONATION_PAGE_REQUIRED) => Ok(()),
        _ => Err(ValidationError::MissingDonationPageKeys),
    }
}

/// `order` must be an object with `amount`, `exp_date_month` and `exp_date_year`.
///
/// Card defaults are only injected once the required keys are confirmed.
pub fn validate_donation_order(order: &mut Value) -> Result<(), ValidationError> {
    let Some(fields) = order.as_object_mut() else {
        return Err(ValidationError::MissingOrderKeys);
    };
    if !contains_all(fields, &ORDER_REQUIRED) {
        return Err(ValidationError::MissingOrderKeys);
    }
    set_default(fields, CARD_NUMBER_KEY, DEFAULT_CARD_NUMBER);
    set_default(fields, CARD_CODE_KEY, DEFAULT_CARD_CODE);
    Ok(())
}

/// `user` must be an object with `email` and `country`.
pub fn validate_donation_user(user: &Value) -> Result<(), ValidationError> {
    match user.as_object() {
        Some(fields) if contains_all(fields, &USER_REQUIRED) => Ok(()),
        _ => Err(ValidationError::MissingUserKeys),
    }
}

fn contains_all(fields: &Map<String, Value>, keys: &[&str]) -> bool {
    keys.iter().all(|key| fields.contains_key(*key))
}

fn set_default(fields: &mut Map<String, Value>, key: &str, default: &str) {
    let slot = fields.entry(key).or_insert(Value::Null);
    if slot.is_null() {
        *slot = Value::String(default.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("fixture must be an object, got {other}"),
        }
    }

    fn valid_submission() -> Value {
        json!({
            "donationpage": {"name": "donate-now", "payment_account": "Default"},
            "order": {"amount": "10.00", "exp_date_month": "12", "exp_date_year": "2030"},
            "user": {"email": "jane@example.com", "country": "United States"}
        })
    }

    #[test]
    fn empty_submission_fails_base_shape() {
        assert_eq!(
            validate_donation(Map::new()),
            Err(ValidationError::MissingDonationKeys)
        );
    }

    #[test]
    fn each_missing_base_key_fails_base_shape() {
        for key in DONATION_REQUIRED {
            let mut submission = object(valid_submission());
            submission.remove(key);
            assert_eq!(
                validate_donation(submission),
                Err(ValidationError::MissingDonationKeys),
                "removed {key}"
            );
        }
    }

    #[test]
    fn base_shape_gate_runs_before_nested_checks() {
        let submission = object(json!({"donationpage": {}, "order": {}}));
        assert_eq!(
            validate_donation(submission),
            Err(ValidationError::MissingDonationKeys)
        );

        let submission = object(json!({"order": {}, "user": {}, "donationPage": {}}));
        assert_eq!(
            validate_donation(submission),
            Err(ValidationError::MissingDonationKeys)
        );
    }

    #[test]
    fn camel_case_card_fields_do_not_suppress_defaults() {
        let mut submission = object(valid_submission());
        submission.get_mut("order").unwrap()["cardNumber"] = json!("5555555555554444");

        let validated = validate_donation(submission).unwrap();
        assert_eq!(validated["order"]["cardNumber"], json!("5555555555554444"));
        assert_eq!(validated["order"]["card_num"], json!(DEFAULT_CARD_NUMBER));
    }

    #[test]
    fn empty_parts_fail_on_donation_page_first() {
        let submission = object(json!({"donationpage": {}, "order": {}, "user": {}}));
        assert_eq!(
            validate_donation(submission),
            Err(ValidationError::MissingDonationPageKeys)
        );
    }

    #[test]
    fn order_is_checked_before_user() {
        let submission = object(json!({
            "donationpage": {"name": "donate-now", "payment_account": "Default"},
            "order": {"amount": "10.00"},
            "user": {}
        }));
        assert_eq!(
            validate_donation(submission),
            Err(ValidationError::MissingOrderKeys)
        );
    }

    #[test]
    fn user_is_checked_last() {
        let mut submission = object(valid_submission());
        submission.insert("user".to_owned(), json!({"email": "jane@example.com"}));
        assert_eq!(
            validate_donation(submission),
            Err(ValidationError::MissingUserKeys)
        );
    }

    #[test]
    fn non_object_parts_fail_their_own_gate() {
        let mut submission = object(valid_submission());
        submission.insert("donationpage".to_owned(), json!("donate-now"));
        assert_eq!(
            validate_donation(submission),
            Err(ValidationError::MissingDonationPageKeys)
        );

        let mut submission = object(valid_submission());
        submission.insert("order".to_owned(), json!(["10.00"]));
        assert_eq!(
            validate_donation(submission),
            Err(ValidationError::MissingOrderKeys)
        );
    }

    #[test]
    fn missing_card_fields_are_defaulted() {
        let validated = validate_donation(object(valid_submission())).unwrap();

        let mut expected = object(valid_submission());
        let order = expected.get_mut("order").unwrap().as_object_mut().unwrap();
        order.insert("card_num".to_owned(), json!("4111111111111111"));
        order.insert("card_code".to_owned(), json!("007"));
        assert_eq!(validated, expected);
    }

    #[test]
    fn null_card_fields_are_defaulted() {
        let mut submission = object(valid_submission());
        let order = submission.get_mut("order").unwrap();
        order["card_num"] = Value::Null;
        order["card_code"] = Value::Null;

        let validated = validate_donation(submission).unwrap();
        assert_eq!(validated["order"]["card_num"], json!(DEFAULT_CARD_NUMBER));
        assert_eq!(validated["order"]["card_code"], json!(DEFAULT_CARD_CODE));
    }

    #[test]
    fn explicit_card_fields_are_preserved() {
        let mut submission = object(valid_submission());
        let order = submission.get_mut("order").unwrap();
        order["card_num"] = json!("5555555555554444");
        order["card_code"] = json!("123");
        let expected = submission.clone();

        assert_eq!(validate_donation(submission).unwrap(), expected);
    }

    #[test]
    fn null_required_values_count_as_present() {
        let submission = object(json!({
            "donationpage": {"name": null, "payment_account": null},
            "order": {"amount": null, "exp_date_month": null, "exp_date_year": null},
            "user": {"email": null, "country": null}
        }));
        assert!(validate_donation(submission).is_ok());
    }

    #[test]
    fn sub_validators_are_callable_on_their_own() {
        assert!(validate_donation_page(&json!({"name": "a", "payment_account": "b"})).is_ok());
        assert_eq!(
            validate_donation_page(&json!({"name": "a"})),
            Err(ValidationError::MissingDonationPageKeys)
        );

        let mut order = json!({"amount": "1", "exp_date_month": "1"});
        assert_eq!(
            validate_donation_order(&mut order),
            Err(ValidationError::MissingOrderKeys)
        );
        assert!(order.get("card_num").is_none());

        assert!(validate_donation_user(&json!({"email": "a", "country": "b"})).is_ok());
        assert_eq!(
            validate_donation_user(&json!({"country": "b"})),
            Err(ValidationError::MissingUserKeys)
        );
    }

    #[test]
    fn donation_push_rejects_non_object_submission() {
        assert_eq!(
            DonationPush::from_value(json!([])),
            Err(ValidationError::MissingDonationKeys)
        );
        let push = DonationPush::from_value(valid_submission()).unwrap();
        assert_eq!(push.as_map()["order"]["card_code"], json!("007"));
    }
}
