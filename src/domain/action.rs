use serde_json::{Map, Value};

/// Optional action fields ActionKit accepts, by their wire names.
pub const ACTION_OPTION_FIELDS: [&str; 7] = [
    "ip_address",
    "is_forwarded",
    "link",
    "mailing",
    "referring_mailing",
    "referring_user",
    "name",
];

/// Prefix of custom action fields, which ActionKit stores verbatim.
pub const CUSTOM_ACTION_FIELD_PREFIX: &str = "action_";

/// Caller-supplied optional fields for an action, kept in insertion order and not yet filtered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionOptions(Vec<(String, Value)>);

impl ActionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.push((key.into(), value.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The subset ActionKit accepts, keyed by wire name.
    pub fn filtered(&self) -> Map<String, Value> {
        filter_action_options(self.0.iter().map(|(k, v)| (k.as_str(), v.clone())))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ActionOptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<Map<String, Value>> for ActionOptions {
    fn from(value: Map<String, Value>) -> Self {
        value.into_iter().collect()
    }
}

/// Keep only the fields ActionKit accepts on an action.
///
/// A key survives if its snake_case form is one of [`ACTION_OPTION_FIELDS`] (and is renamed to
/// that form), or if it starts with [`CUSTOM_ACTION_FIELD_PREFIX`] (and is kept as is). Values
/// pass through untouched. Everything else is dropped without error. When two keys normalize
/// to the same name the later one wins.
pub fn filter_action_options<I, K>(options: I) -> Map<String, Value>
where
    I: IntoIterator<Item = (K, Value)>,
    K: AsRef<str>,
{
    options
        .into_iter()
        .filter_map(|(key, value)| canonical_key(key.as_ref()).map(|key| (key, value)))
        .collect()
}

fn canonical_key(key: &str) -> Option<String> {
    if key.starts_with(CUSTOM_ACTION_FIELD_PREFIX) {
        return Some(key.to_owned());
    }
    let snake = to_snake_case(key);
    ACTION_OPTION_FIELDS
        .contains(&snake.as_str())
        .then_some(snake)
}

fn to_snake_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            if !out.is_empty() {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// An action: a person (by email) signing a page, with optional tracking fields.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateAction {
    page: String,
    email: String,
    options: ActionOptions,
}

impl CreateAction {
    /// `page` is the page's short name, not its id.
    pub fn new(page: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            page: page.into(),
            email: email.into(),
            options: ActionOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ActionOptions) -> Self {
        self.options = options;
        self
    }

    pub fn page(&self) -> &str {
        &self.page
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn options(&self) -> &ActionOptions {
        &self.options
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn filtered(value: Value) -> Value {
        let Value::Object(map) = value else {
            panic!("fixture must be an object");
        };
        Value::Object(filter_action_options(map))
    }

    #[test]
    fn keeps_whitelisted_fields_and_drops_unknown_ones() {
        assert_eq!(
            filtered(json!({"ipAddress": "1010", "badResult": "foo"})),
            json!({"ip_address": "1010"})
        );
        assert_eq!(
            filtered(json!({"ip_address": "1010", "bad_result": "foo"})),
            json!({"ip_address": "1010"})
        );
    }

    #[test]
    fn keeps_action_prefixed_fields_verbatim() {
        assert_eq!(
            filtered(json!({"action_foo": "test", "notAnAction": "bad"})),
            json!({"action_foo": "test"})
        );
        assert_eq!(
            filtered(json!({"action_fooBar": 3})),
            json!({"action_fooBar": 3})
        );
    }

    #[test]
    fn every_whitelisted_field_is_accepted_in_either_spelling() {
        let options = ActionOptions::new()
            .with("ipAddress", "10.0.0.1")
            .with("isForwarded", true)
            .with("link", 4)
            .with("mailing", 12)
            .with("referringMailing", 13)
            .with("referringUser", 99)
            .with("name", "Jane");
        assert_eq!(
            Value::Object(options.filtered()),
            json!({
                "ip_address": "10.0.0.1",
                "is_forwarded": true,
                "link": 4,
                "mailing": 12,
                "referring_mailing": 13,
                "referring_user": 99,
                "name": "Jane"
            })
        );

        let snake: ActionOptions = ACTION_OPTION_FIELDS.iter().map(|k| (*k, "x")).collect();
        assert_eq!(snake.filtered().len(), ACTION_OPTION_FIELDS.len());
    }

    #[test]
    fn values_are_passed_through_unchanged() {
        let options = ActionOptions::new().with("action_payload", json!({"nested": [1, 2, null]}));
        assert_eq!(
            options.filtered().get("action_payload"),
            Some(&json!({"nested": [1, 2, null]}))
        );
    }

    #[test]
    fn near_misses_are_dropped() {
        let options = ActionOptions::new()
            .with("action", "x")
            .with("actionFoo", "x")
            .with("page", "x")
            .with("email", "x")
            .with("IPAddress", "x")
            .with("", "x");
        assert!(options.filtered().is_empty());
    }

    #[test]
    fn later_duplicate_wins_after_normalization() {
        let options = ActionOptions::new()
            .with("ip_address", "first")
            .with("ipAddress", "second");
        assert_eq!(
            Value::Object(options.filtered()),
            json!({"ip_address": "second"})
        );
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(ActionOptions::new().filtered().is_empty());
    }
}
