//! URL-encoded form bodies with repeated keys.
//!
//! Multi-select inputs (`shared_users`, `plants`) submit one pair per chosen
//! value, which a struct-shaped `web::Form` cannot represent. Handlers extract
//! the raw pairs instead and read typed fields from them.

use serde::Deserialize;

/// Ordered `key=value` pairs from an `application/x-www-form-urlencoded` body.
///
/// # Examples
/// ```
/// use garden_journal::inbound::http::forms::FormFields;
///
/// let fields = FormFields::from_pairs([
///     ("name", " Balcony "),
///     ("shared_users", "a"),
///     ("shared_users", "b"),
/// ]);
/// assert_eq!(fields.text("name"), "Balcony");
/// assert_eq!(fields.all("shared_users"), vec!["a", "b"]);
/// assert_eq!(fields.optional("description"), None);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct FormFields(Vec<(String, String)>);

impl FormFields {
    /// Build from literal pairs.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// First raw value submitted for `key`.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    /// First value for `key`, trimmed; empty when absent.
    pub fn text(&self, key: &str) -> String {
        self.first(key).map(str::trim).unwrap_or_default().to_owned()
    }

    /// First value for `key`, untrimmed; empty when absent.
    pub fn raw(&self, key: &str) -> String {
        self.first(key).unwrap_or_default().to_owned()
    }

    /// First value for `key`, or `None` when absent or blank.
    pub fn optional(&self, key: &str) -> Option<String> {
        self.first(key)
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_owned)
    }

    /// Every value submitted for `key`, in submission order.
    pub fn all(&self, key: &str) -> Vec<String> {
        self.0
            .iter()
            .filter(|(name, _)| name == key)
            .map(|(_, value)| value.clone())
            .collect()
    }
}
