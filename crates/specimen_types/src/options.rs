//! Options and value entries shared by select and checkbox fields.
//!
//! Option lists come in two shapes: objects carrying an `id`, and legacy
//! plain-string lists where the string itself is the id. Both are folded into
//! [`OptionSpec`] at deserialization time so lookups only ever compare ids.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Identifier of an option inside a spec's `options` list.
pub type OptionId = String;

/// Anything that can name an option: a bare id, an option, or a value entry.
///
/// Every select/checkbox accessor goes through [`HasOptionId::option_id`], so
/// "id or object carrying an id" is resolved in exactly one place.
pub trait HasOptionId {
    /// The id this reference points at, if it carries one.
    fn option_id(&self) -> Option<&str>;
}

impl HasOptionId for str {
    fn option_id(&self) -> Option<&str> {
        Some(self)
    }
}

impl HasOptionId for String {
    fn option_id(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl<T: HasOptionId + ?Sized> HasOptionId for &T {
    fn option_id(&self) -> Option<&str> {
        (**self).option_id()
    }
}

/// One selectable/checkable entry of a spec.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(from = "RawOptionSpec")]
pub struct OptionSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<OptionId>,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub value: Value,
}

/// Option spec for select fields.
pub type SelectOptionSpec = OptionSpec;

/// Option spec for checkbox fields.
pub type CheckboxOptionSpec = OptionSpec;

impl OptionSpec {
    /// Create an option with the given id and display name.
    pub fn new(id: impl Into<OptionId>, name: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: name.into(),
            value: Value::Null,
        }
    }

    /// Set the value stored alongside the id when the option is picked.
    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = value.into();
        self
    }

    /// Whether this option is the one named by `id`.
    pub fn matches(&self, id: &str) -> bool {
        self.id.as_deref() == Some(id)
    }
}

impl HasOptionId for OptionSpec {
    fn option_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawOptionSpec {
    Plain(String),
    Full {
        #[serde(default)]
        id: Option<OptionId>,
        #[serde(default)]
        name: String,
        #[serde(default)]
        value: Value,
    },
}

impl From<RawOptionSpec> for OptionSpec {
    fn from(raw: RawOptionSpec) -> Self {
        match raw {
            RawOptionSpec::Plain(id) => Self {
                name: id.clone(),
                value: Value::String(id.clone()),
                id: Some(id),
            },
            RawOptionSpec::Full { id, name, value } => Self { id, name, value },
        }
    }
}

/// One selected/checked `{ id, value }` entry of a field's data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(from = "RawOptionValue")]
pub struct OptionValue {
    pub id: OptionId,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub value: Value,
}

/// Value entry for select fields.
pub type SelectValue = OptionValue;

/// Value entry for checkbox fields.
pub type CheckboxValue = OptionValue;

impl OptionValue {
    pub fn new(id: impl Into<OptionId>, value: impl Into<Value>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
        }
    }
}

impl HasOptionId for OptionValue {
    fn option_id(&self) -> Option<&str> {
        Some(self.id.as_str())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawOptionValue {
    Plain(String),
    Full {
        id: OptionId,
        #[serde(default)]
        value: Value,
    },
}

impl From<RawOptionValue> for OptionValue {
    fn from(raw: RawOptionValue) -> Self {
        match raw {
            RawOptionValue::Plain(id) => Self {
                value: Value::String(id.clone()),
                id,
            },
            RawOptionValue::Full { id, value } => Self { id, value },
        }
    }
}

/// Deserialize a value list, coercing anything that is not a list to empty.
///
/// Stored field data is frequently hand-edited; a `null`, a bare string or an
/// object where the list should be yields an empty selection. Inside a list
/// only the entries that fail to decode are dropped.
pub fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum MaybeEntry<T> {
        Entry(T),
        Invalid(IgnoredAny),
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum MaybeList<T> {
        List(Vec<MaybeEntry<T>>),
        Other(IgnoredAny),
    }

    Ok(match MaybeList::<T>::deserialize(deserializer)? {
        MaybeList::List(entries) => {
            let total = entries.len();
            let items: Vec<T> = entries
                .into_iter()
                .filter_map(|entry| match entry {
                    MaybeEntry::Entry(item) => Some(item),
                    MaybeEntry::Invalid(_) => None,
                })
                .collect();
            if items.len() < total {
                tracing::warn!("Dropped {} malformed field value entries", total - items.len());
            }
            items
        }
        MaybeList::Other(_) => {
            tracing::debug!("Coercing non-list field value to an empty list");
            Vec::new()
        }
    })
}

/// Deserialize an optional option reference given as `"id"` or `{ "id": ... }`.
pub fn option_ref<'de, D>(deserializer: D) -> Result<Option<OptionId>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawRef {
        Id(OptionId),
        Ref { id: OptionId },
    }

    Ok(Option::<RawRef>::deserialize(deserializer)?.map(|raw| match raw {
        RawRef::Id(id) => id,
        RawRef::Ref { id } => id,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_string_option_uses_itself_as_id() {
        let option: OptionSpec = serde_json::from_value(json!("red")).unwrap();
        assert_eq!(option.id.as_deref(), Some("red"));
        assert_eq!(option.name, "red");
        assert!(option.matches("red"));
    }

    #[test]
    fn test_option_without_id_never_matches() {
        let option: OptionSpec =
            serde_json::from_value(json!({ "name": "Red", "value": "#f00" })).unwrap();
        assert_eq!(option.id, None);
        assert!(!option.matches("Red"));
        assert_eq!(option.option_id(), None);
    }

    #[test]
    fn test_option_value_from_plain_string() {
        let value: OptionValue = serde_json::from_value(json!("small")).unwrap();
        assert_eq!(value.id, "small");
        assert_eq!(value.option_id(), Some("small"));
    }

    #[test]
    fn test_has_option_id_for_references() {
        let id = String::from("a");
        let option = OptionSpec::new("b", "B");
        assert_eq!("a".option_id(), Some("a"));
        assert_eq!(id.option_id(), Some("a"));
        assert_eq!((&option).option_id(), Some("b"));
    }
}
