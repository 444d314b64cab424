// Book model: the data shapes decoded from the catalog endpoint.
// Every field may be missing or `null` in the source document; those
// decode to empty values instead of failing the whole catalog.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// One book as described by the remote catalog.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Book {
    #[serde(deserialize_with = "null_as_default")]
    pub isbn: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub subtitle: String,
    #[serde(deserialize_with = "null_as_default")]
    pub author: String,
    /// There is no sensible zero date, so an absent value stays `None`.
    pub published: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_as_default")]
    pub publisher: String,
    #[serde(deserialize_with = "null_as_default")]
    pub pages: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub website: String,
}

/// Top-level document returned by the endpoint: `{"books": [...]}`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Catalog {
    #[serde(deserialize_with = "null_as_default")]
    pub books: Vec<Book>,
}

impl Catalog {
    /// Decode a catalog from the raw response body.
    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
