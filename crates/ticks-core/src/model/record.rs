//! Serializable snapshots of items and lists.
//!
//! Live [`Item`](super::item::Item)s share their done flag through `Rc`, which
//! has no meaning on the wire. These plain records are what gets written to
//! and read from JSON list documents.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CollectionError;

/// One item as it appears in a list document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub title: String,
    #[serde(default)]
    pub done: bool,
}

/// A whole list document: `{"title": "...", "items": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRecord {
    pub title: String,
    #[serde(default)]
    pub items: Vec<ItemRecord>,
}

impl ListRecord {
    /// Parse a list document, checking every element of `items` individually.
    ///
    /// A plain `serde_json::from_str::<ListRecord>` would report a type error
    /// somewhere in the input; here a bad element is reported by its position.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidDocument`] when the input is not a JSON
    /// object with a string `title` (and, if present, an array `items`), and
    /// [`CollectionError::InvalidItem`] when an element of `items` is not an
    /// item.
    pub fn from_json(input: &str) -> Result<Self, CollectionError> {
        let value: Value = serde_json::from_str(input)
            .map_err(|e| CollectionError::InvalidDocument(e.to_string()))?;
        Self::from_value(value)
    }

    /// Same as [`ListRecord::from_json`] for an already-parsed value.
    ///
    /// # Errors
    ///
    /// See [`ListRecord::from_json`].
    pub fn from_value(value: Value) -> Result<Self, CollectionError> {
        let Value::Object(mut map) = value else {
            return Err(CollectionError::InvalidDocument(
                "expected a JSON object".to_string(),
            ));
        };

        let title = match map.remove("title") {
            Some(Value::String(title)) => title,
            Some(_) => {
                return Err(CollectionError::InvalidDocument(
                    "\"title\" must be a string".to_string(),
                ));
            }
            None => {
                return Err(CollectionError::InvalidDocument(
                    "missing \"title\"".to_string(),
                ));
            }
        };

        let elements = match map.remove("items") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(elements)) => elements,
            Some(_) => {
                return Err(CollectionError::InvalidDocument(
                    "\"items\" must be an array".to_string(),
                ));
            }
        };

        let items = elements
            .into_iter()
            .enumerate()
            .map(|(position, element)| {
                serde_json::from_value::<ItemRecord>(element).map_err(|e| {
                    CollectionError::InvalidItem {
                        position,
                        reason: e.to_string(),
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { title, items })
    }
}
