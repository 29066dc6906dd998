use crate::error::CellarError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// The six wine styles the catalogue distinguishes.
///
/// Serialized names match the persisted document ("Rosé" keeps its accent);
/// parsing is lenient about case and the accent so the CLI accepts `rose`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WineType {
    #[default]
    Red,
    White,
    #[serde(rename = "Rosé")]
    Rose,
    Sparkling,
    Dessert,
    Fortified,
}

impl WineType {
    pub const ALL: [WineType; 6] = [
        WineType::Red,
        WineType::White,
        WineType::Rose,
        WineType::Sparkling,
        WineType::Dessert,
        WineType::Fortified,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            WineType::Red => "Red",
            WineType::White => "White",
            WineType::Rose => "Rosé",
            WineType::Sparkling => "Sparkling",
            WineType::Dessert => "Dessert",
            WineType::Fortified => "Fortified",
        }
    }
}

impl fmt::Display for WineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WineType {
    type Err = CellarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "red" => Ok(WineType::Red),
            "white" => Ok(WineType::White),
            "rose" | "rosé" => Ok(WineType::Rose),
            "sparkling" => Ok(WineType::Sparkling),
            "dessert" => Ok(WineType::Dessert),
            "fortified" => Ok(WineType::Fortified),
            other => Err(CellarError::Validation(format!(
                "unknown wine type: {}",
                other
            ))),
        }
    }
}

/// The caller-editable fields of a wine record.
///
/// Everything except `name`, `producer` and `wine_type` is optional free
/// text; the empty string means "not recorded". Validation happens in the
/// command layer, not here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WineDetails {
    pub name: String,
    pub producer: String,
    pub vintage: String,
    pub wine_type: WineType,
    pub region: String,
    pub country: String,
    pub grapes: String,
    pub rating: u8,
    pub price: String,
    pub purchase_date: String,
    pub notes: String,
    pub image_uri: Option<String>,
}

/// One catalogued bottle.
///
/// Field names serialize in camelCase (`imageUri`, `dateAdded`, …) so the
/// stored document keeps the layout described in the storage contract.
/// `id` and `date_added` are assigned once, at creation, and never change;
/// updates replace every other field wholly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wine {
    pub id: String,
    pub name: String,
    pub producer: String,
    #[serde(default)]
    pub vintage: String,
    #[serde(rename = "type")]
    pub wine_type: WineType,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub grapes: String,
    #[serde(default)]
    pub rating: u8,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub purchase_date: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub image_uri: Option<String>,
    pub date_added: DateTime<Utc>,
}

impl Wine {
    /// Build a new record, assigning a fresh id and the creation timestamp.
    pub fn new(details: WineDetails) -> Self {
        Self::from_parts(Uuid::new_v4().to_string(), Utc::now(), details)
    }

    /// Rebuild a record from an existing identity and new details.
    /// Used by update, which replaces every field except `id` and
    /// `date_added`.
    pub fn from_parts(id: String, date_added: DateTime<Utc>, details: WineDetails) -> Self {
        Self {
            id,
            name: details.name,
            producer: details.producer,
            vintage: details.vintage,
            wine_type: details.wine_type,
            region: details.region,
            country: details.country,
            grapes: details.grapes,
            rating: details.rating,
            price: details.price,
            purchase_date: details.purchase_date,
            notes: details.notes,
            image_uri: details.image_uri,
            date_added,
        }
    }

    /// The editable fields of this record, for the load-edit-save flow.
    pub fn details(&self) -> WineDetails {
        WineDetails {
            name: self.name.clone(),
            producer: self.producer.clone(),
            vintage: self.vintage.clone(),
            wine_type: self.wine_type,
            region: self.region.clone(),
            country: self.country.clone(),
            grapes: self.grapes.clone(),
            rating: self.rating,
            price: self.price.clone(),
            purchase_date: self.purchase_date.clone(),
            notes: self.notes.clone(),
            image_uri: self.image_uri.clone(),
        }
    }
}
