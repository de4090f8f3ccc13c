use std::collections::HashSet;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::StorageError;
use crate::ids::fresh_id;
use crate::list::join_comma_list;

const BLOCKED_CITIES_KEY: &str = "blockedCities";
const CITY_EXCLUDES_KEY: &str = "cityExcludes";

/// Free-form numeric text fields of the settings record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarField {
    MinPrice,
    MinPricePerKm,
    MinClientRating,
}

impl ScalarField {
    pub const ALL: [ScalarField; 3] = [
        ScalarField::MinPrice,
        ScalarField::MinPricePerKm,
        ScalarField::MinClientRating,
    ];

    /// JSON key used for the field in the stored value.
    pub fn key(self) -> &'static str {
        match self {
            ScalarField::MinPrice => "minPrice",
            ScalarField::MinPricePerKm => "minPricePerKm",
            ScalarField::MinClientRating => "minClientRating",
        }
    }
}

/// Filter settings persisted as one JSON value per installation.
///
/// Scalar fields are kept as optional text: a stored value that lacks one
/// of them is passed through without it, and an absent scalar reads as an
/// empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    min_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_price_per_km: Option<String>,
    blocked_cities: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_client_rating: Option<String>,
    city_excludes: Vec<CityExclude>,
}

/// Streets excluded within one city, identified by an opaque id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityExclude {
    id: String,
    city: String,
    streets: Vec<String>,
}

impl CityExclude {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn streets(&self) -> &[String] {
        &self.streets
    }

    /// Streets joined for display in the exclude list.
    pub fn streets_label(&self) -> String {
        join_comma_list(&self.streets)
    }
}

impl Default for SettingsRecord {
    fn default() -> Self {
        Self {
            min_price: Some(String::new()),
            min_price_per_km: Some(String::new()),
            blocked_cities: Vec::new(),
            min_client_rating: Some(String::new()),
            city_excludes: Vec::new(),
        }
    }
}

impl SettingsRecord {
    /// Return the text of a scalar field, empty when the field is absent.
    pub fn scalar(&self, field: ScalarField) -> &str {
        self.stored_scalar(field).unwrap_or_default()
    }

    /// Return the text of a scalar field as stored, `None` when absent.
    pub fn stored_scalar(&self, field: ScalarField) -> Option<&str> {
        self.scalar_slot(field).as_deref()
    }

    /// Replace a scalar field with raw, unvalidated text.
    pub fn set_scalar(&mut self, field: ScalarField, value: String) {
        *self.scalar_slot_mut(field) = Some(value);
    }

    pub fn blocked_cities(&self) -> &[String] {
        &self.blocked_cities
    }

    /// Replace the blocked city list, trimming entries and dropping blanks.
    pub fn set_blocked_cities(&mut self, cities: Vec<String>) {
        self.blocked_cities = trimmed_non_blank(cities);
    }

    pub fn city_excludes(&self) -> &[CityExclude] {
        &self.city_excludes
    }

    /// Insert a new exclude rule at the front of the list.
    ///
    /// The city and streets are trimmed and blank streets are dropped. The
    /// rule gets an id that no rule currently held in the record uses.
    /// Returns `None` without touching the list when the city is blank.
    pub fn prepend_city_exclude(
        &mut self,
        city: &str,
        streets: Vec<String>,
    ) -> Option<&CityExclude> {
        let city = city.trim();
        if city.is_empty() {
            return None;
        }

        let id = fresh_id(|candidate| {
            self.city_excludes.iter().any(|entry| entry.id == candidate)
        });
        let entry = CityExclude {
            id,
            city: city.to_string(),
            streets: trimmed_non_blank(streets),
        };

        self.city_excludes.insert(0, entry);
        self.city_excludes.first()
    }

    /// Remove the rule with the given id, returning whether one matched.
    pub fn remove_city_exclude(&mut self, id: &str) -> bool {
        let before = self.city_excludes.len();
        self.city_excludes.retain(|entry| entry.id != id);
        self.city_excludes.len() != before
    }

    /// Build a record from a parsed stored value.
    ///
    /// Missing lists default to empty. List entries and city names are
    /// trimmed, blank ones are dropped along with their exclude rule, and
    /// missing or repeated exclude ids are re-issued.
    pub fn from_json(value: &Value) -> Result<Self, StorageError> {
        let Some(object) = value.as_object() else {
            return Err(StorageError::Malformed(format!(
                "expected a JSON object, found {}",
                json_kind(value)
            )));
        };

        Ok(Self {
            min_price: read_text(object, ScalarField::MinPrice.key()),
            min_price_per_km: read_text(
                object,
                ScalarField::MinPricePerKm.key(),
            ),
            blocked_cities: read_text_list(object.get(BLOCKED_CITIES_KEY)),
            min_client_rating: read_text(
                object,
                ScalarField::MinClientRating.key(),
            ),
            city_excludes: read_city_excludes(object.get(CITY_EXCLUDES_KEY)),
        })
    }

    fn scalar_slot(&self, field: ScalarField) -> &Option<String> {
        match field {
            ScalarField::MinPrice => &self.min_price,
            ScalarField::MinPricePerKm => &self.min_price_per_km,
            ScalarField::MinClientRating => &self.min_client_rating,
        }
    }

    fn scalar_slot_mut(&mut self, field: ScalarField) -> &mut Option<String> {
        match field {
            ScalarField::MinPrice => &mut self.min_price,
            ScalarField::MinPricePerKm => &mut self.min_price_per_km,
            ScalarField::MinClientRating => &mut self.min_client_rating,
        }
    }
}

fn read_text(object: &Map<String, Value>, key: &str) -> Option<String> {
    match object.get(key)? {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Null => None,
        other => {
            log::debug!("ignoring {} value for {key}", json_kind(other));
            None
        },
    }
}

fn read_text_list(value: Option<&Value>) -> Vec<String> {
    let Some(entries) = value.and_then(Value::as_array) else {
        return Vec::new();
    };

    let items: Vec<String> = entries
        .iter()
        .filter_map(Value::as_str)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(ToString::to_string)
        .collect();

    if items.len() != entries.len() {
        log::debug!(
            "dropped {} blank or non-text list entries",
            entries.len() - items.len()
        );
    }

    items
}

fn read_city_excludes(value: Option<&Value>) -> Vec<CityExclude> {
    let Some(entries) = value.and_then(Value::as_array) else {
        return Vec::new();
    };

    let parsed: Vec<(Option<String>, String, Vec<String>)> = entries
        .iter()
        .filter_map(|entry| {
            let city = entry
                .get("city")
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|city| !city.is_empty())?;
            Some((
                read_id(entry.get("id")),
                city.to_string(),
                read_text_list(entry.get("streets")),
            ))
        })
        .collect();

    if parsed.len() != entries.len() {
        log::debug!(
            "dropped {} city exclude entries without a city",
            entries.len() - parsed.len()
        );
    }

    let stored_ids: HashSet<String> =
        parsed.iter().filter_map(|(id, _, _)| id.clone()).collect();
    let mut seen: HashSet<String> = HashSet::with_capacity(parsed.len());
    let mut excludes = Vec::with_capacity(parsed.len());

    for (id, city, streets) in parsed {
        let id = match id {
            Some(id) if !seen.contains(&id) => id,
            _ => {
                let id = fresh_id(|candidate| {
                    seen.contains(candidate) || stored_ids.contains(candidate)
                });
                log::debug!("re-issued exclude id for city {city}");
                id
            },
        };
        seen.insert(id.clone());
        excludes.push(CityExclude { id, city, streets });
    }

    excludes
}

fn trimmed_non_blank(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .filter_map(|item| {
            let item = item.trim();
            (!item.is_empty()).then(|| item.to_string())
        })
        .collect()
}

fn read_id(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(id) if !id.trim().is_empty() => Some(id.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
