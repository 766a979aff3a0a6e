//! Author entity and its filter/sort capabilities

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::filter::FilterValue;
use crate::repository::{Filterable, Identifiable, Sortable};

/// An author record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Identifier
    pub uuid: Uuid,
    /// Display name
    pub name: String,
    /// Age in years
    pub age: i32,
    /// Whether the author is alive
    pub is_alive: bool,
    /// Date the record was created
    pub created_at: NaiveDate,
}

impl Author {
    /// Fixed seed data with stable ids
    pub fn samples() -> Vec<Self> {
        [
            (1, "Leo Tolstoy", 82, false, (2020, 1, 15)),
            (2, "Ursula K. Le Guin", 88, false, (2020, 3, 2)),
            (3, "Haruki Murakami", 75, true, (2021, 6, 20)),
            (4, "Chimamanda Ngozi Adichie", 47, true, (2022, 9, 9)),
            (5, "Jorge Luis Borges", 86, false, (2019, 11, 30)),
            (6, "Olga Tokarczuk", 62, true, (2023, 2, 14)),
        ]
        .into_iter()
        .filter_map(|(id, name, age, is_alive, (y, m, d))| {
            Some(Self {
                uuid: Uuid::from_u128(id),
                name: name.to_string(),
                age,
                is_alive,
                created_at: NaiveDate::from_ymd_opt(y, m, d)?,
            })
        })
        .collect()
    }
}

impl Filterable for Author {
    const ENTITY: &'static str = "Author";
    const FILTER_FIELDS: &'static [&'static str] = &["uuid", "name", "age", "is_alive", "created_at"];

    fn field_value(&self, field: &str) -> Option<FilterValue> {
        match field {
            "uuid" => Some(FilterValue::String(self.uuid.to_string())),
            "name" => Some(self.name.as_str().into()),
            "age" => Some(self.age.into()),
            "is_alive" => Some(self.is_alive.into()),
            "created_at" => Some(self.created_at.into()),
            _ => None,
        }
    }
}

impl Sortable for Author {
    const SORT_FIELDS: &'static [&'static str] = &["name", "age", "is_alive", "created_at"];

    fn compare_by(&self, field: &str, other: &Self) -> Option<Ordering> {
        match field {
            "name" => Some(self.name.cmp(&other.name)),
            "age" => Some(self.age.cmp(&other.age)),
            "is_alive" => Some(self.is_alive.cmp(&other.is_alive)),
            "created_at" => Some(self.created_at.cmp(&other.created_at)),
            _ => None,
        }
    }
}

impl Identifiable<Uuid> for Author {
    fn id(&self) -> &Uuid {
        &self.uuid
    }
}
