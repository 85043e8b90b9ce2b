//! Snack - the single record type served by the API.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A snack with its calorie count.
///
/// The `id` is assigned by the repository on insert and never changes
/// afterwards. Missing fields in a request body read as their defaults,
/// so a body without `id` carries `0`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Snack {
    pub id: i32,
    pub name: String,
    pub calories: i32,
}

impl Snack {
    pub fn new(name: impl Into<String>, calories: i32) -> Self {
        Self {
            id: 0,
            name: name.into(),
            calories,
        }
    }

    pub fn with_id(id: i32, name: impl Into<String>, calories: i32) -> Self {
        Self {
            id,
            name: name.into(),
            calories,
        }
    }
}

/// Query filters for listing snacks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnackFilters {
    /// Inclusive upper bound on calories.
    #[serde(rename = "max-calories", default)]
    pub max_calories: Option<i32>,
}

impl SnackFilters {
    pub fn max_calories(max: i32) -> Self {
        Self {
            max_calories: Some(max),
        }
    }

    /// Returns true if the snack passes every filter that is set.
    pub fn matches(&self, snack: &Snack) -> bool {
        self.max_calories.map_or(true, |max| snack.calories <= max)
    }
}
