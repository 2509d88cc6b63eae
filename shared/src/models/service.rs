//! Add-on Service Model

use serde::{Deserialize, Serialize};

/// Add-on service (insurance, child seat, GPS, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub rate: f64,
    /// `true`: rate is charged per rental day; `false`: one-time fee
    pub daily: bool,
}

impl Service {
    pub fn per_day(id: impl Into<String>, rate: f64) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            rate,
            daily: true,
        }
    }

    pub fn one_time(id: impl Into<String>, rate: f64) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            rate,
            daily: false,
        }
    }
}
