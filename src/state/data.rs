/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the catalogue client and the UI layer.

use serde::Deserialize;

/// One catalogue record, immutable once fetched.
///
/// Deserialized straight from the API response; the server calls the
/// date fields `date_start`/`date_end`. Every display field is optional
/// because the catalogue is sparsely filled.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Artwork {
    /// Unique, stable, server-assigned id
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub place_of_origin: Option<String>,
    #[serde(default)]
    pub artist_display: Option<String>,
    #[serde(default)]
    pub inscriptions: Option<String>,
    /// Creation start year (can be negative for BCE works)
    #[serde(default, rename = "date_start")]
    pub start_date: Option<i32>,
    /// Creation end year
    #[serde(default, rename = "date_end")]
    pub end_date: Option<i32>,
}
