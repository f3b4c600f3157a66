use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use crate::venues::venue::{Venue, VenueRecord};

/// Read-only view of the flat JSON venue cache.
#[derive(Debug, Clone)]
pub struct VenueStore {
    path: PathBuf,
}

impl VenueStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn load(&self) -> Result<Vec<Venue>> {
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read venue cache {}", self.path.display()))?;

        let venues = Self::from_json_str(&raw)
            .with_context(|| format!("failed to parse venue cache {}", self.path.display()))?;

        info!(count = venues.len(), path = %self.path.display(), "loaded venues");
        Ok(venues)
    }

    pub fn from_json_str(raw: &str) -> Result<Vec<Venue>> {
        let records: Vec<VenueRecord> = serde_json::from_str(raw)?;
        Ok(records.into_iter().map(Venue::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_venue_array() {
        let venues = VenueStore::from_json_str(
            r#"[
                {"name": "One", "happyHours": [{"days": ["Mon"], "startTime": "15:00", "endTime": "17:00"}]},
                {"name": "Two"}
            ]"#,
        )
        .unwrap();

        assert_eq!(venues.len(), 2);
        assert_eq!(venues[1].name(), "Two");
    }

    #[test]
    fn null_fields_degrade_to_an_empty_schedule() {
        let venues = VenueStore::from_json_str(
            r#"[
                {"name": "One", "happyHours": [{"days": ["Mon"], "startTime": "15:00", "endTime": "17:00", "deals": null}]},
                {"name": "Two", "happyHours": null}
            ]"#,
        )
        .unwrap();

        assert_eq!(venues.len(), 2);
        assert_eq!(venues[0].schedule().len(), 1);
        assert!(venues[0].schedule().periods()[0].deals.is_empty());
        assert!(venues[1].schedule().is_empty());
    }

    #[test]
    fn rejects_a_non_array_document() {
        assert!(VenueStore::from_json_str(r#"{"name": "One"}"#).is_err());
    }

    #[test]
    fn missing_file_error_names_the_path() {
        let store = VenueStore::new("definitely/not/here.json");
        let error = store.load().unwrap_err();
        assert!(format!("{error:#}").contains("definitely/not/here.json"));
    }
}
