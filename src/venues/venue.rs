use std::fmt;

use serde::Deserialize;

use crate::types::nullable::null_as_default;
use crate::types::weekly_schedule::WeeklySchedule;
use crate::venues::scraped::{ScrapedHappyHour, schedule_from_scraped};

#[derive(Clone)]
pub struct Venue {
    id: String,
    name: String,
    address: Option<String>,
    website: Option<String>,
    schedule: WeeklySchedule,
}

impl Venue {
    pub fn new(name: impl Into<String>, schedule: WeeklySchedule) -> Self {
        let name = name.into();
        Self {
            id: slug(&name),
            name,
            address: None,
            website: None,
            schedule,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn website(&self) -> Option<&str> {
        self.website.as_deref()
    }

    pub fn schedule(&self) -> &WeeklySchedule {
        &self.schedule
    }
}

impl fmt::Display for Venue {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.name)
    }
}

impl fmt::Debug for Venue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Venue({}, {} periods)", self.id, self.schedule.len())
    }
}

/// One entry of the venue cache file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueRecord {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub happy_hours: Vec<ScrapedHappyHour>,
}

impl From<VenueRecord> for Venue {
    fn from(record: VenueRecord) -> Self {
        let id = record
            .id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| slug(&record.name));

        Self {
            id,
            name: record.name,
            address: record.address,
            website: record.website,
            schedule: schedule_from_scraped(record.happy_hours),
        }
    }
}

fn slug(name: &str) -> String {
    name.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}
