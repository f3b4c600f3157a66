use std::fmt;

use serde::Serialize;

use crate::status::evaluator::StatusEvaluator;
use crate::types::evaluation_instant::EvaluationInstant;
use crate::types::status::Status;
use crate::venues::venue::Venue;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueStatus {
    pub id: String,
    pub name: String,
    pub status: Status,
    pub minutes_until_change: Option<u16>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub deals: Vec<String>,
}

/// Evaluates every venue once at `instant`, sorted by status rank then name.
pub fn venue_statuses(
    venues: &[Venue],
    evaluator: &StatusEvaluator,
    instant: EvaluationInstant,
    live_only: bool,
) -> Vec<VenueStatus> {
    let mut statuses: Vec<VenueStatus> = venues
        .iter()
        .map(|venue| {
            let report = evaluator.report(venue.schedule(), instant);
            let deals = report
                .period_index
                .and_then(|index| venue.schedule().periods().get(index))
                .map(|period| period.deals.clone())
                .unwrap_or_default();

            VenueStatus {
                id: venue.id().to_string(),
                name: venue.name().to_string(),
                status: report.status,
                minutes_until_change: report.minutes_until_change,
                deals,
            }
        })
        .filter(|status| !live_only || status.status.is_live())
        .collect();

    statuses.sort_by(|a, b| {
        a.status
            .rank()
            .cmp(&b.status.rank())
            .then_with(|| a.name.cmp(&b.name))
    });

    statuses
}

impl fmt::Display for VenueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<32} {:<13}", self.name, self.status.as_str())?;

        match (self.status, self.minutes_until_change) {
            (status, Some(minutes)) if status.is_in_progress() => {
                write!(f, " ends in {minutes} min")?
            }
            (Status::StartingSoon, Some(minutes)) => write!(f, " starts in {minutes} min")?,
            _ => {}
        }

        if !self.deals.is_empty() {
            write!(f, "  [{}]", self.deals.join("; "))?;
        }

        Ok(())
    }
}
