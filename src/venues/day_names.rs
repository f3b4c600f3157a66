use std::collections::BTreeSet;

use tracing::warn;

use crate::types::day_code::DayCode;

const RANGE_SEPARATORS: &[&str] = &[" through ", " thru ", " to ", "-", "–"];

/// Folds free-form day names into canonical codes. Unknown names are dropped.
pub fn normalize_days<S: AsRef<str>>(names: &[S]) -> BTreeSet<DayCode> {
    let mut days = BTreeSet::new();

    for name in names {
        let replaced = name.as_ref().to_ascii_lowercase().replace(" and ", ",");
        for part in replaced.split([',', '/', '&', ';']) {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }

            match expand_day_spec(part) {
                Some(expanded) => days.extend(expanded),
                None => warn!(day = part, "ignoring unrecognised day name"),
            }
        }
    }

    days
}

/// A single day, a range such as `mon-fri`, or a group such as `weekdays`.
pub fn expand_day_spec(spec: &str) -> Option<Vec<DayCode>> {
    let lower = spec.trim().to_ascii_lowercase();

    match lower.as_str() {
        "daily" | "everyday" | "every day" | "all week" | "7 days" => {
            return Some(DayCode::ALL.to_vec());
        }
        "weekdays" | "weekday" => return Some(DayCode::ALL[..5].to_vec()),
        "weekends" | "weekend" => return Some(DayCode::ALL[5..].to_vec()),
        _ => {}
    }

    for separator in RANGE_SEPARATORS {
        if let Some((from, to)) = lower.split_once(separator) {
            return Some(day_range(day_from_name(from)?, day_from_name(to)?));
        }
    }

    day_from_name(&lower).map(|day| vec![day])
}

pub fn day_from_name(name: &str) -> Option<DayCode> {
    let lower = name.trim().trim_end_matches('.').to_ascii_lowercase();

    let day = match lower.as_str() {
        "mon" | "monday" | "mondays" => DayCode::Mon,
        "tue" | "tues" | "tuesday" | "tuesdays" => DayCode::Tue,
        "wed" | "weds" | "wednesday" | "wednesdays" => DayCode::Wed,
        "thu" | "thur" | "thurs" | "thursday" | "thursdays" => DayCode::Thu,
        "fri" | "friday" | "fridays" => DayCode::Fri,
        "sat" | "saturday" | "saturdays" => DayCode::Sat,
        "sun" | "sunday" | "sundays" => DayCode::Sun,
        _ => return None,
    };

    Some(day)
}

/// Inclusive, wrapping past Sunday when `to` comes before `from`.
fn day_range(from: DayCode, to: DayCode) -> Vec<DayCode> {
    let len = (to.index() + 7 - from.index()) % 7 + 1;
    (0..len)
        .map(|offset| DayCode::ALL[(from.index() + offset) % 7])
        .collect()
}
