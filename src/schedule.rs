//! Schedule time parsing and formatting

use anyhow::{Result, anyhow};
use chrono::{DateTime, Duration, Local, NaiveDateTime, NaiveTime, SecondsFormat, TimeZone, Utc};

/// Parse a schedule time string into a `DateTime`<Utc>
///
/// Supports:
/// - Relative: "in 30m", "in 2h", "in 1d", "in 45 minutes"
/// - Time today (or tomorrow if already past): "15:00"
/// - Local datetime: "YYYY-MM-DD 15:00"
/// - RFC 3339: "YYYY-MM-DDT15:00:00Z"
pub fn parse_schedule_time(input: &str) -> Result<DateTime<Utc>> {
    let input = input.trim();

    if let Some(rest) = input.strip_prefix("in ") {
        return Ok(Utc::now() + parse_duration(rest)?);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return local_to_utc(naive);
        }
    }

    if let Ok(time) = NaiveTime::parse_from_str(input, "%H:%M") {
        return next_occurrence(time);
    }

    Err(anyhow!(
        "Could not parse schedule time: '{}'\n\
         Supported formats:\n  \
         - Relative: 'in 30m', 'in 2h', 'in 45 minutes'\n  \
         - Time today: '15:00'\n  \
         - Date+time: 'YYYY-MM-DD 15:00'",
        input
    ))
}

/// Format a schedule time the way the backend expects it (RFC 3339, UTC)
pub fn format_scheduled_at(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Parse "30m" / "2h" / "1d" or "45 minutes" / "2 hours" / "1 day"
fn parse_duration(input: &str) -> Result<Duration> {
    let input = input.trim();

    // Short form: amount with a one-letter suffix
    if let Some((num, unit)) = input
        .char_indices()
        .last()
        .map(|(i, _)| input.split_at(i))
        && let Ok(amount) = num.parse::<i64>()
    {
        match unit {
            "s" => return Ok(Duration::seconds(amount)),
            "m" => return Ok(Duration::minutes(amount)),
            "h" => return Ok(Duration::hours(amount)),
            "d" => return Ok(Duration::days(amount)),
            _ => {}
        }
    }

    // Long form: "45 minutes"
    let parts: Vec<&str> = input.split_whitespace().collect();
    if let [amount, unit] = parts[..]
        && let Ok(amount) = amount.parse::<i64>()
    {
        return match unit.trim_end_matches('s') {
            "second" | "sec" => Ok(Duration::seconds(amount)),
            "minute" | "min" => Ok(Duration::minutes(amount)),
            "hour" | "hr" => Ok(Duration::hours(amount)),
            "day" => Ok(Duration::days(amount)),
            _ => Err(anyhow!("Unknown time unit: {unit}")),
        };
    }

    Err(anyhow!(
        "Could not parse relative time: '{input}'\nExamples: '30m', '2h', '45 minutes'"
    ))
}

/// The next local occurrence of a time of day, today or tomorrow
fn next_occurrence(time: NaiveTime) -> Result<DateTime<Utc>> {
    let today = Local::now().date_naive();
    let mut candidate = local_to_utc(today.and_time(time))?;
    if candidate <= Utc::now() {
        candidate = local_to_utc((today + Duration::days(1)).and_time(time))?;
    }
    Ok(candidate)
}

/// Convert naive local datetime to UTC
fn local_to_utc(naive: NaiveDateTime) -> Result<DateTime<Utc>> {
    Local
        .from_local_datetime(&naive)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| anyhow!("Ambiguous or invalid local time"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn relative_short_form() {
        let now = Utc::now();
        let result = parse_schedule_time("in 30m").unwrap();
        let diff = result - now;
        assert!(diff.num_minutes() >= 29 && diff.num_minutes() <= 31);
    }

    #[test]
    fn relative_long_form() {
        let now = Utc::now();
        let result = parse_schedule_time("in 2 hours").unwrap();
        let diff = result - now;
        assert!(diff.num_hours() >= 1 && diff.num_hours() <= 3);
    }

    #[test]
    fn explicit_datetime() {
        let result = parse_schedule_time("2030-06-15 14:30").unwrap();
        assert_eq!(result.year(), 2030);
        assert_eq!(result.month(), 6);
        assert_eq!(result.day(), 15);
    }

    #[test]
    fn rfc3339_passes_through() {
        let result = parse_schedule_time("2030-01-02T03:04:05Z").unwrap();
        assert_eq!(format_scheduled_at(result), "2030-01-02T03:04:05Z");
    }

    #[test]
    fn time_of_day_rolls_forward() {
        let result = parse_schedule_time("23:59").unwrap();
        assert!(result > Utc::now());
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(parse_schedule_time("whenever").is_err());
        assert!(parse_schedule_time("in 5 fortnights").is_err());
    }
}
