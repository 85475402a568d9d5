// src/dates.rs
use chrono::{DateTime, Local, NaiveDate, NaiveTime};
use thiserror::Error;

/// Accepted layouts, tried in order: "Jan 2 2024" then "Jan 02 2024".
const LAYOUTS: [&str; 2] = ["%b %-d %Y", "%b %d %Y"];

#[derive(Debug, Error)]
pub enum DateParseError {
    #[error("could not parse date '{input}': {source}")]
    Unrecognized {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("date '{input}' has no local midnight")]
    NonexistentLocalTime { input: String },
}

/// Parses a sheet date cell as local midnight.
pub fn parse_date(input: &str) -> Result<DateTime<Local>, DateParseError> {
    // Falls through the layouts; the error kept is the one from the last layout tried.
    let date = LAYOUTS[1..]
        .iter()
        .fold(NaiveDate::parse_from_str(input, LAYOUTS[0]), |parsed, layout| {
            parsed.or_else(|_| NaiveDate::parse_from_str(input, layout))
        })
        .map_err(|source| DateParseError::Unrecognized {
            input: input.to_string(),
            source,
        })?;

    date.and_time(NaiveTime::MIN)
        .and_local_timezone(Local)
        .earliest()
        .ok_or_else(|| DateParseError::NonexistentLocalTime {
            input: input.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn single_and_padded_day_agree() {
        let a = parse_date("Jan 2 2024").unwrap();
        let b = parse_date("Jan 02 2024").unwrap();
        assert_eq!(a, b);
        assert_eq!((a.year(), a.month(), a.day()), (2024, 1, 2));
    }

    #[test]
    fn parses_to_local_midnight() {
        let dt = parse_date("Mar 15 2023").unwrap();
        assert_eq!(dt.time(), NaiveTime::MIN);
    }

    #[test]
    fn iso_date_is_rejected() {
        let err = parse_date("2024-01-02").unwrap_err();
        match &err {
            DateParseError::Unrecognized { input, .. } => assert_eq!(input, "2024-01-02"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("'2024-01-02'"));
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(parse_date("").is_err());
    }
}
