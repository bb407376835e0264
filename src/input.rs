//! Birth date collection. The engine accepts any date; this is where user
//! input gets checked before it gets that far.

use chrono::NaiveDate;
use thiserror::Error;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Error)]
pub enum BirthDateError {
    #[error("no birth date given")]
    Empty,
    #[error("invalid birth date {input:?}, expected YYYY-MM-DD")]
    Malformed {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("birth date {date} is after today ({today})")]
    InFuture { date: NaiveDate, today: NaiveDate },
}

/// Parse a `YYYY-MM-DD` birth date that is not after `today`.
pub fn parse_birth_date(raw: &str, today: NaiveDate) -> Result<NaiveDate, BirthDateError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(BirthDateError::Empty);
    }

    let date = NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|source| {
        BirthDateError::Malformed {
            input: trimmed.to_string(),
            source,
        }
    })?;

    if date > today {
        return Err(BirthDateError::InFuture { date, today });
    }

    Ok(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn test_parses_iso_date() {
        let date = parse_birth_date(" 1992-06-14\n", today()).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(1992, 6, 14).unwrap());
    }

    #[test]
    fn test_today_is_allowed() {
        assert_eq!(parse_birth_date("2026-10-19", today()).unwrap(), today());
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(
            parse_birth_date("   ", today()),
            Err(BirthDateError::Empty)
        ));
    }

    #[test]
    fn test_rejects_malformed() {
        for raw in ["14/06/1992", "1992-02-30", "yesterday", "1992-6"] {
            assert!(
                matches!(
                    parse_birth_date(raw, today()),
                    Err(BirthDateError::Malformed { .. })
                ),
                "{raw}"
            );
        }
    }

    #[test]
    fn test_rejects_future() {
        let err = parse_birth_date("2026-10-20", today()).unwrap_err();
        assert!(matches!(err, BirthDateError::InFuture { .. }));
        assert_eq!(
            err.to_string(),
            "birth date 2026-10-20 is after today (2026-10-19)"
        );
    }
}
