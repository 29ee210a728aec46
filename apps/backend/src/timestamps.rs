//! Timestamp parsing and JSON encoding.
//!
//! Incoming instants are accepted as RFC 3339 or as a bare
//! `YYYY-MM-DDTHH:MM:SS[.fff]` (read as UTC). Every instant is normalized to
//! UTC with whole-second precision before it reaches storage, and is written
//! back out as RFC 3339.

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

use crate::errors::domain::{DomainError, ValidationKind};

/// Shift to UTC and drop sub-second precision.
///
/// An instant whose UTC form falls outside the supported calendar (e.g.
/// `9999-12-31T23:59:59-01:00`) is an `InvalidDate`.
pub fn normalize(dt: OffsetDateTime) -> Result<OffsetDateTime, DomainError> {
    OffsetDateTime::from_unix_timestamp(dt.unix_timestamp()).map_err(|_| {
        DomainError::validation(
            ValidationKind::InvalidDate,
            format!("{dt} is outside the supported range"),
        )
    })
}

/// Parse an instant from either RFC 3339 or a naive ISO-8601 date-time.
pub fn parse_timestamp(raw: &str) -> Result<OffsetDateTime, DomainError> {
    let trimmed = raw.trim();
    if let Ok(dt) = OffsetDateTime::parse(trimmed, &Rfc3339) {
        return normalize(dt);
    }

    let naive = format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]"
    );
    let dt = PrimitiveDateTime::parse(&trimmed.replacen(' ', "T", 1), naive).map_err(|_| {
        DomainError::validation(
            ValidationKind::InvalidDate,
            format!("'{raw}' is not a valid timestamp"),
        )
    })?;
    normalize(dt.assume_utc())
}

/// Parse a calendar day in `YYYY-MM-DD` form.
pub fn parse_date(raw: &str) -> Result<Date, DomainError> {
    Date::parse(raw.trim(), format_description!("[year]-[month]-[day]")).map_err(|_| {
        DomainError::validation(
            ValidationKind::InvalidDate,
            format!("'{raw}' is not a valid date, expected YYYY-MM-DD"),
        )
    })
}

/// Midnight UTC at the start of `date`.
pub fn start_of_day(date: Date) -> OffsetDateTime {
    date.midnight().assume_utc()
}

/// Midnight UTC at the start of the day after `date`; `None` on the last
/// representable day.
pub fn start_of_next_day(date: Date) -> Option<OffsetDateTime> {
    date.next_day().map(start_of_day)
}

/// `#[serde(with = "crate::timestamps::flexible")]`
pub mod flexible {
    use serde::de::Error as _;
    use serde::ser::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};
    use time::format_description::well_known::Rfc3339;
    use time::OffsetDateTime;

    pub fn serialize<S: Serializer>(dt: &OffsetDateTime, s: S) -> Result<S::Ok, S::Error> {
        let text = super::normalize(*dt)
            .map_err(S::Error::custom)?
            .format(&Rfc3339)
            .map_err(S::Error::custom)?;
        s.serialize_str(&text)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<OffsetDateTime, D::Error> {
        let raw = String::deserialize(d)?;
        super::parse_timestamp(&raw).map_err(D::Error::custom)
    }

    /// Same encoding for optional fields; `null` and absent both map to `None`.
    pub mod option {
        use serde::de::Error as _;
        use serde::{Deserialize, Deserializer, Serializer};
        use time::OffsetDateTime;

        pub fn serialize<S: Serializer>(
            dt: &Option<OffsetDateTime>,
            s: S,
        ) -> Result<S::Ok, S::Error> {
            match dt {
                Some(dt) => super::serialize(dt, s),
                None => s.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            d: D,
        ) -> Result<Option<OffsetDateTime>, D::Error> {
            Option::<String>::deserialize(d)?
                .map(|raw| crate::timestamps::parse_timestamp(&raw).map_err(D::Error::custom))
                .transpose()
        }
    }
}
