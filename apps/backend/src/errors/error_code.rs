//! Error codes for the fleet backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the fleet backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Path id is not a positive integer
    InvalidId,
    /// Date or timestamp could not be parsed
    InvalidDate,
    /// General validation error
    ValidationError,
    /// Malformed body or query string
    BadRequest,

    // Resource Not Found
    AirlineNotFound,
    AircraftNotFound,
    FlightNotFound,
    /// General not found error (unknown route)
    NotFound,

    // Referential integrity
    /// Write referenced an airline that does not exist
    UnknownAirline,
    /// Write referenced an aircraft that does not exist
    UnknownAircraft,
    /// Foreign key constraint violation reported by the store
    FkViolation,

    // Conflicts
    /// Delete blocked because dependent rows exist
    HasDependents,
    /// Unique constraint violation
    UniqueViolation,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System Errors
    DbError,
    DbUnavailable,
    DbTimeout,
    Internal,
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidId => "INVALID_ID",
            Self::InvalidDate => "INVALID_DATE",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",

            Self::AirlineNotFound => "AIRLINE_NOT_FOUND",
            Self::AircraftNotFound => "AIRCRAFT_NOT_FOUND",
            Self::FlightNotFound => "FLIGHT_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::UnknownAirline => "UNKNOWN_AIRLINE",
            Self::UnknownAircraft => "UNKNOWN_AIRCRAFT",
            Self::FkViolation => "FK_VIOLATION",

            Self::HasDependents => "HAS_DEPENDENTS",
            Self::UniqueViolation => "UNIQUE_VIOLATION",
            Self::Conflict => "CONFLICT",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
