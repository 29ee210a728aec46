//! Filter option structs. Every field is optional and `None` means "no
//! constraint"; present fields are combined by conjunction.

use sea_orm::sea_query::Query;
use sea_orm::{ColumnTrait, Condition};
use time::Date;

use super::sort::{AirlineSort, FlightSort};
use super::text::contains_ci;
use crate::entities::{aircraft, airlines, flights};
use crate::errors::domain::DomainError;
use crate::timestamps::{parse_date, start_of_day, start_of_next_day};

/// Blank text filters behave as if they were absent.
fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, Default)]
pub struct AirlineFilter {
    pub id: Option<i64>,
    pub iata_code: Option<String>,
    pub name: Option<String>,
    pub sort: Option<AirlineSort>,
}

impl AirlineFilter {
    pub fn condition(&self) -> Condition {
        Condition::all()
            .add_option(self.id.map(|id| airlines::Column::Id.eq(id)))
            .add_option(non_blank(&self.iata_code).map(|code| airlines::Column::IataCode.eq(code)))
            .add_option(
                non_blank(&self.name)
                    .map(|name| contains_ci((airlines::Entity, airlines::Column::Name), name)),
            )
    }
}

#[derive(Debug, Clone, Default)]
pub struct AircraftFilter {
    pub id: Option<i64>,
    pub model: Option<String>,
    pub capacity: Option<i32>,
    pub airline_id: Option<i64>,
}

impl AircraftFilter {
    pub fn condition(&self) -> Condition {
        Condition::all()
            .add_option(self.id.map(|id| aircraft::Column::Id.eq(id)))
            .add_option(
                non_blank(&self.model)
                    .map(|model| contains_ci((aircraft::Entity, aircraft::Column::Model), model)),
            )
            .add_option(self.capacity.map(|c| aircraft::Column::Capacity.eq(c)))
            .add_option(self.airline_id.map(|id| aircraft::Column::AirlineId.eq(id)))
    }
}

/// Inclusive calendar-day range. `to` covers its whole day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<Date>,
    pub to: Option<Date>,
}

impl DateRange {
    /// Parse `YYYY-MM-DD` bounds; a malformed bound is an error, never skipped.
    pub fn parse(from: Option<&str>, to: Option<&str>) -> Result<Self, DomainError> {
        let bound = |raw: Option<&str>| {
            raw.map(str::trim)
                .filter(|r| !r.is_empty())
                .map(parse_date)
                .transpose()
        };
        Ok(Self {
            from: bound(from)?,
            to: bound(to)?,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct FlightFilter {
    pub id: Option<i64>,
    pub departure: DateRange,
    /// Partial airline name, resolved through the airlines table.
    pub airline_name: Option<String>,
    /// Partial origin or destination.
    pub search: Option<String>,
    pub sort: Option<FlightSort>,
}

impl FlightFilter {
    pub fn condition(&self) -> Condition {
        let airline_match = non_blank(&self.airline_name).map(|name| {
            flights::Column::AirlineId.in_subquery(
                Query::select()
                    .column(airlines::Column::Id)
                    .from(airlines::Entity)
                    .and_where(contains_ci((airlines::Entity, airlines::Column::Name), name))
                    .to_owned(),
            )
        });

        let place_match = non_blank(&self.search).map(|needle| {
            Condition::any()
                .add(contains_ci((flights::Entity, flights::Column::Origin), needle))
                .add(contains_ci(
                    (flights::Entity, flights::Column::Destination),
                    needle,
                ))
        });

        Condition::all()
            .add_option(self.id.map(|id| flights::Column::Id.eq(id)))
            .add_option(
                self.departure
                    .from
                    .map(|d| flights::Column::Departure.gte(start_of_day(d))),
            )
            // no day follows the last representable one, so that bound stays open
            .add_option(
                self.departure
                    .to
                    .and_then(start_of_next_day)
                    .map(|end| flights::Column::Departure.lt(end)),
            )
            .add_option(airline_match)
            .add_option(place_match)
    }
}
