//! Joined loads feeding the nested read models. Every loader issues a fixed
//! number of statements regardless of row count.

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::entities::{aircraft, airlines, flights};

/// Every airline with its fleet; one LEFT JOIN, consolidated on the airline key.
pub async fn airlines_with_fleet<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<(airlines::Model, Vec<aircraft::Model>)>, DbErr> {
    airlines::Entity::find()
        .find_with_related(aircraft::Entity)
        .order_by_asc(airlines::Column::Id)
        .order_by_asc(aircraft::Column::Id)
        .all(conn)
        .await
}

pub async fn aircraft_with_airline<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<(aircraft::Model, Option<airlines::Model>)>, DbErr> {
    aircraft::Entity::find_by_id(id)
        .find_also_related(airlines::Entity)
        .one(conn)
        .await
}

/// Flights joined with their operating airline, optionally narrowed to one id.
pub async fn flights_with_airline<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    only: Option<i64>,
) -> Result<Vec<(flights::Model, Option<airlines::Model>)>, DbErr> {
    let mut select = flights::Entity::find().find_also_related(airlines::Entity);
    if let Some(id) = only {
        select = select.filter(flights::Column::Id.eq(id));
    }
    select.order_by_asc(flights::Column::Id).all(conn).await
}

pub async fn aircraft_with_airline_in<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    ids: Vec<i64>,
) -> Result<Vec<(aircraft::Model, Option<airlines::Model>)>, DbErr> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    aircraft::Entity::find()
        .filter(aircraft::Column::Id.is_in(ids))
        .find_also_related(airlines::Entity)
        .all(conn)
        .await
}

/// Fleets of the given airlines, ordered by airline then aircraft id.
pub async fn fleets_of<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    airline_ids: Vec<i64>,
) -> Result<Vec<aircraft::Model>, DbErr> {
    if airline_ids.is_empty() {
        return Ok(Vec::new());
    }
    aircraft::Entity::find()
        .filter(aircraft::Column::AirlineId.is_in(airline_ids))
        .order_by_asc(aircraft::Column::AirlineId)
        .order_by_asc(aircraft::Column::Id)
        .all(conn)
        .await
}
