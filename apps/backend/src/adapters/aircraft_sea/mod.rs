//! SeaORM adapter for the aircraft table.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

use crate::entities::{aircraft, flights};
use crate::query::{AircraftFilter, Page};

pub mod dto;

pub use dto::AircraftFields;

pub async fn insert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: AircraftFields,
) -> Result<aircraft::Model, DbErr> {
    aircraft::ActiveModel {
        id: NotSet,
        model: Set(dto.model),
        capacity: Set(dto.capacity),
        last_inspection: Set(dto.last_inspection),
        next_inspection: Set(dto.next_inspection),
        airline_id: Set(dto.airline_id),
    }
    .insert(conn)
    .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<aircraft::Model>, DbErr> {
    aircraft::Entity::find_by_id(id).one(conn).await
}

pub async fn list<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    filter: &AircraftFilter,
    page: Page,
) -> Result<Vec<aircraft::Model>, DbErr> {
    let select = aircraft::Entity::find()
        .filter(filter.condition())
        .order_by_asc(aircraft::Column::Id);
    page.apply(select).all(conn).await
}

pub async fn update<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
    dto: AircraftFields,
) -> Result<aircraft::Model, DbErr> {
    aircraft::ActiveModel {
        id: Set(id),
        model: Set(dto.model),
        capacity: Set(dto.capacity),
        last_inspection: Set(dto.last_inspection),
        next_inspection: Set(dto.next_inspection),
        airline_id: Set(dto.airline_id),
    }
    .update(conn)
    .await
}

pub async fn delete_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<u64, DbErr> {
    let res = aircraft::Entity::delete_by_id(id).exec(conn).await?;
    Ok(res.rows_affected)
}

/// Number of flights assigned to the aircraft.
pub async fn count_flights<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<u64, DbErr> {
    flights::Entity::find()
        .filter(flights::Column::AircraftId.eq(id))
        .count(conn)
        .await
}
