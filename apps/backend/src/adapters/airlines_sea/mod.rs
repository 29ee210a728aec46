//! SeaORM adapter for the airlines table.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

use crate::entities::{aircraft, airlines, flights};
use crate::query::{AirlineFilter, AirlineSort, Page};

pub mod dto;

pub use dto::AirlineFields;

pub async fn insert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: AirlineFields,
) -> Result<airlines::Model, DbErr> {
    airlines::ActiveModel {
        id: NotSet,
        name: Set(dto.name),
        iata_code: Set(dto.iata_code),
    }
    .insert(conn)
    .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<airlines::Model>, DbErr> {
    airlines::Entity::find_by_id(id).one(conn).await
}

pub async fn exists<C: ConnectionTrait + Send + Sync>(conn: &C, id: i64) -> Result<bool, DbErr> {
    let n = airlines::Entity::find()
        .filter(airlines::Column::Id.eq(id))
        .count(conn)
        .await?;
    Ok(n > 0)
}

pub async fn list<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    filter: &AirlineFilter,
    page: Page,
) -> Result<Vec<airlines::Model>, DbErr> {
    let mut select = airlines::Entity::find().filter(filter.condition());
    if let Some(AirlineSort::Name) = filter.sort {
        select = select.order_by_asc(airlines::Column::Name);
    }
    page.apply(select.order_by_asc(airlines::Column::Id))
        .all(conn)
        .await
}

pub async fn update<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
    dto: AirlineFields,
) -> Result<airlines::Model, DbErr> {
    airlines::ActiveModel {
        id: Set(id),
        name: Set(dto.name),
        iata_code: Set(dto.iata_code),
    }
    .update(conn)
    .await
}

pub async fn delete_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<u64, DbErr> {
    let res = airlines::Entity::delete_by_id(id).exec(conn).await?;
    Ok(res.rows_affected)
}

/// Rows that still point at the airline: `(aircraft, flights)`.
pub async fn count_dependents<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<(u64, u64), DbErr> {
    let aircraft = aircraft::Entity::find()
        .filter(aircraft::Column::AirlineId.eq(id))
        .count(conn)
        .await?;
    let flights = flights::Entity::find()
        .filter(flights::Column::AirlineId.eq(id))
        .count(conn)
        .await?;
    Ok((aircraft, flights))
}
