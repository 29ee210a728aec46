//! Grouped counts over inner joins. Rows whose join partner is missing drop
//! out of the join instead of failing the query.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ConnectionTrait, DbErr, EntityTrait, JoinType, QueryOrder, QuerySelect, RelationTrait,
};

use crate::entities::{aircraft, airlines, flights};

/// `(aircraft model, flights flown by that model)`
pub async fn flights_per_aircraft_model<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<(String, i64)>, DbErr> {
    flights::Entity::find()
        .select_only()
        .column(aircraft::Column::Model)
        .column_as(Expr::col((flights::Entity, flights::Column::Id)).count(), "total")
        .join(JoinType::InnerJoin, flights::Relation::Aircraft.def())
        .group_by(aircraft::Column::Model)
        .order_by_asc(aircraft::Column::Model)
        .into_tuple()
        .all(conn)
        .await
}

/// `(airline name, aircraft model, aircraft count)`
pub async fn aircraft_per_airline_and_model<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<(String, String, i64)>, DbErr> {
    aircraft::Entity::find()
        .select_only()
        .column(airlines::Column::Name)
        .column(aircraft::Column::Model)
        .column_as(
            Expr::col((aircraft::Entity, aircraft::Column::Id)).count(),
            "total",
        )
        .join(JoinType::InnerJoin, aircraft::Relation::Airline.def())
        .group_by(airlines::Column::Name)
        .group_by(aircraft::Column::Model)
        .order_by_asc(airlines::Column::Name)
        .order_by_asc(aircraft::Column::Model)
        .into_tuple()
        .all(conn)
        .await
}

/// `(airline name, flight count)`
pub async fn flights_per_airline<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<(String, i64)>, DbErr> {
    flights::Entity::find()
        .select_only()
        .column(airlines::Column::Name)
        .column_as(Expr::col((flights::Entity, flights::Column::Id)).count(), "total")
        .join(JoinType::InnerJoin, flights::Relation::Airline.def())
        .group_by(airlines::Column::Name)
        .order_by_asc(airlines::Column::Name)
        .into_tuple()
        .all(conn)
        .await
}
