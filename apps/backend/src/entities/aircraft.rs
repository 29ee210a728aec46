use sea_orm::entity::prelude::*;
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "aircraft")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub model: String,
    pub capacity: i32,
    #[sea_orm(column_name = "last_inspection")]
    pub last_inspection: OffsetDateTime,
    #[sea_orm(column_name = "next_inspection")]
    pub next_inspection: OffsetDateTime,
    #[sea_orm(column_name = "airline_id")]
    pub airline_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::airlines::Entity",
        from = "Column::AirlineId",
        to = "super::airlines::Column::Id"
    )]
    Airline,
    #[sea_orm(has_many = "super::flights::Entity")]
    Flights,
}

impl Related<super::airlines::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Airline.def()
    }
}

impl Related<super::flights::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Flights.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
