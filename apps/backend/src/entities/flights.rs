use sea_orm::entity::prelude::*;
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "flights")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "flight_number")]
    pub flight_number: i32,
    pub origin: String,
    pub destination: String,
    pub departure: OffsetDateTime,
    pub arrival: OffsetDateTime,
    pub status: String,
    #[sea_orm(column_name = "aircraft_id")]
    pub aircraft_id: i64,
    #[sea_orm(column_name = "airline_id")]
    pub airline_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::aircraft::Entity",
        from = "Column::AircraftId",
        to = "super::aircraft::Column::Id"
    )]
    Aircraft,
    #[sea_orm(
        belongs_to = "super::airlines::Entity",
        from = "Column::AirlineId",
        to = "super::airlines::Column::Id"
    )]
    Airline,
}

impl Related<super::aircraft::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Aircraft.def()
    }
}

impl Related<super::airlines::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Airline.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
