use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Airlines {
    Table,
    Id,
    Name,
    IataCode,
}

#[derive(Iden)]
enum Aircraft {
    Table,
    Id,
    Model,
    Capacity,
    LastInspection,
    NextInspection,
    AirlineId,
}

#[derive(Iden)]
enum Flights {
    Table,
    Id,
    FlightNumber,
    Origin,
    Destination,
    Departure,
    Arrival,
    Status,
    AircraftId,
    AirlineId,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // airlines
        manager
            .create_table(
                Table::create()
                    .table(Airlines::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Airlines::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Airlines::Name).string().not_null())
                    .col(ColumnDef::new(Airlines::IataCode).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_airlines_iata_code")
                    .table(Airlines::Table)
                    .col(Airlines::IataCode)
                    .to_owned(),
            )
            .await?;

        // aircraft
        manager
            .create_table(
                Table::create()
                    .table(Aircraft::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Aircraft::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Aircraft::Model).string().not_null())
                    .col(ColumnDef::new(Aircraft::Capacity).integer().not_null())
                    .col(
                        ColumnDef::new(Aircraft::LastInspection)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Aircraft::NextInspection)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Aircraft::AirlineId).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_aircraft_airline_id")
                            .from(Aircraft::Table, Aircraft::AirlineId)
                            .to(Airlines::Table, Airlines::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_aircraft_airline_id")
                    .table(Aircraft::Table)
                    .col(Aircraft::AirlineId)
                    .to_owned(),
            )
            .await?;

        // flights
        manager
            .create_table(
                Table::create()
                    .table(Flights::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Flights::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Flights::FlightNumber).integer().not_null())
                    .col(ColumnDef::new(Flights::Origin).string().not_null())
                    .col(ColumnDef::new(Flights::Destination).string().not_null())
                    .col(
                        ColumnDef::new(Flights::Departure)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Flights::Arrival)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Flights::Status).string().not_null())
                    .col(ColumnDef::new(Flights::AircraftId).big_integer().not_null())
                    .col(ColumnDef::new(Flights::AirlineId).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flights_aircraft_id")
                            .from(Flights::Table, Flights::AircraftId)
                            .to(Aircraft::Table, Aircraft::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flights_airline_id")
                            .from(Flights::Table, Flights::AirlineId)
                            .to(Airlines::Table, Airlines::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_flights_aircraft_id")
                    .table(Flights::Table)
                    .col(Flights::AircraftId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_flights_airline_id")
                    .table(Flights::Table)
                    .col(Flights::AirlineId)
                    .to_owned(),
            )
            .await?;

        // range filters and sorting hit departure
        manager
            .create_index(
                Index::create()
                    .name("ix_flights_departure")
                    .table(Flights::Table)
                    .col(Flights::Departure)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // drop in reverse order; indexes go with their tables
        manager
            .drop_table(Table::drop().table(Flights::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Aircraft::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Airlines::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}
