use sea_orm_migration::{prelude::*, schema::*};

use super::m20240405_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Car::Table)
                    .if_not_exists()
                    .col(pk_auto(Car::Id))
                    .col(string(Car::Username))
                    .col(string(Car::Name).default(""))
                    .col(string(Car::Note).default(""))
                    .col(string(Car::FirebaseToken).default(""))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_car_username")
                            .from(Car::Table, Car::Username)
                            .to(User::Table, User::Username)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Car::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Car {
    Table,
    Id,
    Username,
    Name,
    Note,
    FirebaseToken,
}
