use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vendors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Vendors::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Vendors::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Vendors::Location).string_len(200).not_null())
                    .col(ColumnDef::new(Vendors::Specialty).string_len(100))
                    .col(
                        ColumnDef::new(Vendors::WhatsappNumber)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Vendors::IsOpen)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Vendors::LastUpdated)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Vendors::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Vendors::AccountId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Vendors::Table, Vendors::AccountId)
                            .to(Accounts::Table, Accounts::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vendors::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Vendors {
    Table,
    Id,
    Name,
    Location,
    Specialty,
    WhatsappNumber,
    IsOpen,
    LastUpdated,
    CreatedAt,
    AccountId,
}

#[derive(Iden)]
enum Accounts {
    Table,
    Id,
}
