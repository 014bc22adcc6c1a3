use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .table(MenuItems::Table)
                    .col(MenuItems::VendorId)
                    .name("idx_menu_items_vendor_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(MenuItems::Table)
                    .col(MenuItems::VendorId)
                    .col(MenuItems::Category)
                    .name("idx_menu_items_vendor_id_category")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_menu_items_vendor_id_category")
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(Index::drop().name("idx_menu_items_vendor_id").to_owned())
            .await
    }
}

#[derive(Iden)]
enum MenuItems {
    Table,
    VendorId,
    Category,
}
