use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .if_not_exists()
                    .table(Logs::Table)
                    .col(pk_id_col(Logs::Id))
                    .col(uuid_col(Logs::Uuid))
                    .col(ColumnDef::new(Logs::Tech).string())
                    .col(ColumnDef::new(Logs::Message).text().not_null())
                    .col(ColumnDef::new(Logs::Attention).boolean().not_null())
                    .col(timestamp_col(Logs::Date))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_logs_uuid")
                    .table(Logs::Table)
                    .col(Logs::Uuid)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .if_not_exists()
                    .table(Techs::Table)
                    .col(pk_id_col(Techs::Id))
                    .col(uuid_col(Techs::Uuid))
                    .col(ColumnDef::new(Techs::FirstName).string().not_null())
                    .col(ColumnDef::new(Techs::LastName).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_techs_uuid")
                    .table(Techs::Table)
                    .col(Techs::Uuid)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_techs_uuid")
                    .table(Techs::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Techs::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_logs_uuid")
                    .table(Logs::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Logs::Table).to_owned())
            .await?;

        Ok(())
    }
}

fn pk_id_col<T: Iden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .integer()
        .not_null()
        .auto_increment()
        .primary_key()
        .to_owned()
}

fn uuid_col<T: Iden>(col: T) -> ColumnDef {
    ColumnDef::new(col).uuid().not_null().to_owned()
}

fn timestamp_col<T: Iden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .timestamp()
        .not_null()
        .default(Expr::current_timestamp())
        .to_owned()
}

#[derive(Iden)]
enum Logs {
    Table,
    Id,
    Uuid,
    Tech,
    Message,
    Attention,
    Date,
}

#[derive(Iden)]
enum Techs {
    Table,
    Id,
    Uuid,
    FirstName,
    LastName,
}
