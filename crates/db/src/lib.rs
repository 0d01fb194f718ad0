use db_migration::Migrator;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

pub use sea_orm::DbErr;

pub mod entities;
pub mod models;

/// Shared connection handle, cloned into every request handler.
#[derive(Clone)]
pub struct DBService {
    pub conn: DatabaseConnection,
}

impl DBService {
    /// Connects to the store and brings the schema up to date.
    pub async fn connect(database_url: &str) -> Result<DBService, DbErr> {
        let mut options = ConnectOptions::new(database_url.to_owned());
        options.max_connections(5).sqlx_logging(false);
        let conn = Database::connect(options).await?;
        Migrator::up(&conn, None).await?;
        tracing::debug!("Database ready at {database_url}");
        Ok(DBService { conn })
    }

    pub async fn close(self) -> Result<(), DbErr> {
        self.conn.close().await
    }
}
