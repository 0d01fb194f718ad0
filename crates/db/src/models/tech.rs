use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, Set,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;
use uuid::Uuid;

use crate::entities::tech;

#[derive(Debug, Error)]
pub enum TechError {
    // Message shared with the logs resource.
    #[error("Log not found")]
    NotFound,
    #[error(transparent)]
    Database(#[from] DbErr),
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct Tech {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
}

/// Validated insert payload; both names are non-empty.
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct CreateTech {
    pub first_name: String,
    pub last_name: String,
}

impl Tech {
    fn from_model(model: tech::Model) -> Self {
        Self {
            id: model.uuid,
            first_name: model.first_name,
            last_name: model.last_name,
        }
    }

    pub async fn find_all<C: ConnectionTrait>(db: &C) -> Result<Vec<Self>, DbErr> {
        let records = tech::Entity::find().all(db).await?;
        Ok(records.into_iter().map(Self::from_model).collect())
    }

    pub async fn create<C: ConnectionTrait>(db: &C, data: &CreateTech) -> Result<Self, DbErr> {
        let active = tech::ActiveModel {
            uuid: Set(Uuid::new_v4()),
            first_name: Set(data.first_name.clone()),
            last_name: Set(data.last_name.clone()),
            ..Default::default()
        };
        let model = active.insert(db).await?;
        Ok(Self::from_model(model))
    }

    pub async fn delete<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<u64, DbErr> {
        let result = tech::Entity::delete_many()
            .filter(tech::Column::Uuid.eq(id))
            .exec(db)
            .await?;
        Ok(result.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::DatabaseConnection;

    use super::*;
    use crate::DBService;

    async fn test_db() -> DatabaseConnection {
        let path = std::env::temp_dir().join(format!("itlogger-test-{}.sqlite", Uuid::new_v4()));
        let url = format!("sqlite://{}?mode=rwc", path.display());
        DBService::connect(&url).await.unwrap().conn
    }

    #[tokio::test]
    async fn create_list_and_delete_round_trip() {
        let db = test_db().await;

        let tech = Tech::create(
            &db,
            &CreateTech {
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
            },
        )
        .await
        .unwrap();
        assert_eq!(tech.first_name, "Ada");
        assert_eq!(tech.last_name, "Lovelace");

        let all = Tech::find_all(&db).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, tech.id);

        assert_eq!(Tech::delete(&db, tech.id).await.unwrap(), 1);
        assert_eq!(Tech::delete(&db, tech.id).await.unwrap(), 0);
        assert!(Tech::find_all(&db).await.unwrap().is_empty());
    }
}
