use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    Set,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;
use uuid::Uuid;

use crate::entities::log;

#[derive(Debug, Error)]
pub enum LogError {
    #[error("Log not found")]
    NotFound,
    #[error(transparent)]
    Database(#[from] DbErr),
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct Log {
    pub id: Uuid,
    pub tech: Option<String>,
    pub message: String,
    pub attention: bool,
    pub date: DateTime<Utc>,
}

/// Validated insert payload. `message` is guaranteed non-empty by the
/// route-level validation step.
#[derive(Debug, Deserialize, TS)]
pub struct CreateLog {
    pub tech: Option<String>,
    pub message: String,
    pub attention: bool,
}

#[derive(Debug, Deserialize, TS)]
pub struct UpdateLog {
    pub tech: Option<String>,
    pub message: Option<String>,
    pub attention: Option<bool>,
}

impl Log {
    fn from_model(model: log::Model) -> Self {
        Self {
            id: model.uuid,
            tech: model.tech,
            message: model.message,
            attention: model.attention,
            date: model.date,
        }
    }

    pub async fn find_all<C: ConnectionTrait>(db: &C) -> Result<Vec<Self>, DbErr> {
        let records = log::Entity::find().all(db).await?;
        Ok(records.into_iter().map(Self::from_model).collect())
    }

    /// Case-insensitive substring match over `message` and `tech`. The
    /// search text goes into the `LIKE` pattern unescaped, so `%` and
    /// `_` keep their wildcard meaning.
    pub async fn search<C: ConnectionTrait>(db: &C, text: &str) -> Result<Vec<Self>, DbErr> {
        let records = log::Entity::find()
            .filter(
                Condition::any()
                    .add(log::Column::Message.contains(text))
                    .add(log::Column::Tech.contains(text)),
            )
            .all(db)
            .await?;
        Ok(records.into_iter().map(Self::from_model).collect())
    }

    pub async fn find_by_id<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<Option<Self>, DbErr> {
        let record = log::Entity::find()
            .filter(log::Column::Uuid.eq(id))
            .one(db)
            .await?;
        Ok(record.map(Self::from_model))
    }

    pub async fn create<C: ConnectionTrait>(db: &C, data: &CreateLog) -> Result<Self, DbErr> {
        let active = log::ActiveModel {
            uuid: Set(Uuid::new_v4()),
            tech: Set(data.tech.clone()),
            message: Set(data.message.clone()),
            attention: Set(data.attention),
            date: Set(Utc::now()),
            ..Default::default()
        };
        let model = active.insert(db).await?;
        Ok(Self::from_model(model))
    }

    /// Applies only fields that are present and truthy: `attention:
    /// false` and empty strings leave the stored values untouched.
    pub async fn update<C: ConnectionTrait>(
        db: &C,
        id: Uuid,
        data: &UpdateLog,
    ) -> Result<Self, LogError> {
        let record = log::Entity::find()
            .filter(log::Column::Uuid.eq(id))
            .one(db)
            .await?
            .ok_or(LogError::NotFound)?;

        let tech = data.tech.as_deref().filter(|t| !t.is_empty());
        let message = data.message.as_deref().filter(|m| !m.is_empty());
        let attention = data.attention.filter(|a| *a);

        if tech.is_none() && message.is_none() && attention.is_none() {
            return Ok(Self::from_model(record));
        }

        let mut active: log::ActiveModel = record.into();
        if let Some(tech) = tech {
            active.tech = Set(Some(tech.to_string()));
        }
        if let Some(message) = message {
            active.message = Set(message.to_string());
        }
        if let Some(attention) = attention {
            active.attention = Set(attention);
        }

        let updated = active.update(db).await?;
        Ok(Self::from_model(updated))
    }

    pub async fn delete<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<u64, DbErr> {
        let result = log::Entity::delete_many()
            .filter(log::Column::Uuid.eq(id))
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

    fn new_log(tech: Option<&str>, message: &str, attention: bool) -> CreateLog {
        CreateLog {
            tech: tech.map(str::to_string),
            message: message.to_string(),
            attention,
        }
    }

    #[tokio::test]
    async fn create_assigns_fresh_ids_and_echoes_input() {
        let db = test_db().await;

        let first = Log::create(&db, &new_log(Some("React"), "component crashed", true))
            .await
            .unwrap();
        let second = Log::create(&db, &new_log(None, "routine check", false))
            .await
            .unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(first.tech.as_deref(), Some("React"));
        assert_eq!(first.message, "component crashed");
        assert!(first.attention);
        assert_eq!(second.tech, None);
        assert!(!second.attention);

        let all = Log::find_all(&db).await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn search_is_case_insensitive_over_both_fields() {
        let db = test_db().await;

        let by_tech = Log::create(&db, &new_log(Some("React"), "component crashed", true))
            .await
            .unwrap();
        let by_message = Log::create(&db, &new_log(Some("db1"), "disk full", false))
            .await
            .unwrap();

        let hits = Log::search(&db, "REACT").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, by_tech.id);

        let hits = Log::search(&db, "isk fu").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, by_message.id);

        assert!(Log::search(&db, "nothing-here").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_applies_only_present_and_truthy_fields() {
        let db = test_db().await;
        let log = Log::create(&db, &new_log(Some("db1"), "disk full", true))
            .await
            .unwrap();

        // `attention: false` is treated as absent and must not clear the flag.
        let updated = Log::update(
            &db,
            log.id,
            &UpdateLog {
                tech: None,
                message: None,
                attention: Some(false),
            },
        )
        .await
        .unwrap();
        assert!(updated.attention);
        assert_eq!(updated.message, "disk full");

        let updated = Log::update(
            &db,
            log.id,
            &UpdateLog {
                tech: Some(String::new()),
                message: Some("disk full - resolved".to_string()),
                attention: None,
            },
        )
        .await
        .unwrap();
        assert_eq!(updated.message, "disk full - resolved");
        assert_eq!(updated.tech.as_deref(), Some("db1"));
        assert!(updated.attention);
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found_and_creates_nothing() {
        let db = test_db().await;

        let result = Log::update(
            &db,
            Uuid::new_v4(),
            &UpdateLog {
                tech: None,
                message: Some("x".to_string()),
                attention: None,
            },
        )
        .await;

        assert!(matches!(result, Err(LogError::NotFound)));
        assert!(Log::find_all(&db).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_twice_removes_zero_rows_the_second_time() {
        let db = test_db().await;
        let log = Log::create(&db, &new_log(None, "to be removed", false))
            .await
            .unwrap();

        assert_eq!(Log::delete(&db, log.id).await.unwrap(), 1);
        assert_eq!(Log::delete(&db, log.id).await.unwrap(), 0);
        assert!(Log::find_by_id(&db, log.id).await.unwrap().is_none());
    }
}
