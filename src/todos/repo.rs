use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "todo_priority", rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    #[serde(with = "time::serde::rfc3339::option")]
    pub due_date: Option<OffsetDateTime>,
    pub priority: Priority,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Todo {
    /// All of one user's todos, newest first.
    pub async fn list_for_user(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<Todo>> {
        let rows = sqlx::query_as::<_, Todo>(
            r#"
            SELECT id, user_id, title, description, completed, due_date, priority, created_at
            FROM todos
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn insert(
        db: &PgPool,
        user_id: Uuid,
        title: &str,
        description: Option<&str>,
        due_date: Option<OffsetDateTime>,
        priority: Priority,
    ) -> anyhow::Result<Todo> {
        let todo = sqlx::query_as::<_, Todo>(
            r#"
            INSERT INTO todos (user_id, title, description, due_date, priority)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, title, description, completed, due_date, priority, created_at
            "#,
        )
        .bind(user_id)
        .bind(title)
        .bind(description)
        .bind(due_date)
        .bind(priority)
        .fetch_one(db)
        .await?;
        Ok(todo)
    }

    /// Id and owner are filtered together; another user's todo looks exactly
    /// like a missing one.
    pub async fn find_for_user(db: &PgPool, user_id: Uuid, id: Uuid) -> anyhow::Result<Option<Todo>> {
        let todo = sqlx::query_as::<_, Todo>(
            r#"
            SELECT id, user_id, title, description, completed, due_date, priority, created_at
            FROM todos
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(db)
        .await?;
        Ok(todo)
    }

    pub async fn save(&self, db: &PgPool) -> anyhow::Result<Todo> {
        let todo = sqlx::query_as::<_, Todo>(
            r#"
            UPDATE todos
            SET title = $1, description = $2, completed = $3, due_date = $4, priority = $5
            WHERE id = $6 AND user_id = $7
            RETURNING id, user_id, title, description, completed, due_date, priority, created_at
            "#,
        )
        .bind(&self.title)
        .bind(&self.description)
        .bind(self.completed)
        .bind(self.due_date)
        .bind(self.priority)
        .bind(self.id)
        .bind(self.user_id)
        .fetch_one(db)
        .await?;
        Ok(todo)
    }

    pub async fn delete_for_user(db: &PgPool, user_id: Uuid, id: Uuid) -> anyhow::Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM todos
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .execute(db)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
