use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::Date;

/// Task record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<Date>,
    pub completed: bool,
    pub user_id: i64, // owner; every access is scoped to it
}

impl Task {
    /// All tasks owned by the given user, oldest first.
    pub async fn list_by_owner(db: &PgPool, owner_id: i64) -> Result<Vec<Task>, sqlx::Error> {
        sqlx::query_as::<_, Task>(
            r#"
            SELECT id, title, description, due_date, completed, user_id
            FROM tasks
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(owner_id)
        .fetch_all(db)
        .await
    }

    /// Insert a task for the given owner. The owner id comes from the
    /// verified token, never from the request body.
    pub async fn create(
        db: &PgPool,
        owner_id: i64,
        title: &str,
        description: Option<&str>,
        due_date: Option<Date>,
    ) -> Result<Task, sqlx::Error> {
        sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (title, description, due_date, user_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, description, due_date, completed, user_id
            "#,
        )
        .bind(title)
        .bind(description)
        .bind(due_date)
        .bind(owner_id)
        .fetch_one(db)
        .await
    }

    /// Single-statement partial update scoped to the owner. Returns false
    /// when no row matched: the id is absent or owned by someone else, and
    /// the caller cannot tell which.
    pub async fn update(
        db: &PgPool,
        owner_id: i64,
        task_id: i64,
        title: Option<&str>,
        description: Option<&str>,
        due_date: Option<Date>,
        completed: Option<bool>,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE tasks
            SET title = COALESCE($1, title),
                description = COALESCE($2, description),
                due_date = COALESCE($3, due_date),
                completed = COALESCE($4, completed)
            WHERE id = $5 AND user_id = $6
            "#,
        )
        .bind(title)
        .bind(description)
        .bind(due_date)
        .bind(completed)
        .bind(task_id)
        .bind(owner_id)
        .execute(db)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Owner-scoped delete with the same zero-rows semantics as update.
    pub async fn delete(db: &PgPool, owner_id: i64, task_id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            DELETE FROM tasks
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(task_id)
        .bind(owner_id)
        .execute(db)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_serializes_with_column_names() {
        let task = Task {
            id: 1,
            title: "Buy milk".into(),
            description: None,
            due_date: Some(time::macros::date!(2026 - 01 - 15)),
            completed: false,
            user_id: 3,
        };
        let json = serde_json::to_value(&task).expect("serialize");
        assert_eq!(json["id"], 1);
        assert_eq!(json["title"], "Buy milk");
        assert_eq!(json["description"], serde_json::Value::Null);
        assert_eq!(json["due_date"], "2026-01-15");
        assert_eq!(json["completed"], false);
        assert_eq!(json["user_id"], 3);
    }
}
