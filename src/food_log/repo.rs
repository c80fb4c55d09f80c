use anyhow::Context;
use axum::async_trait;
use sqlx::PgPool;

/// Row operations on the `food_log` table. The update path is a plain
/// read-modify-write: callers fetch `image_urls`, append, and write the whole
/// array back. Concurrent writers on the same id can overwrite each other
/// (last writer wins); the service documents this rather than preventing it.
#[async_trait]
pub trait FoodLogStore: Send + Sync {
    /// `image_urls` of the row with the given id. Missing row is an error,
    /// `Ok(None)` means the row exists with a NULL array.
    async fn fetch_image_urls(&self, food_log_id: i64) -> anyhow::Result<Option<Vec<String>>>;
    async fn update_image_urls(&self, food_log_id: i64, urls: &[String]) -> anyhow::Result<()>;
    async fn insert_log(&self, user_id: i64, urls: &[String]) -> anyhow::Result<()>;
    async fn ping(&self) -> anyhow::Result<()>;
}

#[derive(Clone)]
pub struct PgFoodLogStore {
    db: PgPool,
}

impl PgFoodLogStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FoodLogStore for PgFoodLogStore {
    async fn fetch_image_urls(&self, food_log_id: i64) -> anyhow::Result<Option<Vec<String>>> {
        let row: (Option<Vec<String>>,) = sqlx::query_as(
            r#"
            SELECT image_urls
              FROM food_log
             WHERE id = $1
            "#,
        )
        .bind(food_log_id)
        .fetch_one(&self.db)
        .await
        .context("fetch food log")?;

        Ok(row.0)
    }

    async fn update_image_urls(&self, food_log_id: i64, urls: &[String]) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE food_log
               SET image_urls = $2
             WHERE id = $1
            "#,
        )
        .bind(food_log_id)
        .bind(urls)
        .execute(&self.db)
        .await
        .context("update food log")?;

        Ok(())
    }

    async fn insert_log(&self, user_id: i64, urls: &[String]) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO food_log (user_id, image_urls)
            VALUES ($1, $2)
            "#,
        )
        .bind(user_id)
        .bind(urls)
        .execute(&self.db)
        .await
        .context("insert food log")?;

        Ok(())
    }

    async fn ping(&self) -> anyhow::Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.db)
            .await
            .context("ping database")?;
        Ok(())
    }
}
