use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;

use crate::database::manager::DatabaseError;

/// Document-collection seam for per-user technology trees.
///
/// Tech trees are free-form JSON documents keyed by their `discordtag`
/// field. The production store keeps them in a JSONB column and looks them
/// up by field, so the collection behaves like a document database
/// `findOne` from the handler's point of view.
#[async_trait]
pub trait TechTreeStore: Send + Sync {
    async fn find_by_discordtag(&self, discordtag: &str) -> Result<Option<Value>, DatabaseError>;
}

pub struct PgTechTreeStore {
    pool: PgPool,
}

impl PgTechTreeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TechTreeStore for PgTechTreeStore {
    async fn find_by_discordtag(&self, discordtag: &str) -> Result<Option<Value>, DatabaseError> {
        let document = sqlx::query_scalar::<_, Value>(
            "SELECT document FROM tech WHERE document->>'discordtag' = $1 LIMIT 1",
        )
        .bind(discordtag)
        .fetch_optional(&self.pool)
        .await?;

        Ok(document)
    }
}
