use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::manager::DatabaseError;
use crate::database::models::{ClanMap, MapUpdate};

/// Relational store seam for the `clanmaps` table.
#[async_trait]
pub trait MapStore: Send + Sync {
    /// Fetch the map matching both the id and the shared pass-phrase.
    async fn find_by_id_and_pass(
        &self,
        mapid: i32,
        pass: &str,
    ) -> Result<Option<ClanMap>, DatabaseError>;

    /// Update the map owned by `discordid`, returning the number of rows
    /// touched. Zero rows is not an error: the caller owns no such map.
    async fn update_owned(
        &self,
        mapid: i32,
        discordid: &str,
        update: &MapUpdate,
    ) -> Result<u64, DatabaseError>;

    /// Connectivity probe for the health endpoint.
    async fn ping(&self) -> Result<(), DatabaseError>;
}

pub struct PgMapStore {
    pool: PgPool,
}

impl PgMapStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MapStore for PgMapStore {
    async fn find_by_id_and_pass(
        &self,
        mapid: i32,
        pass: &str,
    ) -> Result<Option<ClanMap>, DatabaseError> {
        let map = sqlx::query_as::<_, ClanMap>(
            "SELECT mapid, typemap, discordid, name, dateofburning, pass, allowedit \
             FROM clanmaps WHERE mapid = $1 AND pass = $2",
        )
        .bind(mapid)
        .bind(pass)
        .fetch_optional(&self.pool)
        .await?;

        Ok(map)
    }

    async fn update_owned(
        &self,
        mapid: i32,
        discordid: &str,
        update: &MapUpdate,
    ) -> Result<u64, DatabaseError> {
        let result = sqlx::query(
            "UPDATE clanmaps SET name = $1, dateofburning = $2, allowedit = $3, pass = $4 \
             WHERE mapid = $5 AND discordid = $6",
        )
        .bind(&update.name)
        .bind(update.dateofburning)
        .bind(update.allowedit)
        .bind(&update.pass)
        .bind(mapid)
        .bind(discordid)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
