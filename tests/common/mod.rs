// Shared fixtures; each test binary uses a subset.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use chrono::NaiveDate;
use serde_json::Value;

use oasis_api::auth::{generate_jwt, Claims};
use oasis_api::database::manager::DatabaseError;
use oasis_api::database::maps::MapStore;
use oasis_api::database::models::{ClanMap, MapUpdate};
use oasis_api::database::tech::TechTreeStore;
use oasis_api::AppState;

pub const JWT_SECRET: &str = "integration-test-secret";

/// The config singleton reads JWT_SECRET on first access, so it must be in
/// the environment before anything touches config. Every helper that builds
/// an app or a token goes through here first.
fn init_env() {
    std::env::set_var("JWT_SECRET", JWT_SECRET);
}

pub fn app_with(maps: Arc<dyn MapStore>, tech: Arc<dyn TechTreeStore>) -> Router {
    init_env();
    oasis_api::app(AppState::new(maps, tech))
}

/// Mint a real bearer token for the given identity pair.
pub fn bearer(discordid: &str, discordtag: &str) -> String {
    init_env();
    let token = generate_jwt(Claims::new(discordid.to_string(), discordtag.to_string()))
        .expect("token generation");
    format!("Bearer {}", token)
}

/// Collect a response body; error-path assertions check it is empty.
pub async fn read_body(response: axum::response::Response) -> axum::body::Bytes {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body")
}

pub fn sample_map(mapid: i32, discordid: &str, pass: &str) -> ClanMap {
    ClanMap {
        mapid,
        typemap: Some("crater".to_string()),
        discordid: discordid.to_string(),
        name: "Burning Lands".to_string(),
        dateofburning: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        pass: pass.to_string(),
        allowedit: true,
    }
}

/// In-memory MapStore with real update semantics, enough for the
/// edit-then-read round trip.
#[derive(Default)]
pub struct MemoryMapStore {
    maps: Mutex<HashMap<i32, ClanMap>>,
}

impl MemoryMapStore {
    pub fn with_maps(maps: impl IntoIterator<Item = ClanMap>) -> Arc<Self> {
        Arc::new(Self {
            maps: Mutex::new(maps.into_iter().map(|m| (m.mapid, m)).collect()),
        })
    }

    pub fn empty() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn get(&self, mapid: i32) -> Option<ClanMap> {
        self.maps.lock().unwrap().get(&mapid).cloned()
    }
}

#[async_trait]
impl MapStore for MemoryMapStore {
    async fn find_by_id_and_pass(
        &self,
        mapid: i32,
        pass: &str,
    ) -> Result<Option<ClanMap>, DatabaseError> {
        let maps = self.maps.lock().unwrap();
        Ok(maps.get(&mapid).filter(|m| m.pass == pass).cloned())
    }

    async fn update_owned(
        &self,
        mapid: i32,
        discordid: &str,
        update: &MapUpdate,
    ) -> Result<u64, DatabaseError> {
        let mut maps = self.maps.lock().unwrap();
        match maps.get_mut(&mapid).filter(|m| m.discordid == discordid) {
            Some(map) => {
                map.name = update.name.clone();
                map.dateofburning = update.dateofburning;
                map.allowedit = update.allowedit;
                map.pass = update.pass.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        Ok(())
    }
}

/// MapStore whose every call fails, for the 503 paths.
pub struct UnavailableMapStore;

#[async_trait]
impl MapStore for UnavailableMapStore {
    async fn find_by_id_and_pass(
        &self,
        _mapid: i32,
        _pass: &str,
    ) -> Result<Option<ClanMap>, DatabaseError> {
        Err(DatabaseError::QueryError("connection refused".to_string()))
    }

    async fn update_owned(
        &self,
        _mapid: i32,
        _discordid: &str,
        _update: &MapUpdate,
    ) -> Result<u64, DatabaseError> {
        Err(DatabaseError::QueryError("connection refused".to_string()))
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        Err(DatabaseError::QueryError("connection refused".to_string()))
    }
}

/// In-memory tech-tree collection: JSON documents matched on their
/// `discordtag` field.
#[derive(Default)]
pub struct MemoryTechStore {
    documents: Vec<Value>,
}

impl MemoryTechStore {
    pub fn with_documents(documents: impl IntoIterator<Item = Value>) -> Arc<Self> {
        Arc::new(Self {
            documents: documents.into_iter().collect(),
        })
    }

    pub fn empty() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

#[async_trait]
impl TechTreeStore for MemoryTechStore {
    async fn find_by_discordtag(&self, discordtag: &str) -> Result<Option<Value>, DatabaseError> {
        Ok(self
            .documents
            .iter()
            .find(|doc| doc.get("discordtag").and_then(Value::as_str) == Some(discordtag))
            .cloned())
    }
}

/// TechTreeStore whose every call fails, for the 503 path.
pub struct UnavailableTechStore;

#[async_trait]
impl TechTreeStore for UnavailableTechStore {
    async fn find_by_discordtag(&self, _discordtag: &str) -> Result<Option<Value>, DatabaseError> {
        Err(DatabaseError::QueryError("connection refused".to_string()))
    }
}
