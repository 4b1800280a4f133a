pub mod manager;
pub mod maps;
pub mod models;
pub mod tech;

pub use manager::DatabaseError;
pub use maps::{MapStore, PgMapStore};
pub use models::{ClanMap, MapUpdate};
pub use tech::{PgTechTreeStore, TechTreeStore};
