pub mod map;

pub use map::{ClanMap, MapUpdate};
