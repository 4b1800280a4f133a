use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A shared clan map row from the `clanmaps` table.
///
/// The pass-phrase is part of the projection on purpose: whoever supplied the
/// correct `(mapid, pass)` pair already holds it, and the companion client
/// re-displays it so the clan can share it around.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ClanMap {
    pub mapid: i32,
    pub typemap: Option<String>,
    pub discordid: String,
    pub name: String,
    pub dateofburning: NaiveDate,
    pub pass: String,
    pub allowedit: bool,
}

/// Resolved values written by a map edit.
///
/// `pass` is the new pass-phrase, not a credential check; ownership is
/// enforced by the `discordid` predicate on the update itself.
#[derive(Debug, Clone, PartialEq)]
pub struct MapUpdate {
    pub name: String,
    pub dateofburning: NaiveDate,
    pub allowedit: bool,
    pub pass: String,
}
