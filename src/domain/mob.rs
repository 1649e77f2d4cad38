//! Mob data-transfer shapes
//!
//! The create/update/out shapes the repository and service contracts are
//! built around. Field defaults mirror the column defaults in the mobs table.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Mob output representation, always carries the identifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mob {
    pub id: Uuid,
    pub name: String,
    pub hostile: bool,
    pub health: i32,
    pub damage: i32,
}

/// Mob create input representation
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMob {
    pub name: String,
    #[serde(default)]
    pub hostile: bool,
    #[serde(default = "default_health")]
    pub health: i32,
    #[serde(default)]
    pub damage: i32,
}

fn default_health() -> i32 {
    100
}

/// Mob partial update representation; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMob {
    pub name: Option<String>,
    pub hostile: Option<bool>,
    pub health: Option<i32>,
    pub damage: Option<i32>,
}

/// Conjunctive equality filters for mob queries; empty means full scan
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MobFilter {
    pub name: Option<String>,
    pub hostile: Option<bool>,
}
