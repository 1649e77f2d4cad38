//! Repository implementations (SeaORM)

pub mod generic;
pub mod mob;

pub use generic::{EntityMapping, SqlRepository};
pub use mob::{MobMapping, MobRepository};
