use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::domain::mob::Mob;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "mobs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    pub hostile: bool,
    pub health: i32,
    pub damage: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Mob {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            hostile: model.hostile,
            health: model.health,
            damage: model.damage,
        }
    }
}
