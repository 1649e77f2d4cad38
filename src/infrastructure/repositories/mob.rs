//! Mob field mapping for the generic repository

use sea_orm::{ColumnTrait, Condition, IntoActiveModel, Set};
use uuid::Uuid;

use crate::domain::mob::{CreateMob, Mob, MobFilter, UpdateMob};
use crate::models::mob;

use super::generic::{EntityMapping, SqlRepository};

/// Mob database storage
pub type MobRepository<'c, C> = SqlRepository<'c, C, MobMapping>;

pub struct MobMapping;

impl EntityMapping for MobMapping {
    type Entity = mob::Entity;
    type Create = CreateMob;
    type Update = UpdateMob;
    type Out = Mob;
    type Filter = MobFilter;

    const ENTITY_NAME: &'static str = "Mob";

    fn new_record(input: CreateMob) -> mob::ActiveModel {
        mob::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            hostile: Set(input.hostile),
            health: Set(input.health),
            damage: Set(input.damage),
        }
    }

    fn apply_update(model: mob::Model, input: UpdateMob) -> mob::ActiveModel {
        let mut entry = model.into_active_model();
        if let Some(name) = input.name {
            entry.name = Set(name);
        }
        if let Some(hostile) = input.hostile {
            entry.hostile = Set(hostile);
        }
        if let Some(health) = input.health {
            entry.health = Set(health);
        }
        if let Some(damage) = input.damage {
            entry.damage = Set(damage);
        }
        entry
    }

    fn id_condition(id: Uuid) -> Condition {
        Condition::all().add(mob::Column::Id.eq(id))
    }

    fn filter_condition(filter: &MobFilter) -> Condition {
        let mut condition = Condition::all();
        if let Some(name) = &filter.name {
            condition = condition.add(mob::Column::Name.eq(name.clone()));
        }
        if let Some(hostile) = filter.hostile {
            condition = condition.add(mob::Column::Hostile.eq(hostile));
        }
        condition
    }
}
