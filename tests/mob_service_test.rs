//! Mob service test cases

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use monster_spawner::db;
use monster_spawner::domain::DomainError;
use monster_spawner::domain::events::{EventBus, MobEvent, PublishError};
use monster_spawner::domain::mob::{CreateMob, MobFilter, UpdateMob};
use monster_spawner::services::MobService;
use uuid::Uuid;

/// Bus that records published events for assertions
#[derive(Default)]
struct RecordingBus {
    events: Mutex<Vec<MobEvent>>,
}

impl RecordingBus {
    fn events(&self) -> Vec<MobEvent> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventBus for RecordingBus {
    async fn publish(&self, event: MobEvent) -> Result<(), PublishError> {
        self.events.lock().unwrap().push(event);
        Ok(())
    }
}

/// Bus that always fails, for the fire-and-forget path
struct FailingBus;

#[async_trait]
impl EventBus for FailingBus {
    async fn publish(&self, _event: MobEvent) -> Result<(), PublishError> {
        Err(PublishError("broker unavailable".to_string()))
    }
}

async fn init_mob_service() -> (MobService, Arc<RecordingBus>) {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    let bus = Arc::new(RecordingBus::default());
    (MobService::new(db, bus.clone()), bus)
}

fn spawn_input(name: &str) -> CreateMob {
    CreateMob {
        name: name.to_string(),
        hostile: false,
        health: 100,
        damage: 0,
    }
}

#[tokio::test]
async fn test_mob_create() {
    let (service, _bus) = init_mob_service().await;

    let mob = service.create(spawn_input("Slime")).await.unwrap();

    let retrieved = service.get(mob.id).await.unwrap();
    assert_eq!(retrieved, mob);
}

#[tokio::test]
async fn test_mob_create_not_unique() {
    let (service, _bus) = init_mob_service().await;

    let first = service.create(spawn_input("Slime")).await.unwrap();
    let err = service.create(spawn_input("Slime")).await.unwrap_err();

    match err {
        DomainError::AlreadyExists { id, .. } => assert_eq!(id, first.id),
        other => panic!("unexpected error: {other}"),
    }

    // Exactly one record survives
    let all = service.get_all(MobFilter::default()).await.unwrap();
    assert_eq!(all.len(), 1);
}

#[tokio::test]
async fn test_mob_get_not_existing() {
    let (service, _bus) = init_mob_service().await;

    let err = service.get(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

#[tokio::test]
async fn test_mob_collect_with_filter() {
    let (service, _bus) = init_mob_service().await;

    for i in 0..3 {
        service.create(spawn_input(&format!("Zombie {i}"))).await.unwrap();
    }

    let all = service.get_all(MobFilter::default()).await.unwrap();
    assert_eq!(all.len(), 3);

    let filtered = service
        .get_all(MobFilter {
            name: Some("Zombie 1".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].name, "Zombie 1");
}

#[tokio::test]
async fn test_mob_delete() {
    let (service, _bus) = init_mob_service().await;

    let mob = service.create(spawn_input("Slime")).await.unwrap();
    service.delete(mob.id).await.unwrap();

    let err = service.get(mob.id).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

#[tokio::test]
async fn test_mob_delete_not_existing() {
    let (service, bus) = init_mob_service().await;

    let err = service.delete(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
    assert!(bus.events().is_empty());
}

#[tokio::test]
async fn test_mob_update_partial() {
    let (service, _bus) = init_mob_service().await;

    let mob = service
        .create(CreateMob {
            name: "Skeleton".to_string(),
            hostile: true,
            health: 20,
            damage: 4,
        })
        .await
        .unwrap();

    let updated = service
        .update(
            mob.id,
            UpdateMob {
                name: Some("Wither Skeleton".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "Wither Skeleton");
    assert_eq!(updated.hostile, mob.hostile);
    assert_eq!(updated.health, mob.health);
    assert_eq!(updated.damage, mob.damage);
}

#[tokio::test]
async fn test_mob_update_not_existing() {
    let (service, _bus) = init_mob_service().await;

    let err = service
        .update(Uuid::new_v4(), UpdateMob::default())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

#[tokio::test]
async fn test_mob_update_not_unique() {
    let (service, _bus) = init_mob_service().await;

    let slime = service.create(spawn_input("Slime")).await.unwrap();
    let skeleton = service.create(spawn_input("Skeleton")).await.unwrap();

    let err = service
        .update(
            slime.id,
            UpdateMob {
                name: Some("Skeleton".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    match err {
        DomainError::AlreadyExists { id, .. } => assert_eq!(id, skeleton.id),
        other => panic!("unexpected error: {other}"),
    }

    // Rolled back, nothing changed
    let unchanged = service.get(slime.id).await.unwrap();
    assert_eq!(unchanged.name, "Slime");
}

#[tokio::test]
async fn test_mob_update_to_own_name() {
    let (service, _bus) = init_mob_service().await;

    let mob = service.create(spawn_input("Slime")).await.unwrap();

    let updated = service
        .update(
            mob.id,
            UpdateMob {
                name: Some("Slime".to_string()),
                hostile: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "Slime");
    assert!(updated.hostile);
}

#[tokio::test]
async fn test_events_published_after_commit() {
    let (service, bus) = init_mob_service().await;

    let mob = service.create(spawn_input("Creeper")).await.unwrap();
    service.delete(mob.id).await.unwrap();

    let events = bus.events();
    assert_eq!(events.len(), 2);
    match &events[0] {
        MobEvent::MonsterCreated(created) => assert_eq!(created, &mob),
        other => panic!("unexpected event: {other:?}"),
    }
    match &events[1] {
        MobEvent::MonsterDeleted { id } => assert_eq!(*id, mob.id),
        other => panic!("unexpected event: {other:?}"),
    }
}

#[tokio::test]
async fn test_failed_create_publishes_nothing() {
    let (service, bus) = init_mob_service().await;

    service.create(spawn_input("Creeper")).await.unwrap();
    bus.events.lock().unwrap().clear();

    service.create(spawn_input("Creeper")).await.unwrap_err();
    assert!(bus.events().is_empty());
}

#[tokio::test]
async fn test_publish_failure_does_not_fail_the_mutation() {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    let service = MobService::new(db, Arc::new(FailingBus));

    // The commit already happened; the lost event is logged, not surfaced
    let mob = service.create(spawn_input("Creeper")).await.unwrap();
    let retrieved = service.get(mob.id).await.unwrap();
    assert_eq!(retrieved, mob);
}
