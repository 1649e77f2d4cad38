use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};

pub async fn init_db(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(database_url).await?;

    // Run migrations manually (simple SQL)
    run_migrations(&db).await?;

    Ok(db)
}

async fn run_migrations(db: &DatabaseConnection) -> Result<(), DbErr> {
    // Mobs table; ids are uuids stored as blobs, name carries the
    // uniqueness invariant
    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS mobs (
            id BLOB PRIMARY KEY,
            name TEXT NOT NULL UNIQUE,
            hostile BOOLEAN NOT NULL DEFAULT 0,
            health INTEGER NOT NULL DEFAULT 100,
            damage INTEGER NOT NULL DEFAULT 0
        )
        "#
        .to_owned(),
    ))
    .await?;

    db.execute(Statement::from_string(
        db.get_database_backend(),
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_mobs_name ON mobs (name)".to_owned(),
    ))
    .await?;

    Ok(())
}
