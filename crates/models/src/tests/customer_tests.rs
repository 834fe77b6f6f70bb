use anyhow::Result;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{customer, db};

async fn setup() -> Option<DatabaseConnection> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    let db = match db::connect().await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("skip: cannot connect to db: {}", e);
            return None;
        }
    };
    if let Err(e) = migration::Migrator::up(&db, None).await {
        eprintln!("skip: migrate up failed: {}", e);
        return None;
    }
    Some(db)
}

#[tokio::test]
async fn customer_insert_find_update_delete() -> Result<()> {
    let Some(db) = setup().await else { return Ok(()) };

    let id = Uuid::new_v4().to_string();
    let created = customer::upsert(&db, &id, "name1", "address1").await?;
    assert_eq!(created.id, id);

    let found = customer::find_by_id(&db, &id).await?.expect("inserted row");
    assert_eq!(found.name, "name1");
    assert_eq!(found.address, "address1");

    let updated = customer::upsert(&db, &id, "nameEdited", "addressEdited").await?;
    assert_eq!(updated.id, id);
    assert_eq!(updated.name, "nameEdited");
    let reread = customer::find_by_id(&db, &id).await?.expect("upserted row");
    assert_eq!(reread.address, "addressEdited");

    let all = customer::find_all(&db).await?;
    assert!(all.iter().any(|c| c.id == id));

    assert!(customer::delete(&db, &id).await?);
    assert!(customer::find_by_id(&db, &id).await?.is_none());
    assert!(!customer::delete(&db, &id).await?);
    Ok(())
}

#[tokio::test]
async fn customer_find_unknown_id_is_none() -> Result<()> {
    let Some(db) = setup().await else { return Ok(()) };
    assert!(customer::find_by_id(&db, "nonExistingId").await?.is_none());
    Ok(())
}
