//! Integration tests for the user repository.

use bucketlist_db::models::user::CreateUser;
use bucketlist_db::repositories::UserRepo;
use sqlx::SqlitePool;

fn ada() -> CreateUser {
    CreateUser {
        first_name: Some("Ada".to_string()),
        last_name: Some("Lovelace".to_string()),
        email: Some("ada@example.com".to_string()),
        photo_url: Some(String::new()),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_then_find(pool: SqlitePool) {
    let created = UserRepo::create(&pool, &ada()).await.unwrap();
    assert_eq!(created.id, 1);

    let found = UserRepo::find_by_id(&pool, 1).await.unwrap().unwrap();
    assert_eq!(found.first_name.as_deref(), Some("Ada"));
    assert_eq!(found.last_name.as_deref(), Some("Lovelace"));
    assert_eq!(found.email.as_deref(), Some("ada@example.com"));
    assert_eq!(found.photo_url.as_deref(), Some(""));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_users_are_permitted(pool: SqlitePool) {
    UserRepo::create(&pool, &ada()).await.unwrap();
    UserRepo::create(&pool, &ada()).await.unwrap();

    let all = UserRepo::list(&pool).await.unwrap();
    assert_eq!(all.len(), 2);
    assert_ne!(all[0].id, all[1].id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_then_delete(pool: SqlitePool) {
    let created = UserRepo::create(&pool, &ada()).await.unwrap();

    let replacement = CreateUser {
        first_name: Some("Grace".to_string()),
        last_name: Some("Hopper".to_string()),
        email: None,
        photo_url: None,
    };
    let updated = UserRepo::update(&pool, created.id, &replacement)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.first_name.as_deref(), Some("Grace"));
    assert_eq!(updated.email, None);

    let deleted = UserRepo::delete(&pool, created.id).await.unwrap();
    assert_eq!(deleted, Some(updated));
    assert!(UserRepo::list(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_user_yields_none(pool: SqlitePool) {
    assert!(UserRepo::find_by_id(&pool, 42).await.unwrap().is_none());
    assert!(UserRepo::update(&pool, 42, &ada()).await.unwrap().is_none());
    assert!(UserRepo::delete(&pool, 42).await.unwrap().is_none());
}
