mod common;

use auth::PasswordHasher;
use common::TestDb;
use identity_service::domain::user::models::EmailAddress;
use identity_service::domain::user::models::NewUser;
use identity_service::domain::user::models::Role;
use identity_service::domain::user::models::Username;
use identity_service::domain::user::ports::UserRepository;
use identity_service::outbound::repositories::PostgresUserRepository;
use identity_service::user::errors::ErrorKind;
use identity_service::user::errors::UserError;

fn new_user(username: &str, email: &str) -> NewUser {
    NewUser {
        username: Username::new(username.to_string()).expect("Invalid username"),
        email: EmailAddress::new(email.to_string()).expect("Invalid email"),
        name: "Jane Doe".to_string(),
        password_hash: PasswordHasher::new().hash("pass_word!").unwrap(),
        role: Role::User,
    }
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
async fn test_create_and_find() {
    let test_database = TestDb::new().await;
    let repository = PostgresUserRepository::new(test_database.pool.clone());

    let user_id = repository
        .create(new_user("jane", "jane@example.com"))
        .await
        .expect("Failed to create user");

    let by_id = repository
        .find_by_id(&user_id)
        .await
        .expect("Failed to find user")
        .expect("User should exist");
    assert_eq!(by_id.username.as_str(), "jane");
    assert_eq!(by_id.role, Role::User);

    let by_email = repository
        .find_by_email(&EmailAddress::new("jane@example.com".to_string()).unwrap())
        .await
        .expect("Failed to find user");
    assert_eq!(by_email.map(|u| u.id), Some(user_id));

    let missing = repository
        .find_by_username(&Username::new("ghost".to_string()).unwrap())
        .await
        .expect("Failed to query user");
    assert!(missing.is_none());
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
async fn test_unique_indexes_map_to_conflicts() {
    let test_database = TestDb::new().await;
    let repository = PostgresUserRepository::new(test_database.pool.clone());

    repository
        .create(new_user("jane", "jane@example.com"))
        .await
        .expect("Failed to create user");

    let same_email = repository
        .create(new_user("other", "jane@example.com"))
        .await
        .unwrap_err();
    assert!(matches!(same_email, UserError::EmailAlreadyExists(_)));
    assert_eq!(same_email.kind(), ErrorKind::Conflict);

    let same_username = repository
        .create(new_user("jane", "other@example.com"))
        .await
        .unwrap_err();
    assert!(matches!(same_username, UserError::UsernameAlreadyExists(_)));
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
async fn test_deleted_users_are_invisible_and_release_identifiers() {
    let test_database = TestDb::new().await;
    let repository = PostgresUserRepository::new(test_database.pool.clone());

    let user_id = repository
        .create(new_user("jane", "jane@example.com"))
        .await
        .expect("Failed to create user");

    sqlx::query("UPDATE users SET deleted_at = NOW() WHERE id = $1")
        .bind(user_id.0)
        .execute(&test_database.pool)
        .await
        .expect("Failed to soft delete user");

    assert!(repository.find_by_id(&user_id).await.unwrap().is_none());

    let replacement = repository
        .create(new_user("jane", "jane@example.com"))
        .await;
    assert!(replacement.is_ok());
}
