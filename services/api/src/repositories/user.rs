//! User repository for database operations

use argon2::{Argon2, PasswordHasher, password_hash::SaltString};
use sqlx::{PgPool, Row};
use tracing::info;

use crate::error::{RepositoryError, RepositoryResult};
use crate::models::{NewUser, User};

/// User repository
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new user, hashing the password before insert
    pub async fn create(&self, new_user: &NewUser) -> RepositoryResult<User> {
        info!("Creating new user: {}", new_user.username);

        let salt = SaltString::generate(&mut rand::thread_rng());
        let argon2 = Argon2::default();
        let password_hash = argon2
            .hash_password(new_user.password.as_bytes(), &salt)
            .map_err(|e| RepositoryError::Unexpected(format!("Failed to hash password: {}", e)))?
            .to_string();

        let row = sqlx::query(
            r#"
            INSERT INTO users (username, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, username, email, password_hash, created_at, updated_at
            "#,
        )
        .bind(&new_user.username)
        .bind(&new_user.email)
        .bind(&password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepositoryError::from_sqlx(e, "Username or email already exists"))?;

        Ok(User {
            id: row.get("id"),
            username: row.get("username"),
            email: row.get("email"),
            password_hash: row.get("password_hash"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        })
    }

    /// Find a user by ID
    pub async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<User>> {
        let row = sqlx::query(
            r#"
            SELECT id, username, email, password_hash, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| User {
            id: row.get("id"),
            username: row.get("username"),
            email: row.get("email"),
            password_hash: row.get("password_hash"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{test_pool, unique_suffix};

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL instance"]
    async fn test_create_and_find_user() {
        let pool = test_pool().await;
        let repository = UserRepository::new(pool);
        let suffix = unique_suffix();

        let new_user = NewUser {
            username: format!("alice_{}", suffix),
            email: format!("alice_{}@example.com", suffix),
            password: "correct horse battery staple".to_string(),
        };

        let user = repository.create(&new_user).await.expect("create user");
        assert!(user.id > 0);
        assert_eq!(user.username, new_user.username);
        // Only a salted hash is stored, never the plain password
        assert_ne!(user.password_hash, new_user.password);
        assert!(user.password_hash.starts_with("$argon2"));

        let found = repository
            .find_by_id(user.id)
            .await
            .expect("find user")
            .expect("user exists");
        assert_eq!(found.username, new_user.username);
        assert_eq!(found.email, new_user.email);
    }

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL instance"]
    async fn test_duplicate_username_is_rejected() {
        let pool = test_pool().await;
        let repository = UserRepository::new(pool);
        let suffix = unique_suffix();

        let new_user = NewUser {
            username: format!("bob_{}", suffix),
            email: format!("bob_{}@example.com", suffix),
            password: "hunter2hunter2".to_string(),
        };

        repository.create(&new_user).await.expect("first create");

        let second = NewUser {
            email: format!("other_{}@example.com", suffix),
            ..new_user
        };
        let err = repository.create(&second).await.expect_err("duplicate");
        assert!(matches!(err, RepositoryError::Duplicate(_)));
    }

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL instance"]
    async fn test_find_missing_user_returns_none() {
        let pool = test_pool().await;
        let repository = UserRepository::new(pool);

        let found = repository.find_by_id(i32::MAX).await.expect("query");
        assert!(found.is_none());
    }
}
