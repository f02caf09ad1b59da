//! User repository for database operations.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::entities::users;

/// Fields changed by a profile update. `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct ProfileChanges {
    /// New display name.
    pub name: Option<String>,
    /// New email address.
    pub email: Option<String>,
    /// New password hash (already hashed by the caller).
    pub password_hash: Option<String>,
}

/// User repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    db: Arc<DatabaseConnection>,
}

impl UserRepository {
    /// Creates a new user repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Finds a user by email.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<users::Model>, DbErr> {
        users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(self.db.as_ref())
            .await
    }

    /// Finds a user by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<users::Model>, DbErr> {
        users::Entity::find_by_id(id).one(self.db.as_ref()).await
    }

    /// Creates a new user.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<users::Model, DbErr> {
        let user = users::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name.to_string()),
            email: Set(email.to_string()),
            password_hash: Set(password_hash.to_string()),
            created_at: Set(chrono::Utc::now().into()),
        };

        user.insert(self.db.as_ref()).await
    }

    /// Checks if an email is already registered.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .count(self.db.as_ref())
            .await?;

        Ok(count > 0)
    }

    /// Checks if an email is registered to a user other than `user_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn email_taken_by_other(&self, email: &str, user_id: Uuid) -> Result<bool, DbErr> {
        let count = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .filter(users::Column::Id.ne(user_id))
            .count(self.db.as_ref())
            .await?;

        Ok(count > 0)
    }

    /// Applies profile changes to a user. Returns `None` when no user with
    /// the given ID exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        changes: ProfileChanges,
    ) -> Result<Option<users::Model>, DbErr> {
        let Some(user) = users::Entity::find_by_id(user_id).one(self.db.as_ref()).await? else {
            return Ok(None);
        };

        let mut active: users::ActiveModel = user.into();
        if let Some(name) = changes.name {
            active.name = Set(name);
        }
        if let Some(email) = changes.email {
            active.email = Set(email);
        }
        if let Some(password_hash) = changes.password_hash {
            active.password_hash = Set(password_hash);
        }

        active.update(self.db.as_ref()).await.map(Some)
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase};
    use std::sync::Arc;

    use super::*;

    fn sample_user() -> users::Model {
        users::Model {
            id: Uuid::new_v4(),
            name: "Jo Bloggs".to_string(),
            email: "jo@example.com".to_string(),
            password_hash: "$argon2id$stub".to_string(),
            created_at: chrono::Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn test_find_by_email_returns_user() {
        let user = sample_user();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![user.clone()]])
            .into_connection();

        let repo = UserRepository::new(Arc::new(db));
        let found = repo.find_by_email("jo@example.com").await.unwrap();

        assert_eq!(found, Some(user));
    }

    #[tokio::test]
    async fn test_find_by_email_missing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<users::Model>::new()])
            .into_connection();

        let repo = UserRepository::new(Arc::new(db));
        let found = repo.find_by_email("nobody@example.com").await.unwrap();

        assert!(found.is_none());
    }
}
