/// User management: registration, lookup, listing, email update, deletion.
use std::sync::Arc;

use crate::db::UserRepository;
use crate::error::{is_unique_violation, AppError, Result};
use crate::models::user::{UserCreateRequest, UserResponse, UserUpdateRequest};
use crate::security::password;

pub struct UserService {
    users: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn create_user(&self, request: UserCreateRequest) -> Result<UserResponse> {
        request.validate()?;

        let email = request.email.trim().to_lowercase();

        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "user with email '{}' already exists",
                email
            )));
        }

        let password_hash = password::hash_password(&request.password)?;

        // The unique index backstops the check above under concurrent signups.
        match self.users.create(&email, &password_hash).await {
            Ok(user) => Ok(UserResponse::from(&user)),
            Err(AppError::Database(ref db)) if is_unique_violation(db) => Err(
                AppError::Conflict(format!("user with email '{}' already exists", email)),
            ),
            Err(err) => Err(err),
        }
    }

    pub async fn get_user(&self, id: i64) -> Result<UserResponse> {
        let user = self
            .users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user with ID {} not found", id)))?;

        Ok(UserResponse::from(&user))
    }

    pub async fn list_users(&self, limit: i64, offset: i64) -> Result<Vec<UserResponse>> {
        let users = self.users.list(limit, offset).await?;
        Ok(users.iter().map(UserResponse::from).collect())
    }

    /// Changing the address requires the caller to present valid credentials
    /// for the account being updated.
    pub async fn update_user_email(&self, id: i64, request: UserUpdateRequest) -> Result<()> {
        request.validate()?;

        let user = self
            .users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user with ID {} not found", id)))?;

        if !password::verify_password(&request.password, &user.password_hash)? {
            return Err(AppError::InvalidCredentials);
        }

        let email = request.email.trim().to_lowercase();
        if email == user.email {
            return Ok(());
        }

        if let Some(existing) = self.users.find_by_email(&email).await? {
            if existing.id != user.id {
                return Err(AppError::Conflict(format!(
                    "user with email '{}' already exists",
                    email
                )));
            }
        }

        let affected = self.users.update_email(user.id, &email).await?;
        if affected == 0 {
            return Err(AppError::NotFound(format!("user with ID {} not found", id)));
        }

        Ok(())
    }

    pub async fn delete_user(&self, id: i64) -> Result<()> {
        if self.users.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!("user with ID {} not found", id)));
        }

        let affected = self.users.delete(id).await?;
        if affected == 0 {
            return Err(AppError::NotFound(format!("user with ID {} not found", id)));
        }

        Ok(())
    }
}
