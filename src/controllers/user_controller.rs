use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::auth_dto::UserResponse;
use crate::models::auth::AuthenticatedUser;
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::{AppError, AppResult};

pub struct UserController {
    repository: UserRepository,
}

impl UserController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: UserRepository::new(pool),
        }
    }

    pub async fn list(&self) -> AppResult<Vec<UserResponse>> {
        let users = self.repository.find_all().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    pub async fn delete(&self, id: Uuid, requester: &AuthenticatedUser) -> AppResult<()> {
        if requester.user_id == id {
            return Err(AppError::BadRequest(
                "No podés eliminar tu propia cuenta".to_string(),
            ));
        }

        self.repository.delete(id).await?;
        Ok(())
    }
}
