//! Servicio de autenticación
//!
//! Registro y login de usuarios con hash bcrypt y emisión de JWT.

use bcrypt::{hash, verify, DEFAULT_COST};
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::config::environment::EnvironmentConfig;
use crate::dto::auth_dto::{LoginRequest, LoginResponse, RegisterRequest, UserResponse};
use crate::dto::ApiResponse;
use crate::models::auth::UserRole;
use crate::repositories::user_repository::UserRepository;
use crate::services::jwt_service::JwtService;
use crate::utils::errors::{conflict_error, not_found_error, AppError, AppResult};

/// Servicio de autenticación
pub struct AuthService {
    repository: UserRepository,
    jwt_service: JwtService,
}

impl AuthService {
    pub fn new(pool: PgPool, config: &EnvironmentConfig) -> Self {
        Self {
            repository: UserRepository::new(pool),
            jwt_service: JwtService::new(config),
        }
    }

    /// Registra un nuevo usuario
    pub async fn register(&self, request: RegisterRequest) -> AppResult<ApiResponse<UserResponse>> {
        let role = match request.role.as_deref() {
            Some(raw) => UserRole::from_str(raw)
                .ok_or_else(|| AppError::BadRequest(format!("Rol desconocido: '{}'", raw)))?,
            None => UserRole::Employee,
        };

        if self.repository.username_exists(&request.username).await? {
            return Err(conflict_error("User", "username", &request.username));
        }

        let password_hash = hash(&request.password, DEFAULT_COST)
            .map_err(|e| AppError::Hash(format!("Error hashing password: {}", e)))?;

        let user = self
            .repository
            .create(&request.username, &password_hash, &request.full_name, role.as_str())
            .await?;

        tracing::info!("👤 Usuario registrado: {} ({})", user.username, user.role);

        Ok(ApiResponse::success_with_message(
            UserResponse::from(user),
            "Usuario registrado exitosamente".to_string(),
        ))
    }

    /// Autentica un usuario y emite un token de acceso
    pub async fn login(&self, request: LoginRequest) -> AppResult<LoginResponse> {
        let user = match self.repository.find_by_username(&request.username).await? {
            Some(user) => user,
            None => return Ok(LoginResponse::failed("Credenciales inválidas")),
        };

        let password_ok = verify(&request.password, &user.password_hash)
            .map_err(|e| AppError::Hash(format!("Error verifying password: {}", e)))?;

        if !password_ok {
            return Ok(LoginResponse::failed("Credenciales inválidas"));
        }

        let token = self.jwt_service.generate_access_token(&user)?;
        let expires_at = Utc::now() + self.jwt_service.access_token_duration();

        tracing::info!("✅ Login exitoso: {}", user.username);

        Ok(LoginResponse {
            success: true,
            token: Some(token),
            user: Some(UserResponse::from(user)),
            message: None,
            expires_at: Some(expires_at),
        })
    }

    /// Obtiene el perfil del usuario autenticado
    pub async fn me(&self, user_id: Uuid) -> AppResult<UserResponse> {
        let user = self
            .repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| not_found_error("User", &user_id.to_string()))?;

        Ok(UserResponse::from(user))
    }
}
