//! Middleware de autenticación JWT
//!
//! Valida el token Bearer, y deja el usuario autenticado disponible como
//! extensión del request para los handlers.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::models::auth::{AuthenticatedUser, UserRole};
use crate::services::jwt_service::JwtService;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Middleware de autenticación JWT
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    // Extraer token del header Authorization
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|auth_str| auth_str.to_str().ok())
        .and_then(|auth_str| auth_str.strip_prefix("Bearer "))
        .map(|s| s.to_string())
        .ok_or_else(|| AppError::Unauthorized("Token de autorización requerido".to_string()))?;

    let jwt_service = JwtService::new(&state.config);
    let claims = jwt_service
        .validate_token(&token)
        .map_err(|_| AppError::Unauthorized("Token inválido".to_string()))?;

    let user_id = Uuid::parse_str(&claims.sub)
        .map_err(|_| AppError::Unauthorized("Token inválido".to_string()))?;

    let role = UserRole::from_str(&claims.role)
        .ok_or_else(|| AppError::Unauthorized("Rol inválido en el token".to_string()))?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id,
        username: claims.username,
        role,
    });

    Ok(next.run(request).await)
}

/// Middleware de autorización para administradores.
/// Corre después de auth_middleware; sin usuario autenticado rechaza.
pub async fn admin_middleware(request: Request, next: Next) -> Result<Response, AppError> {
    let user = request
        .extensions()
        .get::<AuthenticatedUser>()
        .cloned()
        .ok_or_else(|| AppError::Unauthorized("Usuario no autenticado".to_string()))?;

    if user.role != UserRole::Admin {
        return Err(AppError::Forbidden(
            "Se requiere rol de administrador".to_string(),
        ));
    }

    Ok(next.run(request).await)
}
