//! Servicio JWT
//!
//! Generación y validación de tokens de acceso HS256.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::config::environment::EnvironmentConfig;
use crate::models::auth::JwtClaims;
use crate::models::user::User;
use crate::utils::errors::{AppError, AppResult};

/// Servicio JWT
pub struct JwtService {
    algorithm: Algorithm,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_token_duration: Duration,
}

impl JwtService {
    pub fn new(config: &EnvironmentConfig) -> Self {
        Self {
            algorithm: Algorithm::HS256,
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_ref()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_ref()),
            access_token_duration: Duration::hours(config.jwt_expiration_hours),
        }
    }

    /// Genera un token de acceso para un usuario
    pub fn generate_access_token(&self, user: &User) -> AppResult<String> {
        let now = Utc::now();
        let exp = now + self.access_token_duration;

        let claims = JwtClaims {
            sub: user.id.to_string(),
            username: user.username.clone(),
            role: user.role.clone(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(|e| AppError::Jwt(format!("Error generating access token: {}", e)))
    }

    /// Valida y decodifica un token
    pub fn validate_token(&self, token: &str) -> AppResult<JwtClaims> {
        let validation = Validation::new(self.algorithm);

        decode::<JwtClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| AppError::Jwt(format!("Invalid token: {}", e)))
    }

    /// Vida útil del token de acceso
    pub fn access_token_duration(&self) -> Duration {
        self.access_token_duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn test_user() -> User {
        User {
            id: Uuid::new_v4(),
            username: "jramos".to_string(),
            password_hash: "irrelevant".to_string(),
            full_name: "J. Ramos".to_string(),
            role: "employee".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_generate_and_validate_token() {
        let jwt_service = JwtService::new(&EnvironmentConfig::default());
        let user = test_user();

        let token = jwt_service.generate_access_token(&user).unwrap();
        assert!(!token.is_empty());

        let claims = jwt_service.validate_token(&token).unwrap();
        assert_eq!(claims.sub, user.id.to_string());
        assert_eq!(claims.username, "jramos");
        assert_eq!(claims.role, "employee");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_tampered_token_is_rejected() {
        let jwt_service = JwtService::new(&EnvironmentConfig::default());
        let token = jwt_service.generate_access_token(&test_user()).unwrap();

        let mut tampered = token.clone();
        tampered.push('x');
        assert!(jwt_service.validate_token(&tampered).is_err());
    }
}
