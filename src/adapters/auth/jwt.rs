//! Shared-secret JWT adapter.
//!
//! Implements the `SessionValidator` port for HS256 bearer tokens issued by
//! the identity service. Validates:
//!
//! - **Signature**: HMAC-SHA256 with the configured secret
//! - **Expiry (exp)**: Must be in the future (with configurable leeway)
//! - **Issuer (iss)** and **Audience (aud)**: Only when configured
//!
//! The user identity is taken from `sub`, falling back to the legacy numeric
//! `user_id` claim older tokens carry.

use async_trait::async_trait;
use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::SessionValidator;

/// Configuration for the JWT adapter.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: SecretString,
    pub issuer: Option<String>,
    pub audience: Option<String>,
    /// Clock skew tolerated on `exp`, in seconds.
    pub leeway_secs: u64,
}

impl JwtConfig {
    pub fn new(secret: SecretString) -> Self {
        Self {
            secret,
            issuer: None,
            audience: None,
            leeway_secs: 0,
        }
    }

    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = Some(audience.into());
        self
    }

    pub fn with_leeway(mut self, leeway_secs: u64) -> Self {
        self.leeway_secs = leeway_secs;
        self
    }
}

/// Claims we read from a token. `exp`, `iss` and `aud` are checked by
/// `jsonwebtoken` itself.
#[derive(Debug, Deserialize)]
struct Claims {
    #[serde(default)]
    sub: Option<String>,

    #[serde(default)]
    user_id: Option<LegacyUserId>,

    #[serde(default)]
    email: Option<String>,

    #[serde(default)]
    name: Option<String>,

    #[serde(default)]
    preferred_username: Option<String>,
}

/// Legacy tokens encode the user id as a number; some as a string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LegacyUserId {
    Number(u64),
    Text(String),
}

impl LegacyUserId {
    fn into_string(self) -> String {
        match self {
            LegacyUserId::Number(n) => n.to_string(),
            LegacyUserId::Text(s) => s,
        }
    }
}

/// HS256 session validator.
pub struct JwtSessionValidator {
    decoding_key: DecodingKey,
    validation: Validation,
    config: JwtConfig,
}

impl JwtSessionValidator {
    pub fn new(config: JwtConfig) -> Self {
        let decoding_key = DecodingKey::from_secret(config.secret.expose_secret().as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = config.leeway_secs;
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp"]);

        if let Some(issuer) = &config.issuer {
            validation.set_issuer(&[issuer]);
        }
        match &config.audience {
            Some(audience) => validation.set_audience(&[audience]),
            None => validation.validate_aud = false,
        }

        Self {
            decoding_key,
            validation,
            config,
        }
    }

    fn decode_claims(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    tracing::debug!("Token expired");
                    AuthError::TokenExpired
                }
                ErrorKind::InvalidIssuer => {
                    tracing::warn!("Invalid issuer in token");
                    AuthError::InvalidToken
                }
                ErrorKind::InvalidAudience => {
                    tracing::warn!("Invalid audience in token");
                    AuthError::InvalidToken
                }
                _ => {
                    tracing::warn!("Token validation failed: {}", e);
                    AuthError::InvalidToken
                }
            })
    }
}

#[async_trait]
impl SessionValidator for JwtSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let claims = self.decode_claims(token)?;

        let subject = claims
            .sub
            .or_else(|| claims.user_id.map(LegacyUserId::into_string))
            .ok_or_else(|| {
                tracing::warn!("Token carries neither 'sub' nor 'user_id'");
                AuthError::InvalidToken
            })?;

        let user_id = UserId::new(subject).map_err(|_| {
            tracing::warn!("Invalid user ID in token");
            AuthError::InvalidToken
        })?;

        Ok(AuthenticatedUser::new(
            user_id,
            claims.email,
            claims.name.or(claims.preferred_username),
        ))
    }
}

impl std::fmt::Debug for JwtSessionValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtSessionValidator")
            .field("issuer", &self.config.issuer)
            .field("audience", &self.config.audience)
            .field("leeway_secs", &self.config.leeway_secs)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde_json::{json, Value};

    const SECRET: &str = "test-secret-that-is-at-least-32-bytes-long";

    fn validator(config: JwtConfig) -> JwtSessionValidator {
        JwtSessionValidator::new(config)
    }

    fn config() -> JwtConfig {
        JwtConfig::new(SecretString::new(SECRET.to_string()))
    }

    fn sign(claims: Value, secret: &str) -> String {
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn in_one_hour() -> i64 {
        chrono::Utc::now().timestamp() + 3600
    }

    #[tokio::test]
    async fn accepts_token_with_sub_claim() {
        let token = sign(
            json!({ "sub": "user-42", "email": "a@example.com", "name": "Ada", "exp": in_one_hour() }),
            SECRET,
        );

        let user = validator(config()).validate(&token).await.unwrap();

        assert_eq!(user.id.as_str(), "user-42");
        assert_eq!(user.email.as_deref(), Some("a@example.com"));
        assert_eq!(user.display_name.as_deref(), Some("Ada"));
    }

    #[tokio::test]
    async fn accepts_legacy_numeric_user_id_claim() {
        let token = sign(json!({ "user_id": 17, "exp": in_one_hour() }), SECRET);

        let user = validator(config()).validate(&token).await.unwrap();

        assert_eq!(user.id.as_str(), "17");
        assert!(user.email.is_none());
    }

    #[tokio::test]
    async fn sub_takes_precedence_over_user_id() {
        let token = sign(
            json!({ "sub": "abc", "user_id": 17, "exp": in_one_hour() }),
            SECRET,
        );

        let user = validator(config()).validate(&token).await.unwrap();

        assert_eq!(user.id.as_str(), "abc");
    }

    #[tokio::test]
    async fn rejects_token_without_identity() {
        let token = sign(json!({ "exp": in_one_hour() }), SECRET);

        let result = validator(config()).validate(&token).await;

        assert_eq!(result.unwrap_err(), AuthError::InvalidToken);
    }

    #[tokio::test]
    async fn rejects_wrong_signature() {
        let token = sign(
            json!({ "sub": "user-42", "exp": in_one_hour() }),
            "some-other-secret-of-sufficient-length",
        );

        let result = validator(config()).validate(&token).await;

        assert_eq!(result.unwrap_err(), AuthError::InvalidToken);
    }

    #[tokio::test]
    async fn rejects_expired_token() {
        let expired = chrono::Utc::now().timestamp() - 3600;
        let token = sign(json!({ "sub": "user-42", "exp": expired }), SECRET);

        let result = validator(config()).validate(&token).await;

        assert_eq!(result.unwrap_err(), AuthError::TokenExpired);
    }

    #[tokio::test]
    async fn leeway_tolerates_small_clock_skew() {
        let just_expired = chrono::Utc::now().timestamp() - 5;
        let token = sign(json!({ "sub": "user-42", "exp": just_expired }), SECRET);

        let result = validator(config().with_leeway(60)).validate(&token).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn rejects_token_without_exp() {
        let token = sign(json!({ "sub": "user-42" }), SECRET);

        let result = validator(config()).validate(&token).await;

        assert_eq!(result.unwrap_err(), AuthError::InvalidToken);
    }

    #[tokio::test]
    async fn rejects_garbage() {
        let result = validator(config()).validate("not-a-jwt").await;

        assert_eq!(result.unwrap_err(), AuthError::InvalidToken);
    }

    #[tokio::test]
    async fn enforces_configured_issuer() {
        let v = validator(config().with_issuer("https://id.example.com"));

        let good = sign(
            json!({ "sub": "u", "iss": "https://id.example.com", "exp": in_one_hour() }),
            SECRET,
        );
        let bad = sign(
            json!({ "sub": "u", "iss": "https://evil.example.com", "exp": in_one_hour() }),
            SECRET,
        );

        assert!(v.validate(&good).await.is_ok());
        assert_eq!(v.validate(&bad).await.unwrap_err(), AuthError::InvalidToken);
    }

    #[tokio::test]
    async fn enforces_configured_audience() {
        let v = validator(config().with_audience("prefs-api"));

        let good = sign(
            json!({ "sub": "u", "aud": ["prefs-api", "other"], "exp": in_one_hour() }),
            SECRET,
        );
        let bad = sign(
            json!({ "sub": "u", "aud": "other", "exp": in_one_hour() }),
            SECRET,
        );

        assert!(v.validate(&good).await.is_ok());
        assert_eq!(v.validate(&bad).await.unwrap_err(), AuthError::InvalidToken);
    }

    #[tokio::test]
    async fn ignores_audience_when_not_configured() {
        let token = sign(
            json!({ "sub": "u", "aud": "anything", "exp": in_one_hour() }),
            SECRET,
        );

        assert!(validator(config()).validate(&token).await.is_ok());
    }

    #[test]
    fn debug_output_hides_secret() {
        let output = format!("{:?}", validator(config()));
        assert!(!output.contains(SECRET));
    }

    #[test]
    fn jwt_validator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<JwtSessionValidator>();
    }
}
