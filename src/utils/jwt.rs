//! 访问令牌校验
//!
//! 令牌由平台的认证服务签发，本服务只负责校验并取出用户 ID。

use crate::config::AppConfig;
use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

const ACCESS_TOKEN_TYPE: &str = "access";

// JWT Claims 结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,        // Subject (user ID)
    pub role: String,       // 用户角色
    pub token_type: String, // token类型: "access" 或 "refresh"
    pub exp: usize,         // Expiration time (时间戳)
    pub iat: usize,         // Issued at (签发时间)
}

impl Claims {
    /// 令牌主体中的用户 ID
    pub fn user_id(&self) -> Result<i64, jsonwebtoken::errors::Error> {
        self.sub
            .parse::<i64>()
            .map_err(|_| jsonwebtoken::errors::ErrorKind::InvalidSubject.into())
    }
}

pub struct JwtUtils;

impl JwtUtils {
    // 获取 JWT 密钥
    fn get_secret() -> String {
        AppConfig::get().jwt.secret.clone()
    }

    // 验证 Access Token
    pub fn verify_access_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        Self::verify_access_token_with_secret(token, &Self::get_secret())
    }

    // 使用指定密钥验证 token 签名、过期时间与类型
    pub fn verify_access_token_with_secret(
        token: &str,
        secret: &str,
    ) -> Result<Claims, jsonwebtoken::errors::Error> {
        let decoding_key = DecodingKey::from_secret(secret.as_ref());
        let validation = Validation::default();

        let claims = decode::<Claims>(token, &decoding_key, &validation)?.claims;
        if claims.token_type != ACCESS_TOKEN_TYPE {
            return Err(jsonwebtoken::errors::Error::from(
                jsonwebtoken::errors::ErrorKind::InvalidToken,
            ));
        }
        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header, encode};

    const SECRET: &str = "test-secret";

    fn token(sub: &str, token_type: &str, ttl: i64) -> String {
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: sub.to_string(),
            role: "user".to_string(),
            token_type: token_type.to_string(),
            exp: (now + ttl) as usize,
            iat: now as usize,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_ref()),
        )
        .unwrap()
    }

    #[test]
    fn test_valid_access_token() {
        let claims =
            JwtUtils::verify_access_token_with_secret(&token("42", "access", 600), SECRET).unwrap();
        assert_eq!(claims.user_id().unwrap(), 42);
    }

    #[test]
    fn test_refresh_token_is_rejected() {
        assert!(
            JwtUtils::verify_access_token_with_secret(&token("42", "refresh", 600), SECRET)
                .is_err()
        );
    }

    #[test]
    fn test_wrong_secret_and_expired_token_are_rejected() {
        assert!(
            JwtUtils::verify_access_token_with_secret(&token("42", "access", 600), "other")
                .is_err()
        );
        assert!(
            JwtUtils::verify_access_token_with_secret(&token("42", "access", -3600), SECRET)
                .is_err()
        );
    }

    #[test]
    fn test_non_numeric_subject() {
        let claims =
            JwtUtils::verify_access_token_with_secret(&token("alice", "access", 600), SECRET)
                .unwrap();
        assert!(claims.user_id().is_err());
    }
}
