use jsonwebtoken::{decode, Validation, TokenData, Algorithm};

use crate::entities::token::Claims;
use crate::settings::{AppConfig, JwtKeys};
use crate::errors::AuthError;

const JWT_ALGORITHM: Algorithm = Algorithm::HS512;

/// Verification of access tokens minted by the external identity provider.
/// Issuance, refresh, and revocation all live there, not here.
#[derive(Clone)]
pub struct JwtService {
    keys: JwtKeys,
}

impl JwtService {
    pub fn new(config: &AppConfig) -> Self {
        JwtService {
            keys: JwtKeys::from(config),
        }
    }

    pub fn decode_jwt(&self, token: &str) -> Result<TokenData<Claims>, AuthError> {
        decode::<Claims>(token, &self.keys.decoding, &Validation::new(JWT_ALGORITHM))
            .map_err(AuthError::from)
    }
}
