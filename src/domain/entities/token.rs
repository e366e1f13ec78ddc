use serde::{Serialize, Deserialize};

/// Claims of an access token issued by the external identity provider.
/// This service never mints tokens; it only verifies them.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    pub admin: bool,
    pub exp: usize,
    pub iat: usize,
}
