pub mod firebase;
pub mod google;
pub mod id_token;
pub mod jwks;
