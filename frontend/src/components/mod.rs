pub mod admin_challenge;
pub mod crud;
