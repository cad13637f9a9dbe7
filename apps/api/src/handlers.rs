pub mod access;
pub mod errors;
pub mod health;
