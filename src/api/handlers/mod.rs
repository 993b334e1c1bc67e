pub mod health;
pub mod profile;
pub mod consultation;
