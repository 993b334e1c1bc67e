pub mod profile;
pub mod slot;
pub mod booking;
