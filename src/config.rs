use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// When true, `change_booking_status` rejects faculty callers that do
    /// not own the slot. Defaults to false: any faculty may change any
    /// booking once the slot exists.
    pub enforce_slot_ownership: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            port: env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().expect("PORT must be a number"),
            enforce_slot_ownership: env::var("ENFORCE_SLOT_OWNERSHIP")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        }
    }
}
