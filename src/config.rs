use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub contact_quota_per_hour: u32,
    pub booking_quota_per_hour: u32,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            port: env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().expect("PORT must be a number"),
            contact_quota_per_hour: env::var("CONTACT_QUOTA_PER_HOUR")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .expect("CONTACT_QUOTA_PER_HOUR must be a number"),
            booking_quota_per_hour: env::var("BOOKING_QUOTA_PER_HOUR")
                .unwrap_or_else(|_| "3".to_string())
                .parse()
                .expect("BOOKING_QUOTA_PER_HOUR must be a number"),
        }
    }
}
