use tracing::level_filters::LevelFilter;

lazy_static::lazy_static! {
    pub static ref PROJECT_NAME: String = String::from("Repository").to_uppercase();
    pub static ref LOG_ENV: String = format!("{}_LOG_LEVEL", PROJECT_NAME.clone());
}

/// Default log level, read from `<PROJECT_NAME>_LOG_LEVEL` (a `.env` file is honored)
pub fn default_log_level() -> LevelFilter {
    dotenvy::dotenv().ok();
    std::env::var(LOG_ENV.as_str())
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(LevelFilter::INFO)
}
