use std::net::SocketAddr;
use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "CareNet";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// PBKDF2-SHA256 rounds for stored password hashes.
pub const PBKDF2_ITERATIONS: u32 = 600_000;

/// Bearer session lifetime.
pub const SESSION_TTL_SECS: u64 = 12 * 60 * 60;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5000";
pub const DATABASE_FILE_NAME: &str = "carenet.db";

/// The fifteen counties of Liberia. Used to populate filters, not to validate input.
pub const LIBERIAN_COUNTIES: &[&str] = &[
    "Bomi",
    "Bong",
    "Gbarpolu",
    "Grand Bassa",
    "Grand Cape Mount",
    "Grand Gedeh",
    "Grand Kru",
    "Lofa",
    "Margibi",
    "Maryland",
    "Montserrado",
    "Nimba",
    "River Cess",
    "River Gee",
    "Sinoe",
];

/// Get the application data directory: ~/CareNet/, or the working directory without a home.
pub fn app_data_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_default().join(APP_NAME)
}

/// Database file. `CARENET_DB` overrides the default location.
pub fn database_path() -> PathBuf {
    std::env::var_os("CARENET_DB")
        .map(PathBuf::from)
        .unwrap_or_else(|| app_data_dir().join(DATABASE_FILE_NAME))
}

/// Listen address from `CARENET_BIND`, falling back to the default on absence or parse failure.
pub fn bind_address() -> SocketAddr {
    let default = || {
        DEFAULT_BIND_ADDRESS
            .parse()
            .unwrap_or(SocketAddr::from(([0, 0, 0, 0], 5000)))
    };
    match std::env::var("CARENET_BIND") {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!(value = %raw, "Ignoring unparsable CARENET_BIND");
            default()
        }),
        Err(_) => default(),
    }
}

/// Tracing filter used when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "carenet=info,carenet_lib=info,tower_http=warn"
}
