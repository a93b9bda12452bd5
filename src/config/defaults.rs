//! Default values and fixed protocol constants.

/// Value of the `Content-Type` header on every request.
pub const CONTENT_TYPE: &str = "application/json";

/// Header carrying the application identifier.
pub const APP_ID_HEADER: &str = "app-id";

/// Header carrying the application secret.
pub const APP_SECRET_HEADER: &str = "app-secret";

/// Default output path for `confish init`.
pub const CONFIG_FILE: &str = "confish.toml";

/// Environment variable read for the application secret.
pub const APP_SECRET_ENV: &str = "CONFISH_APP_SECRET";
