
#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

// Durable storage keys
pub const COOKIE_CONSENT_KEY: &str = "hubtrac-cookie-consent";
pub const COOKIE_PREFERENCES_KEY: &str = "hubtrac-cookie-preferences";
pub const LOCALE_KEY: &str = "hubtrac-locale";

pub const PHONE_NUMBER: &str = "+421 900 123 456";
pub const CONTACT_EMAIL: &str = "servis@hubtrac.sk";

pub const CONSENT_BANNER_DELAY_MS: u32 = 1_000;
pub const SUCCESS_RESET_MS: u32 = 5_000;
pub const TOAST_DURATION_MS: u32 = 5_000;
