pub const BASE_URL: &str = "https://generativelanguage.googleapis.com/";
pub const API_VERSION_PATH: &str = "v1beta/models/";
pub const GENERATE_CONTENT_METHOD: &str = "generateContent";

pub const API_KEY_HEADER: &str = "x-goog-api-key";

pub const TEXT_MODEL: &str = "gemini-2.5-flash";
pub const IMAGE_MODEL: &str = "gemini-3-pro-image-preview";

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const LEGACY_API_KEY_ENV: &str = "API_KEY";
pub const BASE_URL_ENV: &str = "GEMINI_BASE_URL";
