use std::collections::HashMap;

/// Environment variables read at start-up and the settings keys they populate.
const ENV_KEYS: &[(&str, &str)] = &[
    ("AI_PROVIDER", "ai_provider"),
    ("GEMINI_API_KEY", "ai_gemini_api_key"),
    ("GEMINI_MODEL", "ai_gemini_model"),
    ("GEMINI_BASE_URL", "ai_gemini_base_url"),
    ("OPENAI_API_KEY", "ai_openai_api_key"),
    ("OPENAI_MODEL", "ai_openai_model"),
    ("OPENAI_BASE_URL", "ai_openai_base_url"),
    ("AI_TEMPERATURE", "ai_temperature"),
    ("AI_MAX_TOKENS", "ai_max_tokens"),
    ("PORT", "port"),
    ("STATIC_DIR", "static_dir"),
];

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_STATIC_DIR: &str = "client/build";

/// Flat key/value settings, keyed the same way the provider modules look them up.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    values: HashMap<String, String>,
}

impl Settings {
    /// Load `.env` (if present) and read the known variables from the process environment.
    pub fn from_env() -> Self {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                log::warn!("Could not read .env file: {}", e);
            }
        }
        Self::from_vars(std::env::vars())
    }

    /// Build settings from `(VARIABLE, value)` pairs. Unknown variables and empty values are ignored.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut values = HashMap::new();
        for (name, value) in vars {
            let Some((_, key)) = ENV_KEYS.iter().find(|(env, _)| *env == name.as_ref()) else {
                continue;
            };
            let value: String = value.into();
            if !value.trim().is_empty() {
                values.insert(key.to_string(), value.trim().to_string());
            }
        }
        Settings { values }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or(default).to_string()
    }

    pub fn get_f32(&self, key: &str) -> Option<f32> {
        self.get(key).and_then(|v| v.parse().ok())
    }

    pub fn get_u32(&self, key: &str) -> Option<u32> {
        self.get(key).and_then(|v| v.parse().ok())
    }

    pub fn port(&self) -> u16 {
        self.get("port")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PORT)
    }

    pub fn static_dir(&self) -> String {
        self.get_or("static_dir", DEFAULT_STATIC_DIR)
    }

    pub fn as_map(&self) -> &HashMap<String, String> {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_variables_only() {
        let s = Settings::from_vars([
            ("GEMINI_API_KEY", " secret "),
            ("HOME", "/root"),
            ("PORT", "8080"),
            ("OPENAI_MODEL", "   "),
        ]);
        assert_eq!(s.get("ai_gemini_api_key"), Some("secret"));
        assert_eq!(s.get("ai_openai_model"), None);
        assert_eq!(s.as_map().len(), 2);
        assert_eq!(s.port(), 8080);
    }

    #[test]
    fn defaults() {
        let s = Settings::default();
        assert_eq!(s.port(), DEFAULT_PORT);
        assert_eq!(s.static_dir(), DEFAULT_STATIC_DIR);
        assert_eq!(s.get_f32("ai_temperature"), None);
    }
}
