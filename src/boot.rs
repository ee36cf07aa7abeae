use log::{error, info, warn};
use std::path::Path;
use std::process;
use url::Url;

use crate::ai::ProviderClient;
use crate::config::Settings;

/// Settings that must parse as URLs when present.
const URL_SETTINGS: &[&str] = &["ai_gemini_base_url", "ai_openai_base_url"];

/// Numeric settings that fall back to a default when unparseable.
const NUMERIC_SETTINGS: &[&str] = &["ai_temperature", "ai_max_tokens", "port"];

/// Run all boot checks. Call this before Rocket launches.
/// Exits the process when the provider cannot be configured, so no listener is ever bound.
pub fn run(settings: &Settings) -> ProviderClient {
    info!("Boot check starting...");

    match check(settings) {
        Ok(client) => {
            info!(
                "Boot check passed. Provider: {} ({})",
                client.provider().name(),
                client.model()
            );
            client
        }
        Err(errors) => {
            for e in &errors {
                error!("  {}", e);
            }
            error!("Boot check FAILED: {} error(s). Aborting.", errors.len());
            process::exit(1);
        }
    }
}

/// Validate settings and build the provider client. Warnings are logged; errors are returned.
pub fn check(settings: &Settings) -> Result<ProviderClient, Vec<String>> {
    let mut errors = Vec::new();
    let mut warnings = 0u32;

    // ── 1. Provider + credential ───────────────────────
    let client = match ProviderClient::from_settings(settings.clone()) {
        Ok(c) => Some(c),
        Err(e) => {
            errors.push(e.0);
            None
        }
    };

    // ── 2. Base URLs ───────────────────────────────────
    for key in URL_SETTINGS {
        if let Some(value) = settings.get(key) {
            if let Err(e) = Url::parse(value) {
                errors.push(format!("{} is not a valid URL ({}): {}", key, value, e));
            }
        }
    }

    // ── 3. Numeric settings ────────────────────────────
    for key in NUMERIC_SETTINGS {
        if let Some(value) = settings.get(key) {
            let valid = match *key {
                "port" => value.parse::<u16>().is_ok(),
                _ => value.parse::<f64>().is_ok(),
            };
            if !valid {
                warn!("  {} = '{}' is not a number; using the default", key, value);
                warnings += 1;
            }
        }
    }

    // ── 4. Front-end bundle ────────────────────────────
    let index = Path::new(&settings.static_dir()).join("index.html");
    if !index.exists() {
        warn!(
            "  {} not found (the relay works, but no front-end will be served)",
            index.display()
        );
        warnings += 1;
    }

    if warnings > 0 {
        warn!("Boot check found {} warning(s).", warnings);
    }

    match client {
        Some(c) if errors.is_empty() => Ok(c),
        _ => Err(errors),
    }
}
