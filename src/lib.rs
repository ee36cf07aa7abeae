#[macro_use]
extern crate rocket;

pub mod ai;
pub mod boot;
pub mod client;
pub mod config;
pub mod cors;
pub mod fields;
pub mod keywords;
pub mod parse;
pub mod routes;
pub mod session;


use std::path::{Path, PathBuf};
use std::sync::Arc;

use rocket::figment::Figment;
use rocket::fs::FileServer;
use rocket::{Build, Rocket};

use ai::Completer;
use config::Settings;
use routes::api::ProviderInfo;
use routes::shell::StaticDir;

/// Rocket configuration (Rocket.toml, `ROCKET_*`) with the listen port taken from `PORT`, default 3001.
pub fn figment(settings: &Settings) -> Figment {
    rocket::Config::figment().merge(("port", settings.port()))
}

/// Assemble the relay: completion + structured API routes, SPA shell, CORS and JSON catchers.
pub fn build(settings: &Settings, completer: Arc<dyn Completer>, info: ProviderInfo) -> Rocket<Build> {
    let static_dir = PathBuf::from(settings.static_dir());

    let mut rocket = rocket::custom(figment(settings))
        .manage(completer)
        .manage(info)
        .manage(StaticDir(static_dir.clone()))
        .attach(cors::Cors)
        .mount("/", routes::routes())
        .register("/completions", catchers![routes::api_error])
        .register("/api", catchers![routes::api_error]);

    if Path::new(&static_dir).is_dir() {
        rocket = rocket.mount("/", FileServer::from(&static_dir));
    }

    rocket
}
