use rocket::fs::NamedFile;
use rocket::http::Status;
use rocket::State;
use std::path::PathBuf;

/// Directory holding the built front-end bundle.
pub struct StaticDir(pub PathBuf);

/// Path prefixes owned by the relay; unknown paths under them stay JSON 404s.
const API_PREFIXES: [&str; 2] = ["api", "completions"];

/// Any other GET that no route or static file answered gets the application shell.
#[get("/<path..>", rank = 20)]
pub async fn app_shell(path: PathBuf, dir: &State<StaticDir>) -> Option<NamedFile> {
    if API_PREFIXES.iter().any(|prefix| path.starts_with(prefix)) {
        return None;
    }
    NamedFile::open(dir.0.join("index.html")).await.ok()
}

/// CORS preflight; headers are added by the `Cors` fairing.
#[options("/<_path..>")]
pub fn preflight(_path: PathBuf) -> Status {
    Status::NoContent
}
