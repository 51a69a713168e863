use std::path::Path;

/// Load a `.env` file into the process environment. A missing file is not an
/// error; a malformed one is. Returns whether a file was loaded.
pub fn load_env_file(path: Option<&Path>) -> Result<bool, dotenvy::Error> {
    let loaded = match path {
        Some(path) => dotenvy::from_path(path).map(|_| true),
        None => dotenvy::dotenv().map(|_| true),
    };
    loaded.or_else(|err| match err {
        dotenvy::Error::Io(_) => Ok(false),
        _ => Err(err),
    })
}
