use std::fs;
use std::io::prelude::*;
use std::path::Path;
use actix_web::cookie::Key;

/// Loads the session signing key, generating and saving one on first run
pub fn get_session_key(file_path: impl AsRef<Path>) -> std::io::Result<Key> {
    let file_path = file_path.as_ref();
    if let Ok(contents) = fs::read(file_path) {
        if contents.len() >= 64 {
            return Ok(Key::from(contents.as_slice()));
        }
        log::warn!("session key at {} is too short, replacing it", file_path.display());
    }

    let key = Key::generate();
    let mut file = fs::File::create(file_path)?;
    file.write_all(key.master())?;
    Ok(key)
}
