use std::path::{Path, PathBuf};

const APP_FOLDER: &str = "gameselect";

#[cfg(target_family = "unix")]
pub fn get_config_folder() -> PathBuf {
    let config_home = std::env::var("XDG_CONFIG_HOME");
    let home = std::env::var("HOME");
    match (config_home, home) {
        (Ok(p), _) => Path::new(&p).join(APP_FOLDER),
        (Err(_), Ok(home)) => Path::new(&home).join(".config").join(APP_FOLDER),
        _ => Path::new("").to_path_buf(),
    }
}

#[cfg(windows)]
pub fn get_config_folder() -> PathBuf {
    let config_home = std::env::var("APPDATA");
    match config_home {
        Ok(p) => Path::new(&p).join(APP_FOLDER),
        Err(_) => Path::new("").to_path_buf(),
    }
}

pub fn get_config_file() -> PathBuf {
    get_config_folder().join("config.toml")
}

pub fn get_log_file_path() -> PathBuf {
    get_config_folder().join("gameselect.log")
}
