use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

/// replace a leading `~` with the given home directory
pub fn expand_tilde(path: &Path, home: Option<&Path>) -> PathBuf {
    let Some(home) = home else {
        return path.to_path_buf();
    };

    match path.strip_prefix("~") {
        Ok(rest) if rest.as_os_str().is_empty() => home.to_path_buf(),
        Ok(rest) => home.join(rest),
        Err(_) => path.to_path_buf(),
    }
}

/// color only an interactive stream, and never when `NO_COLOR` is set to something
pub fn use_color(is_terminal: bool, no_color: Option<&OsStr>) -> bool {
    let no_color = no_color.is_some_and(|value| !value.is_empty());
    is_terminal && !no_color
}
