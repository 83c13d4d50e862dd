use std::path::{Path, PathBuf};

/// File inside a save directory that holds the editable fields.
pub const HEADER_FILE_NAME: &str = "header.bin";

/// Save folder of a default Steam install.
pub const DEFAULT_SAVE_DIR: &str =
    r"C:\Program Files (x86)\Steam\steamapps\common\SovietRepublic\media_soviet\save";

pub fn default_save_dir() -> Option<PathBuf> {
    let dir = PathBuf::from(DEFAULT_SAVE_DIR);
    dir.is_dir().then_some(dir)
}

/// Maps a save directory to its header file; any other path is returned as is.
pub fn header_path(path: &Path) -> PathBuf {
    if path.is_dir() {
        path.join(HEADER_FILE_NAME)
    } else {
        path.to_path_buf()
    }
}

/// Resolves user input to a header file path.
///
/// Input that does not exist is retried relative to the default save folder,
/// so a bare save name works on a stock install. Paths that cannot be found
/// either way come back unchanged and fail later with the path the user gave.
pub fn resolve_save(input: &Path) -> PathBuf {
    resolve_save_in(input, default_save_dir().as_deref())
}

pub fn resolve_save_in(input: &Path, save_dir: Option<&Path>) -> PathBuf {
    if input.exists() {
        return header_path(input);
    }
    match save_dir.map(|dir| dir.join(input)) {
        Some(candidate) if candidate.exists() => header_path(&candidate),
        _ => input.to_path_buf(),
    }
}
