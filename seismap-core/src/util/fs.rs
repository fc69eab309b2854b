use std::path::Path;

use crate::map::SeismapError;

/// helper function to "mkdir -p path" - make all directories along a path
pub fn create_dirs<P>(path: P) -> Result<(), SeismapError>
where
    P: AsRef<Path>,
{
    let dirspath = path.as_ref();
    if dirspath.is_dir() {
        return Ok(());
    }
    if dirspath.exists() {
        return Err(SeismapError::InvalidUserInput(format!(
            "output directory '{}' exists but is not a directory",
            dirspath.display()
        )));
    }
    std::fs::create_dir_all(dirspath).map_err(|e| {
        let msg = format!(
            "error building output directory '{}': {e}",
            dirspath.to_str().unwrap_or_default()
        );
        SeismapError::InvalidUserInput(msg)
    })
}
