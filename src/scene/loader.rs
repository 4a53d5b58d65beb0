use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

use super::codec::{ParseError, decode, encode};
use super::model::Scene;

#[derive(Debug, Error)]
pub enum SceneFileError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("malformed scene file: {0}")]
    Parse(#[from] ParseError),
}

/// Load a scene from a text file on disk.
pub fn load_scene_from_file(path: &Path) -> Result<Scene, SceneFileError> {
    let contents = fs::read_to_string(path)?;
    let scene = decode(&contents)?;

    log::debug!(
        "loaded scene {}x{} ({} textures) from {}",
        scene.size().width,
        scene.size().height,
        scene.textures().len(),
        path.display()
    );

    Ok(scene)
}

/// Write a scene to disk, replacing whatever was at `path`.
pub fn save_scene_to_file(path: &Path, scene: &Scene) -> io::Result<()> {
    fs::write(path, encode(scene))?;

    log::debug!(
        "saved scene {}x{} to {}",
        scene.size().width,
        scene.size().height,
        path.display()
    );

    Ok(())
}

/// Load, transform, save. Nothing is written if loading fails.
pub fn modify_scene_file<F>(path: &Path, transform: F) -> Result<(), SceneFileError>
where
    F: FnOnce(Scene) -> Scene,
{
    let scene = load_scene_from_file(path)?;
    let scene = transform(scene);
    save_scene_to_file(path, &scene)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_scene_from_file(&dir.path().join("nope.scene"));
        match result {
            Err(SceneFileError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::NotFound),
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn load_malformed_file_is_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "34\nT1\n0").unwrap();

        let result = load_scene_from_file(file.path());
        assert!(matches!(
            result,
            Err(SceneFileError::Parse(ParseError::MissingSizeSeparator(_)))
        ));
    }

    #[test]
    fn failed_modify_leaves_file_alone() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not a scene").unwrap();

        let result = modify_scene_file(file.path(), |s| s);
        assert!(result.is_err());
        assert_eq!(fs::read_to_string(file.path()).unwrap(), "not a scene");
    }
}
