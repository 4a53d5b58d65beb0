use thiserror::Error;

use super::model::{Scene, TileIndex};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("grid needs {expected} tiles but the scene has {actual}")]
    TileCountMismatch { expected: usize, actual: usize },

    #[error("tile {index} has value {value} but the palette has {palette_len} textures")]
    TileOutOfRange {
        index: usize,
        value: TileIndex,
        palette_len: usize,
    },

    #[error("texture {index} contains a line break and cannot be encoded")]
    TextureNotEncodable { index: usize },
}

/// Check the cross-field rules the codec does not enforce.
/// Returns every violation found; an empty list means the scene is consistent.
pub fn validate_scene(scene: &Scene) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();

    // Tile count must cover the grid exactly
    let expected = scene.size().area();
    let actual = scene.tiles().len();
    if expected != actual {
        errors.push(ValidationError::TileCountMismatch { expected, actual });
    }

    // Every tile must point into the palette
    let palette_len = scene.textures().len();
    for (index, &value) in scene.tiles().iter().enumerate() {
        if value as usize >= palette_len {
            errors.push(ValidationError::TileOutOfRange {
                index,
                value,
                palette_len,
            });
        }
    }

    // Texture names are written one per line, unescaped. A '\r' only gets
    // lost when it ends the name (it reads back as a CRLF line ending).
    for (index, texture) in scene.textures().iter().enumerate() {
        if texture.contains('\n') || texture.ends_with('\r') {
            errors.push(ValidationError::TextureNotEncodable { index });
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Size;

    #[test]
    fn consistent_scene_passes() {
        let scene = Scene::new(
            Size::new(2, 2),
            vec!["a".to_string(), "b".to_string()],
            vec![0, 1, 1, 0],
        );
        assert!(validate_scene(&scene).is_empty());
    }

    #[test]
    fn reports_every_violation() {
        let scene = Scene::new(
            Size::new(2, 2),
            vec!["a".to_string(), "b\nc".to_string()],
            vec![0, 2, 5],
        );
        let errors = validate_scene(&scene);
        assert_eq!(
            errors,
            vec![
                ValidationError::TileCountMismatch {
                    expected: 4,
                    actual: 3
                },
                ValidationError::TileOutOfRange {
                    index: 1,
                    value: 2,
                    palette_len: 2
                },
                ValidationError::TileOutOfRange {
                    index: 2,
                    value: 5,
                    palette_len: 2
                },
                ValidationError::TextureNotEncodable { index: 1 },
            ]
        );
    }

    #[test]
    fn only_trailing_carriage_return_is_flagged() {
        let scene = Scene::new(
            Size::new(1, 1),
            vec!["a\rb".to_string(), "c\r".to_string()],
            vec![0],
        );
        assert_eq!(
            validate_scene(&scene),
            vec![ValidationError::TextureNotEncodable { index: 1 }]
        );

        let text = crate::scene::encode(&scene);
        let decoded = crate::scene::decode(&text).unwrap();
        assert_eq!(decoded.textures()[0], "a\rb");
        assert_eq!(decoded.textures()[1], "c");
    }

    #[test]
    fn empty_grid_with_empty_palette_is_fine() {
        let scene = Scene::new(Size::new(0, 0), Vec::new(), Vec::new());
        assert!(validate_scene(&scene).is_empty());
    }
}
