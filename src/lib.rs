//! A plain-text scene format for tile grids, plus generators for new scenes.
//!
//! ```
//! use tilescene::{Size, decode, encode, fill_scene};
//!
//! let scene = fill_scene(Size::new(2, 2), vec!["grass.png".to_string()], 0);
//! let text = encode(&scene);
//! assert_eq!(text, "2x2\ngrass.png\n0 0 0 0\n");
//! assert_eq!(decode(&text).unwrap(), scene);
//! ```

pub mod generator;
pub mod scene;

pub use generator::{
    FillMode, GeneratorError, MAX_RECIPE_CELLS, RecipeError, SceneRecipe, TileSource, fill_scene,
    generate_from_recipe_file, load_recipe_from_file, load_recipe_from_str, random_scene,
    random_scene_with, sample_scene_with,
};
pub use scene::{
    CodecOptions, ParseError, Scene, SceneFileError, Size, TileIndex, ValidationError, decode,
    decode_with, encode, encode_with, load_scene_from_file, modify_scene_file, save_scene_to_file,
    validate_scene,
};
