mod codec;
mod loader;
mod model;
mod validator;

pub use codec::{CodecOptions, ParseError, decode, decode_with, encode, encode_with};
pub use loader::{SceneFileError, load_scene_from_file, modify_scene_file, save_scene_to_file};
pub use model::{Scene, Size, TileIndex};
pub use validator::{ValidationError, validate_scene};
