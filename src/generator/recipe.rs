use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;

use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;

use super::{GeneratorError, fill_scene, random_scene_with, sample_scene_with};
use crate::scene::{Scene, Size, TileIndex};

#[derive(Debug, Error)]
pub enum RecipeError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("recipe is not valid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid recipe: {0}")]
    Invalid(String),

    #[error(transparent)]
    Generate(#[from] GeneratorError),
}

/// Largest grid a recipe may ask for, in cells.
pub const MAX_RECIPE_CELLS: usize = 1 << 24;

////////////////////
/// TOML STRUCTS ///
////////////////////

#[derive(Deserialize)]
struct RecipeFile {
    scene: SceneHeader,
    #[serde(default)]
    fill: FillConfig,
}

#[derive(Deserialize)]
struct SceneHeader {
    width: u32,
    height: u32,
    #[serde(default)]
    textures: Vec<String>,
}

#[derive(Deserialize, Default)]
struct FillConfig {
    #[serde(default)]
    mode: Option<String>, // "fill" | "random" | "sample", defaults to "random"

    #[serde(default)]
    value: Option<TileIndex>,

    #[serde(default)]
    candidates: Vec<TileIndex>,

    #[serde(default)]
    seed: Option<u64>,
}

//////////////////////
/// RECIPE RUNTIME ///
//////////////////////

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FillMode {
    Constant(TileIndex),
    Random,
    Sample(Vec<TileIndex>),
}

/// A validated description of a scene to generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneRecipe {
    pub size: Size,
    pub textures: Vec<String>,
    pub mode: FillMode,
    /// Fixed seed for reproducible output; `None` draws from the thread generator.
    pub seed: Option<u64>,
}

impl SceneRecipe {
    pub fn build(&self) -> Result<Scene, GeneratorError> {
        let textures = self.textures.clone();

        match &self.mode {
            FillMode::Constant(value) => Ok(fill_scene(self.size, textures, *value)),
            FillMode::Random => match self.seed {
                Some(seed) => {
                    random_scene_with(&mut StdRng::seed_from_u64(seed), self.size, textures, &[])
                }
                None => random_scene_with(&mut rand::thread_rng(), self.size, textures, &[]),
            },
            FillMode::Sample(candidates) => match self.seed {
                Some(seed) => sample_scene_with(
                    &mut StdRng::seed_from_u64(seed),
                    self.size,
                    textures,
                    candidates,
                ),
                None => {
                    sample_scene_with(&mut rand::thread_rng(), self.size, textures, candidates)
                }
            },
        }
    }
}

/////////////////////////////
/// TOML PARSER FUNCTIONS ///
/////////////////////////////

/// Load a recipe from a .toml file on disk.
pub fn load_recipe_from_file(path: &Path) -> Result<SceneRecipe, RecipeError> {
    let contents = fs::read_to_string(path)?;
    load_recipe_from_str(&contents)
}

/// Load a recipe from disk and generate its scene in one go.
pub fn generate_from_recipe_file(path: &Path) -> Result<Scene, RecipeError> {
    let recipe = load_recipe_from_file(path)?;
    let scene = recipe.build()?;

    log::debug!(
        "generated scene {}x{} from recipe {}",
        scene.size().width,
        scene.size().height,
        path.display()
    );

    Ok(scene)
}

pub fn load_recipe_from_str(contents: &str) -> Result<SceneRecipe, RecipeError> {
    let file: RecipeFile = toml::from_str(contents)?;
    let fill = file.fill;

    let size = Size::new(file.scene.width, file.scene.height);
    if size.area() > MAX_RECIPE_CELLS {
        return Err(RecipeError::Invalid(format!(
            "scene {}x{} exceeds the limit of {} cells",
            size.width, size.height, MAX_RECIPE_CELLS
        )));
    }

    let mode_name = fill
        .mode
        .as_deref()
        .map(|s| s.trim().to_lowercase())
        .unwrap_or_default();

    let mode = match mode_name.as_str() {
        "fill" => {
            let value = fill
                .value
                .ok_or_else(|| RecipeError::Invalid("fill mode needs a 'value'".to_string()))?;
            if !fill.candidates.is_empty() {
                log::warn!("recipe: 'candidates' is ignored in fill mode");
            }
            if fill.seed.is_some() {
                log::warn!("recipe: 'seed' is ignored in fill mode");
            }
            FillMode::Constant(value)
        }
        "sample" => {
            if fill.candidates.is_empty() {
                return Err(RecipeError::Invalid(
                    "sample mode needs at least one candidate".to_string(),
                ));
            }
            if fill.value.is_some() {
                log::warn!("recipe: 'value' is ignored in sample mode");
            }
            FillMode::Sample(fill.candidates)
        }
        "" | "random" => {
            if fill.value.is_some() {
                log::warn!("recipe: 'value' is ignored in random mode");
            }
            if !fill.candidates.is_empty() {
                log::warn!("recipe: random mode samples palette indices, 'candidates' is ignored");
            }
            FillMode::Random
        }
        other => {
            return Err(RecipeError::Invalid(format!(
                "unknown fill mode '{}': expected 'fill', 'random' or 'sample'",
                other
            )));
        }
    };

    Ok(SceneRecipe {
        size,
        textures: file.scene.textures,
        mode,
        seed: fill.seed,
    })
}
