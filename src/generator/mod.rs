//! Building fresh scenes: constant fill or random tiles.

mod recipe;

use rand::Rng;
use thiserror::Error;

use crate::scene::{Scene, Size, TileIndex};

pub use recipe::{
    FillMode, MAX_RECIPE_CELLS, RecipeError, SceneRecipe, generate_from_recipe_file,
    load_recipe_from_file, load_recipe_from_str,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    #[error("cannot pick random tiles from an empty texture palette")]
    EmptyTexturePalette,

    #[error("cannot sample tiles from an empty candidate list")]
    EmptyCandidates,

    #[error("texture palette has {0} entries, more than a tile index can address")]
    PaletteTooLarge(usize),
}

/// Anything that can hand out uniformly distributed tile values.
pub trait TileSource {
    /// A value in `lo..=hi`.
    fn uniform_in_range(&mut self, lo: TileIndex, hi: TileIndex) -> TileIndex;
}

impl<R: Rng + ?Sized> TileSource for R {
    fn uniform_in_range(&mut self, lo: TileIndex, hi: TileIndex) -> TileIndex {
        self.gen_range(lo..=hi)
    }
}

/// Every cell set to `value`.
pub fn fill_scene(size: Size, textures: Vec<String>, value: TileIndex) -> Scene {
    log::trace!("filled scene {}x{} with {}", size.width, size.height, value);

    let tiles = vec![value; size.area()];
    Scene::new(size, textures, tiles)
}

/// Every cell set to a uniformly random palette index, using the
/// calling thread's generator.
///
/// `candidates` is accepted for signature compatibility; only the length of
/// `textures` decides the range. Use [`sample_scene_with`] to draw from
/// the candidate values instead.
pub fn random_scene(
    size: Size,
    textures: Vec<String>,
    candidates: &[TileIndex],
) -> Result<Scene, GeneratorError> {
    random_scene_with(&mut rand::thread_rng(), size, textures, candidates)
}

pub fn random_scene_with<S: TileSource + ?Sized>(
    source: &mut S,
    size: Size,
    textures: Vec<String>,
    _candidates: &[TileIndex],
) -> Result<Scene, GeneratorError> {
    if textures.is_empty() {
        return Err(GeneratorError::EmptyTexturePalette);
    }
    let hi = TileIndex::try_from(textures.len() - 1)
        .map_err(|_| GeneratorError::PaletteTooLarge(textures.len()))?;

    log::trace!(
        "random scene {}x{} over palette 0..={}",
        size.width,
        size.height,
        hi
    );

    let tiles = (0..size.area())
        .map(|_| source.uniform_in_range(0, hi))
        .collect();

    Ok(Scene::new(size, textures, tiles))
}

/// Every cell set to a value picked uniformly from `candidates`.
/// Values are not checked against the palette.
pub fn sample_scene_with<S: TileSource + ?Sized>(
    source: &mut S,
    size: Size,
    textures: Vec<String>,
    candidates: &[TileIndex],
) -> Result<Scene, GeneratorError> {
    if candidates.is_empty() {
        return Err(GeneratorError::EmptyCandidates);
    }
    let last = TileIndex::try_from(candidates.len() - 1)
        .map_err(|_| GeneratorError::PaletteTooLarge(candidates.len()))?;

    log::trace!(
        "sampled scene {}x{} from {} candidates",
        size.width,
        size.height,
        candidates.len()
    );

    let tiles = (0..size.area())
        .map(|_| candidates[source.uniform_in_range(0, last) as usize])
        .collect();

    Ok(Scene::new(size, textures, tiles))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    /// Always answers the top of the requested range.
    struct Highest;

    impl TileSource for Highest {
        fn uniform_in_range(&mut self, _lo: TileIndex, hi: TileIndex) -> TileIndex {
            hi
        }
    }

    #[test]
    fn fill_sets_every_cell() {
        let scene = fill_scene(Size::new(2, 2), names(&["a", "b"]), 1);
        assert_eq!(scene.tiles(), &[1, 1, 1, 1]);
        assert_eq!(scene.textures(), names(&["a", "b"]).as_slice());
    }

    #[test]
    fn fill_zero_size_is_empty() {
        let scene = fill_scene(Size::new(0, 0), Vec::new(), 0);
        assert!(scene.tiles().is_empty());
    }

    #[test]
    fn random_stays_in_palette() {
        let scene = random_scene(Size::new(10, 10), names(&["a", "b", "c"]), &[42]).unwrap();
        assert_eq!(scene.tiles().len(), 100);
        assert!(scene.tiles().iter().all(|t| *t <= 2));
    }

    #[test]
    fn random_ignores_candidate_values() {
        let scene =
            random_scene_with(&mut Highest, Size::new(2, 1), names(&["a", "b"]), &[9, 9]).unwrap();
        assert_eq!(scene.tiles(), &[1, 1]);
    }

    #[test]
    fn random_empty_palette_fails() {
        assert_eq!(
            random_scene(Size::new(1, 1), Vec::new(), &[]),
            Err(GeneratorError::EmptyTexturePalette)
        );
    }

    #[test]
    fn seeded_generation_repeats() {
        let textures = names(&["a", "b", "c", "d"]);
        let first = random_scene_with(
            &mut StdRng::seed_from_u64(7),
            Size::new(8, 8),
            textures.clone(),
            &[],
        )
        .unwrap();
        let second =
            random_scene_with(&mut StdRng::seed_from_u64(7), Size::new(8, 8), textures, &[])
                .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn sample_draws_from_candidates() {
        let mut rng = StdRng::seed_from_u64(3);
        let scene = sample_scene_with(&mut rng, Size::new(5, 5), names(&["a"]), &[4, 9]).unwrap();
        assert_eq!(scene.tiles().len(), 25);
        assert!(scene.tiles().iter().all(|t| *t == 4 || *t == 9));

        let scene =
            sample_scene_with(&mut Highest, Size::new(1, 2), Vec::new(), &[3, 6]).unwrap();
        assert_eq!(scene.tiles(), &[6, 6]);
    }

    #[test]
    fn sample_without_candidates_fails() {
        assert_eq!(
            sample_scene_with(&mut Highest, Size::new(1, 1), names(&["a"]), &[]),
            Err(GeneratorError::EmptyCandidates)
        );
    }
}
