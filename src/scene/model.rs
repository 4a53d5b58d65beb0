/// A tile value: the position of a texture in the scene's palette.
pub type TileIndex = u32;

/////////////////////
/// SCENE STRUCTS ///
/////////////////////

/// Grid dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Self {
        Size { width, height }
    }

    /// Number of cells covered by the grid.
    pub fn area(&self) -> usize {
        (self.width as usize).saturating_mul(self.height as usize)
    }
}

/// A grid size, a texture palette and one tile index per cell (row-major).
///
/// Nothing here checks that `tiles().len() == size().area()` or that tile
/// values fit the palette; run [`validate_scene`](super::validate_scene) for that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scene {
    size: Size,
    textures: Vec<String>,
    tiles: Vec<TileIndex>,
}

impl Scene {
    pub fn new(size: Size, textures: Vec<String>, tiles: Vec<TileIndex>) -> Self {
        Scene {
            size,
            textures,
            tiles,
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn textures(&self) -> &[String] {
        &self.textures
    }

    pub fn tiles(&self) -> &[TileIndex] {
        &self.tiles
    }

    pub fn into_parts(self) -> (Size, Vec<String>, Vec<TileIndex>) {
        (self.size, self.textures, self.tiles)
    }

    /// Flat index of the cell at `(x, y)`, if it lies inside the grid.
    pub fn index_of(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        Some(y as usize * self.size.width as usize + x as usize)
    }

    /// Grid position of a flat tile index.
    pub fn position_of(&self, index: usize) -> Option<(u32, u32)> {
        if self.size.width == 0 || index >= self.size.area() {
            return None;
        }
        let width = self.size.width as usize;
        Some(((index % width) as u32, (index / width) as u32))
    }

    pub fn tile_at(&self, x: u32, y: u32) -> Option<TileIndex> {
        self.index_of(x, y)
            .and_then(|i| self.tiles.get(i))
            .copied()
    }

    /// Texture name referenced by the cell at `(x, y)`.
    pub fn texture_at(&self, x: u32, y: u32) -> Option<&str> {
        let tile = self.tile_at(x, y)?;
        self.textures.get(tile as usize).map(String::as_str)
    }

    /// Palette position of the first texture named `name`.
    pub fn texture_index(&self, name: &str) -> Option<usize> {
        self.textures.iter().position(|t| t == name)
    }

    // Transformations consume the scene and hand back a new one.

    /// Returns a scene with the cell at `(x, y)` set to `value`.
    /// Out-of-grid positions (or a short tile list) leave the scene untouched.
    pub fn with_tile(mut self, x: u32, y: u32, value: TileIndex) -> Self {
        if let Some(slot) = self.index_of(x, y).and_then(|i| self.tiles.get_mut(i)) {
            *slot = value;
        }
        self
    }

    /// Returns a scene grown toward +x/+y so that `(x, y)` lies inside the
    /// grid. Existing tiles keep their positions; new cells (and cells the
    /// old tile list never covered) get `fill`.
    pub fn extend_to_contain(self, x: u32, y: u32, fill: TileIndex) -> Self {
        if x < self.size.width && y < self.size.height {
            return self;
        }

        let old = self.size;
        let size = Size::new(
            old.width.max(x.saturating_add(1)),
            old.height.max(y.saturating_add(1)),
        );

        let mut tiles = vec![fill; size.area()];
        let old_width = old.width as usize;
        let new_width = size.width as usize;
        for (i, tile) in self.tiles.iter().take(old.area()).enumerate() {
            let (col, row) = (i % old_width, i / old_width);
            tiles[row * new_width + col] = *tile;
        }

        Scene {
            size,
            textures: self.textures,
            tiles,
        }
    }

    /// Like [`with_tile`](Self::with_tile), but grows the grid first when
    /// `(x, y)` lies outside it.
    pub fn with_tile_extended(self, x: u32, y: u32, value: TileIndex, fill: TileIndex) -> Self {
        self.extend_to_contain(x, y, fill).with_tile(x, y, value)
    }

    pub fn map_tiles(mut self, mut f: impl FnMut(TileIndex) -> TileIndex) -> Self {
        for tile in &mut self.tiles {
            *tile = f(*tile);
        }
        self
    }

    /// Returns the scene together with the palette index of `name`,
    /// appending the texture when it is not already present.
    pub fn with_texture(mut self, name: impl Into<String>) -> (Self, usize) {
        let name = name.into();
        if let Some(existing) = self.texture_index(&name) {
            return (self, existing);
        }
        self.textures.push(name);
        let index = self.textures.len() - 1;
        (self, index)
    }
}
