//! Text form of a [`Scene`]:
//!
//! ```text
//! <width>x<height>
//! <texture-1>
//! ...
//! <tile-0> <tile-1> ... <tile-(w*h-1)>
//! ```
//!
//! Texture names are written verbatim, one per line. The format has no
//! escaping, so a name containing a newline cannot survive a round trip.

use thiserror::Error;

use super::model::{Scene, Size, TileIndex};

const SIZE_SEPARATOR: char = 'x';

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("size line '{0}' has no 'x' separator")]
    MissingSizeSeparator(String),

    #[error("line {line}: '{token}' is not a valid integer")]
    InvalidInteger { line: usize, token: String },

    #[error("expected at least 2 lines (size and tiles), found {found}")]
    TooFewLines { found: usize },

    #[error("tile list is empty")]
    EmptyTileList,
}

/// Knobs shared by [`decode_with`] and [`encode_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecOptions {
    /// Accept (and produce) an empty tile line. When false, an empty tile
    /// list is reported as [`ParseError::EmptyTileList`].
    pub allow_empty_tiles: bool,
}

impl Default for CodecOptions {
    fn default() -> Self {
        CodecOptions {
            allow_empty_tiles: true,
        }
    }
}

impl CodecOptions {
    pub fn strict() -> Self {
        CodecOptions {
            allow_empty_tiles: false,
        }
    }
}

/// Parse a scene from its text form.
pub fn decode(text: &str) -> Result<Scene, ParseError> {
    decode_with(text, &CodecOptions::default())
}

pub fn decode_with(text: &str, options: &CodecOptions) -> Result<Scene, ParseError> {
    let lines: Vec<&str> = text.lines().collect();

    if lines.len() < 2 {
        return Err(ParseError::TooFewLines { found: lines.len() });
    }

    let size = parse_size(lines[0])?;

    let last = lines.len() - 1;
    let textures = lines[1..last].iter().map(|s| s.to_string()).collect();
    let tiles = parse_tiles(lines[last], last + 1)?;

    if tiles.is_empty() && !options.allow_empty_tiles {
        return Err(ParseError::EmptyTileList);
    }

    Ok(Scene::new(size, textures, tiles))
}

/// Render a scene in its text form. An empty tile list becomes an empty
/// final line.
pub fn encode(scene: &Scene) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{}x{}\n",
        scene.size().width,
        scene.size().height
    ));

    for texture in scene.textures() {
        out.push_str(texture);
        out.push('\n');
    }

    let tiles: Vec<String> = scene.tiles().iter().map(|t| t.to_string()).collect();
    out.push_str(&tiles.join(" "));
    out.push('\n');

    out
}

pub fn encode_with(scene: &Scene, options: &CodecOptions) -> Result<String, ParseError> {
    if scene.tiles().is_empty() && !options.allow_empty_tiles {
        return Err(ParseError::EmptyTileList);
    }
    Ok(encode(scene))
}

////////////////////
/// LINE PARSERS ///
////////////////////

fn parse_size(raw: &str) -> Result<Size, ParseError> {
    let line = raw.trim();

    // Only the first 'x' splits; anything after it belongs to the height.
    let (w, h) = line
        .split_once(SIZE_SEPARATOR)
        .ok_or_else(|| ParseError::MissingSizeSeparator(line.to_string()))?;

    Ok(Size::new(parse_int(w, 1)?, parse_int(h, 1)?))
}

fn parse_tiles(raw: &str, line_no: usize) -> Result<Vec<TileIndex>, ParseError> {
    raw.split_whitespace()
        .map(|token| parse_int(token, line_no))
        .collect()
}

fn parse_int(token: &str, line: usize) -> Result<u32, ParseError> {
    token
        .trim()
        .parse::<u32>()
        .map_err(|_| ParseError::InvalidInteger {
            line,
            token: token.to_string(),
        })
}
