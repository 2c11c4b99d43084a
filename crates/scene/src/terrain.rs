/// Exaggeration range exposed by the terrain slider.
pub const MIN_EXAGGERATION: f64 = 1.0;
pub const MAX_EXAGGERATION: f64 = 50.0;
pub const DEFAULT_EXAGGERATION: f64 = 10.0;

/// One tile of elevation samples, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct ElevationTile {
    pub width: u32,
    pub height: u32,
    pub values_m: Vec<f32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElevationError {
    TileUnavailable { level: u32, row: u32, col: u32 },
    Source(String),
}

impl std::fmt::Display for ElevationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ElevationError::TileUnavailable { level, row, col } => {
                write!(f, "elevation tile {level}/{row}/{col} unavailable")
            }
            ElevationError::Source(msg) => write!(f, "elevation source error: {msg}"),
        }
    }
}

impl std::error::Error for ElevationError {}

/// Provider of raw elevation tiles.
pub trait ElevationSource {
    fn fetch_tile(&self, level: u32, row: u32, col: u32) -> Result<ElevationTile, ElevationError>;
}

/// Decorator that scales every elevation sample by a fixed factor.
///
/// This reproduces the viewer's exaggerated-terrain ground: the underlying
/// source is untouched, only the returned samples are scaled.
#[derive(Debug, Clone)]
pub struct ExaggeratedElevation<S> {
    inner: S,
    exaggeration: f64,
}

impl<S: ElevationSource> ExaggeratedElevation<S> {
    pub fn new(inner: S, exaggeration: f64) -> Self {
        Self {
            inner,
            exaggeration: exaggeration.clamp(MIN_EXAGGERATION, MAX_EXAGGERATION),
        }
    }

    pub fn exaggeration(&self) -> f64 {
        self.exaggeration
    }

    pub fn set_exaggeration(&mut self, exaggeration: f64) {
        self.exaggeration = exaggeration.clamp(MIN_EXAGGERATION, MAX_EXAGGERATION);
    }
}

impl<S: ElevationSource> ElevationSource for ExaggeratedElevation<S> {
    fn fetch_tile(&self, level: u32, row: u32, col: u32) -> Result<ElevationTile, ElevationError> {
        let mut tile = self.inner.fetch_tile(level, row, col)?;
        let factor = self.exaggeration as f32;
        for v in &mut tile.values_m {
            *v *= factor;
        }
        Ok(tile)
    }
}
