pub mod basemap;
pub mod camera;
pub mod config;
pub mod host;
pub mod measure;
pub mod terrain;

pub use basemap::*;
pub use camera::*;
pub use config::*;
pub use host::*;
pub use measure::*;
pub use terrain::*;
