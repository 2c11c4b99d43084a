pub mod path;
pub mod playback;
pub mod recorder;

pub use path::*;
pub use playback::*;
pub use recorder::*;
