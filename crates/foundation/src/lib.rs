pub mod color;
pub mod extent;
pub mod notify;

// Foundation crate: small, well-tested primitives only.
pub use color::*;
pub use extent::*;
pub use notify::*;
