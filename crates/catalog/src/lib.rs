pub mod buildings;
pub mod layer;
pub mod symbol;
pub mod waterways;

pub use buildings::*;
pub use layer::*;
pub use symbol::*;
pub use waterways::*;
