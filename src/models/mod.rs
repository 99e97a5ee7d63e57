pub mod location;
pub mod prediction;
pub mod regional;
pub mod soil;
pub mod source;
pub mod weather;

pub use location::*;
pub use prediction::*;
pub use regional::*;
pub use soil::*;
pub use source::*;
pub use weather::*;
