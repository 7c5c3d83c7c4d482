//! Scale and layout computation: category bands, linear magnitude axes,
//! radial angle assignment, and the responsive sizing policy.
//!
//! Layout is stateless per call — every render recomputes scales from the
//! current data and container size.

mod radial;
mod responsive;
mod scale;

pub use radial::*;
pub use responsive::*;
pub use scale::*;
