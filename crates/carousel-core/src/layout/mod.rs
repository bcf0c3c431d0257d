//! Canvas geometry
//!
//! Pure pixel arithmetic shared by the normalizer:
//! - Inner box after margins
//! - Fitted size for each fit mode
//! - Center-crop window for cover mode
//! - Centered paste offset

mod fit;
mod types;

pub use fit::*;
pub use types::*;
