//! Design tokens for theming
//!
//! Tokens are the atomic values that make up the design system:
//! - Colors (generated role schemes plus status extensions)
//! - Spacing
//! - Border radii
//! - Elevation
//! - Font weights
//!
//! Only colors vary between the light and dark schemes.

mod color;
mod elevation;
mod font;
mod radius;
mod spacing;

pub use color::*;
pub use elevation::*;
pub use font::*;
pub use radius::*;
pub use spacing::*;
