/*
    2D geometry over saturating numbers
*/

mod angle;
mod circle;
mod rectangle;
mod triangle;
mod vector;

pub use angle::*;
pub use circle::*;
pub use rectangle::*;
pub use triangle::*;
pub use vector::*;
