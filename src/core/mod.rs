pub mod constants;
pub mod field;
pub mod layout;
pub mod palette;
pub mod point;
pub mod row;
pub mod schedule;
pub mod surface;

pub use constants::*;
pub use field::*;
pub use layout::*;
pub use palette::*;
pub use point::*;
pub use row::*;
pub use schedule::*;
pub use surface::*;
