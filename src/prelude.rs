pub use crate::color::*;
pub use crate::cube::*;
pub use crate::facelet::*;
pub use crate::input::*;
pub use crate::r#move::*;
pub use crate::solver::*;
pub use crate::validate::*;

#[cfg(test)]
pub use crate::test::*;
