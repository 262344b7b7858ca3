pub mod color;
pub mod cube;
pub mod facelet;
pub mod input;
pub mod r#move;
pub mod prelude;
pub mod solver;
pub mod validate;
