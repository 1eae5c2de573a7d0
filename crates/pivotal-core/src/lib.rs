pub mod dtype;
pub mod error;
pub mod generate;
pub mod matrix;
pub mod system;

pub use dtype::Float;
pub use error::{SolveError, SolveResult};
pub use generate::random_system;
pub use matrix::{InputLayout, Matrix};
pub use system::LinearSystem;
