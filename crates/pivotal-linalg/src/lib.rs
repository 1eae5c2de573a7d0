pub mod augmented;
pub mod elimination;
pub mod report;
pub mod residual;

pub use augmented::*;
pub use elimination::*;
pub use report::*;
pub use residual::*;
