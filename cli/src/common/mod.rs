mod stats;
mod validation;
mod workers;

pub use stats::*;
pub use validation::*;
pub use workers::*;
