//! Time of impact of moving and rotating shapes, using conservative advancement.

pub use self::separation_function::{SeparationFunction, SeparationKind, WitnessPair};
pub use self::time_of_impact::{time_of_impact, ToiDiagnostics, ToiResult, ToiState};

mod separation_function;
mod time_of_impact;
