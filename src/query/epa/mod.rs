//! The EPA algorithm for penetration depth computation.

pub use self::epa2::{penetration, Penetration};

mod epa2;
