#[macro_use]
extern crate approx;
extern crate nalgebra as na;

mod distance_accuracy;
mod distance_symmetry;
mod epa2;
mod support_antisymmetry;
mod time_of_impact2;
