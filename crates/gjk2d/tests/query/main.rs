#[macro_use]
extern crate approx;

mod point_projection;
mod shape_construction;
