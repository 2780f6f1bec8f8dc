/*!
gjk2d
========

**gjk2d** is a 2-dimensional narrow-phase geometric library written with
the rust programming language. It computes distances, penetration depths and
times of impact between convex shapes using the Gilbert-Johnson-Keerthi
algorithm, the Expanding Polytope Algorithm and conservative advancement.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)] // Maybe revisit this one later.
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![deny(unused_qualifications)]

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod math;
pub mod motion;
pub mod query;
pub mod shape;
pub mod utils;
