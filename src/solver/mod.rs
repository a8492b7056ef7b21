pub mod problem;
pub mod simplex;

pub use problem::{Constraint, LinearProgram, Relation};
pub use simplex::{solve, Solution, SolverOptions};
