//! API handlers.

mod categories;
mod payload;
mod questions;
mod quizzes;
mod system;

#[cfg(test)]
mod test_support;

pub use categories::*;
pub use payload::*;
pub use questions::*;
pub use quizzes::*;
pub use system::*;
