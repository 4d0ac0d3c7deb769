//! Array utilities driven by a uniform source.

mod choice;
mod shuffle;
mod strings;

pub use choice::choice;
pub use shuffle::{permutation, permute, shuffle};
pub use strings::rand_string;
