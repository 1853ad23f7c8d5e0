//! Audio output.

pub mod wav;

pub use wav::{samples_to_duration, write_wav};
