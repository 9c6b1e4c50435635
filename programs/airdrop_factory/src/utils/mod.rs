pub mod merkle;

pub use merkle::*;
