//! The logger handle.
//!
//! [`Logger`] is split in two impl blocks:
//! - `base`: construction, attribute binding and leveled emission
//! - `facade`: formatted variants plus the Panic and Fatal terminators

mod base;
mod facade;

pub use self::base::Logger;
