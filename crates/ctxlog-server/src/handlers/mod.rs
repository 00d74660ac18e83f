pub mod emit;
pub mod health;
