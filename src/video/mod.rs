pub mod decoder;
pub mod frame;
pub mod player;
pub mod probe;

#[cfg(test)]
mod player_test;

pub use decoder::*;
pub use frame::*;
pub use player::*;
pub use probe::*;
