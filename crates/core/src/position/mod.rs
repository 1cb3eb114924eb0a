//! Saved positions: a name chosen by the owner and a validated FEN

mod name;

pub use name::{PositionName, PositionNameError};
