pub mod board;
pub mod serialization;
pub mod store;
pub mod traits;

pub use board::{BoardPersistence, BOARD_STATE_KEY};
pub use serialization::*;
pub use store::*;
pub use traits::*;
