pub use self::{block::*, board::*};

pub(crate) mod block;
pub(crate) mod board;
