pub mod residue;
pub mod stoch;

pub use residue::*;
pub use stoch::*;
