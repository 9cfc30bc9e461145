//! Game core: weighted prize drawing, card rendering, and the interactive
//! session loop.

pub mod card;
pub mod draw;
pub mod session;

pub use draw::{DrawError, Prize, PrizeDrawer, PrizeTable, NO_PRIZE_ID};
pub use session::{Session, SessionOptions};
