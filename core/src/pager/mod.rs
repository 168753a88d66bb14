//! Page strip navigation: the shared pager state and the orchestrator that drives it.

pub mod orchestrator;
pub mod state;

pub use orchestrator::{ImagePager, PageFrame, PagerFrame, PagerOptions, PagerUpdate, Transition};
pub use state::PagerState;
