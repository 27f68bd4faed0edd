//! Page components: the particle backdrop and the smaller DOM enhancements.

pub mod backdrop;
pub mod page;
