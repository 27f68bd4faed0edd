//! Animated particle backdrop.
//!
//! Paints a field of slowly drifting points on a full-viewport canvas with:
//! - Population sized to the viewport area, rebuilt on every resize
//! - Faint links between nearby points, fading with distance
//! - A gentle drift bias toward wherever the pointer sits
//! - Crisp output on high-density displays
//!
//! The backdrop never starts when the user prefers reduced motion or when the
//! canvas or its 2D context is unavailable; the rest of the page is unaffected.
//!
//! # Example
//!
//! ```ignore
//! use site_fx::components::backdrop::{mount_backdrop, BackdropConfig};
//!
//! let window = web_sys::window().unwrap();
//! if let Err(reason) = mount_backdrop(&window, BackdropConfig::default(), false) {
//!     log::info!("backdrop off: {reason}");
//! }
//! ```

mod component;
mod particles;
mod pointer;
mod render;
mod state;
mod surface;
pub mod theme;
mod types;

pub use component::{CANVAS_ID, mount_backdrop};
pub use particles::{Particle, ParticleField};
pub use pointer::Pointer;
pub use render::{CanvasPainter, Painter, link_alpha, links};
pub use state::{Backdrop, Inert};
pub use surface::{Surface, Viewport};
pub use theme::Theme;
pub use types::BackdropConfig;
