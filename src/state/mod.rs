//! Client-side state for the Theme Manager screen.
//!
//! DESIGN
//! ======
//! State is split by concern (`tabs`, `changes`, `image_radio`, `rebuild`)
//! so each component depends on one small model. Every model is plain data
//! with synchronous transitions; components wrap them in `RwSignal`s and
//! the async rebuild round trip lives in `net::rebuild`.

pub mod changes;
pub mod image_radio;
pub mod rebuild;
pub mod tabs;
