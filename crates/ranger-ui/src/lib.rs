//! Dual-thumb range slider.
//!
//! `RangeSlider` implements `ranger_core::Widget`, so any `Host` can embed it:
//!
//! ```rust
//! use ranger_core::prelude::*;
//! use ranger_ui::*;
//!
//! let mut host = HeadlessHost::new(Size::new(200.0, 26.0));
//! let mut slider = RangeSlider::new(RangeSliderArgs::default().size(200.0, 26.0));
//!
//! // grab the low thumb (center x = 13) and drag it to the middle
//! slider.handle_pointer_event(
//!     &PointerEvent::mouse(PointerEventKind::Down(PointerButton::Primary), Vec2::new(13.0, 14.0)),
//!     &mut host,
//! );
//! slider.handle_pointer_event(
//!     &PointerEvent::mouse(PointerEventKind::Move, Vec2::new(100.0, 14.0)),
//!     &mut host,
//! );
//! assert_eq!(slider.values(), (5000.0, 10000.0));
//! ```

pub mod domain;
pub mod error;
pub mod range_slider;
pub mod style;
pub mod thumb;

pub use domain::{Domain, fraction_to_value, value_to_fraction};
pub use error::{Error, Result};
pub use range_slider::{
    BORDER_WIDTH, CallbackRange, MIN_SIZE, RangeSlider, RangeSliderArgs, TRACK_HEIGHT,
};
pub use style::{SliderStyle, SliderTheme, ThumbPalette};
pub use thumb::{THUMB_SIZE, Thumb, ThumbKind, TrackMetrics};
