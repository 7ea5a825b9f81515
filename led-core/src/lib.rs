//! LED Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert die Farb- und Topologie-Tabellen des Boards, das
//! LED-Zustandsmodell, das Schieberegister-Protokoll und den
//! `SysfsWriter` Trait, über den alle Hardware-Zugriffe laufen.

#![no_std]

pub mod colors;
pub mod logic;
pub mod shift_register;
pub mod state;
pub mod topology;
pub mod traits;

// Re-exports für einfachen Zugriff
pub use colors::{Color, valid_color};
pub use logic::{MAX_BRIGHTNESS, clamp_brightness, duty_cycle, valid_brightness};
pub use shift_register::{ShiftRegisterLines, WRITES_PER_LATCH, latch_image};
pub use state::{LedModel, LedState, RegisterImage};
pub use topology::{
    LED_COUNT, LED_NAMES, LED_POSITIONS, REGISTER_BITS, led_name_index, try_led_name_index,
    valid_led_name,
};
pub use traits::{LedError, SysfsWriter};
