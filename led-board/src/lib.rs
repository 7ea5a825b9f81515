// Library-Root: Status-LEDs des Embedded-Linux-Boards
//
// Fünf RGB-LEDs hängen an einem 16-Bit Schieberegister, das über drei
// sysfs-GPIOs bit-gebangt wird; die Hintergrundbeleuchtung läuft über PWM.
// Der einbettende Service erzeugt genau ein `LedArray` und reicht es weiter.

// Module
pub mod config;
pub mod hal;
pub mod led_array;
mod tasks;

pub use config::{BoardConfig, HardwareVariant};
pub use hal::{FileSysfsWriter, PwmDriver};
pub use led_array::LedArray;

// Re-exports von led-core: Prädikate für die Eingabeprüfung durch den Aufrufer
pub use led_core::{
    Color, LED_COUNT, LED_NAMES, LedError, LedModel, LedState, RegisterImage, SysfsWriter,
    led_name_index, try_led_name_index, valid_brightness, valid_color, valid_led_name,
};
