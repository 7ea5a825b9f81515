//! Test-Infrastruktur für die Integration Tests
//!
//! Der in-memory sysfs Writer kommt aus `led-board` (Feature
//! `test-support`); hier liegen nur Auswertungen auf dessen Protokoll.

pub use led_board::hal::MockSysfsWriter;

use led_core::REGISTER_BITS;

/// Letzter Wert, den die Datenleitung für jedes Bit des letzten Latches sah
///
/// Rekonstruiert das Register so, wie die Hardware es nach dem Latch hält.
pub fn last_latched_bits(mock: &MockSysfsWriter, data_path: &str) -> Vec<u8> {
    let data = mock.writes_to(data_path);
    data[data.len().saturating_sub(REGISTER_BITS)..]
        .iter()
        .map(|v| if v == "1" { 1 } else { 0 })
        .collect()
}
