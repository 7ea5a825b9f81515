//! Topologie des Boards
//!
//! Fünf RGB-LEDs teilen sich ein 16-Bit Schieberegister. Jede LED belegt
//! drei feste Bit-Positionen (R, G, B). Bit 0 ist nicht verdrahtet.

/// Anzahl der logischen LEDs
pub const LED_COUNT: usize = 5;

/// Breite des Schieberegisters in Bits
pub const REGISTER_BITS: usize = 16;

/// Namen der LEDs, Index = logische Position
pub const LED_NAMES: [&str; LED_COUNT] = [
    "power",
    "wired_internet",
    "wireless",
    "pairing",
    "radio",
];

/// Bit-Positionen (R, G, B) je LED im Register-Image
///
/// Bit 0 des Images wird zuerst geschoben. Die Tabelle entspricht der
/// Verdrahtung auf dem Board, eine Änderung vertauscht sichtbar LEDs.
pub const LED_POSITIONS: [[usize; 3]; LED_COUNT] = [
    [15, 13, 14],
    [12, 10, 11],
    [9, 1, 8],
    [2, 4, 3],
    [5, 7, 6],
];

/// Prüft ob `name` eine bekannte LED ist
pub fn valid_led_name(name: &str) -> bool {
    try_led_name_index(name).is_some()
}

/// Index der LED `name`, oder `None` wenn unbekannt
pub fn try_led_name_index(name: &str) -> Option<usize> {
    LED_NAMES.iter().position(|candidate| *candidate == name)
}

/// Index der LED `name`
///
/// # Panics
/// Wenn `name` keine bekannte LED ist. Aufrufer prüfen vorher mit
/// [`valid_led_name`].
///
/// ```
/// # use led_core::led_name_index;
/// assert_eq!(led_name_index("wireless"), 2);
/// ```
pub fn led_name_index(name: &str) -> usize {
    match try_led_name_index(name) {
        Some(index) => index,
        None => panic!("LED name {name:?} does not exist"),
    }
}
