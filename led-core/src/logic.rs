//! Pure Business Logic Functions
//!
//! Helligkeits-Berechnung ohne Hardware-Dependencies (testbar!)

/// Maximale Helligkeit in Prozent
pub const MAX_BRIGHTNESS: i32 = 100;

/// Prüft ob `brightness` im gültigen Bereich 0..=100 liegt
pub fn valid_brightness(brightness: i32) -> bool {
    (0..=MAX_BRIGHTNESS).contains(&brightness)
}

/// Begrenzt die Helligkeit auf 0..=100 Prozent
///
/// # Beispiele
///
/// ```
/// # use led_core::clamp_brightness;
/// assert_eq!(clamp_brightness(-5), 0);
/// assert_eq!(clamp_brightness(42), 42);
/// assert_eq!(clamp_brightness(250), 100);
/// ```
pub fn clamp_brightness(brightness: i32) -> u32 {
    brightness.clamp(0, MAX_BRIGHTNESS) as u32
}

/// Rechnet eine Helligkeit in Prozent in die Einheiten der PWM-Periode um
///
/// `duty = brightness * period / 100`, die Helligkeit wird vorher begrenzt.
///
/// ```
/// # use led_core::duty_cycle;
/// assert_eq!(duty_cycle(50, 500_000), 250_000);
/// ```
pub fn duty_cycle(brightness: i32, period: u32) -> u32 {
    let percent = u64::from(clamp_brightness(brightness));
    // Ergebnis ist <= period, passt also immer in u32
    (percent * u64::from(period) / MAX_BRIGHTNESS as u64) as u32
}
