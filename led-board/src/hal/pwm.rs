// PWM Treiber - Helligkeit der Hintergrundbeleuchtung je Board-Variante

use log::{debug, warn};

use led_core::{SysfsWriter, clamp_brightness, duty_cycle};

use crate::config::{
    BACKLIGHT_BRIGHTNESS_PATH, HardwareVariant, PWM_A_DUTY_PERCENT_PATH, PWM_A_RUN_PATH,
    PWM_B_CHANNEL, PWM_B_DUTY_CYCLE_PATH, PWM_B_ENABLE_PATH, PWM_B_EXPORT_PATH,
    PWM_B_PERIOD_PATH,
};

/// PWM-Treiber für die Hintergrundbeleuchtung
///
/// Variante A schreibt Prozentwerte, Variante B rechnet die Helligkeit in
/// Nanosekunden der festen Periode um.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PwmDriver {
    variant: HardwareVariant,
    period_ns: u32,
}

impl PwmDriver {
    pub fn new(variant: HardwareVariant, period_ns: u32) -> Self {
        Self { variant, period_ns }
    }

    pub fn variant(&self) -> HardwareVariant {
        self.variant
    }

    /// Grundzustand: Duty-Cycle 0, Ausgang deaktiviert
    pub fn init<W: SysfsWriter + ?Sized>(&self, writer: &mut W) -> usize {
        match self.variant {
            HardwareVariant::A => write_all(
                writer,
                &[(PWM_A_DUTY_PERCENT_PATH, "0"), (PWM_A_RUN_PATH, "0")],
            ),
            HardwareVariant::B => {
                let mut failed = 0;
                if !writer.exists(PWM_B_ENABLE_PATH)
                    && writer.write(PWM_B_EXPORT_PATH, PWM_B_CHANNEL).is_err()
                {
                    warn!("PWM: failed to export channel {}", PWM_B_CHANNEL);
                    failed += 1;
                }
                // Periode vor Duty-Cycle: der Kernel lehnt duty > period ab
                let period = self.period_ns.to_string();
                failed
                    + write_all(
                        writer,
                        &[
                            (PWM_B_ENABLE_PATH, "0"),
                            (PWM_B_PERIOD_PATH, period.as_str()),
                            (PWM_B_DUTY_CYCLE_PATH, "0"),
                        ],
                    )
            }
            HardwareVariant::LegacyBacklight => {
                write_all(writer, &[(BACKLIGHT_BRIGHTNESS_PATH, "0")])
            }
        }
    }

    /// Setzt die Helligkeit in Prozent
    ///
    /// Werte außerhalb 0..=100 werden begrenzt. Gibt die Anzahl
    /// fehlgeschlagener Writes zurück.
    pub fn set_brightness<W: SysfsWriter + ?Sized>(
        &self,
        writer: &mut W,
        brightness: i32,
    ) -> usize {
        let percent = clamp_brightness(brightness).to_string();
        debug!("PWM: brightness {}% ({:?})", percent, self.variant);

        match self.variant {
            HardwareVariant::A => write_all(
                writer,
                &[(PWM_A_DUTY_PERCENT_PATH, percent.as_str()), (PWM_A_RUN_PATH, "1")],
            ),
            HardwareVariant::B => {
                let duty = duty_cycle(brightness, self.period_ns).to_string();
                write_all(
                    writer,
                    &[(PWM_B_DUTY_CYCLE_PATH, duty.as_str()), (PWM_B_ENABLE_PATH, "1")],
                )
            }
            HardwareVariant::LegacyBacklight => {
                write_all(writer, &[(BACKLIGHT_BRIGHTNESS_PATH, percent.as_str())])
            }
        }
    }
}

fn write_all<W: SysfsWriter + ?Sized>(writer: &mut W, steps: &[(&str, &str)]) -> usize {
    steps
        .iter()
        .filter(|(path, value)| writer.write(path, value).is_err())
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PWM_PERIOD_NS;
    use crate::hal::MockSysfsWriter;

    fn owned(writes: &[(&str, &str)]) -> Vec<(String, String)> {
        writes
            .iter()
            .map(|(p, v)| (p.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_variant_a_percent() {
        let mut mock = MockSysfsWriter::new();
        let pwm = PwmDriver::new(HardwareVariant::A, PWM_PERIOD_NS);

        pwm.set_brightness(&mut mock, 75);

        assert_eq!(
            mock.writes(),
            owned(&[(PWM_A_DUTY_PERCENT_PATH, "75"), (PWM_A_RUN_PATH, "1")])
        );
    }

    #[test]
    fn test_variant_b_scales_into_period() {
        let mut mock = MockSysfsWriter::new();
        let pwm = PwmDriver::new(HardwareVariant::B, 500_000);

        pwm.set_brightness(&mut mock, 40);

        assert_eq!(mock.writes_to(PWM_B_DUTY_CYCLE_PATH), vec!["200000"]);
        assert_eq!(mock.writes_to(PWM_B_ENABLE_PATH), vec!["1"]);
    }

    #[test]
    fn test_brightness_is_clamped() {
        let mut mock = MockSysfsWriter::new();
        let pwm = PwmDriver::new(HardwareVariant::B, 500_000);

        pwm.set_brightness(&mut mock, -20);
        pwm.set_brightness(&mut mock, 180);

        assert_eq!(mock.writes_to(PWM_B_DUTY_CYCLE_PATH), vec!["0", "500000"]);
    }

    #[test]
    fn test_legacy_backlight() {
        let mut mock = MockSysfsWriter::new();
        let pwm = PwmDriver::new(HardwareVariant::LegacyBacklight, PWM_PERIOD_NS);

        pwm.set_brightness(&mut mock, 101);

        assert_eq!(mock.writes(), owned(&[(BACKLIGHT_BRIGHTNESS_PATH, "100")]));
    }

    #[test]
    fn test_init_variant_b_exports_once() {
        let mut mock = MockSysfsWriter::new();
        let pwm = PwmDriver::new(HardwareVariant::B, 500_000);

        assert_eq!(pwm.init(&mut mock), 0);
        assert_eq!(pwm.init(&mut mock), 0);

        assert_eq!(mock.writes_to(PWM_B_EXPORT_PATH), vec!["0"]);
        assert_eq!(mock.writes_to(PWM_B_PERIOD_PATH), vec!["500000", "500000"]);
        assert_eq!(mock.writes_to(PWM_B_DUTY_CYCLE_PATH), vec!["0", "0"]);
        assert_eq!(mock.writes_to(PWM_B_ENABLE_PATH), vec!["0", "0"]);
    }

    #[test]
    fn test_init_variant_a_disables_output() {
        let mut mock = MockSysfsWriter::new();
        let pwm = PwmDriver::new(HardwareVariant::A, PWM_PERIOD_NS);

        pwm.init(&mut mock);

        assert_eq!(
            mock.writes(),
            owned(&[(PWM_A_DUTY_PERCENT_PATH, "0"), (PWM_A_RUN_PATH, "0")])
        );
    }

    #[test]
    fn test_write_failures_are_counted() {
        let mut mock = MockSysfsWriter::new();
        mock.fail_path(PWM_A_DUTY_PERCENT_PATH);
        let pwm = PwmDriver::new(HardwareVariant::A, PWM_PERIOD_NS);

        assert_eq!(pwm.set_brightness(&mut mock, 10), 1);
        // run wird trotzdem geschrieben
        assert_eq!(mock.writes_to(PWM_A_RUN_PATH), vec!["1"]);
    }
}
