// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
use std::time::Duration;

// ============================================================================
// Blink Konfiguration
// ============================================================================

/// Blink-Intervall (ein Phasenwechsel pro Tick)
pub const BLINK_INTERVAL: Duration = Duration::from_secs(1);

/// Name des Blink-Threads (sichtbar in `ps -L` / `top -H`)
pub const BLINK_THREAD_NAME: &str = "led-blink";

// ============================================================================
// GPIO Konfiguration
// ============================================================================

/// Export-Datei des GPIO-Subsystems
pub const GPIO_EXPORT_PATH: &str = "/sys/class/gpio/export";

/// Datenleitung des Schieberegisters
pub const GPIO_DATA: u32 = 40;

/// Taktleitung des Schieberegisters
pub const GPIO_CLOCK: u32 = 96;

/// Latch-Leitung des Schieberegisters
pub const GPIO_LATCH: u32 = 11;

/// Gemeinsame Steuerleitung (wird nur exportiert und auf low gelegt)
pub const GPIO_CONTROL: u32 = 10;

/// Alle Leitungen in Initialisierungs-Reihenfolge
pub const GPIO_LINES: [u32; 4] = [GPIO_LATCH, GPIO_CONTROL, GPIO_DATA, GPIO_CLOCK];

/// Richtung "Ausgang, initial low"
pub const GPIO_DIRECTION_LOW: &str = "low";

pub fn gpio_direction_path(line: u32) -> String {
    format!("/sys/class/gpio/gpio{line}/direction")
}

pub fn gpio_value_path(line: u32) -> String {
    format!("/sys/class/gpio/gpio{line}/value")
}

// ============================================================================
// Pin-Multiplexing (nur Variante A)
// ============================================================================

/// Debug-Knoten des OMAP Pin-Mux für die vier GPIO-Leitungen
pub const PINMUX_NODES: [&str; 4] = [
    "/sys/kernel/debug/omap_mux/lcd_data15",
    "/sys/kernel/debug/omap_mux/lcd_data14",
    "/sys/kernel/debug/omap_mux/uart0_ctsn",
    "/sys/kernel/debug/omap_mux/mii1_col",
];

/// Mux-Modus 7 (GPIO) mit aktiviertem Receiver
pub const PINMUX_GPIO_MODE: &str = "27";

// ============================================================================
// PWM Konfiguration
// ============================================================================

/// Variante A: Duty-Cycle direkt in Prozent
pub const PWM_A_DUTY_PERCENT_PATH: &str = "/sys/class/pwm/ehrpwm.1:0/duty_percent";

/// Variante A: PWM-Ausgang ein/aus
pub const PWM_A_RUN_PATH: &str = "/sys/class/pwm/ehrpwm.1:0/run";

/// Variante B: Export-Datei des PWM-Chips
pub const PWM_B_EXPORT_PATH: &str = "/sys/class/pwm/pwmchip0/export";

/// Variante B: exportierter Kanal
pub const PWM_B_CHANNEL: &str = "0";

pub const PWM_B_ENABLE_PATH: &str = "/sys/class/pwm/pwmchip0/pwm0/enable";
pub const PWM_B_PERIOD_PATH: &str = "/sys/class/pwm/pwmchip0/pwm0/period";
pub const PWM_B_DUTY_CYCLE_PATH: &str = "/sys/class/pwm/pwmchip0/pwm0/duty_cycle";

/// Variante B: PWM-Periode in Nanosekunden (2 kHz)
pub const PWM_PERIOD_NS: u32 = 500_000;

/// Früheste Board-Revision: Backlight-Treiber statt PWM-Knoten
pub const BACKLIGHT_BRIGHTNESS_PATH: &str = "/sys/class/backlight/pwm-backlight/brightness";

// ============================================================================
// Hardware-Variante
// ============================================================================

/// Hardware-Variante zur Build-Zeit (aus `LED_HW_VARIANT` / `.env`, siehe build.rs)
const BUILD_HW_VARIANT: Option<&str> = option_env!("LED_HW_VARIANT");

/// Board-Revision, unterscheidet sich im PWM-Subsystem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum HardwareVariant {
    /// OMAP Pin-Mux + `duty_percent` Knoten
    #[default]
    A,
    /// Generisches PWM-Chip Interface mit Periode/Duty-Cycle in ns
    B,
    /// Früheste Revision mit pwm-backlight Treiber
    #[cfg_attr(feature = "serde", serde(rename = "legacy"))]
    LegacyBacklight,
}

impl HardwareVariant {
    /// Variante aus dem externen Hardware-Flag (`true` = PWM-Chip)
    pub fn from_flag(pwm_chip: bool) -> Self {
        if pwm_chip { Self::B } else { Self::A }
    }

    /// Variante aus ihrem Namen ("a", "b", "legacy"), Groß-/Kleinschreibung egal
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "a" => Some(Self::A),
            "b" => Some(Self::B),
            "legacy" => Some(Self::LegacyBacklight),
            _ => None,
        }
    }

    /// Nur Variante A braucht das Pin-Mux Setup
    pub fn needs_pinmux(self) -> bool {
        self == Self::A
    }
}

// ============================================================================
// Board-Konfiguration
// ============================================================================

/// Laufzeit-Konfiguration des LED-Arrays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardConfig {
    pub variant: HardwareVariant,
    pub blink_interval: Duration,
    pub pwm_period_ns: u32,
}

impl BoardConfig {
    pub fn new(variant: HardwareVariant) -> Self {
        Self {
            variant,
            blink_interval: BLINK_INTERVAL,
            pwm_period_ns: PWM_PERIOD_NS,
        }
    }

    pub fn with_blink_interval(mut self, interval: Duration) -> Self {
        self.blink_interval = interval;
        self
    }
}

impl Default for BoardConfig {
    /// Variante aus der Build-Umgebung, sonst Variante A
    fn default() -> Self {
        let variant = BUILD_HW_VARIANT
            .and_then(HardwareVariant::from_name)
            .unwrap_or_default();
        Self::new(variant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_from_flag() {
        assert_eq!(HardwareVariant::from_flag(false), HardwareVariant::A);
        assert_eq!(HardwareVariant::from_flag(true), HardwareVariant::B);
    }

    #[test]
    fn test_variant_from_name() {
        assert_eq!(HardwareVariant::from_name("B"), Some(HardwareVariant::B));
        assert_eq!(
            HardwareVariant::from_name(" legacy\n"),
            Some(HardwareVariant::LegacyBacklight)
        );
        assert_eq!(HardwareVariant::from_name("c"), None);
    }

    #[test]
    fn test_gpio_paths() {
        assert_eq!(gpio_direction_path(40), "/sys/class/gpio/gpio40/direction");
        assert_eq!(gpio_value_path(96), "/sys/class/gpio/gpio96/value");
    }

    #[test]
    fn test_config_builder() {
        let config = BoardConfig::new(HardwareVariant::B)
            .with_blink_interval(Duration::from_millis(10));
        assert_eq!(config.blink_interval, Duration::from_millis(10));
        assert_eq!(config.pwm_period_ns, PWM_PERIOD_NS);
    }

    #[test]
    fn test_default_variant_matches_current_env_file() {
        // Die Environment-Variable hat Vorrang vor der .env
        if std::env::var_os("LED_HW_VARIANT").is_some() {
            return;
        }

        // Gleiche Suchreihenfolge wie dotenvy im Build-Script
        let manifest_dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
        let from_file = manifest_dir
            .ancestors()
            .map(|dir| dir.join(".env"))
            .find(|path| path.is_file())
            .and_then(|path| dotenvy::from_path_iter(path).ok())
            .and_then(|mut entries| {
                entries.find_map(|entry| match entry {
                    Ok((key, value)) if key == "LED_HW_VARIANT" => Some(value),
                    _ => None,
                })
            });

        if let Some(variant) = from_file {
            // Veraltete Build-Konfiguration nach Änderung der .env
            assert_eq!(BUILD_HW_VARIANT, Some(variant.as_str()));
            assert_eq!(
                Some(BoardConfig::default().variant),
                HardwareVariant::from_name(&variant)
            );
        }
    }
}
