// LED Array - Öffentliche API des Status-LED Boards
//
// Ein Mutex schützt die komplette Kette Zustand → Register-Image → Hardware.
// Aufrufer und Blink-Thread latchen nie gleichzeitig.

use std::io;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{debug, info, warn};

use led_core::{Color, LED_COUNT, LedModel, ShiftRegisterLines, SysfsWriter, latch_image};

use crate::config::{BoardConfig, GPIO_CLOCK, GPIO_DATA, GPIO_LATCH, gpio_value_path};
use crate::hal::{FileSysfsWriter, PwmDriver, init_gpio};
use crate::tasks::BlinkScheduler;

/// value-Dateien der Schieberegister-Leitungen
#[derive(Debug, Clone)]
struct LinePaths {
    data: String,
    clock: String,
    latch: String,
}

impl LinePaths {
    fn board() -> Self {
        Self {
            data: gpio_value_path(GPIO_DATA),
            clock: gpio_value_path(GPIO_CLOCK),
            latch: gpio_value_path(GPIO_LATCH),
        }
    }

    fn as_lines(&self) -> ShiftRegisterLines<'_> {
        ShiftRegisterLines {
            data: &self.data,
            clock: &self.clock,
            latch: &self.latch,
        }
    }
}

/// Alles, was hinter dem gemeinsamen Mutex liegt
pub(crate) struct LedHardware<W> {
    model: LedModel,
    writer: W,
    lines: LinePaths,
    pwm: PwmDriver,
}

impl<W: SysfsWriter> LedHardware<W> {
    /// Schiebt das aktuelle Image auf die Hardware
    fn latch(&mut self) {
        let failed = latch_image(&mut self.writer, &self.lines.as_lines(), self.model.image());
        if failed > 0 {
            // Das Modell bleibt gültig, der nächste Latch korrigiert die Hardware
            warn!("Latch finished with {} failed writes", failed);
        }
    }

    /// Ein Blink-Tick: Phasen umschalten und bei Bedarf latchen
    pub(crate) fn blink_tick(&mut self) -> bool {
        let changed = self.model.blink_tick();
        if changed {
            debug!("Blink tick (phase on: {})", self.model.blink_on());
            self.latch();
        }
        changed
    }
}

pub(crate) type SharedHardware<W> = Arc<Mutex<LedHardware<W>>>;

/// Sperrt den Zustand; ein vergifteter Mutex wird übernommen, da das
/// Modell zwischen zwei Writes immer konsistent ist.
pub(crate) fn lock<W>(shared: &Mutex<LedHardware<W>>) -> MutexGuard<'_, LedHardware<W>> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Die fünf Status-LEDs und die Hintergrundbeleuchtung des Boards
///
/// Wird einmal vom einbettenden Service erzeugt und per Referenz (oder
/// `Arc`) weitergereicht. `shutdown()` bzw. `Drop` beendet den Blink-Thread.
pub struct LedArray<W: SysfsWriter + 'static> {
    shared: SharedHardware<W>,
    scheduler: Option<BlinkScheduler>,
    config: BoardConfig,
}

impl LedArray<FileSysfsWriter> {
    /// LED Array auf dem echten sysfs, Blink-Thread läuft
    pub fn open(config: BoardConfig) -> io::Result<Self> {
        Self::start(FileSysfsWriter::new(), config)
    }
}

impl<W: SysfsWriter + 'static> LedArray<W> {
    /// Initialisiert die Hardware und schaltet alle LEDs aus
    ///
    /// Startet den Blink-Thread noch nicht, siehe [`LedArray::start_scheduler`].
    pub fn new(mut writer: W, config: BoardConfig) -> Self {
        info!("LED array: init ({:?})", config.variant);

        init_gpio(&mut writer, config.variant);
        let pwm = PwmDriver::new(config.variant, config.pwm_period_ns);
        pwm.init(&mut writer);

        let mut hardware = LedHardware {
            model: LedModel::new(),
            writer,
            lines: LinePaths::board(),
            pwm,
        };
        hardware.latch();

        Self {
            shared: Arc::new(Mutex::new(hardware)),
            scheduler: None,
            config,
        }
    }

    /// Initialisiert die Hardware und startet den Blink-Thread
    pub fn start(writer: W, config: BoardConfig) -> io::Result<Self> {
        let mut array = Self::new(writer, config);
        array.start_scheduler()?;
        Ok(array)
    }

    /// Startet den Blink-Thread, falls er noch nicht läuft
    pub fn start_scheduler(&mut self) -> io::Result<()> {
        if self.scheduler.is_none() {
            let scheduler =
                BlinkScheduler::spawn(Arc::clone(&self.shared), self.config.blink_interval)?;
            self.scheduler = Some(scheduler);
        }
        Ok(())
    }

    /// Beendet den Blink-Thread und wartet auf ihn
    ///
    /// Der LED-Zustand bleibt auf der Hardware stehen.
    pub fn shutdown(&mut self) {
        if let Some(scheduler) = self.scheduler.take() {
            scheduler.stop();
        }
    }

    pub fn is_scheduler_running(&self) -> bool {
        self.scheduler.is_some()
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Setzt Farbe und Blink-Modus der LED an `position`
    ///
    /// Aufrufer prüfen Position und Farbe vorher mit [`crate::valid_led_name`] /
    /// [`crate::led_name_index`] und [`crate::valid_color`].
    ///
    /// # Panics
    /// Wenn `position >= LED_COUNT` oder `color` keine bekannte Farbe ist.
    pub fn set_color(&self, position: usize, color: &str, flash: bool) {
        let Some(color) = Color::from_name(color) else {
            panic!("unknown color {color:?}");
        };
        self.set_led(position, color, flash);
    }

    /// Wie [`LedArray::set_color`], mit typisierter Farbe
    ///
    /// # Panics
    /// Wenn `position >= LED_COUNT`.
    pub fn set_led(&self, position: usize, color: Color, flash: bool) {
        assert!(
            position < LED_COUNT,
            "LED position {position} out of range (0..{LED_COUNT})"
        );

        let mut hardware = lock(&self.shared);
        hardware.model.set_color(position, color, flash);
        hardware.latch();
    }

    /// Schaltet alle LEDs aus und beendet jedes Blinken
    pub fn reset(&self) {
        let mut hardware = lock(&self.shared);
        hardware.model.reset();
        hardware.latch();
    }

    /// Setzt die Helligkeit der Hintergrundbeleuchtung in Prozent
    ///
    /// Aufrufer prüfen vorher mit [`crate::valid_brightness`]; Werte
    /// außerhalb 0..=100 werden begrenzt.
    pub fn set_pwm_brightness(&self, brightness: i32) {
        let mut hardware = lock(&self.shared);
        let LedHardware { writer, pwm, .. } = &mut *hardware;
        let failed = pwm.set_brightness(writer, brightness);
        if failed > 0 {
            warn!("PWM: {} failed writes for brightness {}", failed, brightness);
        }
    }

    /// Führt einen Blink-Tick sofort aus
    ///
    /// Gibt `true` zurück wenn das Register neu gelatcht wurde.
    pub fn blink_tick(&self) -> bool {
        lock(&self.shared).blink_tick()
    }

    /// Momentaufnahme des LED-Zustands
    pub fn state(&self) -> LedModel {
        lock(&self.shared).model.clone()
    }

    #[cfg(test)]
    pub(crate) fn shared_for_tests(&self) -> SharedHardware<W> {
        Arc::clone(&self.shared)
    }
}

impl<W: SysfsWriter + 'static> Drop for LedArray<W> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

// ============================================================================
// Tests
// ============================================================================
