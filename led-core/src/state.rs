//! LED-Zustandsmodell
//!
//! Hält den logischen Zustand aller LEDs und das daraus abgeleitete
//! Register-Image. Reine Datenstruktur ohne I/O; wer das Image auf die
//! Hardware bringt, entscheidet der Aufrufer anhand der Rückgabewerte.

use log::debug;

use crate::colors::Color;
use crate::topology::{LED_COUNT, LED_POSITIONS, REGISTER_BITS};

/// Zustand einer einzelnen LED
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LedState {
    pub color: Color,
    pub flashing: bool,
    /// Welche Hälfte des Blink-Zyklus gerade angezeigt wird
    pub phase_on: bool,
}

impl LedState {
    /// Ausgeschaltete, nicht blinkende LED
    pub const OFF: Self = Self {
        color: Color::Black,
        flashing: false,
        phase_on: true,
    };

    /// Farbe, die tatsächlich auf der Hardware erscheinen soll
    pub fn rendered(&self) -> Color {
        if self.flashing && !self.phase_on {
            Color::Black
        } else {
            self.color
        }
    }
}

impl Default for LedState {
    fn default() -> Self {
        Self::OFF
    }
}

/// 16-Bit Abbild des Schieberegisters, ein Eintrag (0 oder 1) pro Ausgang
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegisterImage {
    bits: [u8; REGISTER_BITS],
}

impl RegisterImage {
    pub const fn new() -> Self {
        Self {
            bits: [0; REGISTER_BITS],
        }
    }

    pub fn bits(&self) -> &[u8; REGISTER_BITS] {
        &self.bits
    }

    pub fn bit(&self, position: usize) -> u8 {
        self.bits[position]
    }

    /// Die drei Kanal-Bits (R, G, B) der LED `led`
    pub fn led_bits(&self, led: usize) -> [u8; 3] {
        LED_POSITIONS[led].map(|position| self.bits[position])
    }

    /// `true` wenn alle Ausgänge aus sind
    pub fn is_clear(&self) -> bool {
        self.bits.iter().all(|bit| *bit == 0)
    }

    fn paint(&mut self, led: usize, color: Color) {
        let channels = color.channels();
        let [r, g, b] = LED_POSITIONS[led];
        self.bits[r] = channels.r;
        self.bits[g] = channels.g;
        self.bits[b] = channels.b;
    }
}

/// Gesamtzustand des LED-Arrays
///
/// Das Register-Image wird nie direkt verändert, sondern immer aus den
/// `LedState`s neu gerendert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedModel {
    leds: [LedState; LED_COUNT],
    image: RegisterImage,
    /// Zuletzt angewendete Blink-Phase, damit neue Blinker im Takt einsteigen
    blink_on: bool,
    /// Mindestens eine LED braucht den Blink-Takt
    dirty: bool,
}

impl LedModel {
    pub const fn new() -> Self {
        Self {
            leds: [LedState::OFF; LED_COUNT],
            image: RegisterImage::new(),
            blink_on: false,
            dirty: false,
        }
    }

    pub fn leds(&self) -> &[LedState; LED_COUNT] {
        &self.leds
    }

    pub fn led(&self, position: usize) -> &LedState {
        &self.leds[position]
    }

    pub fn image(&self) -> &RegisterImage {
        &self.image
    }

    pub fn blink_on(&self) -> bool {
        self.blink_on
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn any_flashing(&self) -> bool {
        self.leds.iter().any(|led| led.flashing)
    }

    /// Setzt Farbe und Blink-Modus einer LED
    ///
    /// Eine neu blinkende LED übernimmt die aktuelle globale Blink-Phase,
    /// eine feste LED ist immer an.
    ///
    /// # Panics
    /// Wenn `position >= LED_COUNT`.
    pub fn set_color(&mut self, position: usize, color: Color, flash: bool) {
        assert!(
            position < LED_COUNT,
            "LED position {position} out of range (0..{LED_COUNT})"
        );

        let led = &mut self.leds[position];
        led.color = color;
        led.flashing = flash;
        led.phase_on = if flash { self.blink_on } else { true };
        debug!("LED {}: {} (flash: {})", position, color, flash);

        self.render(position);
        if self.any_flashing() {
            self.dirty = true;
        }
    }

    /// Schaltet alle LEDs aus und beendet jedes Blinken
    ///
    /// Markiert den Scheduler als dirty, damit er beim nächsten Tick
    /// feststellt, dass nichts mehr blinkt, und in den Leerlauf geht.
    pub fn reset(&mut self) {
        self.leds = [LedState::OFF; LED_COUNT];
        self.image = RegisterImage::new();
        self.dirty = true;
    }

    /// Ein Tick des Blink-Schedulers
    ///
    /// Gibt `true` zurück wenn das Register neu gelatcht werden muss.
    pub fn blink_tick(&mut self) -> bool {
        if !self.dirty {
            return false;
        }

        for position in 0..LED_COUNT {
            let led = &mut self.leds[position];
            if !led.flashing {
                continue;
            }
            led.phase_on = !led.phase_on;
            // Last writer wins: alle Blinker laufen ohnehin im Gleichtakt
            self.blink_on = led.phase_on;
            self.render(position);
        }

        self.dirty = self.any_flashing();
        true
    }

    fn render(&mut self, position: usize) {
        let color = self.leds[position].rendered();
        self.image.paint(position, color);
    }
}

impl Default for LedModel {
    fn default() -> Self {
        Self::new()
    }
}
