//! Farbtabelle
//!
//! Die Status-LEDs hängen mit je drei Kanälen (R, G, B) direkt an den
//! Ausgängen des Schieberegisters. Jeder Kanal ist entweder an oder aus,
//! daher kennt das Board nur die acht Grundfarben.

use rgb::RGB8;

/// Symbolische Farbe einer Status-LED
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Color {
    #[default]
    Black,
    Red,
    Green,
    Blue,
    Cyan,
    Magenta,
    Yellow,
    White,
}

impl Color {
    /// Alle Farben in Tabellen-Reihenfolge
    pub const ALL: [Color; 8] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Cyan,
        Color::Magenta,
        Color::Yellow,
        Color::White,
    ];

    /// Name der Farbe, wie ihn der einbettende Service übergibt
    pub const fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Cyan => "cyan",
            Color::Magenta => "magenta",
            Color::Yellow => "yellow",
            Color::White => "white",
        }
    }

    /// Kanal-Bits der Farbe (jeder Kanal ist 0 oder 1)
    ///
    /// # Beispiele
    ///
    /// ```
    /// # use led_core::Color;
    /// # use rgb::RGB8;
    /// assert_eq!(Color::Magenta.channels(), RGB8::new(1, 0, 1));
    /// ```
    pub const fn channels(self) -> RGB8 {
        match self {
            Color::Black => RGB8::new(0, 0, 0),
            Color::Red => RGB8::new(1, 0, 0),
            Color::Green => RGB8::new(0, 1, 0),
            Color::Blue => RGB8::new(0, 0, 1),
            Color::Cyan => RGB8::new(0, 1, 1),
            Color::Magenta => RGB8::new(1, 0, 1),
            Color::Yellow => RGB8::new(1, 1, 0),
            Color::White => RGB8::new(1, 1, 1),
        }
    }

    /// Sucht eine Farbe anhand ihres Namens
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|color| color.name() == name)
    }
}

impl core::fmt::Display for Color {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl core::convert::TryFrom<&str> for Color {
    type Error = ();

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        Self::from_name(name).ok_or(())
    }
}

/// Prüft ob `name` ein Schlüssel der Farbtabelle ist
pub fn valid_color(name: &str) -> bool {
    Color::from_name(name).is_some()
}
