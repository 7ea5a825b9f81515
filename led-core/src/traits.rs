//! Hardware Abstraction Traits
//!
//! Alle Hardware-Zugriffe des Boards laufen über Kernel-Steuerdateien
//! (sysfs). Dieser Trait kapselt das Schreiben einer solchen Datei
//! ohne konkrete Implementierung.

/// Fehler-Typ für sysfs-Schreiboperationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedError {
    /// Steuerdatei konnte nicht geöffnet werden (fehlt, keine Rechte, GPIO nicht exportiert)
    OpenFailed,
    /// Steuerdatei wurde geöffnet, aber der Wert nicht geschrieben
    WriteFailed,
}

impl core::fmt::Display for LedError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LedError::OpenFailed => f.write_str("failed to open control file"),
            LedError::WriteFailed => f.write_str("failed to write control file"),
        }
    }
}

impl core::error::Error for LedError {}

/// Trait für sysfs-Zugriff
///
/// # Implementierungen
/// - **Production:** `FileSysfsWriter` (led-board, echte Dateien)
/// - **Testing:** `MockSysfsWriter` (in-memory Mock)
pub trait SysfsWriter: Send {
    /// Schreibt `value` gefolgt von einem Zeilenende in die Steuerdatei `path`
    ///
    /// # Fehlerbehandlung
    /// Gibt einen `LedError` zurück statt abzubrechen; der Aufrufer
    /// entscheidet, ob er mit der nächsten Datei weitermacht.
    fn write(&mut self, path: &str, value: &str) -> Result<(), LedError>;

    /// Prüft ob die Steuerdatei `path` existiert
    fn exists(&self, path: &str) -> bool;
}
