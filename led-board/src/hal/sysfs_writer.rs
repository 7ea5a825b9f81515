// sysfs Writer auf echte Steuerdateien
//
// Schreibt einzelne Werte in Kernel-Steuerdateien (GPIO, PWM, Pin-Mux).
// Fehler werden geloggt und als LedError gemeldet, nie als Panic.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use log::error;

use led_core::{LedError, SysfsWriter};

// ============================================================================
// Real Hardware Implementation
// ============================================================================

/// sysfs Writer auf echte Dateien
///
/// Öffnet die Steuerdatei für jeden Wert neu (write-only, ohne Anlegen),
/// schreibt den Wert mit Zeilenende und schließt sie wieder.
#[derive(Debug, Clone, Default)]
pub struct FileSysfsWriter {
    root: Option<PathBuf>,
}

impl FileSysfsWriter {
    /// Writer auf das echte `/sys`
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Writer, der alle absoluten Pfade unterhalb von `root` auflöst
    ///
    /// Für Tests auf dem Host oder ein in ein chroot gemountetes sysfs.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        match &self.root {
            Some(root) => root.join(path.trim_start_matches('/')),
            None => PathBuf::from(path),
        }
    }
}

impl SysfsWriter for FileSysfsWriter {
    fn write(&mut self, path: &str, value: &str) -> Result<(), LedError> {
        let target = self.resolve(path);

        let mut file = OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(&target)
            .map_err(|e| {
                error!("failed to open file {} - {}", target.display(), e);
                LedError::OpenFailed
            })?;

        // Wert und Zeilenende in einem write(): sysfs wertet jeden Aufruf
        // als eigenen Store, ein einzelnes "\n" wird abgelehnt
        let line = format!("{value}\n");
        file.write_all(line.as_bytes()).map_err(|e| {
            error!("failed write to {} - {}", target.display(), e);
            LedError::WriteFailed
        })
    }

    fn exists(&self, path: &str) -> bool {
        self.resolve(path).exists()
    }
}

// ============================================================================
// Tests
// ============================================================================
