// Mock sysfs Writer (Unit Tests und Feature `test-support`)
//
// In-memory sysfs, das jeden Write protokolliert, vorhandene Knoten
// simuliert und Fehler auf einzelnen Pfaden einschleusen kann.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use led_core::{LedError, SysfsWriter};

use crate::config::{GPIO_EXPORT_PATH, PWM_B_ENABLE_PATH, PWM_B_EXPORT_PATH, gpio_direction_path};

#[derive(Default)]
struct MockState {
    writes: Vec<(String, String)>,
    existing: HashSet<String>,
    failing: HashSet<String>,
}

/// In-memory sysfs
///
/// Klone teilen sich denselben Zustand: ein Klon geht an das `LedArray`,
/// der andere bleibt im Test für Assertions.
#[derive(Clone, Default)]
pub struct MockSysfsWriter {
    state: Arc<Mutex<MockState>>,
}

impl MockSysfsWriter {
    pub fn new() -> Self {
        Self::default()
    }

    // Vergifteter Mutex nach Panic im Test wird übernommen
    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Alle bisherigen Writes als (Pfad, Wert)
    pub fn writes(&self) -> Vec<(String, String)> {
        self.state().writes.clone()
    }

    pub fn write_count(&self) -> usize {
        self.state().writes.len()
    }

    /// Alle Werte, die auf `path` geschrieben wurden, in Reihenfolge
    pub fn writes_to(&self, path: &str) -> Vec<String> {
        self.state()
            .writes
            .iter()
            .filter(|(p, _)| p == path)
            .map(|(_, v)| v.clone())
            .collect()
    }

    pub fn clear_writes(&self) {
        self.state().writes.clear();
    }

    /// Simuliert eine bereits vorhandene Steuerdatei
    pub fn add_existing(&self, path: &str) {
        self.state().existing.insert(path.to_string());
    }

    /// Alle Writes auf `path` schlagen fehl
    pub fn fail_path(&self, path: &str) {
        self.state().failing.insert(path.to_string());
    }

    pub fn heal_path(&self, path: &str) {
        self.state().failing.remove(path);
    }
}

impl SysfsWriter for MockSysfsWriter {
    fn write(&mut self, path: &str, value: &str) -> Result<(), LedError> {
        let mut state = self.state();
        state.writes.push((path.to_string(), value.to_string()));

        if state.failing.contains(path) {
            return Err(LedError::WriteFailed);
        }

        // Export legt die Knoten an, wie der Kernel
        if path == GPIO_EXPORT_PATH {
            if let Ok(line) = value.parse::<u32>() {
                state.existing.insert(gpio_direction_path(line));
            }
        } else if path == PWM_B_EXPORT_PATH {
            state.existing.insert(PWM_B_ENABLE_PATH.to_string());
        }
        Ok(())
    }

    fn exists(&self, path: &str) -> bool {
        self.state().existing.contains(path)
    }
}

// ============================================================================
// Tests
// ============================================================================
