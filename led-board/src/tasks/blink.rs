// LED Blink Task - Schaltet blinkende LEDs im festen Takt um
use std::io;
use std::sync::Mutex;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::{error, info};

use led_core::SysfsWriter;

use crate::config::BLINK_THREAD_NAME;
use crate::led_array::{LedHardware, SharedHardware, lock};

/// Ergebnis eines Wartevorgangs des Taktgebers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Tick {
    /// Intervall abgelaufen, Tick ausführen
    Fire,
    /// Scheduler soll sich beenden
    Stop,
}

/// Taktgeber des Blink-Schedulers
///
/// # Implementierungen
/// - **Production:** `IntervalTicker` (festes Intervall + Stop-Channel)
/// - **Testing:** skriptbare Ticker, die eine feste Folge liefern
pub(crate) trait Ticker: Send {
    /// Blockiert bis zum nächsten Tick oder bis zum Stop-Signal
    fn wait(&mut self) -> Tick;
}

/// Ticker mit festem Intervall, beendet sich über einen Stop-Channel
///
/// Ein Stop-Signal oder ein gedroppter Sender beendet das Warten sofort.
pub(crate) struct IntervalTicker {
    interval: Duration,
    stop: Receiver<()>,
}

impl IntervalTicker {
    pub(crate) fn new(interval: Duration, stop: Receiver<()>) -> Self {
        Self { interval, stop }
    }
}

impl Ticker for IntervalTicker {
    fn wait(&mut self) -> Tick {
        match self.stop.recv_timeout(self.interval) {
            Err(RecvTimeoutError::Timeout) => Tick::Fire,
            Ok(()) | Err(RecvTimeoutError::Disconnected) => Tick::Stop,
        }
    }
}

/// Blink Logic - Testbare Schleife ohne eigenen Thread
///
/// Führt pro Tick des Taktgebers einen Blink-Tick unter dem gemeinsamen
/// Mutex aus, bis der Taktgeber `Tick::Stop` liefert. Gibt die Anzahl der
/// ausgeführten Ticks zurück.
///
/// # Trait-basierte Abstraktion
/// Der generische Parameter `T: Ticker` ermöglicht:
/// - Echtes Intervall (`IntervalTicker`) im Production-Code
/// - Skriptbare Ticker in Unit Tests (deterministisch, ohne Sleep)
pub(crate) fn blink_logic<W: SysfsWriter, T: Ticker>(
    shared: &Mutex<LedHardware<W>>,
    mut ticker: T,
) -> usize {
    let mut ticks = 0;
    while ticker.wait() == Tick::Fire {
        lock(shared).blink_tick();
        ticks += 1;
    }
    ticks
}

/// Handle auf den laufenden Blink-Thread
pub struct BlinkScheduler {
    stop: Sender<()>,
    handle: JoinHandle<usize>,
}

impl BlinkScheduler {
    /// Startet den Blink-Thread mit festem Intervall
    pub(crate) fn spawn<W: SysfsWriter + 'static>(
        shared: SharedHardware<W>,
        interval: Duration,
    ) -> io::Result<Self> {
        let (stop, stop_rx) = mpsc::channel();
        let ticker = IntervalTicker::new(interval, stop_rx);

        let handle = thread::Builder::new()
            .name(BLINK_THREAD_NAME.into())
            .spawn(move || blink_logic(&*shared, ticker))?;

        info!("Blink scheduler started ({:?} interval)", interval);
        Ok(Self { stop, handle })
    }

    /// Signalisiert dem Thread das Ende und wartet auf ihn
    pub fn stop(self) {
        // Fehler heißt: Thread hat den Receiver schon gedroppt
        let _ = self.stop.send(());
        match self.handle.join() {
            Ok(ticks) => info!("Blink scheduler stopped after {} ticks", ticks),
            Err(_) => error!("Blink scheduler thread panicked"),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
