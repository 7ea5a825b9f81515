//! Schieberegister-Protokoll (Bit-Banging über GPIO value-Dateien)
//!
//! Pro Bit: Wert auf die Datenleitung, dann Takt high/low. Nach allen
//! 16 Bits schaltet ein Puls auf der Latch-Leitung die geschobenen Bits
//! auf die parallelen Ausgänge.

use log::trace;

use crate::state::RegisterImage;
use crate::topology::REGISTER_BITS;
use crate::traits::SysfsWriter;

/// Anzahl Schreibzugriffe pro Latch: 3 je Bit + 2 für den Latch-Puls
pub const WRITES_PER_LATCH: usize = REGISTER_BITS * 3 + 2;

/// value-Dateien der drei Leitungen des Schieberegisters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftRegisterLines<'a> {
    pub data: &'a str,
    pub clock: &'a str,
    pub latch: &'a str,
}

/// Schiebt das komplette Image in das Register und latcht es
///
/// Bit 0 wird zuerst geschoben. Jeder Schreibzugriff wird versucht, auch
/// wenn ein vorheriger fehlgeschlagen ist. Gibt die Anzahl der
/// fehlgeschlagenen Zugriffe zurück.
pub fn latch_image<W: SysfsWriter + ?Sized>(
    writer: &mut W,
    lines: &ShiftRegisterLines<'_>,
    image: &RegisterImage,
) -> usize {
    let mut failed = 0;
    let mut write = |path: &str, value: &str| {
        if writer.write(path, value).is_err() {
            failed += 1;
        }
    };

    for bit in image.bits() {
        write(lines.data, if *bit == 0 { "0" } else { "1" });
        write(lines.clock, "1");
        write(lines.clock, "0");
    }

    write(lines.latch, "1");
    write(lines.latch, "0");

    trace!("Latched register {:?} ({} failed writes)", image.bits(), failed);
    failed
}
