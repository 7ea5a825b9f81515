// GPIO Initialisierung - Pin-Mux, Export und Richtung der Schieberegister-Leitungen

use log::{debug, info, warn};

use led_core::SysfsWriter;

use crate::config::{
    GPIO_DIRECTION_LOW, GPIO_EXPORT_PATH, GPIO_LINES, HardwareVariant, PINMUX_GPIO_MODE,
    PINMUX_NODES, gpio_direction_path,
};

/// Bringt die GPIO-Leitungen in einen definierten Zustand
///
/// - Variante A: Pin-Mux der vier Pins auf GPIO-Modus
/// - Export jeder Leitung, sofern ihr `direction` Knoten noch fehlt
/// - Richtung "low" (Ausgang, initial aus) für jede Leitung
///
/// Mehrfacher Aufruf ist unkritisch: bereits exportierte Leitungen werden
/// übersprungen. Gibt die Anzahl fehlgeschlagener Writes zurück.
pub fn init_gpio<W: SysfsWriter + ?Sized>(writer: &mut W, variant: HardwareVariant) -> usize {
    let mut failed = 0;

    if variant.needs_pinmux() {
        for node in PINMUX_NODES {
            if writer.write(node, PINMUX_GPIO_MODE).is_err() {
                failed += 1;
            }
        }
    }

    for line in GPIO_LINES {
        let direction = gpio_direction_path(line);

        if writer.exists(&direction) {
            debug!("GPIO {} already exported", line);
        } else if writer.write(GPIO_EXPORT_PATH, &line.to_string()).is_err() {
            failed += 1;
        }
    }

    for line in GPIO_LINES {
        if writer
            .write(&gpio_direction_path(line), GPIO_DIRECTION_LOW)
            .is_err()
        {
            failed += 1;
        }
    }

    if failed > 0 {
        warn!("GPIO: init finished with {} failed writes", failed);
    } else {
        info!("GPIO: lines {:?} ready", GPIO_LINES);
    }
    failed
}
