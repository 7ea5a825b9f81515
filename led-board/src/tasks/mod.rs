// Task-Modul: Hintergrund-Threads des LED Arrays
//
// Der Blink-Thread läuft unabhängig vom Aufrufer und kommuniziert nur
// über den gemeinsamen Mutex des LedArray.

pub mod blink;

pub use blink::BlinkScheduler;
