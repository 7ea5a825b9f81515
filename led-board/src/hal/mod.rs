// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul kapselt die sysfs-Zugriffe des Boards: den Datei-Writer
// selbst, die GPIO-Initialisierung und den PWM-Treiber.

pub mod gpio;
#[cfg(any(test, feature = "test-support"))]
pub mod mock;
pub mod pwm;
pub mod sysfs_writer;

pub use gpio::init_gpio;
pub use pwm::PwmDriver;
pub use sysfs_writer::FileSysfsWriter;

#[cfg(any(test, feature = "test-support"))]
pub use mock::MockSysfsWriter;
