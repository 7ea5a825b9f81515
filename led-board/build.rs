// Build-Script: Wird vor dem Kompilieren ausgeführt
// Reicht die Hardware-Variante des Boards an den Compiler weiter

fn main() {
    // Lade .env file für die Board-Konfiguration
    // Fehler ignorieren wenn .env nicht existiert (dann gilt die Environment-Variable oder Variante A)
    match dotenvy::dotenv() {
        // Änderungen an der gefundenen .env lösen einen neuen Lauf aus
        Ok(path) => println!("cargo:rerun-if-changed={}", path.display()),
        Err(e) => {
            eprintln!(".env file nicht gefunden: {}", e);
            eprintln!("   Setze LED_HW_VARIANT (a, b, legacy) als Environment-Variable");
            // Eine später angelegte .env im Workspace-Root ebenfalls beachten
            println!("cargo:rerun-if-changed=../.env");
        }
    }

    // Gebe die Hardware-Variante an den Rust-Compiler weiter
    // Wird in config.rs über option_env!() gelesen
    if let Ok(variant) = std::env::var("LED_HW_VARIANT") {
        println!("cargo:rustc-env=LED_HW_VARIANT={}", variant);
    }

    println!("cargo:rerun-if-env-changed=LED_HW_VARIANT");
}
