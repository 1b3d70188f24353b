use std::env;
use std::fs;
use std::path::Path;

// Claves que AppConfig lee con option_env!
const KNOWN_KEYS: &[&str] = &[
    "API_BASE_URL",
    "BASE_PATH",
    "NETWORK_TIMEOUT_MS",
    "WITH_CREDENTIALS",
    "ENABLE_LOGGING",
    "TOAST_DURATION_MS",
    "MAX_UPLOAD_BYTES",
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");

    let env_file = Path::new(".env");
    let Ok(contents) = fs::read_to_string(env_file) else {
        println!("cargo:warning=Sin archivo .env, se usan los valores por defecto de AppConfig");
        return;
    };

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim().trim_matches('"');

        if !KNOWN_KEYS.contains(&key) {
            println!("cargo:warning=Clave desconocida en .env: {}", key);
            continue;
        }

        // Una variable ya exportada en el entorno tiene prioridad sobre .env
        if env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
