fn main() {
    // tauri-build generates the desktop context; the plain library build
    // (and its tests) must work without a bundled frontend.
    if std::env::var_os("CARGO_FEATURE_TAURI").is_some() {
        tauri_build::build();
    }
}
