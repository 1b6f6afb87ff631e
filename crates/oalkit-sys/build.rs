use std::env;

fn main() {
    println!("cargo:rerun-if-env-changed=OPENAL_LIB_DIR");

    let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();

    // macOS ships OpenAL as a system framework
    if target_os == "macos" || target_os == "ios" {
        println!("cargo:rustc-link-lib=framework=OpenAL");
        return;
    }

    // Explicit override for non-standard installs
    if let Ok(dir) = env::var("OPENAL_LIB_DIR") {
        println!("cargo:rustc-link-search=native={}", dir);
        println!("cargo:rustc-link-lib=openal");
        return;
    }

    // openal-soft registers itself as "openal" with pkg-config
    match pkg_config::probe_library("openal") {
        Ok(_) => {}
        Err(e) => {
            println!("cargo:warning=pkg-config could not find openal ({e}), linking -lopenal");
            if target_os == "windows" {
                println!("cargo:rustc-link-lib=OpenAL32");
            } else {
                println!("cargo:rustc-link-lib=openal");
            }
        }
    }
}
