//! Build script for anniversary-simulator
//!
//! Points the linker at a bundled SDL2 on Windows and copies SDL2.dll next to
//! the binary.

use std::path::PathBuf;
use std::{env, fs};

fn main() {
    // Other targets link the system SDL2
    if env::var("CARGO_CFG_TARGET_OS").unwrap_or_default() != "windows" {
        return;
    }

    let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR").map(PathBuf::from) else {
        println!("cargo:warning=CARGO_MANIFEST_DIR not set, skipping SDL2 setup");
        return;
    };
    let Some(workspace_dir) = manifest_dir.parent() else {
        return;
    };
    let vendor_sdl2 = workspace_dir.join("vendor").join("sdl2");
    println!("cargo:rerun-if-changed={}", vendor_sdl2.display());

    if !vendor_sdl2.exists() {
        println!(
            "cargo:warning=SDL2 not found at {}; put SDL2.lib and SDL2.dll in vendor/sdl2/",
            vendor_sdl2.display()
        );
        return;
    }

    println!("cargo:rustc-link-search=native={}", vendor_sdl2.display());

    // OUT_DIR is target/<profile>/build/anniversary-simulator-<hash>/out
    let Ok(out_dir) = env::var("OUT_DIR") else {
        return;
    };
    let out_path = PathBuf::from(out_dir);
    let Some(profile_dir) = out_path
        .ancestors()
        .find(|p| p.file_name().is_some_and(|n| n == "release" || n == "debug"))
    else {
        return;
    };

    let dll_src = vendor_sdl2.join("SDL2.dll");
    let dll_dst = profile_dir.join("SDL2.dll");
    if dll_src.exists() && !dll_dst.exists() {
        match fs::copy(&dll_src, &dll_dst) {
            Ok(_) => println!("cargo:warning=Copied SDL2.dll to {}", dll_dst.display()),
            Err(e) => println!("cargo:warning=Failed to copy SDL2.dll: {e}"),
        }
    }
}
