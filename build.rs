// Picks the libc accessor for the thread's errno slot.
//
// Emits `errno_symbol="<accessor>"` and `has_errno_location` for targets
// whose libc exposes one. Everywhere else errno can still be read through
// std, but it cannot be overwritten.

use std::env;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    println!("cargo::rustc-check-cfg=cfg(has_errno_location)");
    println!(
        "cargo::rustc-check-cfg=cfg(errno_symbol, values(\"__errno_location\", \"__error\", \"__errno\", \"___errno\"))"
    );

    let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    if let Some(symbol) = errno_symbol(&target_os) {
        println!("cargo:rustc-cfg=has_errno_location");
        println!("cargo:rustc-cfg=errno_symbol=\"{}\"", symbol);
    }
}

fn errno_symbol(target_os: &str) -> Option<&'static str> {
    match target_os {
        "linux" | "android" | "emscripten" => Some("__errno_location"),
        "macos" | "ios" | "tvos" | "watchos" | "visionos" | "freebsd" | "dragonfly" => Some("__error"),
        "openbsd" | "netbsd" => Some("__errno"),
        "solaris" | "illumos" => Some("___errno"),
        _ => None,
    }
}
