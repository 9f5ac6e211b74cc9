// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Build script to emit custom cfg flags based on the window strategy feature.
//!
//! Exactly one of these is emitted:
//! - `#[cfg(window_map)]` for the map strategy (default, or no strategy feature at all)
//! - `#[cfg(window_two_pointer)]` when only `window_two_pointer` is enabled

fn main() {
    // Declare the custom cfg names to avoid warnings
    println!("cargo:rustc-check-cfg=cfg(window_map)");
    println!("cargo:rustc-check-cfg=cfg(window_two_pointer)");

    // Map strategy: explicit window_map, or neither feature selected
    #[cfg(any(feature = "window_map", not(feature = "window_two_pointer")))]
    println!("cargo:rustc-cfg=window_map");

    // Two-pointer strategy only when window_map is off
    #[cfg(all(feature = "window_two_pointer", not(feature = "window_map")))]
    println!("cargo:rustc-cfg=window_two_pointer");

    #[cfg(all(feature = "window_map", feature = "window_two_pointer"))]
    println!(
        "cargo:warning=both window_map and window_two_pointer enabled; using window_map \
         (build with --no-default-features --features window_two_pointer)"
    );
}
