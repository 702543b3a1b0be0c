// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

use std::env;
use std::fs;
use std::path::Path;

/// True if `feature` is listed in comma-separated `CARGO_CFG_TARGET_FEATURE`
fn has_feature(list: &str, feature: &str) -> bool {
    list.split(',').any(|f| f == feature)
}

/// Native register width in bits for the target, before any override.
fn native_register_bits(arch: &str, feats: &str) -> usize {
    match arch {
        "x86_64" | "x86" => {
            if has_feature(feats, "avx512f") {
                512
            } else if has_feature(feats, "avx2") || has_feature(feats, "avx") {
                256
            } else if has_feature(feats, "sse2") {
                128
            } else {
                64
            }
        }
        // NEON is baseline on aarch64; only an explicit `-neon` disables it.
        "aarch64" => {
            if has_feature(feats, "neon") {
                128
            } else {
                64
            }
        }
        "wasm32" => {
            if has_feature(feats, "simd128") {
                128
            } else {
                64
            }
        }
        _ => 64,
    }
}

fn main() {
    let arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
    let feats = env::var("CARGO_CFG_TARGET_FEATURE").unwrap_or_default();

    // w8 == 8-bit lanes, w16 == 16-bit lanes, w32 == 32-bit lanes, w64 == 64-bit lanes.
    // Each is the number of lanes of that width that fit one native register.
    //
    // Format: SIMD_LANES_OVERRIDE="64,32,16,8"
    let override_lanes = env::var("SIMD_LANES_OVERRIDE").ok();

    let (w8, w16, w32, w64) = if let Some(val) = override_lanes {
        let parts: Vec<_> = val.split(',').map(|s| s.trim().parse::<usize>()).collect();
        if parts.len() == 4 && parts.iter().all(|r| r.is_ok()) {
            let vals: Vec<usize> = parts.into_iter().map(|r| r.unwrap()).collect();
            if !vals.iter().all(|v| v.is_power_of_two() && *v <= 64) {
                panic!("SIMD_LANES_OVERRIDE lanes must be powers of two no greater than 64");
            }
            println!("cargo:warning=SIMD_LANES_OVERRIDE applied: {:?}", vals);
            (vals[0], vals[1], vals[2], vals[3])
        } else {
            panic!("Invalid SIMD_LANES_OVERRIDE. Expected 4 comma-separated integers, e.g., \"64,32,16,8\"");
        }
    } else {
        let bits = native_register_bits(&arch, &feats);
        (bits / 8, bits / 16, bits / 32, (bits / 64).max(1))
    };

    // The 8-bit lane count always spans exactly one register.
    let register_bits = w8 * 8;

    let out_path = Path::new(&env::var("OUT_DIR").unwrap()).join("simd_lanes.rs");

    fs::write(
        &out_path,
        format!(
            "
/// Auto-generated SIMD lane widths from build.rs

/// SIMD lane count for 8-bit elements (u8, i8).
/// Determined at build time based on target architecture capabilities,
/// or overridden via `SIMD_LANES_OVERRIDE`.
#[allow(non_upper_case_globals, dead_code)]
pub const W8: usize = {w8};

/// SIMD lane count for 16-bit elements (u16, i16).
#[allow(non_upper_case_globals, dead_code)]
pub const W16: usize = {w16};

/// SIMD lane count for 32-bit elements (u32, i32, f32).
#[allow(non_upper_case_globals, dead_code)]
pub const W32: usize = {w32};

/// SIMD lane count for 64-bit elements (u64, i64, f64).
#[allow(non_upper_case_globals, dead_code)]
pub const W64: usize = {w64};

/// Width in bits of one native register, as seen by the lane counts above.
#[allow(non_upper_case_globals, dead_code)]
pub const REGISTER_BITS: usize = {register_bits};
"
        ),
    )
    .unwrap();

    println!("cargo:rerun-if-env-changed=CARGO_CFG_TARGET_ARCH");
    println!("cargo:rerun-if-env-changed=CARGO_CFG_TARGET_FEATURE");
    println!("cargo:rerun-if-env-changed=SIMD_LANES_OVERRIDE");
}
