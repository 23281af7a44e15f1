//! Shared fixtures for integration tests
//!
//! Packets are expressed as plain `(name, value)` lists so each test reads
//! like the telemetry it simulates.

#![allow(dead_code)]

use ecosense_core::Readings;

/// Hot day with moderate wildfire smoke
pub const HOT_SMOKY_DAY: &[(&str, f64)] =
    &[("pm2.5", 42.5), ("temperature", 33.0), ("humidity", 70.0)];

/// Warm afternoon, slightly elevated particulates
pub const WARM_AFTERNOON: &[(&str, f64)] =
    &[("pm2.5", 12.5), ("temperature", 32.0), ("humidity", 65.0)];

/// Mild indoor conditions
pub const OFFICE: &[(&str, f64)] =
    &[("pm2.5", 4.0), ("temperature", 22.0), ("humidity", 45.0)];

/// Desert heat, very dry air
pub const DESERT: &[(&str, f64)] = &[("temperature", 40.0), ("humidity", 10.0)];

/// Humid tropical morning
pub const TROPICAL_MORNING: &[(&str, f64)] = &[("temperature", 28.0), ("humidity", 95.0)];

/// Build readings from a fixture
pub fn readings(pairs: &[(&str, f64)]) -> Readings {
    pairs.iter().map(|&(name, value)| (name, value)).collect()
}

/// Assert two floats agree within `tolerance`
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} ± {tolerance}, got {actual}"
    );
}
