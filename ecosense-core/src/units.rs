//! Temperature unit conversions
//!
//! The heat index regressions are defined in Fahrenheit while sensors report
//! Celsius, so every heat index evaluation converts in and back out.

/// Convert degrees Celsius to degrees Fahrenheit
#[inline]
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Convert degrees Fahrenheit to degrees Celsius
#[inline]
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}
