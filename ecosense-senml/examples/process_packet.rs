//! Example: Processing SenML Packets
//!
//! Feeds three packets through the processor and prints what a dashboard
//! backend would receive:
//!
//! 1. A hot day with wildfire smoke (both alerts)
//! 2. The same conditions with the heat caution tier enabled
//! 3. A corrupted payload (error shape)

use ecosense_core::AlertPolicy;
use ecosense_senml::Processor;

const HOT_SMOKY_DAY: &str = r#"[
  {"bn": "sensor-01", "bt": 1735418000, "n": "pm2.5", "u": "ug/m3", "v": 42.5},
  {"n": "temperature", "u": "Cel", "v": 33.0},
  {"n": "humidity", "u": "%RH", "v": 70.0}
]"#;

const WARM_AFTERNOON: &str = r#"[
  {"bn": "urn:dev:mac:0024befffe804ff1:", "bt": 1735418000, "n": "pm2.5", "u": "ug/m3", "v": 12.5},
  {"n": "temperature", "u": "Cel", "v": 32.0},
  {"n": "humidity", "u": "%RH", "v": 65.0}
]"#;

fn main() {
    println!("=== EcoSense Packet Processing Example ===\n");

    let processor = Processor::default();

    println!("1. Hot day with wildfire smoke");
    println!("{}\n", processor.process_to_json(HOT_SMOKY_DAY));

    println!("2. Warm afternoon, default policy vs. caution tier");
    println!("{}", processor.process_to_json(WARM_AFTERNOON));
    let cautious = Processor::new(AlertPolicy::default().with_heat_caution(true));
    println!("{}\n", cautious.process_to_json(WARM_AFTERNOON));

    println!("3. Corrupted payload");
    println!("{}", processor.process_to_json("[{\"n\": \"pm2.5\", \"v\": "));
}
