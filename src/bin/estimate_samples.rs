//! Estimate Samples
//!
//! Prints the estimate for every crop on the sample soil record, then a pH
//! sweep for one crop to show the adjustment bands.
//!
//! Run with: cargo run --bin estimate_samples [crop]

use agriyield::advice::recommendations;
use agriyield::{estimate, Crop, CropSelection, SoilForm};
use anyhow::Result;

fn main() -> Result<()> {
    let sample = SoilForm::sample().parse()?;

    println!("Estimates for the sample soil record\n");
    println!("{}", "=".repeat(72));
    println!(
        "{:<10} {:>10} {:<14} {:>8} {:>12} {:>12} {:>8}",
        "Crop", "Yield", "Unit", "Conf.", "Revenue", "Profit", "vs avg"
    );
    println!("{}", "-".repeat(72));

    for crop in Crop::ALL {
        let selection = CropSelection::new(crop, "Pune, Maharashtra");
        if let Some(p) = estimate(&selection, &sample) {
            println!(
                "{:<10} {:>10.2} {:<14} {:>8} {:>12.0} {:>12.0} {:>7.1}%",
                crop.label(),
                p.yield_value,
                p.yield_unit,
                p.confidence.display_text(),
                p.expected_revenue,
                p.expected_profit,
                p.improvement_pct
            );
        }
    }

    let crop: Crop = match std::env::args().nth(1) {
        Some(name) => name.parse()?,
        None => Crop::Wheat,
    };
    let selection = CropSelection::new(crop, "");

    println!("\npH sweep for {} (sample NPK)\n", crop.label());
    println!("{}", "=".repeat(40));
    for tenths in (45..=85).step_by(5) {
        let ph = f64::from(tenths) / 10.0;
        let soil = agriyield::SoilSample { ph: Some(ph), ..sample };
        if let Some(p) = estimate(&selection, &soil) {
            println!("  pH {:>4.1}: {:>8.2} ({})", ph, p.yield_value, p.confidence.display_text());
        }
    }

    println!("\nAdvice for {} on the sample soil:", crop.label());
    for rec in recommendations(&selection, &sample) {
        println!("  - {}: {}", rec.title, rec.advice);
    }

    Ok(())
}
