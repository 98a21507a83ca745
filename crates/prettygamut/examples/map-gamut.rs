use std::str::FromStr;

use prettygamut::error::GamutMethodError;
use prettygamut::{Color, ColorSpace, DeltaE, GamutMapping, GamutMethod};

fn main() -> Result<(), GamutMethodError> {
    // 1. Pick a color that is too colorful for sRGB
    let green = Color::p3(0.0, 1.0, 0.0);
    println!("\n    original   {}", green);

    // 2. Map it into sRGB's gamut in four different ways
    for name in ["clip", "css", "hct", "oklch.c"] {
        let mapping = GamutMapping::new(GamutMethod::from_str(name)?);
        let mapped = green.to(ColorSpace::Srgb).to_gamut_with(&mapping);

        // 3. Compare the results
        println!(
            "    {:<10} {:.4}  ΔE 2000 = {:.2}",
            name,
            mapped,
            green.delta_e(&mapped, DeltaE::E2000)
        );
    }

    println!();
    Ok(())
}
