use production_forecast::{engine, report, LinearRegressor, ModelArtifact, ProductEncoder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Build a small synthetic artifact the way the trainer would write it
    let encoder = ProductEncoder::fit(["T-Shirt", "Jacket", "Jeans", "Hoodie", "Socks"]);
    let regressor = LinearRegressor::new(
        vec![
            "Year".to_string(),
            "Month_Num".to_string(),
            "Product_ID".to_string(),
        ],
        vec![1.5, 120.0, 350.0],
        -2500.0,
    )?;
    let artifact = ModelArtifact {
        regressor,
        encoder,
        last_year: 2025,
    };

    // Round-trip through the on-disk format
    let path = std::env::temp_dir().join("production_ai_brain_demo.json");
    artifact.save(&path)?;
    println!("Artifact written to: {}", path.display());

    let loaded = ModelArtifact::load(&path)?;
    let year = loaded.default_forecast_year();

    // Forecast March for every trained product and render the report
    let outcome = engine::forecast(&loaded, "March", year)?;
    report::render_report(&mut std::io::stdout(), &outcome)?;

    // The detail table as CSV, as the export view would hand it out
    println!();
    println!("CSV export:");
    report::write_csv(std::io::stdout(), &outcome)?;

    Ok(())
}
