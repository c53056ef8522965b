//! Forecast computation over the full product vocabulary

use crate::artifact::ModelArtifact;
use crate::calendar;
use crate::error::Result;
use polars::prelude::*;

/// One product's predicted production quantity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductForecast {
    /// Product display name
    pub product: String,
    /// Suggested production quantity
    pub quantity: i64,
}

/// A computed forecast for a (month, year) target period
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastOutcome {
    /// Month display name of the target period
    pub month_name: String,
    /// Numeric month code (1-12)
    pub month_num: u32,
    /// Target year
    pub year: i32,
    /// Per-product forecasts, sorted by quantity descending; ties keep
    /// encoder class order
    pub items: Vec<ProductForecast>,
}

/// Forecast production quantities for every trained product.
///
/// Builds one input row per product in encoder class order, runs the
/// regressor once on the whole batch, and truncates each prediction toward
/// zero (direct integer cast, as observed in the trained pipeline; negative
/// predictions are kept as-is). Any failure is fatal for the request, there
/// is no partial result and no retry.
pub fn forecast(artifact: &ModelArtifact, month_name: &str, year: i32) -> Result<ForecastOutcome> {
    let month_num = calendar::month_number(month_name)?;

    let products = artifact.encoder.classes();
    let codes: Vec<i64> = artifact
        .encoder
        .transform_all()
        .into_iter()
        .map(|c| c as i64)
        .collect();

    let batch = DataFrame::new(vec![
        Series::new("Year", vec![year as i64; products.len()]),
        Series::new("Month_Num", vec![month_num as i64; products.len()]),
        Series::new("Product_ID", codes),
    ])?;

    let predictions = artifact.regressor.predict(&batch)?;

    let mut items: Vec<ProductForecast> = products
        .iter()
        .zip(predictions.iter())
        .map(|(product, prediction)| ProductForecast {
            product: product.clone(),
            quantity: *prediction as i64,
        })
        .collect();

    // Vec::sort_by is stable, so equal quantities keep class order
    items.sort_by(|a, b| b.quantity.cmp(&a.quantity));

    Ok(ForecastOutcome {
        month_name: month_name.to_string(),
        month_num,
        year,
        items,
    })
}
