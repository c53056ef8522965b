//! Trained regression model with a fixed feature schema

use crate::error::{ForecastError, Result};
use polars::prelude::*;
use serde::{Deserialize, Serialize};

/// A linear regressor trained outside this crate and shipped inside the
/// model artifact.
///
/// The feature schema is part of the trained state: `predict` rejects any
/// batch whose column names differ from `feature_names` in spelling or
/// order, because the coefficients were fitted against exactly that layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearRegressor {
    feature_names: Vec<String>,
    coefficients: Vec<f64>,
    intercept: f64,
}

impl LinearRegressor {
    /// Create a regressor from trained parameters
    pub fn new(
        feature_names: Vec<String>,
        coefficients: Vec<f64>,
        intercept: f64,
    ) -> Result<Self> {
        if feature_names.is_empty() {
            return Err(ForecastError::InvalidParameter(
                "Regressor needs at least one feature".to_string(),
            ));
        }
        if feature_names.len() != coefficients.len() {
            return Err(ForecastError::InvalidParameter(format!(
                "Feature count ({}) doesn't match coefficient count ({})",
                feature_names.len(),
                coefficients.len()
            )));
        }

        Ok(Self {
            feature_names,
            coefficients,
            intercept,
        })
    }

    /// The column names the regressor was trained on, in training order
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Predict one value per row of the input batch.
    ///
    /// The whole batch is evaluated in a single call; output order matches
    /// row order. Any schema or dtype problem fails the entire call, there
    /// is no partial result.
    pub fn predict(&self, batch: &DataFrame) -> Result<Vec<f64>> {
        let batch_columns = batch.get_column_names();
        let expected: Vec<&str> = self.feature_names.iter().map(String::as_str).collect();
        if batch_columns != expected {
            return Err(ForecastError::SchemaMismatch(format!(
                "expected columns {:?}, got {:?}",
                expected, batch_columns
            )));
        }

        let n = batch.height();
        let mut features = Vec::with_capacity(self.feature_names.len());
        for name in &self.feature_names {
            let values = column_as_f64(batch, name)?;
            if values.len() != n {
                return Err(ForecastError::PredictionError(format!(
                    "Column '{}' has {} values for {} rows (nulls present?)",
                    name,
                    values.len(),
                    n
                )));
            }
            features.push(values);
        }

        let mut predictions = Vec::with_capacity(n);
        for row in 0..n {
            let mut value = self.intercept;
            for (coefficient, column) in self.coefficients.iter().zip(features.iter()) {
                value += coefficient * column[row];
            }
            predictions.push(value);
        }

        Ok(predictions)
    }
}

/// Get a column of the batch as f64 values
fn column_as_f64(df: &DataFrame, column_name: &str) -> Result<Vec<f64>> {
    let col = df.column(column_name).map_err(|e| {
        ForecastError::PredictionError(format!("Column '{}' not found: {}", column_name, e))
    })?;

    match col.dtype() {
        DataType::Float64 => Ok(col.f64().unwrap().into_iter().flatten().collect()),
        DataType::Float32 => Ok(col
            .f32()
            .unwrap()
            .into_iter()
            .flatten()
            .map(|v| v as f64)
            .collect()),
        DataType::Int64 => Ok(col
            .i64()
            .unwrap()
            .into_iter()
            .flatten()
            .map(|v| v as f64)
            .collect()),
        DataType::Int32 => Ok(col
            .i32()
            .unwrap()
            .into_iter()
            .flatten()
            .map(|v| v as f64)
            .collect()),
        DataType::UInt64 => Ok(col
            .u64()
            .unwrap()
            .into_iter()
            .flatten()
            .map(|v| v as f64)
            .collect()),
        DataType::UInt32 => Ok(col
            .u32()
            .unwrap()
            .into_iter()
            .flatten()
            .map(|v| v as f64)
            .collect()),
        _ => Err(ForecastError::PredictionError(format!(
            "Column '{}' cannot be converted to f64",
            column_name
        ))),
    }
}
