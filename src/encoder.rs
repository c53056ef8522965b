//! Product identity encoding

use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};

/// Bijective mapping between product display names and integer codes.
///
/// The class list is fixed when the encoder is fitted and defines the row
/// order used everywhere else: forecasts are computed and tie-broken in
/// class order. Classes are sorted lexicographically and de-duplicated at
/// fit time, so the code of a product is its position in the sorted list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductEncoder {
    classes: Vec<String>,
}

impl ProductEncoder {
    /// Fit an encoder on a set of product names
    pub fn fit<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut classes: Vec<String> = names.into_iter().map(Into::into).collect();
        classes.sort();
        classes.dedup();
        Self { classes }
    }

    /// The full class vocabulary, in encoding order
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Number of distinct products known to the encoder
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Check whether the vocabulary is empty
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Encode a product name to its integer code
    pub fn transform(&self, name: &str) -> Result<u32> {
        self.classes
            .iter()
            .position(|c| c == name)
            .map(|idx| idx as u32)
            .ok_or_else(|| ForecastError::UnknownProduct(name.to_string()))
    }

    /// Encode the entire vocabulary, in class order
    pub fn transform_all(&self) -> Vec<u32> {
        (0..self.classes.len() as u32).collect()
    }

    /// Decode an integer code back to its product name
    pub fn inverse_transform(&self, code: u32) -> Result<&str> {
        self.classes
            .get(code as usize)
            .map(String::as_str)
            .ok_or_else(|| {
                ForecastError::UnknownProduct(format!("code {} out of range", code))
            })
    }
}
