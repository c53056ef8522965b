use pretty_assertions::assert_eq;
use production_forecast::{
    engine, ForecastError, LinearRegressor, ModelArtifact, ProductEncoder,
};
use rstest::rstest;

fn feature_names() -> Vec<String> {
    vec![
        "Year".to_string(),
        "Month_Num".to_string(),
        "Product_ID".to_string(),
    ]
}

/// Artifact whose regressor predicts `month_num * 10` for every product
fn month_times_ten_artifact() -> ModelArtifact {
    ModelArtifact {
        regressor: LinearRegressor::new(feature_names(), vec![0.0, 10.0, 0.0], 0.0).unwrap(),
        encoder: ProductEncoder::fit(["T-Shirt", "Jacket"]),
        last_year: 2025,
    }
}

/// Artifact whose regressor predicts `code * 7 + 5`, so products differ
fn per_product_artifact() -> ModelArtifact {
    ModelArtifact {
        regressor: LinearRegressor::new(feature_names(), vec![0.0, 0.0, 7.0], 5.0).unwrap(),
        encoder: ProductEncoder::fit(["Hoodie", "Jacket", "Jeans", "Socks", "T-Shirt"]),
        last_year: 2025,
    }
}

#[test]
fn march_forecast_matches_trained_scenario() {
    let artifact = month_times_ten_artifact();

    let outcome = engine::forecast(&artifact, "March", 2026).unwrap();

    assert_eq!(outcome.month_num, 3);
    assert_eq!(outcome.year, 2026);
    // Tie on quantity keeps encoder class order (Jacket sorts before T-Shirt)
    assert_eq!(outcome.items.len(), 2);
    assert_eq!(outcome.items[0].product, "Jacket");
    assert_eq!(outcome.items[0].quantity, 30);
    assert_eq!(outcome.items[1].product, "T-Shirt");
    assert_eq!(outcome.items[1].quantity, 30);
}

#[rstest]
#[case("January")]
#[case("February")]
#[case("March")]
#[case("April")]
#[case("May")]
#[case("June")]
#[case("July")]
#[case("August")]
#[case("September")]
#[case("October")]
#[case("November")]
#[case("December")]
fn output_covers_the_full_vocabulary_for_every_month(#[case] month: &str) {
    let artifact = per_product_artifact();

    let outcome = engine::forecast(&artifact, month, 2026).unwrap();

    assert_eq!(outcome.items.len(), artifact.encoder.len());
}

#[test]
fn output_is_sorted_descending_by_quantity() {
    let artifact = per_product_artifact();

    let outcome = engine::forecast(&artifact, "June", 2026).unwrap();

    for pair in outcome.items.windows(2) {
        assert!(pair[0].quantity >= pair[1].quantity);
    }
    // Highest code first with a positive product coefficient
    assert_eq!(outcome.items[0].product, "T-Shirt");
    assert_eq!(outcome.items[0].quantity, 4 * 7 + 5);
}

#[test]
fn forecast_is_idempotent_for_the_same_request() {
    let artifact = per_product_artifact();

    let first = engine::forecast(&artifact, "August", 2026).unwrap();
    let second = engine::forecast(&artifact, "August", 2026).unwrap();

    assert_eq!(first, second);
}

#[test]
fn predictions_truncate_toward_zero() {
    // month_num * 10 + 0.9 -> March predicts 30.9
    let positive = ModelArtifact {
        regressor: LinearRegressor::new(feature_names(), vec![0.0, 10.0, 0.0], 0.9).unwrap(),
        encoder: ProductEncoder::fit(["T-Shirt"]),
        last_year: 2025,
    };
    let outcome = engine::forecast(&positive, "March", 2026).unwrap();
    assert_eq!(outcome.items[0].quantity, 30);

    // month_num * -10 - 0.9 -> March predicts -30.9; negatives are not
    // clamped and truncate toward zero, not toward negative infinity
    let negative = ModelArtifact {
        regressor: LinearRegressor::new(feature_names(), vec![0.0, -10.0, 0.0], -0.9).unwrap(),
        encoder: ProductEncoder::fit(["T-Shirt"]),
        last_year: 2025,
    };
    let outcome = engine::forecast(&negative, "March", 2026).unwrap();
    assert_eq!(outcome.items[0].quantity, -30);
}

#[test]
fn unknown_month_fails_the_whole_request() {
    let artifact = month_times_ten_artifact();

    let err = engine::forecast(&artifact, "Smarch", 2026).unwrap_err();
    assert!(matches!(err, ForecastError::UnknownMonth(name) if name == "Smarch"));
}

#[test]
fn schema_mismatch_fails_the_whole_request() {
    // Trained against the year-less feature layout
    let artifact = ModelArtifact {
        regressor: LinearRegressor::new(
            vec!["Month_Num".to_string(), "Product_ID".to_string()],
            vec![10.0, 0.0],
            0.0,
        )
        .unwrap(),
        encoder: ProductEncoder::fit(["T-Shirt", "Jacket"]),
        last_year: 2025,
    };

    let err = engine::forecast(&artifact, "March", 2026).unwrap_err();
    assert!(matches!(err, ForecastError::SchemaMismatch(_)));
}
