use text_regression::{evaluate, fit, Document, FeatureEncoder, DEFAULT_FEATURE_ENCODER_CONFIG};

fn main() {
    #[cfg(feature = "logger-support")]
    env_logger::init();

    let reviews = [
        ("r1", "great phone with a superb battery", 4.8),
        ("r2", "terrible screen and awful battery", 1.2),
        ("r3", "superb camera and great screen", 4.5),
        ("r4", "awful support and a terrible camera", 1.5),
        ("r5", "great value and superb support", 4.2),
        ("r6", "awful value and terrible support", 1.1),
    ];

    let documents: Vec<Document> = reviews
        .iter()
        .map(|&(id, text, label)| Document::new(id, text, label).unwrap())
        .collect();

    let labels: Vec<f64> = documents.iter().map(|document| document.label()).collect();

    let encoder = FeatureEncoder::new(DEFAULT_FEATURE_ENCODER_CONFIG)
        .fit(&documents)
        .unwrap();
    let features = encoder.apply_all(&documents).unwrap();

    let model = fit(&features, &labels, 0.05, 1.0).unwrap();
    let metrics = evaluate(&model.predict(&features).unwrap(), &labels).unwrap();

    println!(
        "Fitted {} of {} terms; training RMSE {:.3}, R² {:.3}",
        model.n_nonzero(),
        model.n_features(),
        metrics.rmse,
        metrics.r_squared
    );

    for (token, coefficient) in encoder.vocabulary().tokens().iter().zip(model.coefficients()) {
        if *coefficient != 0.0 {
            println!("{:>8.3}  {}", coefficient, token);
        }
    }
}
