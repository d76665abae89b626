//! Moment checks for generated ARMA(1,1) sample paths.

use saxfreq_arma::{Arma11Params, generate_seeded};

fn mean(data: &[f64]) -> f64 {
    data.iter().sum::<f64>() / data.len() as f64
}

fn variance(data: &[f64]) -> f64 {
    let m = mean(data);
    data.iter().map(|x| (x - m).powi(2)).sum::<f64>() / data.len() as f64
}

#[test]
fn white_noise_moments() {
    // phi = theta = 0 reduces to pure Gaussian noise.
    let sigma = 1.5;
    let params = Arma11Params::new(0.0, 0.0, sigma, 10_000);
    let series = generate_seeded(&params, Some(123)).unwrap();

    let m = mean(&series);
    let v = variance(&series);
    assert!(m.abs() < 0.1, "mean = {m}");
    assert!((v - sigma * sigma).abs() < 0.3, "var = {v}");
}

#[test]
fn ar1_lag1_autocorrelation() {
    // For AR(1): var = sigma^2 / (1 - phi^2), acf(1) = phi.
    let phi = 0.7;
    let params = Arma11Params::new(phi, 0.0, 1.0, 10_000);
    let series = generate_seeded(&params, Some(456)).unwrap();

    let m = mean(&series);
    let v = variance(&series);
    let theoretical_var = 1.0 / (1.0 - phi * phi);
    assert!(m.abs() < 0.2, "mean = {m}");
    assert!(
        (v - theoretical_var).abs() < 0.5,
        "var = {v}, expected = {theoretical_var}"
    );

    let n = series.len() as f64;
    let cov: f64 = series
        .iter()
        .skip(1)
        .zip(series.iter())
        .map(|(a, b)| (a - m) * (b - m))
        .sum::<f64>()
        / n;
    let acf1 = cov / v;
    assert!((acf1 - phi).abs() < 0.1, "acf1 = {acf1}, expected = {phi}");
}

#[test]
fn ma1_variance_and_autocorrelation() {
    // For MA(1): var = sigma^2 * (1 + theta^2), acf(1) = theta / (1 + theta^2).
    let theta = 0.6;
    let sigma = 1.0;
    let params = Arma11Params::new(0.0, theta, sigma, 10_000);
    let series = generate_seeded(&params, Some(789)).unwrap();

    let m = mean(&series);
    let v = variance(&series);
    let theoretical_var = sigma * sigma * (1.0 + theta * theta);
    assert!(
        (v - theoretical_var).abs() < 0.3,
        "var = {v}, expected = {theoretical_var}"
    );

    let n = series.len() as f64;
    let cov: f64 = series
        .iter()
        .skip(1)
        .zip(series.iter())
        .map(|(a, b)| (a - m) * (b - m))
        .sum::<f64>()
        / n;
    let acf1 = cov / v;
    let theoretical_acf1 = theta / (1.0 + theta * theta);
    assert!(
        (acf1 - theoretical_acf1).abs() < 0.1,
        "acf1 = {acf1}, expected = {theoretical_acf1}"
    );
}

#[test]
fn arma11_persistence_exceeds_white_noise() {
    // Positive phi and theta both push lag-1 autocorrelation up, so the
    // combined process should be clearly more persistent than noise.
    let params = Arma11Params::new(0.5, 0.3, 1.0, 10_000);
    let series = generate_seeded(&params, Some(42)).unwrap();

    let m = mean(&series);
    let v = variance(&series);
    let n = series.len() as f64;
    let cov: f64 = series
        .iter()
        .skip(1)
        .zip(series.iter())
        .map(|(a, b)| (a - m) * (b - m))
        .sum::<f64>()
        / n;
    let acf1 = cov / v;
    assert!(acf1 > 0.4, "acf1 = {acf1}");
}
