// ABOUTME: Descriptive statistics used by forecasting, alerts, and reports
// ABOUTME: Mean, population standard deviation, and zero-guarded percentages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

/// Arithmetic mean; `None` for an empty slice
#[must_use]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation (divides by `n`); `None` for an empty slice
#[must_use]
pub fn population_std_dev(values: &[f64]) -> Option<f64> {
    let avg = mean(values)?;
    let variance = values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / values.len() as f64;
    Some(variance.sqrt())
}

/// `part / whole * 100`, or `when_zero` if `whole` is zero
#[must_use]
pub fn percentage_or(part: f64, whole: f64, when_zero: f64) -> f64 {
    if whole == 0.0 {
        when_zero
    } else {
        part / whole * 100.0
    }
}

/// Round to `decimals` places for display
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_and_std_dev_of_constant_series() {
        let values = [12.0, 12.0, 12.0];
        assert_eq!(mean(&values), Some(12.0));
        assert_eq!(population_std_dev(&values), Some(0.0));
    }

    #[test]
    fn test_population_std_dev_divides_by_n() {
        // mean 5, squared deviations sum 32, n = 8
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let sd = population_std_dev(&values).unwrap_or_default();
        assert!((sd - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_inputs_are_none() {
        assert_eq!(mean(&[]), None);
        assert_eq!(population_std_dev(&[]), None);
    }

    #[test]
    fn test_percentage_guards_zero_whole() {
        assert!((percentage_or(5.0, 0.0, 100.0) - 100.0).abs() < f64::EPSILON);
        assert!((percentage_or(1.0, 4.0, 0.0) - 25.0).abs() < f64::EPSILON);
    }
}
