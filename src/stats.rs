//! Descriptive statistics over selected prices.

use crate::error::StatsError;
use crate::pipeline::Selection;

/// Mean, sample standard deviation and standard error of the mean of one
/// selection. Recomputed for every selection, never cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatisticsResult {
    pub mean: f64,
    pub standard_deviation: f64,
    pub standard_error: f64,
}

/// Arithmetic mean.
pub fn mean(data: &[f64]) -> Result<f64, StatsError> {
    if data.is_empty() {
        return Err(StatsError::EmptyDataSet);
    }
    Ok(data.iter().sum::<f64>() / data.len() as f64)
}

/// Sample standard deviation (Bessel's correction, divides by n - 1).
pub fn sample_standard_deviation(data: &[f64]) -> Result<f64, StatsError> {
    let n = data.len();
    let mean = mean(data)?;
    if n < 2 {
        return Err(StatsError::InsufficientSampleSize { n });
    }
    let sum_sq: f64 = data.iter().map(|x| (x - mean).powi(2)).sum();
    Ok((sum_sq / (n - 1) as f64).sqrt())
}

/// Standard error of the mean: sample standard deviation over sqrt(n).
pub fn standard_error_of_mean(data: &[f64]) -> Result<f64, StatsError> {
    let sd = sample_standard_deviation(data)?;
    Ok(sd / (data.len() as f64).sqrt())
}

/// Summarise the prices of a selection.
pub fn compute_statistics(selection: &Selection<'_>) -> Result<StatisticsResult, StatsError> {
    summarize(&selection.prices())
}

/// Summarise raw values.
pub fn summarize(data: &[f64]) -> Result<StatisticsResult, StatsError> {
    let mean = mean(data)?;
    let standard_deviation = sample_standard_deviation(data)?;
    Ok(StatisticsResult {
        mean,
        standard_deviation,
        standard_error: standard_deviation / (data.len() as f64).sqrt(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::BookRecord;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[10.0, 20.0, 30.0]), Ok(20.0));
        assert_eq!(mean(&[7.5]), Ok(7.5));
    }

    #[test]
    fn test_sample_standard_deviation() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let sd = sample_standard_deviation(&data).unwrap();
        // Sample variance is 32 / 7.
        assert!((sd - (32.0_f64 / 7.0).sqrt()).abs() < EPS);
        assert!((sd - 2.138).abs() < 1e-3);
    }

    #[test]
    fn test_standard_error_of_mean() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let sem = standard_error_of_mean(&data).unwrap();
        assert!((sem - (32.0_f64 / 7.0).sqrt() / 8.0_f64.sqrt()).abs() < EPS);
    }

    #[test]
    fn test_identical_values() {
        let result = summarize(&[5.0, 5.0, 5.0]).unwrap();
        assert_eq!(result.mean, 5.0);
        assert_eq!(result.standard_deviation, 0.0);
        assert_eq!(result.standard_error, 0.0);
    }

    #[test]
    fn test_empty_data() {
        assert_eq!(mean(&[]), Err(StatsError::EmptyDataSet));
        assert_eq!(sample_standard_deviation(&[]), Err(StatsError::EmptyDataSet));
        assert_eq!(standard_error_of_mean(&[]), Err(StatsError::EmptyDataSet));
    }

    #[test]
    fn test_single_value() {
        assert_eq!(
            sample_standard_deviation(&[3.0]),
            Err(StatsError::InsufficientSampleSize { n: 1 })
        );
        assert_eq!(
            standard_error_of_mean(&[3.0]),
            Err(StatsError::InsufficientSampleSize { n: 1 })
        );
    }

    #[test]
    fn test_compute_statistics() {
        let records = [
            BookRecord::new(10.0, "Physics", "A", "T1"),
            BookRecord::new(30.0, "Physics", "C", "T3"),
        ];
        let selection: Selection = records.iter().collect();
        let result = compute_statistics(&selection).unwrap();
        assert_eq!(result.mean, 20.0);
        assert!((result.standard_deviation - 200.0_f64.sqrt()).abs() < EPS);
        assert!((result.standard_error - 10.0).abs() < EPS);
    }

    #[test]
    fn test_compute_statistics_small_selections() {
        let records = [BookRecord::new(10.0, "Physics", "A", "T1")];
        let one: Selection = records.iter().collect();
        assert_eq!(
            compute_statistics(&one),
            Err(StatsError::InsufficientSampleSize { n: 1 })
        );
        let none = Selection::default();
        assert_eq!(compute_statistics(&none), Err(StatsError::EmptyDataSet));
    }
}
