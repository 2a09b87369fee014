//! Aggregated evaluation results.

use serde::Serialize;

/// Per-record structural accuracies and their mean, the shape reported at
/// the end of an evaluation run.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationReport {
    /// One structural-accuracy score per evaluated record.
    pub accuracies: Vec<f64>,
    /// Mean of `accuracies`; 0.0 for an empty run.
    pub mean_accuracy: f64,
}

impl EvaluationReport {
    /// Builds a report from per-record scores.
    pub fn from_scores(accuracies: Vec<f64>) -> Self {
        let mean_accuracy = mean(&accuracies);
        Self {
            accuracies,
            mean_accuracy,
        }
    }

    /// Number of evaluated records.
    pub fn len(&self) -> usize {
        self.accuracies.len()
    }

    /// Whether the run evaluated no records.
    pub fn is_empty(&self) -> bool {
        self.accuracies.is_empty()
    }
}

/// Mean of per-record normalized edit distances, the proxy metric logged
/// during validation steps.
pub fn mean_edit_distance(distances: &[f64]) -> f64 {
    mean(distances)
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_mean() {
        let report = EvaluationReport::from_scores(vec![1.0, 0.5, 0.0]);
        assert!((report.mean_accuracy - 0.5).abs() < 1e-12);
        assert_eq!(report.len(), 3);
    }

    #[test]
    fn test_empty_report() {
        let report = EvaluationReport::from_scores(Vec::new());
        assert!(report.is_empty());
        assert_eq!(report.mean_accuracy, 0.0);
    }

    #[test]
    fn test_report_serializes() {
        let report = EvaluationReport::from_scores(vec![1.0, 0.0]);
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(json, r#"{"accuracies":[1.0,0.0],"mean_accuracy":0.5}"#);
    }

    #[test]
    fn test_mean_edit_distance() {
        assert!((mean_edit_distance(&[0.2, 0.4]) - 0.3).abs() < 1e-12);
        assert_eq!(mean_edit_distance(&[]), 0.0);
    }
}
