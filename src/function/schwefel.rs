use super::ObjectiveFunction;

/// Schwefel function.
///
/// <https://www.sfu.ca/~ssurjano/schwef.html>
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct Schwefel;

impl ObjectiveFunction for Schwefel {
    fn calculate(&self, input: &[f64]) -> f64 {
        let sum: f64 = input.iter().map(|&xi| xi * xi.abs().sqrt().sin()).sum();

        418.9829 * input.len() as f64 - sum
    }

    fn minimum(&self) -> f64 {
        -500.0
    }

    fn maximum(&self) -> f64 {
        500.0
    }

    fn title(&self) -> &str {
        "Schwefel"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin() {
        assert_eq!(Schwefel.calculate(&[0.0; 4]), 418.9829 * 4.0);
    }

    #[test]
    fn test_near_global_minimum() {
        let value = Schwefel.calculate(&[420.9687; 10]);
        assert!(value.abs() < 1e-3, "{}", value);
    }
}
