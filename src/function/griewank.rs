use super::ObjectiveFunction;

/// Griewank function.
///
/// <https://en.wikipedia.org/wiki/Griewank_function>
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct Griewank;

impl ObjectiveFunction for Griewank {
    fn calculate(&self, input: &[f64]) -> f64 {
        let sum: f64 = input.iter().map(|xi| xi * xi).sum();
        // Index starts at one.
        let product = input
            .iter()
            .zip(1u32..)
            .fold(1.0, |acc, (&xi, i)| acc * (xi / f64::from(i).sqrt()).cos());

        1.0 + sum / 4000.0 - product
    }

    fn minimum(&self) -> f64 {
        -600.0
    }

    fn maximum(&self) -> f64 {
        600.0
    }

    fn title(&self) -> &str {
        "Griewank"
    }
}
