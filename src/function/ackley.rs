use std::f64::consts::PI;

use super::ObjectiveFunction;

const A: f64 = 20.0;
const B: f64 = 0.2;
const C: f64 = 2.0 * PI;

/// Ackley function.
///
/// Global minimum `0` at the origin. <https://www.sfu.ca/~ssurjano/ackley.html>
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct Ackley;

impl ObjectiveFunction for Ackley {
    fn calculate(&self, input: &[f64]) -> f64 {
        let n = input.len() as f64;
        let (squares, cosines) = input.iter().fold((0f64, 0f64), |(squares, cosines), &xi| {
            (squares + xi * xi, cosines + (C * xi).cos())
        });

        -A * (-B * (squares / n).sqrt()).exp() - (cosines / n).exp() + A + 1f64.exp()
    }

    fn minimum(&self) -> f64 {
        -32.768
    }

    fn maximum(&self) -> f64 {
        32.768
    }

    fn title(&self) -> &str {
        "Ackley"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_is_optimum() {
        assert!(Ackley.calculate(&[0.0; 100]).abs() < 1e-12);
        assert!(Ackley.calculate(&[0.0]).abs() < 1e-12);
    }

    #[test]
    fn test_away_from_origin_is_worse() {
        assert!(Ackley.calculate(&[1.0, -1.0]) > Ackley.calculate(&[0.0, 0.0]));
        assert!(Ackley.calculate(&[30.0; 10]) > 15.0);
    }
}
