//! Core value types: Cartesian and spherical vectors and quaternions.

pub mod cart_vec3;
pub mod polar_vec3;
pub mod quat;

/// Largest absolute component, or `None` when any component is not finite.
pub(crate) fn max_abs(components: &[f64]) -> Option<f64> {
    components
        .iter()
        .try_fold(0.0_f64, |m, c| c.is_finite().then(|| m.max(c.abs())))
}

/// Euclidean norm that neither overflows nor underflows for finite input.
///
/// The plain sum of squares is used while it stays in the normal range;
/// otherwise the components are first divided by the largest magnitude.
/// Non-finite components propagate as `inf` or `NaN`.
pub(crate) fn euclidean_norm(components: &[f64]) -> f64 {
    let sum: f64 = components.iter().map(|c| c * c).sum();
    if sum.is_finite() && sum >= f64::MIN_POSITIVE {
        return sum.sqrt();
    }
    match max_abs(components) {
        Some(m) if m > 0.0 => {
            m * components
                .iter()
                .map(|c| (c / m) * (c / m))
                .sum::<f64>()
                .sqrt()
        }
        _ => sum.sqrt(),
    }
}

#[cfg(test)]
mod tests;
