use rand::Rng;

use crate::math::bayes::Priors;
use crate::search::effectiveness::EffectivenessVector;

/// Sample a triangular distribution on `[low, high]` peaking at `mode`
///
/// Inverse CDF sampling from a single uniform draw. Degenerate bounds
/// return `low`, and a mode outside the bounds is clamped into them.
pub fn triangular<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64, mode: f64) -> f64 {
    let width = high - low;
    if width <= 0.0 {
        return low;
    }

    let mode = mode.clamp(low, high);
    let split = (mode - low) / width;
    let u = rng.random::<f64>();

    if u < split {
        low + (u * width * (mode - low)).sqrt()
    } else {
        high - ((1.0 - u) * width * (high - mode)).sqrt()
    }
}

/// Probability of detecting the target in each area this round
///
/// POD for area `i` is `p_i * sep_i`: the chance the target is there
/// times the chance the search covers it.
pub fn probability_of_detection(priors: &Priors, effectiveness: &EffectivenessVector) -> [f64; 3] {
    let p = priors.values();
    let sep = effectiveness.values();
    [p[0] * sep[0], p[1] * sep[1], p[2] * sep[2]]
}

/// Detection probability after repeating an independent search
///
/// `1 - (1 - pod)^times`; zero repetitions never detect.
pub fn repeated_detection(pod: f64, times: u32) -> f64 {
    let miss = (1.0 - pod.clamp(0.0, 1.0)).powi(times.try_into().unwrap_or(i32::MAX));
    1.0 - miss
}
