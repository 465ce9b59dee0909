//! Accuracy measurement using perceptual color difference metrics
//!
//! Lab batches are compared with CIEDE2000 (deltaE2000). Plain per-channel
//! differences are also reported for the non-perceptual spaces.

use ndarray::{ArrayBase, Axis, Data, Ix4};

/// Statistics from a deltaE comparison
#[derive(Debug, Clone)]
pub struct DeltaEStats {
    /// Mean deltaE across all samples
    pub mean: f64,
    /// Maximum deltaE
    pub max: f64,
    /// 95th percentile deltaE
    pub p95: f64,
    /// Number of samples
    pub count: usize,
}

impl DeltaEStats {
    /// Summarize a set of per-pixel differences
    pub fn from_samples(mut samples: Vec<f64>) -> Self {
        if samples.is_empty() {
            return Self {
                mean: 0.0,
                max: 0.0,
                p95: 0.0,
                count: 0,
            };
        }

        samples.sort_by(f64::total_cmp);

        let count = samples.len();
        let mean = samples.iter().sum::<f64>() / count as f64;
        let max = samples[count - 1];
        let p95 = samples[((count as f64 * 0.95) as usize).min(count - 1)];

        Self {
            mean,
            max,
            p95,
            count,
        }
    }

    /// Check if all differences are imperceptible (deltaE < 1.0)
    pub fn is_excellent(&self) -> bool {
        self.max < 1.0
    }

    /// Check if differences are barely perceptible (deltaE < 2.0)
    pub fn is_good(&self) -> bool {
        self.max < 2.0
    }
}

impl std::fmt::Display for DeltaEStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "n={} mean={:.5} p95={:.5} max={:.5}",
            self.count, self.mean, self.p95, self.max
        )
    }
}

/// deltaE2000 between two Lab colors
///
/// kL = kC = kH = 1. A value of 1.0 is roughly the smallest difference a
/// trained observer can see.
pub fn delta_e_2000(lab1: [f64; 3], lab2: [f64; 3]) -> f64 {
    let [l1, a1, b1] = lab1;
    let [l2, a2, b2] = lab2;

    let c_mean = ((a1.hypot(b1)) + (a2.hypot(b2))) / 2.0;
    let c_mean7 = c_mean.powi(7);
    let g = 0.5 * (1.0 - (c_mean7 / (c_mean7 + 25f64.powi(7))).sqrt());

    let a1p = a1 * (1.0 + g);
    let a2p = a2 * (1.0 + g);
    let c1p = a1p.hypot(b1);
    let c2p = a2p.hypot(b2);

    let hue = |b: f64, a: f64| {
        if a == 0.0 && b == 0.0 {
            0.0
        } else {
            b.atan2(a).to_degrees().rem_euclid(360.0)
        }
    };
    let h1p = hue(b1, a1p);
    let h2p = hue(b2, a2p);

    let dl = l2 - l1;
    let dc = c2p - c1p;

    let dh = if c1p * c2p == 0.0 {
        0.0
    } else if (h2p - h1p).abs() <= 180.0 {
        h2p - h1p
    } else if h2p <= h1p {
        h2p - h1p + 360.0
    } else {
        h2p - h1p - 360.0
    };
    let dh_big = 2.0 * (c1p * c2p).sqrt() * (dh / 2.0).to_radians().sin();

    let l_mean = (l1 + l2) / 2.0;
    let cp_mean = (c1p + c2p) / 2.0;
    let hp_mean = if c1p * c2p == 0.0 {
        h1p + h2p
    } else if (h1p - h2p).abs() <= 180.0 {
        (h1p + h2p) / 2.0
    } else if h1p + h2p < 360.0 {
        (h1p + h2p + 360.0) / 2.0
    } else {
        (h1p + h2p - 360.0) / 2.0
    };

    let t = 1.0 - 0.17 * (hp_mean - 30.0).to_radians().cos()
        + 0.24 * (2.0 * hp_mean).to_radians().cos()
        + 0.32 * (3.0 * hp_mean + 6.0).to_radians().cos()
        - 0.20 * (4.0 * hp_mean - 63.0).to_radians().cos();

    let l50 = (l_mean - 50.0).powi(2);
    let s_l = 1.0 + 0.015 * l50 / (20.0 + l50).sqrt();
    let s_c = 1.0 + 0.045 * cp_mean;
    let s_h = 1.0 + 0.015 * cp_mean * t;

    let d_theta = 30.0 * (-((hp_mean - 275.0) / 25.0).powi(2)).exp();
    let cp_mean7 = cp_mean.powi(7);
    let r_c = 2.0 * (cp_mean7 / (cp_mean7 + 25f64.powi(7))).sqrt();
    let r_t = -r_c * (2.0 * d_theta).to_radians().sin();

    let tl = dl / s_l;
    let tc = dc / s_c;
    let th = dh_big / s_h;

    (tl * tl + tc * tc + th * th + r_t * tc * th).sqrt()
}

fn pixels<S>(images: &ArrayBase<S, Ix4>) -> impl Iterator<Item = [f64; 3]> + '_
where
    S: Data<Elem = f64>,
{
    images.lanes(Axis(3)).into_iter().map(|px| [px[0], px[1], px[2]])
}

/// Compare two Lab batches pixel by pixel with deltaE2000
pub fn compare_lab_batches<S, T>(
    reference: &ArrayBase<S, Ix4>,
    result: &ArrayBase<T, Ix4>,
) -> DeltaEStats
where
    S: Data<Elem = f64>,
    T: Data<Elem = f64>,
{
    assert_eq!(reference.shape(), result.shape());

    let samples = pixels(reference)
        .zip(pixels(result))
        .map(|(a, b)| delta_e_2000(a, b))
        .collect();

    DeltaEStats::from_samples(samples)
}

/// Largest absolute per-channel difference between two batches
pub fn max_abs_diff<S, T>(a: &ArrayBase<S, Ix4>, b: &ArrayBase<T, Ix4>) -> f64
where
    S: Data<Elem = f64>,
    T: Data<Elem = f64>,
{
    assert_eq!(a.shape(), b.shape());
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max)
}

/// Largest per-channel difference relative to the expected magnitude
///
/// Values with magnitude below `floor` are compared absolutely against
/// `floor` so near-zero channels do not blow up the ratio.
pub fn max_rel_diff<S, T>(expected: &ArrayBase<S, Ix4>, actual: &ArrayBase<T, Ix4>, floor: f64) -> f64
where
    S: Data<Elem = f64>,
    T: Data<Elem = f64>,
{
    assert_eq!(expected.shape(), actual.shape());
    expected
        .iter()
        .zip(actual.iter())
        .map(|(e, a)| (e - a).abs() / e.abs().max(floor))
        .fold(0.0, f64::max)
}
