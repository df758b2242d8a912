//! Fast PRNG for review simulation. Uses SplitMix64 for throughput and good statistical quality.
//! Deterministic: same seed produces the same sequence. Not cryptographically secure.

const SPLITMIX64_GOLDEN: u64 = 0x9e3779b97f4a7c15;
const SPLITMIX64_M1: u64 = 0xbf58476d1ce4e5b9;
const SPLITMIX64_M2: u64 = 0x94d049bb133111eb;

#[derive(Debug, Clone, Copy)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(SPLITMIX64_GOLDEN);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(SPLITMIX64_M1);
        z = (z ^ (z >> 27)).wrapping_mul(SPLITMIX64_M2);
        z ^ (z >> 31)
    }

    /// Uniform value in [0, 1) with 53 bits of precision.
    #[inline]
    pub fn next_unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Uniform value in [low, high).
    pub fn next_range(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.next_unit()
    }

    /// Uniform integer in low..=high. Returns `low` when the range is degenerate.
    pub fn next_int_inclusive(&mut self, low: i64, high: i64) -> i64 {
        if high <= low {
            return low;
        }
        let span = (high - low) as u64 + 1;
        low + (self.next_u64() % span) as i64
    }

    /// Normal deviate via Box-Muller. A non-positive sd collapses to the mean,
    /// which keeps zero-noise review configurations exact.
    pub fn next_normal(&mut self, mean: f64, sd: f64) -> f64 {
        if sd <= 0.0 {
            return mean;
        }
        let u1 = 1.0 - self.next_unit(); // (0, 1], keeps ln finite
        let u2 = self.next_unit();
        mean + sd * (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
    }

    /// Uniform random subset of `count` indices out of `0..len`, via partial
    /// Fisher-Yates. Order of the returned indices is the draw order.
    pub fn pick_indices(&mut self, len: usize, count: usize) -> Vec<usize> {
        let count = count.min(len);
        let mut pool: Vec<usize> = (0..len).collect();
        for i in 0..count {
            let j = i + (self.next_u64() % (len - i) as u64) as usize;
            pool.swap(i, j);
        }
        pool.truncate(count);
        pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splitmix64_deterministic() {
        let mut a = Rng::new(7);
        let mut b = Rng::new(7);
        for _ in 0..100 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn splitmix64_different_seeds_differ() {
        let mut a = Rng::new(1);
        let mut b = Rng::new(2);
        assert_ne!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn unit_values_stay_in_half_open_interval() {
        let mut rng = Rng::new(42);
        for _ in 0..10_000 {
            let value = rng.next_unit();
            assert!((0.0..1.0).contains(&value), "out of range: {value}");
        }
    }

    #[test]
    fn int_inclusive_covers_both_endpoints() {
        let mut rng = Rng::new(11);
        let mut seen_low = false;
        let mut seen_high = false;
        for _ in 0..10_000 {
            let value = rng.next_int_inclusive(1, 10);
            assert!((1..=10).contains(&value));
            seen_low |= value == 1;
            seen_high |= value == 10;
        }
        assert!(seen_low && seen_high);
    }

    #[test]
    fn normal_sampling_matches_requested_moments() {
        let mut rng = Rng::new(3);
        let n = 200_000;
        let mut sum = 0.0;
        let mut sum_sq = 0.0;
        for _ in 0..n {
            let value = rng.next_normal(2.0, 0.5);
            sum += value;
            sum_sq += value * value;
        }
        let mean = sum / n as f64;
        let variance = sum_sq / n as f64 - mean * mean;
        assert!((mean - 2.0).abs() < 0.02, "mean drifted: {mean}");
        assert!((variance.sqrt() - 0.5).abs() < 0.02, "sd drifted: {}", variance.sqrt());
    }

    #[test]
    fn zero_sd_normal_is_exact() {
        let mut rng = Rng::new(9);
        assert_eq!(rng.next_normal(4.0, 0.0), 4.0);
    }

    #[test]
    fn picked_indices_are_unique_and_in_range() {
        let mut rng = Rng::new(5);
        let picked = rng.pick_indices(50, 20);
        assert_eq!(picked.len(), 20);
        let mut sorted = picked.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 20);
        assert!(picked.iter().all(|&index| index < 50));
    }

    #[test]
    fn pick_indices_caps_count_at_population() {
        let mut rng = Rng::new(6);
        let picked = rng.pick_indices(4, 10);
        let mut sorted = picked.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![0, 1, 2, 3]);
    }
}
