//! Bucket accumulation and weight normalization
//!
//! Tone and topic selections each feed a four-slot accumulator. The totals
//! are normalized into a weight vector that sums to 1; when nothing landed
//! in any bucket the table's fallback distribution is used instead.

use tracing::debug;

/// Four-component weight vector
pub type Weights = [f64; 4];

/// Sums at or below this are treated as "nothing accumulated"
pub const WEIGHT_EPSILON: f64 = 1e-4;

/// Fallback texture weights when no tone label maps to a bucket
pub const TEXTURE_FALLBACK: Weights = [0.35, 0.25, 0.2, 0.2];

/// Fallback motion weights when no topic label maps to a bucket
pub const MOTION_FALLBACK: Weights = [0.5, 0.2, 0.15, 0.15];

/// Normalize `weights` to sum to 1, or return `fallback` when the sum is
/// at or below [`WEIGHT_EPSILON`].
///
/// `fallback` is returned unchanged and must already sum to 1.
pub fn normalize_weights(weights: Weights, fallback: Weights) -> Weights {
    let sum: f64 = weights.iter().sum();
    if sum > WEIGHT_EPSILON {
        weights.map(|w| w / sum)
    } else {
        fallback
    }
}

/// Label → bucket accumulation tables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketTable {
    /// Tone selections → shader texture weights
    ToneTexture,
    /// Topic selections → shader motion weights
    TopicMotion,
}

impl BucketTable {
    /// Buckets a single label contributes one unit to.
    ///
    /// Unlisted labels contribute nothing.
    pub fn buckets(&self, label: &str) -> &'static [usize] {
        match self {
            BucketTable::ToneTexture => match label {
                "Warm" | "Humorous" => &[0],
                "Direct" | "Sarcastic" => &[1],
                "Wise" => &[2],
                "Quirky" => &[3],
                "Laid-back" => &[0, 3],
                "Nerdy" => &[1, 2],
                _ => &[],
            },
            BucketTable::TopicMotion => match label {
                "Nature" | "Yoga" | "Gardening" | "Cooking" | "Animals" | "Photography" => &[0],
                "Sports" | "Fitness" | "Video games" | "Music" => &[1],
                "Pop culture" | "Memes" | "Board games" => &[2],
                "Tarot" | "Mythology" | "Dreams" => &[3],
                "Books" | "Philosophy" | "History" | "Movies" => &[0, 3],
                _ => &[],
            },
        }
    }

    /// Distribution used when the accumulation is all zero
    pub fn fallback(&self) -> Weights {
        match self {
            BucketTable::ToneTexture => TEXTURE_FALLBACK,
            BucketTable::TopicMotion => MOTION_FALLBACK,
        }
    }

    /// Raw per-bucket unit counts for `labels`.
    pub fn accumulate<S: AsRef<str>>(&self, labels: &[S]) -> Weights {
        let mut totals = [0.0; 4];
        for label in labels {
            for &bucket in self.buckets(label.as_ref()) {
                totals[bucket] += 1.0;
            }
        }
        totals
    }

    /// Accumulate and normalize `labels` into a weight vector summing to 1.
    pub fn weights<S: AsRef<str>>(&self, labels: &[S]) -> Weights {
        let raw = self.accumulate(labels);
        let sum: f64 = raw.iter().sum();
        if sum <= WEIGHT_EPSILON {
            debug!("{:?}: no labels mapped to a bucket, using fallback weights", self);
        }
        normalize_weights(raw, self.fallback())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_sums_to_one(weights: Weights) {
        let sum: f64 = weights.iter().sum();
        assert!((sum - 1.0).abs() < 1e-6, "weights {:?} sum to {}", weights, sum);
    }

    #[test]
    fn test_fallbacks_sum_to_one() {
        assert_sums_to_one(TEXTURE_FALLBACK);
        assert_sums_to_one(MOTION_FALLBACK);
    }

    #[test]
    fn test_normalize_divides_by_sum() {
        assert_eq!(normalize_weights([1.0, 0.0, 0.0, 1.0], TEXTURE_FALLBACK), [0.5, 0.0, 0.0, 0.5]);
        assert_eq!(
            normalize_weights([2.0, 2.0, 0.0, 4.0], MOTION_FALLBACK),
            [0.25, 0.25, 0.0, 0.5]
        );
    }

    #[test]
    fn test_normalize_zero_returns_fallback() {
        assert_eq!(normalize_weights([0.0; 4], TEXTURE_FALLBACK), TEXTURE_FALLBACK);
        assert_eq!(normalize_weights([0.00001, 0.0, 0.0, 0.0], MOTION_FALLBACK), MOTION_FALLBACK);
    }

    #[test]
    fn test_tone_warm_quirky() {
        let table = BucketTable::ToneTexture;
        assert_eq!(table.accumulate(&["Warm", "Quirky"]), [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(table.weights(&["Warm", "Quirky"]), [0.5, 0.0, 0.0, 0.5]);
    }

    #[test]
    fn test_tone_multi_bucket_labels() {
        let table = BucketTable::ToneTexture;
        assert_eq!(table.accumulate(&["Laid-back"]), [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(table.accumulate(&["Nerdy"]), [0.0, 1.0, 1.0, 0.0]);
        assert_eq!(
            table.accumulate(&[
                "Warm",
                "Quirky",
                "Wise",
                "Direct",
                "Laid-back",
                "Humorous",
                "Sarcastic",
                "Nerdy",
            ]),
            [3.0, 3.0, 2.0, 2.0]
        );
    }

    #[test]
    fn test_topic_books() {
        let table = BucketTable::TopicMotion;
        assert_eq!(table.accumulate(&["Books"]), [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(table.weights(&["Books"]), [0.5, 0.0, 0.0, 0.5]);
    }

    #[test]
    fn test_topic_groups() {
        let table = BucketTable::TopicMotion;
        assert_eq!(table.accumulate(&["Sports", "Music"]), [0.0, 2.0, 0.0, 0.0]);
        assert_eq!(table.accumulate(&["Memes"]), [0.0, 0.0, 1.0, 0.0]);
        assert_eq!(table.accumulate(&["Yoga", "Photography"]), [2.0, 0.0, 0.0, 0.0]);
        assert_eq!(table.accumulate(&["Dreams"]), [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_unknown_labels_hit_fallback() {
        assert_eq!(BucketTable::ToneTexture.weights(&["Grumpy"]), TEXTURE_FALLBACK);
        assert_eq!(BucketTable::TopicMotion.weights::<&str>(&[]), MOTION_FALLBACK);
        // Tone labels mean nothing to the topic table
        assert_eq!(BucketTable::TopicMotion.weights(&["Warm"]), MOTION_FALLBACK);
    }

    #[test]
    fn test_weights_always_normalized() {
        let tones = crate::catalog::TONES;
        // Every subset of the tone pool
        for mask in 0u32..(1 << tones.len()) {
            let chosen: Vec<&str> = tones
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, t)| *t)
                .collect();
            let weights = BucketTable::ToneTexture.weights(&chosen);
            assert_sums_to_one(weights);
            assert!(weights.iter().all(|w| w.is_finite() && *w >= 0.0));
        }
    }
}
