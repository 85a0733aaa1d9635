use crate::{
    config::{NormalizationMethod, Pct},
    utils::{is_flat, mean_and_sample_stddev, min_max, remap},
};

impl NormalizationMethod {
    /// Places `history`'s last value on the unit scale relative to the whole history.
    /// `history` must end with the value being normalized.
    /// A single value or a degenerate spread gives the neutral 0.5.
    pub fn normalize_last(&self, history: &[f64]) -> Pct {
        let Some(&current) = history.last() else {
            return Pct::HALF;
        };
        if history.len() < 2 {
            return Pct::HALF;
        }

        match *self {
            NormalizationMethod::MinMax => {
                let Some((min, max)) = min_max(history) else {
                    return Pct::HALF;
                };
                if is_flat(max - min, max) {
                    return Pct::HALF;
                }
                Pct::new((current - min) / (max - min))
            }
            NormalizationMethod::ZScore { clip } => {
                let (mean, sd) = mean_and_sample_stddev(history);
                if is_flat(sd, mean) {
                    return Pct::HALF;
                }
                let z = (current - mean) / sd;
                Pct::new(remap(z, -clip, clip, 0.0, 1.0))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_max_places_current_between_extremes() {
        let m = NormalizationMethod::MinMax;
        assert_eq!(m.normalize_last(&[1.0, 3.0, 2.0]).value(), 0.5);
        assert_eq!(m.normalize_last(&[1.0, 3.0, 3.0]).value(), 1.0);
        assert_eq!(m.normalize_last(&[1.0, 3.0, 1.0]).value(), 0.0);
    }

    #[test]
    fn degenerate_history_is_neutral() {
        for m in [
            NormalizationMethod::MinMax,
            NormalizationMethod::ZScore { clip: 2.0 },
        ] {
            assert_eq!(m.normalize_last(&[]), Pct::HALF);
            assert_eq!(m.normalize_last(&[0.7]), Pct::HALF);
            assert_eq!(m.normalize_last(&[0.0, 0.0, 0.0]), Pct::HALF);
        }
    }

    #[test]
    fn z_score_maps_clip_range_onto_unit() {
        let m = NormalizationMethod::ZScore { clip: 2.0 };
        // mean 2, sample sd 1 -> z(3) = 1 -> (1/2 + 1)/2 = 0.75
        let v = m.normalize_last(&[1.0, 2.0, 3.0]).value();
        assert!((v - 0.75).abs() < 1e-12);

        let tight = NormalizationMethod::ZScore { clip: 0.5 };
        assert_eq!(tight.normalize_last(&[1.0, 2.0, 3.0]).value(), 1.0);
    }
}
