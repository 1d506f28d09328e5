//! Score bands.
//!
//! Two tables share the 1..=10 score axis but use different cutoffs, so they
//! are kept separate rather than folded into one row per label.

use serde::Serialize;
use std::fmt;

pub const MIN_SCORE: u8 = 1;
pub const MAX_SCORE: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ComplexityLabel {
    Simple,
    Moderate,
    Complex,
    #[serde(rename = "Very Complex")]
    VeryComplex,
}

impl ComplexityLabel {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Simple => "Simple",
            Self::Moderate => "Moderate",
            Self::Complex => "Complex",
            Self::VeryComplex => "Very Complex",
        }
    }
}

impl fmt::Display for ComplexityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An inclusive score range mapped to a value.
#[derive(Debug, Clone, Copy)]
pub struct Band<T> {
    pub min: u8,
    pub max: u8,
    pub value: T,
}

impl<T> Band<T> {
    pub const fn contains(&self, score: u8) -> bool {
        score >= self.min && score <= self.max
    }
}

pub static LABEL_BANDS: [Band<ComplexityLabel>; 4] = [
    Band { min: 1, max: 3, value: ComplexityLabel::Simple },
    Band { min: 4, max: 5, value: ComplexityLabel::Moderate },
    Band { min: 6, max: 7, value: ComplexityLabel::Complex },
    Band { min: 8, max: 10, value: ComplexityLabel::VeryComplex },
];

pub static EFFORT_BANDS: [Band<&str>; 4] = [
    Band { min: 1, max: 2, value: "1–2 weeks" },
    Band { min: 3, max: 4, value: "2–4 weeks" },
    Band { min: 5, max: 6, value: "1–2 months" },
    Band { min: 7, max: 10, value: "3+ months" },
];

/// Clamp raw points into the score range. Lossy above the ceiling.
pub fn clamp_score(points: u32) -> u8 {
    let ceiling = u32::from(MAX_SCORE);
    // bounded by MAX_SCORE, so the cast cannot truncate
    points.clamp(u32::from(MIN_SCORE), ceiling) as u8
}

pub fn complexity_label(score: u8) -> ComplexityLabel {
    lookup(&LABEL_BANDS, score)
}

pub fn estimated_effort(score: u8) -> &'static str {
    lookup(&EFFORT_BANDS, score)
}

fn lookup<T: Copy>(bands: &[Band<T>; 4], score: u8) -> T {
    let score = score.clamp(MIN_SCORE, MAX_SCORE);
    bands
        .iter()
        .find(|band| band.contains(score))
        .map_or(bands[3].value, |band| band.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_covers_exactly_once<T>(bands: &[Band<T>]) {
        for score in MIN_SCORE..=MAX_SCORE {
            let hits = bands.iter().filter(|b| b.contains(score)).count();
            assert_eq!(hits, 1, "score {score} is covered {hits} times");
        }
        assert!(bands.iter().all(|b| b.min <= b.max));
    }

    #[test]
    fn label_bands_cover_range_once() {
        assert_covers_exactly_once(&LABEL_BANDS);
    }

    #[test]
    fn effort_bands_cover_range_once() {
        assert_covers_exactly_once(&EFFORT_BANDS);
    }

    #[test]
    fn label_boundaries() {
        assert_eq!(complexity_label(1), ComplexityLabel::Simple);
        assert_eq!(complexity_label(3), ComplexityLabel::Simple);
        assert_eq!(complexity_label(4), ComplexityLabel::Moderate);
        assert_eq!(complexity_label(7), ComplexityLabel::Complex);
        assert_eq!(complexity_label(8), ComplexityLabel::VeryComplex);
        assert_eq!(complexity_label(10), ComplexityLabel::VeryComplex);
    }

    #[test]
    fn effort_boundaries_differ_from_label_boundaries() {
        assert_eq!(estimated_effort(2), "1–2 weeks");
        assert_eq!(estimated_effort(3), "2–4 weeks");
        assert_eq!(estimated_effort(6), "1–2 months");
        assert_eq!(estimated_effort(7), "3+ months");
        // 3 is Simple but already in the second effort band
        assert_eq!(complexity_label(3), ComplexityLabel::Simple);
    }

    #[test]
    fn clamp_is_lossy_at_the_ceiling() {
        assert_eq!(clamp_score(0), 1);
        assert_eq!(clamp_score(10), 10);
        assert_eq!(clamp_score(27), 10);
    }
}
