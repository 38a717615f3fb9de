//! Maps a predicted depression chance to one of five fixed advice bundles.
//!
//! The ladder is total: every finite input lands in a band, upper bounds
//! inclusive at 20/40/60/80 percent, and out-of-range inputs fall into the
//! nearest band by the same comparisons.

/// Fixed advice content shown for one risk band.
#[derive(Debug, PartialEq, Eq)]
pub struct RecommendationBundle {
    pub message: &'static str,
    pub resources: &'static [&'static str],
}

/// Risk bands over the predicted depression chance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskBand {
    GoodState,
    EarlyStress,
    IncreasingDistress,
    SignificantDistress,
    HighRisk,
}

impl RiskBand {
    pub fn classify(chance: f64) -> RiskBand {
        if chance <= 20.0 {
            RiskBand::GoodState
        } else if chance <= 40.0 {
            RiskBand::EarlyStress
        } else if chance <= 60.0 {
            RiskBand::IncreasingDistress
        } else if chance <= 80.0 {
            RiskBand::SignificantDistress
        } else {
            RiskBand::HighRisk
        }
    }

    pub fn bundle(self) -> &'static RecommendationBundle {
        match self {
            RiskBand::GoodState => &GOOD_STATE,
            RiskBand::EarlyStress => &EARLY_STRESS,
            RiskBand::IncreasingDistress => &INCREASING_DISTRESS,
            RiskBand::SignificantDistress => &SIGNIFICANT_DISTRESS,
            RiskBand::HighRisk => &HIGH_RISK,
        }
    }
}

/// Advice bundle for `chance`, a percentage in `[0, 100]`.
pub fn recommend(chance: f64) -> &'static RecommendationBundle {
    RiskBand::classify(chance).bundle()
}

static GOOD_STATE: RecommendationBundle = RecommendationBundle {
    message: "✅ Status: You seem to be in a good mental state!",
    resources: &[
        "Keep up your positive mindset.",
        "Maintain social connections and a balanced lifestyle.",
        "Exercise regularly and engage in hobbies.",
        "Continue practicing mindfulness and self-care.",
    ],
};

static EARLY_STRESS: RecommendationBundle = RecommendationBundle {
    message: "⚠️ Status: Some early signs of stress or emotional exhaustion.",
    resources: &[
        "Identify stress triggers and find ways to manage them.",
        "Engage in healthy conversations with friends or mentors.",
        "Try meditation, yoga, or deep breathing exercises.",
        "Maintain a proper sleep schedule and avoid excessive screen time.",
    ],
};

static INCREASING_DISTRESS: RecommendationBundle = RecommendationBundle {
    message: "⚠️ Status: Signs of distress are increasing. Take proactive steps.",
    resources: &[
        "Reach out to a trusted friend, family member, or counselor.",
        "Reduce academic pressure with time management techniques.",
        "Engage in regular physical activities like walking or sports.",
        "Consider seeking professional help if feelings persist.",
    ],
};

static SIGNIFICANT_DISTRESS: RecommendationBundle = RecommendationBundle {
    message: "🚨 Status: You may be experiencing significant mental distress.",
    resources: &[
        "Seek guidance from a mental health professional.",
        "Avoid isolation—talk to someone you trust.",
        "Reduce workload and focus on self-care.",
        "Engage in activities that bring relaxation and peace.",
        "Avoid alcohol, smoking, or other unhealthy coping mechanisms.",
    ],
};

static HIGH_RISK: RecommendationBundle = RecommendationBundle {
    message: "🛑 Status: You are at a high risk of depression. Immediate action is needed!",
    resources: &[
        "Contact a psychologist or counselor immediately.",
        "Do not hesitate to seek help from a mental health helpline.",
        "Stay close to supportive friends or family members.",
        "Avoid self-harm or negative thoughts—help is available.",
        "Professional therapy and intervention are strongly recommended.",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries_are_upper_inclusive() {
        assert_eq!(RiskBand::classify(20.0), RiskBand::GoodState);
        assert_eq!(RiskBand::classify(20.01), RiskBand::EarlyStress);
        assert_eq!(RiskBand::classify(40.0), RiskBand::EarlyStress);
        assert_eq!(RiskBand::classify(40.5), RiskBand::IncreasingDistress);
        assert_eq!(RiskBand::classify(60.0), RiskBand::IncreasingDistress);
        assert_eq!(RiskBand::classify(60.5), RiskBand::SignificantDistress);
        assert_eq!(RiskBand::classify(80.0), RiskBand::SignificantDistress);
        assert_eq!(RiskBand::classify(80.01), RiskBand::HighRisk);
    }

    #[test]
    fn out_of_range_inputs_land_in_the_nearest_band() {
        assert_eq!(RiskBand::classify(-5.0), RiskBand::GoodState);
        assert_eq!(RiskBand::classify(0.0), RiskBand::GoodState);
        assert_eq!(RiskBand::classify(100.0), RiskBand::HighRisk);
        assert_eq!(RiskBand::classify(150.0), RiskBand::HighRisk);
    }

    #[test]
    fn recommend_returns_the_band_bundle() {
        assert_eq!(recommend(20.0), &GOOD_STATE);
        assert_eq!(recommend(20.01), &EARLY_STRESS);
        assert_eq!(recommend(55.0), &INCREASING_DISTRESS);
        assert_eq!(recommend(73.25), &SIGNIFICANT_DISTRESS);
        assert_eq!(recommend(99.9), &HIGH_RISK);
    }

    #[test]
    fn resource_counts_follow_the_band_severity() {
        assert_eq!(GOOD_STATE.resources.len(), 4);
        assert_eq!(EARLY_STRESS.resources.len(), 4);
        assert_eq!(INCREASING_DISTRESS.resources.len(), 4);
        assert_eq!(SIGNIFICANT_DISTRESS.resources.len(), 5);
        assert_eq!(HIGH_RISK.resources.len(), 5);
    }

    #[test]
    fn every_band_has_a_status_message_and_content() {
        for band in [
            RiskBand::GoodState,
            RiskBand::EarlyStress,
            RiskBand::IncreasingDistress,
            RiskBand::SignificantDistress,
            RiskBand::HighRisk,
        ] {
            let bundle = band.bundle();
            assert!(bundle.message.contains("Status:"), "{:?}", band);
            assert!(!bundle.resources.is_empty(), "{:?}", band);
        }
    }
}
