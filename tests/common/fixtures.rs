//! Test fixtures for integration tests.

use std::sync::Arc;

use synoscore::scoring::{ScoringConfig, SynopsisScorer};
use synoscore::segment::RuleSplitter;
use synoscore::similarity::TfidfOracle;

/// Twelve-sentence article shared across the integration suites.
///
/// Mid-sentence words are deliberately lowercase so the anonymization pass
/// leaves the text unchanged and score comparisons stay stable.
pub const SAMPLE_ARTICLE: &str = "Glaciers across the high mountain ranges store vast reserves of fresh water. \
    Their seasonal melt feeds rivers that sustain farms and cities far downstream. \
    Over the last four decades the rate of glacial retreat has doubled. \
    Warmer summers strip away more ice than winter snowfall can replace. \
    Researchers monitor the retreat with satellite surveys and field expeditions. \
    Meltwater lakes now form where solid ice stood a generation ago. \
    These lakes can burst through their natural dams and flood the valleys below. \
    Coastal communities face rising seas fed in part by the lost ice. \
    Regional water planners must prepare for rivers that swell early and run dry late. \
    International teams now share monitoring data through open archives. \
    The combined record shows the retreat accelerating on every continent. \
    Policy makers cite the record when they negotiate emission targets.";

/// A synopsis that shares vocabulary and structure with the article, at
/// roughly a fifth of its length.
pub const GOOD_SYNOPSIS: &str = "Glaciers feeding rivers and coasts are retreating faster each decade. \
    Surveys show meltwater lakes forming and flood risk growing. \
    Planners rely on the shared record for emission targets.";

/// A synopsis of comparable length with no vocabulary overlap.
pub const UNRELATED_SYNOPSIS: &str = "The recipe folds toasted almonds into saffron rice. \
    A slow simmer builds the broth before the vegetables join. \
    Serve the dish warm with flatbread and yogurt.";

/// Builds a TF-IDF evaluation engine with the given tunables.
pub fn tfidf_scorer(config: ScoringConfig) -> SynopsisScorer {
    SynopsisScorer::new(
        Arc::new(TfidfOracle::new()),
        Arc::new(RuleSplitter::new()),
        config,
    )
    .expect("scoring config is valid")
}
