use std::collections::HashSet;

use crate::models::{Destination, ScoringWeights, SurveyAnswers};

/// Calculate a destination's affinity score for a finished session
///
/// Scoring formula (every rule is additive and independent):
/// score = (
///     tag_overlap * |history ∩ tags| +   # Shared picks dominate
///     budget      [budget/luxury match] +
///     climate     [climate answer is a destination tag] +
///     pace        [chill -> relaxation, packed -> city|adventure] +
///     companions  [family/friends/couple style match] +
///     food        [food picked and destination has food]
/// )
///
/// Nothing subtracts, so the minimum is 0.0.
pub fn calculate_destination_score(
    destination: &Destination,
    answers: &SurveyAnswers,
    history: &[String],
    weights: &ScoringWeights,
) -> f64 {
    let picked: HashSet<&str> = history.iter().map(String::as_str).collect();

    let overlap = destination
        .tags
        .iter()
        .map(String::as_str)
        .collect::<HashSet<_>>()
        .intersection(&picked)
        .count();

    let mut score = weights.tag_overlap * overlap as f64;

    if budget_matches(destination, answers) {
        score += weights.budget;
    }
    if climate_matches(destination, answers) {
        score += weights.climate;
    }
    if pace_matches(destination, answers) {
        score += weights.pace;
    }
    if companions_match(destination, answers) {
        score += weights.companions;
    }

    // Small bonus for food lovers
    if picked.contains("food") && destination.has_tag("food") {
        score += weights.food;
    }

    score
}

#[inline]
fn budget_matches(destination: &Destination, answers: &SurveyAnswers) -> bool {
    match answers.budget.as_str() {
        "budget" => destination.has_tag("budget"),
        "luxury" => destination.has_tag("luxury"),
        _ => false,
    }
}

#[inline]
fn climate_matches(destination: &Destination, answers: &SurveyAnswers) -> bool {
    answers
        .climate
        .as_deref()
        .is_some_and(|climate| !climate.is_empty() && destination.has_tag(climate))
}

#[inline]
fn pace_matches(destination: &Destination, answers: &SurveyAnswers) -> bool {
    match answers.pace.as_deref() {
        Some("chill") => destination.has_tag("relaxation"),
        Some("packed") => destination.has_any_tag(&["city", "adventure"]),
        _ => false,
    }
}

#[inline]
fn companions_match(destination: &Destination, answers: &SurveyAnswers) -> bool {
    match answers.companions.as_deref() {
        Some("family") => destination.has_any_tag(&["beach", "relaxation"]),
        Some("friends") => destination.has_tag("nightlife"),
        Some("couple") => destination.has_any_tag(&["culture", "relaxation"]),
        _ => false,
    }
}
