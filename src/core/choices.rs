use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::core::catalog::Catalog;
use crate::models::TagCard;

/// Cards offered per round
pub const CHOICES_PER_ROUND: usize = 4;

/// How many trailing picks are held back from the next round
const RECENT_WINDOW: usize = 2;

const LANDSCAPE_TAGS: &[&str] = &["beach", "mountains", "city", "countryside", "desert", "tropical", "arctic"];
const STYLE_TAGS: &[&str] = &["adventure", "relaxation", "culture", "nightlife", "food"];
const BUDGET_TAGS: &[&str] = &["budget", "luxury"];
const CLIMATE_TAGS: &[&str] = &["warm", "mild", "cold"];

/// Category -> complementary tags pushed to the front of the next round
const BIAS_TABLE: &[(&[&str], &[&str])] = &[
    (LANDSCAPE_TAGS, &["adventure", "relaxation", "food", "culture", "nightlife"]),
    (STYLE_TAGS, &["beach", "mountains", "city", "tropical", "countryside"]),
    (BUDGET_TAGS, &["city", "beach", "food", "relaxation"]),
    (CLIMATE_TAGS, &["beach", "mountains", "arctic", "desert"]),
];

/// Complementary tags for every category `tag` belongs to
fn complements(tag: &str) -> impl Iterator<Item = &'static str> + '_ {
    BIAS_TABLE
        .iter()
        .filter(move |&&(category, _)| category.iter().any(|c| *c == tag))
        .flat_map(|&(_, bias)| bias.iter().copied())
}

/// Bias pool for a history: complements of every pick, duplicates kept
pub fn bias_pool(history: &[String]) -> Vec<&'static str> {
    history.iter().flat_map(|tag| complements(tag)).collect()
}

/// Pick the next round of tag cards
///
/// Tags picked in the last two rounds are held back. Complements of the whole
/// history are tried first (shuffled), then the rest of the catalog
/// (shuffled). When fewer than [`CHOICES_PER_ROUND`] distinct tags are
/// eligible, unused catalog tags are added in declaration order.
pub fn next_choices<'a, R: Rng + ?Sized>(
    catalog: &'a Catalog,
    history: &[String],
    rng: &mut R,
) -> Vec<&'a TagCard> {
    let recent: HashSet<&str> = history
        .iter()
        .skip(history.len().saturating_sub(RECENT_WINDOW))
        .map(String::as_str)
        .collect();

    let mut candidates: Vec<&str> = catalog
        .tags()
        .iter()
        .map(|card| card.id.as_str())
        .filter(|id| !recent.contains(id))
        .collect();
    candidates.shuffle(rng);

    let mut pool: Vec<&str> = bias_pool(history);
    if !pool.is_empty() {
        pool.shuffle(rng);
        pool.retain(|id| catalog.contains_tag(id) && !recent.contains(id));
        tracing::debug!("Prepending {} biased candidates", pool.len());
        pool.extend(candidates);
        candidates = pool;
    }

    let mut seen: HashSet<&str> = HashSet::with_capacity(CHOICES_PER_ROUND);
    let mut selected: Vec<&str> = Vec::with_capacity(CHOICES_PER_ROUND);
    for id in candidates {
        if selected.len() == CHOICES_PER_ROUND {
            break;
        }
        if seen.insert(id) {
            selected.push(id);
        }
    }

    // Fallback: not enough eligible tags outside the recent window
    if selected.len() < CHOICES_PER_ROUND {
        let missing = CHOICES_PER_ROUND - selected.len();
        let fill: Vec<&str> = catalog
            .tags()
            .iter()
            .map(|card| card.id.as_str())
            .filter(|id| !seen.contains(id))
            .take(missing)
            .collect();
        selected.extend(fill);
    }

    selected
        .into_iter()
        .filter_map(|id| catalog.tag(id))
        .collect()
}
