use rust_fuzzy_search::fuzzy_compare;

use crate::domain::contact::Contact;

/// A candidate contact and how closely its name matched the query.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub contact: Contact,
    pub score: f32,
}

pub type Scorer = fn(&str, &str) -> f32;

/// Picks the contacts whose names sit closest to a spoken name.
///
/// The scorer is swappable; only the selection policy matters: every
/// candidate tied for the top score is returned, in candidate order.
#[derive(Debug, Clone, Copy)]
pub struct NameResolver {
    scorer: Scorer,
}

impl Default for NameResolver {
    fn default() -> Self {
        Self {
            scorer: fuzzy_compare,
        }
    }
}

impl NameResolver {
    pub fn with_scorer(scorer: Scorer) -> Self {
        Self { scorer }
    }

    pub fn score(&self, query: &str, name: &str) -> f32 {
        let score = (self.scorer)(&query.to_lowercase(), &name.to_lowercase());
        if score.is_nan() { 0.0 } else { score.clamp(0.0, 1.0) }
    }

    pub fn resolve(&self, query: &str, candidates: &[Contact]) -> Vec<Match> {
        let query = query.trim();
        if query.is_empty() || candidates.is_empty() {
            return Vec::new();
        }

        let mut best: Vec<Match> = Vec::new();

        for contact in candidates {
            let score = self.score(query, &contact.name);

            match best.first() {
                Some(top) if score < top.score => {}
                Some(top) if score == top.score => best.push(Match {
                    contact: contact.clone(),
                    score,
                }),
                _ => {
                    best.clear();
                    best.push(Match {
                        contact: contact.clone(),
                        score,
                    });
                }
            }
        }

        best
    }
}

/// Best match with the default fuzzy scorer.
pub fn resolve(query: &str, candidates: &[Contact]) -> Vec<Match> {
    NameResolver::default().resolve(query, candidates)
}
