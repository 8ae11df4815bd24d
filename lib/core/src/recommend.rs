//! Similarity-based recommendation lookup
//!
//! Given a beer id, rank every beer on the matrix axis by its precomputed
//! similarity score and map the top entries back to catalog records. Ties
//! break toward the lower catalog position so output is deterministic for
//! fixed inputs.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::filter::FilterPredicate;
use crate::matrix::SimilarityMatrix;
use crate::record::{BeerId, BeerRecord};
use crate::{Error, Result};

/// Recommendation count used when the caller does not ask for one.
pub const DEFAULT_RECOMMENDATIONS: usize = 5;

/// Whether the queried beer may appear in its own recommendation list.
///
/// The similarity matrix carries a self-similarity entry on the diagonal,
/// typically the row maximum. `Include` keeps it in the candidate pool, so
/// the top result is usually the queried beer itself; `Exclude` drops it
/// before ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelfPolicy {
    /// Drop the queried beer before ranking
    #[default]
    Exclude,
    /// Rank the queried beer like any other candidate
    Include,
}

/// The result of a filter-then-recommend evaluation.
///
/// `recommendations` is non-empty only when the predicate narrowed the
/// catalog to exactly one record.
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub matches: Vec<BeerRecord>,
    pub recommendations: Vec<(BeerRecord, f32)>,
}

/// Read-only recommendation engine over a catalog and its similarity
/// matrix.
///
/// All state is immutable after construction, so a `Recommender` can be
/// shared across threads without locking.
pub struct Recommender {
    catalog: Arc<Catalog>,
    matrix: Arc<SimilarityMatrix>,
    policy: SelfPolicy,
}

impl Recommender {
    /// Build a recommender, checking that every matrix label resolves to a
    /// catalog record.
    pub fn new(
        catalog: Arc<Catalog>,
        matrix: Arc<SimilarityMatrix>,
        policy: SelfPolicy,
    ) -> Result<Self> {
        matrix.validate_against(&catalog)?;
        Ok(Self {
            catalog,
            matrix,
            policy,
        })
    }

    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[inline]
    #[must_use]
    pub fn matrix(&self) -> &SimilarityMatrix {
        &self.matrix
    }

    #[inline]
    #[must_use]
    pub fn policy(&self) -> SelfPolicy {
        self.policy
    }

    /// The `count` beers most similar to `id`, ranked by descending score.
    ///
    /// Fails with [`Error::UnknownId`] if `id` is absent from the matrix or
    /// the catalog. A `count` beyond the candidate pool truncates to the
    /// pool size; `count == 0` yields an empty list.
    pub fn recommend(&self, id: BeerId, count: usize) -> Result<Vec<(BeerRecord, f32)>> {
        if !self.catalog.contains(id) {
            return Err(Error::UnknownId(id));
        }
        let row = self.matrix.row(id).ok_or(Error::UnknownId(id))?;

        // (catalog position, axis id, score) per surviving candidate
        let mut candidates: Vec<(usize, BeerId, f32)> = Vec::with_capacity(row.len());
        for (col, &score) in row.iter().enumerate() {
            let candidate_id = self.matrix.ids()[col];
            if self.policy == SelfPolicy::Exclude && candidate_id == id {
                continue;
            }
            // Every matrix label has a catalog position, checked at build
            let Some(pos) = self.catalog.position(candidate_id) else {
                continue;
            };
            candidates.push((pos, candidate_id, score));
        }

        candidates.sort_by(|a, b| {
            b.2.partial_cmp(&a.2)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });
        candidates.truncate(count);

        Ok(candidates
            .into_iter()
            .filter_map(|(_, candidate_id, score)| {
                self.catalog.get(candidate_id).map(|r| (r.clone(), score))
            })
            .collect())
    }

    /// Filter the catalog, and when exactly one record survives, recommend
    /// `count` beers for it.
    ///
    /// A missing matrix row for the surviving record degrades to an empty
    /// recommendation list rather than failing the evaluation.
    pub fn evaluate(&self, predicate: &FilterPredicate, count: usize) -> Result<Evaluation> {
        let matches = self.catalog.filter(predicate);

        let recommendations = if matches.len() == 1 {
            match self.recommend(matches[0].id, count) {
                Ok(recs) => recs,
                Err(Error::UnknownId(_)) => Vec::new(),
                Err(e) => return Err(e),
            }
        } else {
            Vec::new()
        };

        Ok(Evaluation {
            matches,
            recommendations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FilterCondition;

    fn sample_catalog() -> Arc<Catalog> {
        Arc::new(
            Catalog::load(vec![
                BeerRecord::new(1, "First").with_state("VIC").with_abv(4.0),
                BeerRecord::new(2, "Second").with_state("NSW").with_abv(5.0),
                BeerRecord::new(3, "Third").with_state("VIC").with_abv(4.5),
            ])
            .unwrap(),
        )
    }

    fn sample_matrix() -> Arc<SimilarityMatrix> {
        Arc::new(
            SimilarityMatrix::new(
                vec![1, 2, 3],
                vec![
                    vec![1.0, 0.2, 0.9],
                    vec![0.2, 1.0, 0.4],
                    vec![0.9, 0.4, 1.0],
                ],
            )
            .unwrap(),
        )
    }

    fn recommender(policy: SelfPolicy) -> Recommender {
        Recommender::new(sample_catalog(), sample_matrix(), policy).unwrap()
    }

    #[test]
    fn test_recommend_excluding_self() {
        let rec = recommender(SelfPolicy::Exclude);
        let recs = rec.recommend(1, 2).unwrap();
        let ids: Vec<_> = recs.iter().map(|(r, _)| r.id).collect();
        assert_eq!(ids, vec![3, 2]);
        assert_eq!(recs[0].1, 0.9);
        assert_eq!(recs[1].1, 0.2);
    }

    #[test]
    fn test_recommend_including_self() {
        let rec = recommender(SelfPolicy::Include);
        let ids: Vec<_> = rec
            .recommend(1, 2)
            .unwrap()
            .iter()
            .map(|(r, _)| r.id)
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_scores_non_increasing() {
        let rec = recommender(SelfPolicy::Include);
        let recs = rec.recommend(3, 3).unwrap();
        assert_eq!(recs.len(), 3);
        for pair in recs.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
    }

    #[test]
    fn test_count_truncates_to_available() {
        let rec = recommender(SelfPolicy::Exclude);
        let recs = rec.recommend(1, 100).unwrap();
        assert_eq!(recs.len(), 2);
    }

    #[test]
    fn test_zero_count_yields_empty() {
        let rec = recommender(SelfPolicy::Exclude);
        assert!(rec.recommend(1, 0).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_id_fails() {
        let rec = recommender(SelfPolicy::Exclude);
        assert!(matches!(rec.recommend(99, 2), Err(Error::UnknownId(99))));
    }

    #[test]
    fn test_ties_break_toward_lower_catalog_position() {
        let catalog = Arc::new(
            Catalog::load(vec![
                BeerRecord::new(10, "a"),
                BeerRecord::new(20, "b"),
                BeerRecord::new(30, "c"),
            ])
            .unwrap(),
        );
        // Beers 20 and 30 score identically against 10
        let matrix = Arc::new(
            SimilarityMatrix::new(
                vec![30, 20, 10],
                vec![
                    vec![1.0, 0.5, 0.7],
                    vec![0.5, 1.0, 0.7],
                    vec![0.7, 0.7, 1.0],
                ],
            )
            .unwrap(),
        );
        let rec = Recommender::new(catalog, matrix, SelfPolicy::Exclude).unwrap();
        let ids: Vec<_> = rec
            .recommend(10, 2)
            .unwrap()
            .iter()
            .map(|(r, _)| r.id)
            .collect();
        assert_eq!(ids, vec![20, 30]);
    }

    #[test]
    fn test_mismatched_matrix_rejected_at_build() {
        let catalog = Arc::new(Catalog::load(vec![BeerRecord::new(1, "only")]).unwrap());
        let matrix = sample_matrix();
        assert!(matches!(
            Recommender::new(catalog, matrix, SelfPolicy::Exclude),
            Err(Error::MalformedMatrix(_))
        ));
    }

    #[test]
    fn test_evaluate_single_match_recommends() {
        let rec = recommender(SelfPolicy::Exclude);
        let predicate = FilterPredicate::new()
            .with(FilterCondition::StateIn(vec!["VIC".to_string()]))
            .with(FilterCondition::AbvBetween { min: 0.0, max: 4.2 });
        let eval = rec.evaluate(&predicate, 2).unwrap();
        assert_eq!(eval.matches.len(), 1);
        assert_eq!(eval.matches[0].id, 1);
        let ids: Vec<_> = eval.recommendations.iter().map(|(r, _)| r.id).collect();
        assert_eq!(ids, vec![3, 2]);
    }

    #[test]
    fn test_evaluate_multiple_matches_no_recommendations() {
        let rec = recommender(SelfPolicy::Exclude);
        let predicate =
            FilterPredicate::new().with(FilterCondition::StateIn(vec!["VIC".to_string()]));
        let eval = rec.evaluate(&predicate, 5).unwrap();
        assert_eq!(eval.matches.len(), 2);
        assert!(eval.recommendations.is_empty());
    }

    #[test]
    fn test_evaluate_no_matches() {
        let rec = recommender(SelfPolicy::Exclude);
        let predicate =
            FilterPredicate::new().with(FilterCondition::StateIn(vec!["TAS".to_string()]));
        let eval = rec.evaluate(&predicate, 5).unwrap();
        assert!(eval.matches.is_empty());
        assert!(eval.recommendations.is_empty());
    }
}
