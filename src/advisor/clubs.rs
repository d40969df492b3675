use crate::domain::Club;

/// How many clubs the recommender returns at most
pub const MAX_RECOMMENDATIONS: usize = 3;

/// Rank the bag by how closely each club's average carry matches the target
///
/// # Algorithm
/// 1. Drop clubs without a positive average distance (putter, unset clubs)
/// 2. Stable sort by `|average_distance - target|`, so equally close clubs
///    keep their bag order
/// 3. Keep the first [`MAX_RECOMMENDATIONS`]
///
/// An empty bag, or one with no eligible clubs, yields an empty list.
pub fn recommend_clubs(clubs: &[Club], target_distance: f64) -> Vec<&Club> {
    let mut eligible: Vec<&Club> = clubs.iter().filter(|c| c.average_distance > 0.0).collect();

    eligible.sort_by(|a, b| {
        let a_diff = (a.average_distance - target_distance).abs();
        let b_diff = (b.average_distance - target_distance).abs();
        a_diff.total_cmp(&b_diff)
    });

    eligible.truncate(MAX_RECOMMENDATIONS);
    eligible
}

/// Primary pick plus fallbacks, split from [`recommend_clubs`]
#[derive(Debug, Clone, PartialEq)]
pub struct ClubAdvice<'a> {
    pub recommended: Option<&'a Club>,
    pub alternatives: Vec<&'a Club>,
}

impl<'a> ClubAdvice<'a> {
    pub fn for_distance(clubs: &'a [Club], target_distance: f64) -> Self {
        let mut ranked = recommend_clubs(clubs, target_distance).into_iter();
        Self {
            recommended: ranked.next(),
            alternatives: ranked.collect(),
        }
    }
}
