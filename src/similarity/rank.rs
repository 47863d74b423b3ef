//! Ranking candidate digests by edit distance.
//!
//! Scores are raw distances under a [`Costs`] profile: lower is closer.
//! Ties keep input order.

use crate::similarity::costs::Costs;

/// Find the closest candidate, honoring optional limits.
pub fn best_match<'a, I>(
    query: &str,
    candidates: I,
    costs: &Costs,
    max_distance: Option<u32>,
    max_candidates: usize,
) -> Option<(&'a str, u32)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<(&'a str, u32)> = None;
    for cand in candidates.into_iter().take(max_candidates) {
        let d = costs.distance(query, cand);
        if max_distance.is_some_and(|max| d > max) {
            continue;
        }
        match best {
            Some((_, bd)) if d >= bd => {}
            _ => best = Some((cand, d)),
        }
    }
    best
}

/// Return the `k` closest matches within `max_distance`.
pub fn top_k<'a, I>(
    query: &str,
    candidates: I,
    costs: &Costs,
    max_distance: Option<u32>,
    k: usize,
    max_candidates: usize,
) -> Vec<(&'a str, u32)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut scored: Vec<(&'a str, u32)> = candidates
        .into_iter()
        .take(max_candidates)
        .map(|c| (c, costs.distance(query, c)))
        .filter(|&(_, d)| max_distance.map_or(true, |max| d <= max))
        .collect();
    scored.sort_by_key(|&(_, d)| d);
    scored.truncate(k);
    scored
}

/// Distances for every unordered pair `(i, j)` with `i < j`, stopping after
/// `max_pairs` pairs.
pub fn pairwise_distances<S: AsRef<str>>(
    items: &[S],
    costs: &Costs,
    max_pairs: usize,
) -> Vec<(usize, usize, u32)> {
    let n = items.len();
    let mut out = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            if out.len() >= max_pairs {
                return out;
            }
            let d = costs.distance(items[i].as_ref(), items[j].as_ref());
            out.push((i, j, d));
        }
    }
    out
}
