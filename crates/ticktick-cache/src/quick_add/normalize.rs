//! Name folding and fuzzy suggestions for `~project` references.

use strsim::levenshtein;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Maximum Levenshtein distance to consider a name as a suggestion.
const MAX_SUGGESTION_DISTANCE: usize = 3;

/// Folds a name for comparison: lowercase, accents stripped, and only
/// alphanumerics and `-` kept.
///
/// ```
/// use ticktick_cache_rs::quick_add::fold;
///
/// assert_eq!(fold("Compras Mañana!"), "comprasmanana");
/// assert_eq!(fold("side-project"), "side-project");
/// ```
pub fn fold(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_alphanumeric() || *c == '-')
        .collect()
}

/// Finds the candidate closest to `query` after folding.
///
/// Returns `None` for exact matches and for anything further than
/// [`MAX_SUGGESTION_DISTANCE`] edits away.
pub fn suggest<'a>(query: &str, candidates: impl Iterator<Item = &'a str>) -> Option<&'a str> {
    let query = fold(query);

    let (best, distance) = candidates
        .filter(|name| !name.is_empty())
        .map(|name| (name, levenshtein(&query, &fold(name))))
        .min_by_key(|(_, distance)| *distance)?;

    if distance > 0 && distance <= MAX_SUGGESTION_DISTANCE {
        Some(best)
    } else {
        None
    }
}
