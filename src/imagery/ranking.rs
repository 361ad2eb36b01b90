use std::cmp::Ordering;

use super::favorites::FavoriteSet;
use super::source::Source;

/// Favorites, then best, then larger area, then name.
pub fn compare_sources(a: &Source, b: &Source, favorites: &FavoriteSet) -> Ordering {
    favorites
        .contains(&b.id)
        .cmp(&favorites.contains(&a.id))
        .then_with(|| b.best.cmp(&a.best))
        .then_with(|| b.area.total_cmp(&a.area))
        .then_with(|| a.name.cmp(&b.name))
}

/// Stable sort; equal sources keep catalog order.
pub fn sort_sources(sources: &mut [Source], favorites: &FavoriteSet) {
    sources.sort_by(|a, b| compare_sources(a, b, favorites));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imagery::source::SourceId;

    fn names(sources: &[Source]) -> Vec<&str> {
        sources.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn ranks_favorites_best_area_then_name() {
        let mut sources = vec![
            Source::new("c", "Charlie").with_area(10.0),
            Source::new("a", "Alpha").with_area(10.0),
            Source::new("big", "Big").with_area(500.0),
            Source::new("best", "Best").best(),
            Source::new("fav", "Fav"),
        ];
        let mut favorites = FavoriteSet::new();
        favorites.toggle(&SourceId::from_string("fav"));
        sort_sources(&mut sources, &favorites);
        assert_eq!(names(&sources), vec!["Fav", "Best", "Big", "Alpha", "Charlie"]);
    }

    #[test]
    fn ties_keep_input_order() {
        let mut sources = vec![Source::new("x", "Same"), Source::new("y", "Same")];
        sort_sources(&mut sources, &FavoriteSet::new());
        assert_eq!(sources[0].id.as_str(), "x");
    }
}
