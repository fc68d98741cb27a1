// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Marquee-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Marquee and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Section assembly: pure derivations over the library's movie slice.
//!
//! Nothing here mutates its input; every call returns a fresh ordering.
//! All sorts are stable, so equal-rank movies keep their library order.

use crate::model::Movie;

/// Fixed length of the two derived sections.
pub const EXTRA_SECTION_LEN: usize = 2;

/// The three regions of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionKind {
    Default,
    TopRated,
    MostCommented,
}

impl SectionKind {
    pub const ALL: [SectionKind; 3] =
        [SectionKind::Default, SectionKind::TopRated, SectionKind::MostCommented];
}

/// Ordering applied to the default section's working set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortMode {
    #[default]
    Default,
    Rating,
    Date,
}

impl SortMode {
    pub fn label(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Rating => "rating",
            Self::Date => "date",
        }
    }
}

/// The full collection in the order the active sort mode dictates.
///
/// `Default` keeps library order; `Rating` and `Date` sort the whole
/// collection descending. Truncation to the visible count happens at the
/// board, not here.
pub fn working_order(movies: &[Movie], sort_mode: SortMode) -> Vec<Movie> {
    let mut ordered = movies.to_vec();
    match sort_mode {
        SortMode::Default => {}
        SortMode::Rating => {
            ordered.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        }
        SortMode::Date => {
            ordered.sort_by(|a, b| b.release_date_millis.cmp(&a.release_date_millis));
        }
    }
    ordered
}

/// Top `EXTRA_SECTION_LEN` movies by rating, descending.
pub fn top_rated(movies: &[Movie]) -> Vec<Movie> {
    let mut ordered = movies.to_vec();
    ordered.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    ordered.truncate(EXTRA_SECTION_LEN);
    ordered
}

/// Top `EXTRA_SECTION_LEN` movies by comment count, descending.
pub fn most_commented(movies: &[Movie]) -> Vec<Movie> {
    let mut ordered = movies.to_vec();
    ordered.sort_by(|a, b| b.comment_count().cmp(&a.comment_count()));
    ordered.truncate(EXTRA_SECTION_LEN);
    ordered
}

#[cfg(test)]
mod tests {
    use crate::model::fixtures;
    use crate::model::Movie;

    use super::{most_commented, top_rated, working_order, SortMode, EXTRA_SECTION_LEN};

    fn ids(movies: &[Movie]) -> Vec<&str> {
        movies.iter().map(|m| m.movie_id.as_str()).collect()
    }

    fn scenario() -> Vec<Movie> {
        // Ratings 8.5 / 9.1 / 7.0, comment counts 2 / 0 / 5.
        let mut one = fixtures::movie("m:1", "One", 8.5, 300);
        one.comments = vec![
            fixtures::comment("c:1", "m:1", "a", "x"),
            fixtures::comment("c:2", "m:1", "b", "y"),
        ];
        let two = fixtures::movie("m:2", "Two", 9.1, 100);
        let mut three = fixtures::movie("m:3", "Three", 7.0, 200);
        three.comments = (0..5)
            .map(|i| fixtures::comment(&format!("c:3{i}"), "m:3", "c", "z"))
            .collect();
        vec![one, two, three]
    }

    #[test]
    fn top_rated_picks_by_rating_descending() {
        let movies = scenario();
        assert_eq!(ids(&top_rated(&movies)), vec!["m:2", "m:1"]);
    }

    #[test]
    fn most_commented_picks_by_comment_count_descending() {
        let movies = scenario();
        assert_eq!(ids(&most_commented(&movies)), vec!["m:3", "m:1"]);
    }

    #[test]
    fn extras_never_exceed_the_fixed_length() {
        let movies = fixtures::demo_library().movies().to_vec();
        assert!(movies.len() > EXTRA_SECTION_LEN);
        assert_eq!(top_rated(&movies).len(), EXTRA_SECTION_LEN);
        assert_eq!(most_commented(&movies).len(), EXTRA_SECTION_LEN);
    }

    #[test]
    fn extras_break_ties_by_library_order() {
        let movies = vec![
            fixtures::movie("m:a", "A", 7.0, 0),
            fixtures::movie("m:b", "B", 7.0, 0),
            fixtures::movie("m:c", "C", 7.0, 0),
        ];
        assert_eq!(ids(&top_rated(&movies)), vec!["m:a", "m:b"]);
        assert_eq!(ids(&most_commented(&movies)), vec!["m:a", "m:b"]);
    }

    #[test]
    fn assembly_never_mutates_the_input() {
        let movies = scenario();
        let before = movies.clone();
        let _ = top_rated(&movies);
        let _ = most_commented(&movies);
        let _ = working_order(&movies, SortMode::Rating);
        assert_eq!(movies, before);
    }

    #[test]
    fn empty_input_yields_empty_sections() {
        assert!(top_rated(&[]).is_empty());
        assert!(most_commented(&[]).is_empty());
        assert!(working_order(&[], SortMode::Date).is_empty());
    }

    #[test]
    fn working_order_sorts_by_date_descending() {
        let movies = scenario();
        assert_eq!(ids(&working_order(&movies, SortMode::Date)), vec!["m:1", "m:3", "m:2"]);
    }

    #[test]
    fn working_order_default_keeps_library_order() {
        let movies = scenario();
        assert_eq!(ids(&working_order(&movies, SortMode::Default)), vec!["m:1", "m:2", "m:3"]);
    }
}
