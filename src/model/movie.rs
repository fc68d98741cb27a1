// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Marquee-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Marquee and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use super::ids::{CommentId, MovieId};

/// A comment on a movie.
///
/// Comments belong to exactly one movie; `movie_id` is a back-reference, not
/// ownership. The owning movie keeps its comments as an ordered sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub comment_id: CommentId,
    pub movie_id: MovieId,
    pub author: String,
    pub content: String,
    pub created_at_millis: i64,
}

/// A movie entry as the library and the backend exchange it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub movie_id: MovieId,
    pub title: String,
    pub rating: f64,
    /// Release date as Unix milliseconds; may be negative for pre-1970 films.
    pub release_date_millis: i64,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub watchlist: bool,
    #[serde(default)]
    pub watched: bool,
    #[serde(default)]
    pub favorite: bool,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Movie {
    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }

    pub fn comment(&self, comment_id: &CommentId) -> Option<&Comment> {
        self.comments.iter().find(|c| &c.comment_id == comment_id)
    }
}

#[cfg(test)]
mod tests {
    use super::super::ids::{CommentId, MovieId};
    use super::{Comment, Movie};

    fn movie(id: &str) -> Movie {
        Movie {
            movie_id: MovieId::new(id).expect("movie id"),
            title: "Sample".to_owned(),
            rating: 7.5,
            release_date_millis: 0,
            genres: Vec::new(),
            watchlist: false,
            watched: false,
            favorite: false,
            comments: Vec::new(),
        }
    }

    #[test]
    fn comment_lookup_by_id() {
        let mut m = movie("m:1");
        m.comments.push(Comment {
            comment_id: CommentId::new("c:1").expect("comment id"),
            movie_id: m.movie_id.clone(),
            author: "viewer".to_owned(),
            content: "great".to_owned(),
            created_at_millis: 0,
        });

        let wanted = CommentId::new("c:1").expect("comment id");
        assert!(m.comment(&wanted).is_some());
        let missing = CommentId::new("c:2").expect("comment id");
        assert!(m.comment(&missing).is_none());
    }

    #[test]
    fn movie_json_defaults_optional_fields() {
        let json = r#"{
            "movie_id": "m:1",
            "title": "Sample",
            "rating": 7.5,
            "release_date_millis": 0
        }"#;
        let m: Movie = serde_json::from_str(json).expect("deserialize");
        assert!(m.comments.is_empty());
        assert!(m.genres.is_empty());
        assert!(!m.watched);
    }
}
