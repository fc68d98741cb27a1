// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Marquee-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Marquee and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashSet;
use std::fmt;

use super::ids::{CommentId, MovieId};
use super::movie::Movie;

/// The authoritative in-memory movie collection the board runs against.
///
/// Insertion order is significant: the default section renders in it, and
/// the derived sections use it to break ties. Writes are visible to
/// subsequent reads immediately; the board only ever mutates movies through
/// this type, after the backend has confirmed the change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Library {
    movies: Vec<Movie>,
}

impl Library {
    pub fn new(movies: Vec<Movie>) -> Result<Self, LibraryError> {
        let mut seen = HashSet::new();
        for movie in &movies {
            if !seen.insert(movie.movie_id.clone()) {
                return Err(LibraryError::DuplicateMovie { movie_id: movie.movie_id.clone() });
            }
        }
        Ok(Self { movies })
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn movie(&self, movie_id: &MovieId) -> Option<&Movie> {
        self.movies.iter().find(|m| &m.movie_id == movie_id)
    }

    pub fn insert(&mut self, movie: Movie) -> Result<(), LibraryError> {
        if self.movie(&movie.movie_id).is_some() {
            return Err(LibraryError::DuplicateMovie { movie_id: movie.movie_id });
        }
        self.movies.push(movie);
        Ok(())
    }

    /// Replaces the movie with `movie_id` in place, keeping its position.
    pub fn update_movie(&mut self, movie_id: &MovieId, movie: Movie) -> Result<(), LibraryError> {
        let slot = self
            .movies
            .iter_mut()
            .find(|m| &m.movie_id == movie_id)
            .ok_or_else(|| LibraryError::UnknownMovie { movie_id: movie_id.clone() })?;
        *slot = movie;
        Ok(())
    }

    pub fn delete_comment(
        &mut self,
        movie_id: &MovieId,
        comment_id: &CommentId,
    ) -> Result<(), LibraryError> {
        let movie = self
            .movies
            .iter_mut()
            .find(|m| &m.movie_id == movie_id)
            .ok_or_else(|| LibraryError::UnknownMovie { movie_id: movie_id.clone() })?;
        let before = movie.comments.len();
        movie.comments.retain(|c| &c.comment_id != comment_id);
        if movie.comments.len() == before {
            return Err(LibraryError::UnknownComment {
                movie_id: movie_id.clone(),
                comment_id: comment_id.clone(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibraryError {
    DuplicateMovie { movie_id: MovieId },
    UnknownMovie { movie_id: MovieId },
    UnknownComment { movie_id: MovieId, comment_id: CommentId },
}

impl fmt::Display for LibraryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateMovie { movie_id } => {
                write!(f, "movie id already present (id={movie_id})")
            }
            Self::UnknownMovie { movie_id } => write!(f, "movie not found (id={movie_id})"),
            Self::UnknownComment { movie_id, comment_id } => {
                write!(f, "comment not found (movie={movie_id}, comment={comment_id})")
            }
        }
    }
}

impl std::error::Error for LibraryError {}

#[cfg(test)]
mod tests {
    use super::super::fixtures;
    use super::super::ids::{CommentId, MovieId};
    use super::{Library, LibraryError};

    fn mid(value: &str) -> MovieId {
        MovieId::new(value).expect("movie id")
    }

    fn cid(value: &str) -> CommentId {
        CommentId::new(value).expect("comment id")
    }

    #[test]
    fn new_rejects_duplicate_ids() {
        let movie = fixtures::movie("m:1", "Twice", 5.0, 0);
        let result = Library::new(vec![movie.clone(), movie]);
        assert_eq!(
            result,
            Err(LibraryError::DuplicateMovie { movie_id: mid("m:1") })
        );
    }

    #[test]
    fn update_movie_keeps_position() {
        let mut library = fixtures::demo_library();
        let order_before: Vec<_> =
            library.movies().iter().map(|m| m.movie_id.clone()).collect();

        let target = mid("m:3");
        let mut updated = library.movie(&target).expect("movie").clone();
        updated.favorite = true;
        library.update_movie(&target, updated).expect("update");

        let order_after: Vec<_> =
            library.movies().iter().map(|m| m.movie_id.clone()).collect();
        assert_eq!(order_before, order_after);
        assert!(library.movie(&target).expect("movie").favorite);
    }

    #[test]
    fn update_movie_unknown_id_errors() {
        let mut library = fixtures::demo_library();
        let ghost = fixtures::movie("m:ghost", "Ghost", 1.0, 0);
        let result = library.update_movie(&mid("m:ghost"), ghost);
        assert_eq!(result, Err(LibraryError::UnknownMovie { movie_id: mid("m:ghost") }));
    }

    #[test]
    fn delete_comment_removes_only_the_target() {
        let mut library = fixtures::demo_library();
        let target = mid("m:1");
        let before = library.movie(&target).expect("movie").comments.len();
        assert!(before >= 2);

        let victim = library.movie(&target).expect("movie").comments[0].comment_id.clone();
        library.delete_comment(&target, &victim).expect("delete");

        let movie = library.movie(&target).expect("movie");
        assert_eq!(movie.comments.len(), before - 1);
        assert!(movie.comment(&victim).is_none());
    }

    #[test]
    fn delete_comment_unknown_comment_errors() {
        let mut library = fixtures::demo_library();
        let result = library.delete_comment(&mid("m:1"), &cid("c:ghost"));
        assert_eq!(
            result,
            Err(LibraryError::UnknownComment {
                movie_id: mid("m:1"),
                comment_id: cid("c:ghost"),
            })
        );
    }
}
