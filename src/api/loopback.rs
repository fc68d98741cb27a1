// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Marquee-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Marquee and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! In-process backend used by the binary and the demo.
//!
//! Keeps its own authoritative copy of the collection and reproduces the
//! real backend's behavior, including the comment-stripping `update_movie`
//! echo and server-assigned comment ids.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::sleep;

use crate::model::{Comment, CommentId, Movie, MovieId};

use super::{ApiClient, ApiError, CommentDraft};

#[derive(Debug)]
struct Backend {
    movies: Vec<Movie>,
    next_comment: u64,
}

impl Backend {
    fn movie_mut(&mut self, movie_id: &MovieId) -> Result<&mut Movie, ApiError> {
        self.movies.iter_mut().find(|m| &m.movie_id == movie_id).ok_or_else(|| {
            ApiError::Rejected { status: 404, message: format!("no movie {movie_id}") }
        })
    }
}

#[derive(Debug, Clone)]
pub struct LoopbackApi {
    state: Arc<Mutex<Backend>>,
    latency: Duration,
}

impl LoopbackApi {
    pub fn new(seed: Vec<Movie>) -> Self {
        Self {
            state: Arc::new(Mutex::new(Backend { movies: seed, next_comment: 1 })),
            latency: Duration::ZERO,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

impl ApiClient for LoopbackApi {
    fn update_movie(
        &self,
        movie_id: MovieId,
        movie: Movie,
    ) -> impl std::future::Future<Output = Result<Movie, ApiError>> + '_ {
        async move {
            sleep(self.latency).await;
            let mut state = self.state.lock().await;
            let slot = state.movie_mut(&movie_id)?;

            // The backend owns comments; a movie update cannot touch them.
            let server_comments = std::mem::take(&mut slot.comments);
            *slot = movie;
            slot.movie_id = movie_id;
            slot.comments = server_comments;

            let mut echo = slot.clone();
            echo.comments.clear();
            Ok(echo)
        }
    }

    fn create_comment(
        &self,
        movie_id: MovieId,
        draft: CommentDraft,
    ) -> impl std::future::Future<Output = Result<Movie, ApiError>> + '_ {
        async move {
            sleep(self.latency).await;
            let mut state = self.state.lock().await;

            let serial = state.next_comment;
            state.next_comment += 1;
            let comment_id = CommentId::new(format!("c:srv-{serial}"))
                .map_err(|err| ApiError::Unavailable { reason: err.to_string() })?;

            let slot = state.movie_mut(&movie_id)?;
            slot.comments.push(Comment {
                comment_id,
                movie_id: movie_id.clone(),
                author: draft.author,
                content: draft.content,
                created_at_millis: draft.created_at_millis,
            });
            Ok(slot.clone())
        }
    }

    fn delete_comment(
        &self,
        comment_id: CommentId,
    ) -> impl std::future::Future<Output = Result<(), ApiError>> + '_ {
        async move {
            sleep(self.latency).await;
            let mut state = self.state.lock().await;
            for movie in &mut state.movies {
                let before = movie.comments.len();
                movie.comments.retain(|c| c.comment_id != comment_id);
                if movie.comments.len() != before {
                    return Ok(());
                }
            }
            Err(ApiError::Rejected { status: 404, message: format!("no comment {comment_id}") })
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::model::fixtures;
    use crate::model::MovieId;

    use super::super::{ApiClient, ApiError, CommentDraft};
    use super::LoopbackApi;

    fn mid(value: &str) -> MovieId {
        MovieId::new(value).expect("movie id")
    }

    #[tokio::test]
    async fn update_movie_echo_strips_comments() {
        let library = fixtures::demo_library();
        let api = LoopbackApi::new(library.movies().to_vec());

        let target = mid("m:1");
        let mut edited = library.movie(&target).expect("movie").clone();
        edited.favorite = true;

        let echo = api.update_movie(target, edited).await.expect("update");
        assert!(echo.favorite);
        assert!(echo.comments.is_empty());
    }

    #[tokio::test]
    async fn update_movie_keeps_server_side_comments() {
        let library = fixtures::demo_library();
        let api = LoopbackApi::new(library.movies().to_vec());

        let target = mid("m:1");
        let mut edited = library.movie(&target).expect("movie").clone();
        edited.comments.clear();
        edited.watched = true;
        api.update_movie(target.clone(), edited).await.expect("update");

        // A later create_comment response exposes the backend's state.
        let draft = CommentDraft {
            author: "viewer".to_owned(),
            content: "still here".to_owned(),
            created_at_millis: 0,
        };
        let movie = api.create_comment(target.clone(), draft).await.expect("create");
        let seeded = library.movie(&target).expect("movie").comments.len();
        assert_eq!(movie.comments.len(), seeded + 1);
        assert!(movie.watched);
    }

    #[tokio::test]
    async fn create_comment_assigns_server_ids() {
        let library = fixtures::demo_library();
        let api = LoopbackApi::new(library.movies().to_vec());

        let draft = CommentDraft {
            author: "viewer".to_owned(),
            content: "hello".to_owned(),
            created_at_millis: 42,
        };
        let movie = api.create_comment(mid("m:4"), draft).await.expect("create");
        let added = movie.comments.last().expect("comment");
        assert_eq!(added.comment_id.as_str(), "c:srv-1");
        assert_eq!(added.movie_id, mid("m:4"));
    }

    #[tokio::test]
    async fn delete_comment_unknown_id_is_rejected() {
        let api = LoopbackApi::new(Vec::new());
        let result = api
            .delete_comment(crate::model::CommentId::new("c:ghost").expect("comment id"))
            .await;
        assert!(matches!(result, Err(ApiError::Rejected { status: 404, .. })));
    }
}
