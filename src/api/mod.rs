// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Marquee-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Marquee and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Backend contract for movie and comment mutations.
//!
//! The board never mutates its library before the matching call here has
//! resolved successfully. Note the `update_movie` quirk: the response movie
//! does not round-trip comments, and callers must compensate.

use std::fmt;
use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::model::{CommentId, Movie, MovieId};

pub mod loopback;

pub use loopback::LoopbackApi;

/// Payload for creating a comment; the backend assigns the comment id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentDraft {
    pub author: String,
    pub content: String,
    pub created_at_millis: i64,
}

/// Asynchronous movie/comment mutations against a remote backend.
pub trait ApiClient {
    /// Persists the movie's fields. The response carries the updated movie
    /// WITHOUT its comments.
    fn update_movie(
        &self,
        movie_id: MovieId,
        movie: Movie,
    ) -> impl Future<Output = Result<Movie, ApiError>> + '_;

    /// Creates a comment on the movie. The response is the complete updated
    /// movie, including the new comment.
    fn create_comment(
        &self,
        movie_id: MovieId,
        draft: CommentDraft,
    ) -> impl Future<Output = Result<Movie, ApiError>> + '_;

    /// Deletes a comment by id. The response carries nothing callers use.
    fn delete_comment(
        &self,
        comment_id: CommentId,
    ) -> impl Future<Output = Result<(), ApiError>> + '_;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    Unavailable { reason: String },
    Rejected { status: u16, message: String },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable { reason } => write!(f, "backend unavailable: {reason}"),
            Self::Rejected { status, message } => {
                write!(f, "backend rejected the request (status={status}): {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
