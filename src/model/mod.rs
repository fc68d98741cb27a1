// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Marquee-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Marquee and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! The `Library` is the authoritative, insertion-ordered movie collection;
//! everything the board renders is derived from it.

pub(crate) mod fixtures;
pub mod ids;
pub mod library;
pub mod movie;

pub use ids::{CommentId, Id, IdError, MovieId};
pub use library::{Library, LibraryError};
pub use movie::{Comment, Movie};
