// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Marquee-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Marquee and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Marquee — terminal movie board with backend-confirmed edits.
//!
//! The `board` module is the heart of the crate: it decides what is visible
//! where, and reconciles every edit with the backend before the library and
//! the screen change.

pub mod api;
pub mod board;
pub mod model;
pub mod tui;
