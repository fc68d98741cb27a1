// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Marquee-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Marquee and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The board controller.
//!
//! Owns the rendering pipeline (default section plus the two derived
//! sections), the sort mode, and the reconciliation flow that confirms every
//! edit with the backend before it lands in the library. Rendering itself
//! stays behind [`BoardSurface`] and [`EntryCard`]; the controller only
//! decides which movies are visible, in which order, in which section.
//!
//! Reconciliation is split in two phases so that several edits can be in
//! flight at once without any locking: [`BoardController::begin_data_change`]
//! produces a `'static` future that performs the backend call and resolves to
//! a [`Completion`]; the owner of the controller feeds completions back into
//! [`BoardController::apply_completion`] on the main thread of control, which
//! writes the library and re-renders exactly the originating card. The
//! library write always strictly precedes the re-render, and a failed backend
//! call resolves to no completion at all — nothing was applied, so there is
//! nothing to roll back.

use std::future::Future;
use std::sync::Arc;

use crate::api::{ApiClient, CommentDraft};
use crate::model::{CommentId, Library, LibraryError, Movie, MovieId};

pub mod sections;

pub use sections::{
    most_commented, top_rated, working_order, SectionKind, SortMode, EXTRA_SECTION_LEN,
};


/// Handle for a single rendered card. Stale handles are harmless: a
/// completion addressed to a discarded card still writes the library and
/// simply skips the re-render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(u64);

/// One movie's view/edit UI, provided by the front end.
pub trait EntryCard {
    fn render(&mut self, movie: &Movie);
    fn set_default_view(&mut self);
}

/// The front end's container surface: creates cards inside a section,
/// clears a section wholesale, and toggles the show-more control.
pub trait BoardSurface {
    fn create_card(&mut self, section: SectionKind) -> Box<dyn EntryCard>;
    fn clear_section(&mut self, section: SectionKind);
    fn set_show_more_visible(&mut self, visible: bool);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardOptions {
    /// Movies shown in the default section before any show-more.
    pub showing_count: usize,
    /// How many movies each show-more reveals.
    pub show_more_step: usize,
}

impl Default for BoardOptions {
    fn default() -> Self {
        Self { showing_count: 5, show_more_step: 5 }
    }
}

/// A user edit reported by a card, addressed well enough to reconcile it.
#[derive(Debug, Clone, PartialEq)]
pub enum DataChange {
    MovieUpdated(Movie),
    CommentAdded { movie_id: MovieId, draft: CommentDraft },
    CommentDeleted { movie_id: MovieId, comment_id: CommentId },
}

/// A confirmed edit, ready to be written into the library.
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    /// `movie` already carries the comment list captured before the call;
    /// the backend echo does not round-trip comments.
    MovieUpdated { entry_id: EntryId, movie_id: MovieId, movie: Movie },
    /// `movie` is the backend's response verbatim, new comment included.
    CommentAdded { entry_id: EntryId, movie_id: MovieId, movie: Movie },
    /// The delete response payload is not used; the library removes the
    /// comment by its ids.
    CommentDeleted { entry_id: EntryId, movie_id: MovieId, comment_id: CommentId },
}

impl Completion {
    pub fn entry_id(&self) -> EntryId {
        match self {
            Self::MovieUpdated { entry_id, .. }
            | Self::CommentAdded { entry_id, .. }
            | Self::CommentDeleted { entry_id, .. } => *entry_id,
        }
    }

    pub fn movie_id(&self) -> &MovieId {
        match self {
            Self::MovieUpdated { movie_id, .. }
            | Self::CommentAdded { movie_id, .. }
            | Self::CommentDeleted { movie_id, .. } => movie_id,
        }
    }
}

struct RenderedCard {
    entry_id: EntryId,
    movie_id: MovieId,
    card: Box<dyn EntryCard>,
}

/// One card list per section, so clearing or broadcasting to one section
/// never touches another.
#[derive(Default)]
struct SectionRegistry {
    default: Vec<RenderedCard>,
    top_rated: Vec<RenderedCard>,
    most_commented: Vec<RenderedCard>,
}

impl SectionRegistry {
    fn section_mut(&mut self, section: SectionKind) -> &mut Vec<RenderedCard> {
        match section {
            SectionKind::Default => &mut self.default,
            SectionKind::TopRated => &mut self.top_rated,
            SectionKind::MostCommented => &mut self.most_commented,
        }
    }

    fn iter_all_mut(&mut self) -> impl Iterator<Item = &mut RenderedCard> {
        self.default
            .iter_mut()
            .chain(self.top_rated.iter_mut())
            .chain(self.most_commented.iter_mut())
    }

    fn find_mut(&mut self, entry_id: EntryId) -> Option<&mut RenderedCard> {
        self.iter_all_mut().find(|c| c.entry_id == entry_id)
    }
}

pub struct BoardController<A> {
    library: Library,
    api: Arc<A>,
    options: BoardOptions,
    showing_count: usize,
    sort_mode: SortMode,
    registry: SectionRegistry,
    next_entry: u64,
}

impl<A: ApiClient + 'static> BoardController<A> {
    pub fn new(library: Library, api: Arc<A>, options: BoardOptions) -> Self {
        Self {
            library,
            api,
            showing_count: options.showing_count,
            options,
            sort_mode: SortMode::default(),
            registry: SectionRegistry::default(),
            next_entry: 0,
        }
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    pub fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    pub fn showing_count(&self) -> usize {
        self.showing_count
    }

    /// The default section's live cards, in render order.
    pub fn default_entries(&self) -> impl Iterator<Item = (EntryId, &MovieId)> {
        self.registry.default.iter().map(|c| (c.entry_id, &c.movie_id))
    }

    /// Full render: default section from the working order, then the two
    /// derived sections. An empty library renders three empty sections and
    /// creates no cards.
    pub fn render_board(&mut self, surface: &mut dyn BoardSurface) {
        for section in SectionKind::ALL {
            surface.clear_section(section);
            self.registry.section_mut(section).clear();
        }

        let visible = self.visible_default_movies();
        self.render_section(surface, SectionKind::Default, &visible);
        let rated = top_rated(self.library.movies());
        self.render_section(surface, SectionKind::TopRated, &rated);
        let commented = most_commented(self.library.movies());
        self.render_section(surface, SectionKind::MostCommented, &commented);

        self.update_show_more(surface);
    }

    /// Sort state machine transition. Every mode can be re-entered from any
    /// other; the mode persists until the next transition. Only the default
    /// section is discarded and re-rendered — the derived sections use their
    /// own fixed selection rules regardless of sort mode.
    pub fn set_sort_mode(&mut self, sort_mode: SortMode, surface: &mut dyn BoardSurface) {
        self.sort_mode = sort_mode;
        self.rerender_default(surface);
    }

    /// Reveals the next batch of movies in the default section.
    pub fn show_more(&mut self, surface: &mut dyn BoardSurface) {
        self.showing_count += self.options.show_more_step;
        self.rerender_default(surface);
    }

    /// Forces every rendered card, across all sections, back to its default
    /// view. Invoked before any card enters edit view, so at most one card
    /// is ever editing.
    pub fn notify_view_change(&mut self) {
        for rendered in self.registry.iter_all_mut() {
            rendered.card.set_default_view();
        }
    }

    /// Phase one of reconciliation: performs the backend call for `change`
    /// and resolves to the completion to apply, or `None` if the backend
    /// rejected the call (in which case nothing further happens — no model
    /// write, no re-render, no retry).
    ///
    /// The returned future is `'static`; it may be spawned and raced freely
    /// against other chains, including chains for the same movie id.
    pub fn begin_data_change(
        &self,
        entry_id: EntryId,
        change: DataChange,
    ) -> impl Future<Output = Option<Completion>> + 'static {
        let api = Arc::clone(&self.api);

        // Captured before the call: the backend's update echo drops
        // comments, so the library's current list is re-attached on success.
        let kept_comments = match &change {
            DataChange::MovieUpdated(movie) => self
                .library
                .movie(&movie.movie_id)
                .map(|m| m.comments.clone())
                .unwrap_or_default(),
            _ => Vec::new(),
        };

        async move {
            match change {
                DataChange::MovieUpdated(movie) => {
                    let movie_id = movie.movie_id.clone();
                    let mut updated = api.update_movie(movie_id.clone(), movie).await.ok()?;
                    updated.comments = kept_comments;
                    Some(Completion::MovieUpdated { entry_id, movie_id, movie: updated })
                }
                DataChange::CommentAdded { movie_id, draft } => {
                    let movie = api.create_comment(movie_id.clone(), draft).await.ok()?;
                    Some(Completion::CommentAdded { entry_id, movie_id, movie })
                }
                DataChange::CommentDeleted { movie_id, comment_id } => {
                    api.delete_comment(comment_id.clone()).await.ok()?;
                    Some(Completion::CommentDeleted { entry_id, movie_id, comment_id })
                }
            }
        }
    }

    /// Phase two of reconciliation: writes the confirmed change into the
    /// library, then re-renders the originating card with the library's
    /// now-current state. Main thread of control only; completions racing on
    /// the same movie id resolve as last write wins.
    pub fn apply_completion(&mut self, completion: Completion) -> Result<(), LibraryError> {
        let entry_id = completion.entry_id();
        let movie_id = completion.movie_id().clone();

        match completion {
            Completion::MovieUpdated { movie, .. } | Completion::CommentAdded { movie, .. } => {
                self.library.update_movie(&movie_id, movie)?;
            }
            Completion::CommentDeleted { comment_id, .. } => {
                self.library.delete_comment(&movie_id, &comment_id)?;
            }
        }

        if let Some(rendered) = self.registry.find_mut(entry_id) {
            if let Some(movie) = self.library.movie(&movie_id) {
                rendered.card.render(movie);
            }
        }
        Ok(())
    }

    fn visible_default_movies(&self) -> Vec<Movie> {
        let mut ordered = working_order(self.library.movies(), self.sort_mode);
        ordered.truncate(self.showing_count);
        ordered
    }

    fn render_section(
        &mut self,
        surface: &mut dyn BoardSurface,
        section: SectionKind,
        movies: &[Movie],
    ) {
        for movie in movies {
            let entry_id = EntryId(self.next_entry);
            self.next_entry += 1;

            let mut card = surface.create_card(section);
            card.render(movie);
            self.registry.section_mut(section).push(RenderedCard {
                entry_id,
                movie_id: movie.movie_id.clone(),
                card,
            });
        }
    }

    fn rerender_default(&mut self, surface: &mut dyn BoardSurface) {
        surface.clear_section(SectionKind::Default);
        self.registry.default.clear();
        let visible = self.visible_default_movies();
        self.render_section(surface, SectionKind::Default, &visible);
        self.update_show_more(surface);
    }

    fn update_show_more(&mut self, surface: &mut dyn BoardSurface) {
        surface.set_show_more_visible(self.showing_count < self.library.len());
    }
}
