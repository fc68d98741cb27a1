// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Marquee-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Marquee and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::ids::{CommentId, MovieId};
use super::library::Library;
use super::movie::{Comment, Movie};

fn mid(value: &str) -> MovieId {
    MovieId::new(value).expect("movie id")
}

fn cid(value: &str) -> CommentId {
    CommentId::new(value).expect("comment id")
}

pub(crate) fn movie(id: &str, title: &str, rating: f64, release_date_millis: i64) -> Movie {
    Movie {
        movie_id: mid(id),
        title: title.to_owned(),
        rating,
        release_date_millis,
        genres: Vec::new(),
        watchlist: false,
        watched: false,
        favorite: false,
        comments: Vec::new(),
    }
}

pub(crate) fn comment(id: &str, movie_id: &str, author: &str, content: &str) -> Comment {
    Comment {
        comment_id: cid(id),
        movie_id: mid(movie_id),
        author: author.to_owned(),
        content: content.to_owned(),
        created_at_millis: 0,
    }
}

/// Built-in demo collection used by `--demo` and by tests.
pub(crate) fn demo_library() -> Library {
    let mut sagebrush = movie("m:1", "Sagebrush Trail", 6.9, -1_136_073_600_000);
    sagebrush.genres = vec!["Western".to_owned()];
    sagebrush.comments = vec![
        comment("c:1", "m:1", "tim.macoveev", "A classic of the genre"),
        comment("c:2", "m:1", "john.doe", "Horses are fantastic"),
    ];

    let mut dance = movie("m:2", "The Dance of Life", 8.3, -1_262_304_000_000);
    dance.genres = vec!["Musical".to_owned()];
    dance.watched = true;
    dance.comments = vec![comment("c:3", "m:2", "marcel", "Still holds up")];

    let mut apartment = movie("m:3", "The Great Flamarion", 8.9, -778_032_000_000);
    apartment.genres = vec!["Mystery".to_owned()];
    apartment.comments = vec![
        comment("c:4", "m:3", "anna", "The ending got me"),
        comment("c:5", "m:3", "victor", "Booo"),
        comment("c:6", "m:3", "tim.macoveev", "Rewatched three times"),
    ];

    let mut friends = movie("m:4", "Made for Each Other", 5.8, -970_358_400_000);
    friends.genres = vec!["Comedy".to_owned()];
    friends.watchlist = true;

    let mut popeye = movie("m:5", "Popeye the Sailor Meets Sindbad", 6.3, -1_041_379_200_000);
    popeye.genres = vec!["Cartoon".to_owned()];
    popeye.comments = vec![comment("c:7", "m:5", "kid", "Spinach!")];

    let mut santa = movie("m:6", "Santa Claus Conquers the Martians", 2.3, -159_840_000_000);
    santa.genres = vec!["Sci-Fi".to_owned()];
    santa.favorite = true;

    let mut storm = movie("m:7", "The Man with the Golden Arm", 9.0, -441_849_600_000);
    storm.genres = vec!["Drama".to_owned()];
    storm.comments = vec![
        comment("c:8", "m:7", "anna", "Sinatra can act"),
        comment("c:9", "m:7", "victor", "Heavy but worth it"),
    ];

    Library::new(vec![sagebrush, dance, apartment, friends, popeye, santa, storm])
        .expect("demo library ids are unique")
}
