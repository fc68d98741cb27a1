// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Marquee-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Marquee and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Marquee CLI entrypoint.
//!
//! Runs the interactive board against a JSON library file, or against the
//! built-in demo collection when no file is given (or `--demo` is passed).

use std::error::Error;
use std::time::Duration;

use marquee::api::LoopbackApi;
use marquee::board::BoardOptions;
use marquee::model::{Library, Movie};

const DEFAULT_LATENCY_MS: u64 = 150;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<library.json>] [--showing-count <n>] [--latency-ms <ms>]\n  {program} --demo [--showing-count <n>] [--latency-ms <ms>]\n\nIf library.json is omitted, the built-in demo collection is used.\n--demo forces the demo collection and cannot be combined with a library file.\n--showing-count sets how many movies the default section shows before\n\"show more\" (default 5).\n--latency-ms sets the loopback backend's simulated round-trip time\n(default {DEFAULT_LATENCY_MS})."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    demo: bool,
    library_path: Option<String>,
    showing_count: Option<usize>,
    latency_ms: Option<u64>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--showing-count" => {
                if options.showing_count.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let count: usize = raw.parse().map_err(|_| ())?;
                if count == 0 {
                    return Err(());
                }
                options.showing_count = Some(count);
            }
            "--latency-ms" => {
                if options.latency_ms.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let millis: u64 = raw.parse().map_err(|_| ())?;
                options.latency_ms = Some(millis);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.library_path.is_some() {
                    return Err(());
                }
                options.library_path = Some(arg);
            }
        }
    }

    if options.demo && options.library_path.is_some() {
        return Err(());
    }

    Ok(options)
}

fn load_library(path: &str) -> Result<Library, Box<dyn Error>> {
    let raw = std::fs::read_to_string(path)?;
    let movies: Vec<Movie> = serde_json::from_str(&raw)?;
    Ok(Library::new(movies)?)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "marquee".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let library = match &options.library_path {
            Some(path) => load_library(path)?,
            None => marquee::tui::demo_library(),
        };

        let latency = Duration::from_millis(options.latency_ms.unwrap_or(DEFAULT_LATENCY_MS));
        let api = LoopbackApi::new(library.movies().to_vec()).with_latency(latency);

        let mut board_options = BoardOptions::default();
        if let Some(count) = options.showing_count {
            board_options.showing_count = count;
        }

        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
        let local = tokio::task::LocalSet::new();
        runtime.block_on(local.run_until(marquee::tui::run(library, api, board_options)))?;
        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("marquee: {err}");
        std::process::exit(1);
    }
}
