// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the cvmatch command-line interface.
//!
//! Three subcommands: `search` ranks a JSON corpus against a keyword query,
//! `find` reports where one pattern occurs in a text file, and `similarity`
//! prints the Levenshtein distance between two strings.

pub mod display;

use clap::{Parser, Subcommand};
use cvmatch::Algorithm;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "cvmatch",
    about = "Keyword search and fuzzy ranking over plain-text CVs",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (defaults to ./cvmatch.toml if present)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank documents in a corpus by keyword hits
    Search {
        /// JSON file holding an array of {"id": <u64>, "text": <string>}
        #[arg(long, value_name = "FILE")]
        corpus: PathBuf,

        /// Comma-separated keywords, e.g. "python, aws, machine learning"
        #[arg(short, long)]
        keywords: String,

        /// Exact matcher: kmp, bm, or aho
        #[arg(short, long)]
        algorithm: Option<Algorithm>,

        /// Maximum number of results to return
        #[arg(short, long)]
        top: Option<usize>,

        /// Worker threads (0 = one per core, 1 = sequential)
        #[arg(short, long)]
        workers: Option<usize>,

        /// Skip the Levenshtein fallback
        #[arg(long)]
        no_fuzzy: bool,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Print per-phase counters and timings
        #[arg(long)]
        stats: bool,
    },

    /// Find every occurrence of one pattern in a text file
    Find {
        /// Pattern to search for
        pattern: String,

        /// Text file to scan
        #[arg(short, long, value_name = "FILE")]
        file: PathBuf,

        /// Exact matcher: kmp, bm, or aho
        #[arg(short, long, default_value = "kmp")]
        algorithm: Algorithm,

        /// Match case exactly instead of lowercasing both sides
        #[arg(long)]
        case_sensitive: bool,

        /// Print positions as JSON
        #[arg(long)]
        json: bool,
    },

    /// Levenshtein distance and similarity between two strings
    Similarity {
        a: String,
        b: String,
    },
}
