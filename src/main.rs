// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{bail, Context};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cvmatch::config::CONFIG_FILE;
use cvmatch::{matching, Algorithm, Document, SearchConfig, Searcher};

mod cli;
use cli::display;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Search {
            corpus,
            keywords,
            algorithm,
            top,
            workers,
            no_fuzzy,
            json,
            stats,
        } => {
            let mut config = load_config(cli.config.as_deref())?;
            if let Some(algorithm) = algorithm {
                config.algorithm = algorithm;
            }
            if let Some(top) = top {
                config.top_n = top;
            }
            if let Some(workers) = workers {
                config.workers = workers;
            }
            if no_fuzzy {
                config.fuzzy = false;
            }
            config.validate()?;
            run_search(config, &corpus, &keywords, json, stats)
        }
        Commands::Find {
            pattern,
            file,
            algorithm,
            case_sensitive,
            json,
        } => run_find(&pattern, &file, algorithm, case_sensitive, json),
        Commands::Similarity { a, b } => {
            run_similarity(&a, &b);
            Ok(())
        }
    }
}

/// Logs go to stderr so stdout stays clean for `--json`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

fn load_config(explicit: Option<&Path>) -> anyhow::Result<SearchConfig> {
    let path: PathBuf = match explicit {
        Some(path) => {
            if !path.exists() {
                bail!("config file not found: {}", path.display());
            }
            path.to_path_buf()
        }
        None => PathBuf::from(CONFIG_FILE),
    };
    debug!(path = %path.display(), "loading config");
    SearchConfig::load_from_path(&path)
        .with_context(|| format!("failed to load config from {}", path.display()))
}

fn read_corpus(path: &Path) -> anyhow::Result<Vec<Document>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read corpus {}", path.display()))?;
    let corpus: Vec<Document> = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a JSON array of documents", path.display()))?;
    debug!(documents = corpus.len(), "corpus loaded");
    Ok(corpus)
}

fn run_search(
    config: SearchConfig,
    corpus_path: &Path,
    keywords: &str,
    json: bool,
    show_stats: bool,
) -> anyhow::Result<()> {
    let corpus = read_corpus(corpus_path)?;
    let algorithm = config.algorithm;
    let top_n = config.top_n;
    let searcher = Searcher::new(config);

    let report = searcher.search_with_stats(&corpus, keywords, algorithm, top_n)?;

    if json {
        let out = if show_stats {
            serde_json::to_string_pretty(&report)?
        } else {
            serde_json::to_string_pretty(&report.results)?
        };
        println!("{}", out);
        return Ok(());
    }

    display::print_results(&report.results);
    if show_stats {
        display::print_stats(&report.stats);
    }
    Ok(())
}

fn run_find(
    pattern: &str,
    file: &Path,
    algorithm: Algorithm,
    case_sensitive: bool,
    json: bool,
) -> anyhow::Result<()> {
    let raw = fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let (text, pattern) = if case_sensitive {
        (raw, pattern.to_string())
    } else {
        (raw.to_lowercase(), pattern.to_lowercase())
    };

    // Aho-Corasick takes several patterns at once, comma-separated
    if algorithm.is_multi_pattern() {
        let patterns: Vec<&str> = pattern
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();
        if patterns.is_empty() {
            bail!("no patterns in {:?}", pattern);
        }
        let all = matching::timed_each(&text, &patterns);
        if json {
            println!("{}", serde_json::to_string_pretty(&all)?);
        } else {
            for (pattern, stats) in &all {
                display::print_positions(pattern, stats);
            }
        }
        return Ok(());
    }

    let stats = matching::timed(algorithm, &text, &pattern);
    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        display::print_positions(&pattern, &stats);
    }
    Ok(())
}

fn run_similarity(a: &str, b: &str) {
    let distance = cvmatch::distance(a, b);
    let similarity = cvmatch::similarity(a, b);
    println!(
        "distance {}  similarity {:.2}%  similar {}",
        distance,
        similarity,
        cvmatch::is_similar(a, b, cvmatch::fuzzy::DEFAULT_SIMILARITY_PERCENT)
    );
}
