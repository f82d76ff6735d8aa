// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Aho-Corasick: every keyword in one pass over the text.
//!
//! The automaton is a trie over the patterns plus a failure link per node.
//! A failure link points at the node for the longest proper suffix of the
//! current path that is also a path from the root, so a mismatch can resume
//! without rescanning text.
//!
//! Nodes live in an arena (`Vec<Node>`) and refer to each other by index.
//! Failure links always point to shallower nodes, so there's no ownership
//! cycle to fight with.
//!
//! Output sets are folded down the failure chain at build time: a node's
//! `outputs` already contains every pattern that ends at any node on its
//! failure chain. Scanning then only emits the current node's set, once per
//! text position, and never walks the chain to report matches.
//!
//! Cost: O(m) to build (m = total pattern length), O(n + z) to scan.

use indexmap::IndexMap;
use std::collections::{HashMap, VecDeque};

const ROOT: usize = 0;

#[derive(Debug, Clone, Default)]
struct Node {
    children: HashMap<char, usize>,
    fail: usize,
    /// Pattern ids ending here or at any node on the failure chain.
    outputs: Vec<usize>,
}

/// Compiled multi-pattern automaton.
///
/// Built once per query and shared read-only across documents.
#[derive(Debug, Clone)]
pub struct AhoCorasick {
    nodes: Vec<Node>,
    patterns: Vec<String>,
    pattern_lens: Vec<usize>,
}

impl AhoCorasick {
    /// Build the automaton. Duplicate patterns collapse to one id; empty
    /// patterns get an id but never match.
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut unique: Vec<String> = Vec::new();
        for pattern in patterns {
            let pattern = pattern.as_ref();
            if !unique.iter().any(|p| p == pattern) {
                unique.push(pattern.to_string());
            }
        }

        let mut automaton = Self {
            nodes: vec![Node::default()],
            pattern_lens: unique.iter().map(|p| p.chars().count()).collect(),
            patterns: unique,
        };
        automaton.build_trie();
        automaton.build_failure_links();
        automaton
    }

    fn build_trie(&mut self) {
        for id in 0..self.patterns.len() {
            if self.pattern_lens[id] == 0 {
                continue;
            }
            let mut state = ROOT;
            for c in self.patterns[id].chars() {
                state = match self.nodes[state].children.get(&c) {
                    Some(&next) => next,
                    None => {
                        let next = self.nodes.len();
                        self.nodes.push(Node::default());
                        self.nodes[state].children.insert(c, next);
                        next
                    }
                };
            }
            self.nodes[state].outputs.push(id);
        }
    }

    /// BFS from the root so every failure target is finished before the
    /// nodes that point at it.
    fn build_failure_links(&mut self) {
        let mut queue = VecDeque::new();

        let first_level: Vec<usize> = self.nodes[ROOT].children.values().copied().collect();
        for child in first_level {
            self.nodes[child].fail = ROOT;
            queue.push_back(child);
        }

        while let Some(current) = queue.pop_front() {
            let edges: Vec<(char, usize)> = self.nodes[current]
                .children
                .iter()
                .map(|(&c, &child)| (c, child))
                .collect();

            for (c, child) in edges {
                queue.push_back(child);

                let mut candidate = self.nodes[current].fail;
                let fail = loop {
                    if let Some(&next) = self.nodes[candidate].children.get(&c) {
                        break next;
                    }
                    if candidate == ROOT {
                        break ROOT;
                    }
                    candidate = self.nodes[candidate].fail;
                };

                self.nodes[child].fail = fail;
                let inherited = self.nodes[fail].outputs.clone();
                self.nodes[child].outputs.extend(inherited);
            }
        }
    }

    /// Follow failure links until a transition on `c` exists, else root.
    #[inline]
    fn next_state(&self, mut state: usize, c: char) -> usize {
        loop {
            if let Some(&next) = self.nodes[state].children.get(&c) {
                return next;
            }
            if state == ROOT {
                return ROOT;
            }
            state = self.nodes[state].fail;
        }
    }

    /// Patterns in id order.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Start positions per pattern id, each list ascending.
    pub fn find_all(&self, text: &[char]) -> Vec<Vec<usize>> {
        let mut positions = vec![Vec::new(); self.patterns.len()];
        let mut state = ROOT;

        for (i, &c) in text.iter().enumerate() {
            state = self.next_state(state, c);
            for &id in &self.nodes[state].outputs {
                positions[id].push(i + 1 - self.pattern_lens[id]);
            }
        }

        positions
    }

    /// Hit counts per pattern id, without materializing positions.
    pub fn count_all(&self, text: &[char]) -> Vec<usize> {
        let mut counts = vec![0; self.patterns.len()];
        let mut state = ROOT;

        for &c in text {
            state = self.next_state(state, c);
            for &id in &self.nodes[state].outputs {
                counts[id] += 1;
            }
        }

        counts
    }

    /// Pattern -> positions for every pattern, in pattern order. Patterns
    /// with no hit map to an empty list.
    pub fn search(&self, text: &str) -> IndexMap<String, Vec<usize>> {
        let text: Vec<char> = text.chars().collect();
        self.patterns
            .iter()
            .cloned()
            .zip(self.find_all(&text))
            .collect()
    }
}

/// Build an automaton for `patterns` and run it over `text` once.
pub fn search<S: AsRef<str>>(text: &str, patterns: &[S]) -> IndexMap<String, Vec<usize>> {
    AhoCorasick::new(patterns).search(text)
}
