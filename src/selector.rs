//! Topic selection without repetition until exhaustion.
//!
//! `pick` is pure: it takes the catalog, a category filter and the current
//! history, and returns the chosen topic together with the history the
//! caller should keep. Nothing is mutated in place.
//!
//! History is shared across categories. A topic shown under one filter is
//! excluded under every other filter until the next reset.

use crate::catalog::Catalog;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    /// The filter resolved to zero candidates, even after a reset.
    #[error("No topics available for category '{category}'")]
    NoTopicsAvailable { category: String },
}

// ============================================================================
// Random Source
// ============================================================================

/// Source of uniformly distributed indexes.
///
/// Implementations must return a value in `0..len`. `len` is never zero.
pub trait RandomSource {
    fn next_index(&mut self, len: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_index(&mut self, len: usize) -> usize {
        (**self).next_index(len)
    }
}

/// Thread-local RNG, reseeded from the OS.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_index(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Deterministic RNG for reproducible runs (`--seed`).
#[derive(Debug, Clone)]
pub struct SeededRandom(StdRng);

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn next_index(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}

/// Replays a fixed script of indexes, cycling when exhausted.
///
/// Each scripted value is reduced modulo `len`, so `ScriptedRandom::fixed(0)`
/// always picks the first available topic.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    script: Vec<usize>,
    pos: usize,
}

impl ScriptedRandom {
    pub fn new(script: Vec<usize>) -> Self {
        Self { script, pos: 0 }
    }

    pub fn fixed(index: usize) -> Self {
        Self::new(vec![index])
    }
}

impl RandomSource for ScriptedRandom {
    fn next_index(&mut self, len: usize) -> usize {
        if self.script.is_empty() {
            return 0;
        }
        let value = self.script[self.pos % self.script.len()];
        self.pos = self.pos.wrapping_add(1);
        value % len
    }
}

// ============================================================================
// History
// ============================================================================

/// Ordered record of topics shown in this session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, topic: &str) -> bool {
        self.entries.iter().any(|t| t == topic)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }
}

impl<T: Into<String>> FromIterator<T> for History {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(Into::into).collect(),
        }
    }
}

// ============================================================================
// Selection
// ============================================================================

/// Result of a successful `pick`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pick {
    pub topic: String,
    /// History to keep for the next pick.
    pub history: History,
    /// True when every candidate had been shown and history was cleared.
    pub reset: bool,
}

/// Choose the next topic for `category`.
///
/// Candidates already in `history` are skipped. When none remain, history
/// is cleared and the pick is drawn from the full candidate list.
pub fn pick<R>(
    catalog: &Catalog,
    category: &str,
    history: &History,
    rng: &mut R,
) -> Result<Pick, SelectError>
where
    R: RandomSource + ?Sized,
{
    let candidates = catalog.candidates(category);
    if candidates.is_empty() {
        return Err(SelectError::NoTopicsAvailable {
            category: category.to_string(),
        });
    }

    let shown: HashSet<&str> = history.entries.iter().map(String::as_str).collect();
    let available: Vec<&String> = candidates
        .iter()
        .filter(|t| !shown.contains(t.as_str()))
        .collect();

    let (topic, mut next, reset) = if available.is_empty() {
        tracing::info!(
            category = %category,
            cleared = history.len(),
            "All topics shown, resetting history"
        );
        let topic = choose(candidates.iter(), candidates.len(), rng);
        (topic, History::new(), true)
    } else {
        let len = available.len();
        let topic = choose(available.into_iter(), len, rng);
        (topic, history.clone(), false)
    };

    next.entries.push(topic.clone());
    tracing::debug!(category = %category, history = next.len(), "Picked topic");

    Ok(Pick {
        topic,
        history: next,
        reset,
    })
}

fn choose<'a, I, R>(mut items: I, len: usize, rng: &mut R) -> String
where
    I: Iterator<Item = &'a String>,
    R: RandomSource + ?Sized,
{
    // Out-of-range indexes from a misbehaving source clamp to the last item.
    let idx = rng.next_index(len).min(len - 1);
    items.nth(idx).cloned().unwrap_or_default()
}

// ============================================================================
// Tests
// ============================================================================
