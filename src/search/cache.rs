//! Memo cache for solved positions

use std::collections::HashMap;

use tracing::warn;

use super::Value;
use crate::tictactoe::{Board, Player};

/// Cache key: board content together with the side to move.
///
/// The same cells with a different player to move are a different position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub board: Board,
    pub to_move: Player,
}

/// Read-through map from positions to values, optionally bounded.
///
/// Once `capacity` entries are stored, further results are dropped instead of
/// evicting existing ones; lookups keep working.
#[derive(Debug, Default)]
pub struct MemoCache {
    entries: HashMap<CacheKey, Value>,
    capacity: Option<usize>,
    saturated: bool,
}

impl MemoCache {
    pub fn new(capacity: Option<usize>) -> Self {
        Self {
            entries: HashMap::new(),
            capacity,
            saturated: false,
        }
    }

    pub fn get(&self, board: &Board, to_move: Player) -> Option<Value> {
        self.entries
            .get(&CacheKey {
                board: *board,
                to_move,
            })
            .copied()
    }

    /// Store a value; returns whether it was kept
    pub fn insert(&mut self, board: Board, to_move: Player, value: Value) -> bool {
        if let Some(capacity) = self.capacity
            && self.entries.len() >= capacity
        {
            if !self.saturated {
                warn!(capacity, "search cache is full; new positions will not be cached");
                self.saturated = true;
            }
            return false;
        }
        self.entries.insert(CacheKey { board, to_move }, value);
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.saturated = false;
    }
}
