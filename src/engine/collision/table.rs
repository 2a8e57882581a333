use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::domain::digest::TruncatedValue;

/// What happened when a draw was offered to the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
    /// First input seen with this truncated value; it is now stored.
    Inserted,
    /// The same input was drawn again; nothing changed.
    Redrawn,
    /// A different input already owns this truncated value.
    Collided { first: u64 },
}

/// Truncated value -> first input index that produced it.
///
/// Widths up to 64 bits key on the prefix integer, which keeps an entry at
/// two words. Wider widths key on the full `TruncatedValue`.
#[derive(Debug)]
pub enum CollisionTable {
    Narrow(HashMap<u64, u64>),
    Wide(HashMap<TruncatedValue, u64>),
}

impl CollisionTable {
    pub fn for_bits(bits: u32) -> Self {
        if bits <= 64 {
            Self::Narrow(HashMap::new())
        } else {
            Self::Wide(HashMap::new())
        }
    }

    /// Records `input` under `key` unless the key is already owned.
    pub fn observe(&mut self, key: &TruncatedValue, input: u64) -> Observation {
        match self {
            Self::Narrow(map) => match key.as_u64() {
                Some(narrow) => observe_entry(map.entry(narrow), input),
                None => unreachable!("narrow table holds widths up to 64 bits"),
            },
            Self::Wide(map) => observe_entry(map.entry(*key), input),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Narrow(map) => map.len(),
            Self::Wide(map) => map.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn observe_entry<K>(entry: Entry<'_, K, u64>, input: u64) -> Observation {
    match entry {
        Entry::Occupied(stored) if *stored.get() == input => Observation::Redrawn,
        Entry::Occupied(stored) => Observation::Collided {
            first: *stored.get(),
        },
        Entry::Vacant(slot) => {
            slot.insert(input);
            Observation::Inserted
        }
    }
}
