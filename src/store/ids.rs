//! Identifier generation for newly created entities.

use crate::config::{IdMode, StoreSettings};

/// Source of fresh entity ids.
pub trait IdGenerator: Send {
    fn generate(&mut self) -> String;
}

const ALPHABET: [char; 36] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i',
    'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Random nanoid ids over a lowercase alphanumeric alphabet.
#[derive(Debug, Clone)]
pub struct RandomIds {
    length: usize,
}

impl RandomIds {
    pub fn new(length: usize) -> Self {
        Self {
            length: length.max(1),
        }
    }
}

impl Default for RandomIds {
    fn default() -> Self {
        Self::new(12)
    }
}

impl IdGenerator for RandomIds {
    fn generate(&mut self) -> String {
        nanoid::format(nanoid::rngs::default, &ALPHABET, self.length)
    }
}

/// Monotonic decimal ids, starting at `next`.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn starting_at(next: u64) -> Self {
        Self { next }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdGenerator for SequentialIds {
    fn generate(&mut self) -> String {
        let id = self.next;
        self.next += 1;
        id.to_string()
    }
}

pub fn from_settings(settings: &StoreSettings) -> Box<dyn IdGenerator> {
    match settings.id_mode {
        IdMode::Random => Box::new(RandomIds::new(settings.id_length)),
        IdMode::Sequential => Box::new(SequentialIds::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_random_ids_use_alphabet_and_length() {
        let mut ids = RandomIds::new(8);
        let id = ids.generate();
        assert_eq!(id.len(), 8);
        assert!(id.chars().all(|c| ALPHABET.contains(&c)));
    }

    #[test]
    fn test_random_ids_do_not_repeat() {
        let mut ids = RandomIds::default();
        let seen: HashSet<_> = (0..1000).map(|_| ids.generate()).collect();
        assert_eq!(seen.len(), 1000);
    }

    #[test]
    fn test_sequential_ids() {
        let mut ids = SequentialIds::starting_at(41);
        assert_eq!(ids.generate(), "41");
        assert_eq!(ids.generate(), "42");
    }

    #[test]
    fn test_from_settings_sequential() {
        let settings = StoreSettings {
            id_mode: IdMode::Sequential,
            ..StoreSettings::default()
        };
        let mut ids = from_settings(&settings);
        assert_eq!(ids.generate(), "1");
    }
}
