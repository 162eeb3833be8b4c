//! Per-parse packrat memo.

use mathtext_layout::{Node, State};
use std::collections::HashMap;

/// Grammar rules whose results are memoized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemoRule {
    Placeable,
    Group,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct StateKey {
    font: String,
    font_class: String,
    fontsize: u32,
    dpi: u32,
}

impl From<&State> for StateKey {
    fn from(state: &State) -> Self {
        Self {
            font: state.font.clone(),
            font_class: state.font_class.clone(),
            fontsize: state.fontsize.to_bits(),
            dpi: state.dpi.to_bits(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct MemoKey {
    rule: MemoRule,
    pos: usize,
    state: StateKey,
}

/// Outcome of a rule at a position: the end offset and node on a match,
/// `None` when the rule did not match.
pub type MemoEntry = Option<(usize, Node)>;

/// Results of rule applications, keyed by rule, byte offset and the font
/// state in effect. A node built under a different font would measure
/// differently, so the state is part of the key.
///
/// Stored nodes are never handed out by reference: callers shrink and
/// repack what they receive, so every hit is a fresh clone.
#[derive(Debug, Default)]
pub struct Memo {
    entries: HashMap<MemoKey, MemoEntry>,
    hits: usize,
}

impl Memo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, rule: MemoRule, pos: usize, state: &State) -> Option<MemoEntry> {
        let key = MemoKey {
            rule,
            pos,
            state: state.into(),
        };
        let entry = self.entries.get(&key).cloned();
        if entry.is_some() {
            self.hits += 1;
        }
        entry
    }

    pub fn insert(&mut self, rule: MemoRule, pos: usize, state: &State, entry: MemoEntry) {
        let key = MemoKey {
            rule,
            pos,
            state: state.into(),
        };
        self.entries.insert(key, entry);
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mathtext_layout::{EmptyBox, Node};

    #[test]
    fn test_memo_round_trip() {
        let mut memo = Memo::new();
        let state = State::new("it", 12.0, 72.0);
        assert!(memo.get(MemoRule::Placeable, 0, &state).is_none());
        memo.insert(
            MemoRule::Placeable,
            0,
            &state,
            Some((3, Node::Empty(EmptyBox::hbox(1.0)))),
        );
        let hit = memo.get(MemoRule::Placeable, 0, &state).unwrap();
        assert_eq!(hit.map(|(end, _)| end), Some(3));
        assert_eq!(memo.hits(), 1);
    }

    #[test]
    fn test_memo_keys_on_state_and_rule() {
        let mut memo = Memo::new();
        let it = State::new("it", 12.0, 72.0);
        let rm = State::new("rm", 12.0, 72.0);
        memo.insert(MemoRule::Group, 5, &it, None);
        assert!(memo.get(MemoRule::Group, 5, &rm).is_none());
        assert!(memo.get(MemoRule::Placeable, 5, &it).is_none());
        assert_eq!(memo.get(MemoRule::Group, 5, &it), Some(None));
        assert_eq!(memo.len(), 1);
    }
}
