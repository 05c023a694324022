//! Ternary search tree keyed by byte strings.
//!
//! Each node splits on one byte: smaller bytes go low, larger go high, and
//! an equal byte advances to the next position of the key. Values live on
//! the node that holds the last byte of their key.

use std::cmp::Ordering;

#[derive(Debug, Clone)]
struct Node<V> {
    split: u8,
    low: Option<Box<Node<V>>>,
    equal: Option<Box<Node<V>>>,
    high: Option<Box<Node<V>>>,
    value: Option<V>,
}

impl<V> Node<V> {
    fn new(split: u8) -> Self {
        Self {
            split,
            low: None,
            equal: None,
            high: None,
            value: None,
        }
    }
}

/// A ternary search tree mapping string keys to values.
#[derive(Debug, Clone)]
pub struct Tst<V> {
    root: Option<Box<Node<V>>>,
    // the empty key has no node to live on
    empty: Option<V>,
    len: usize,
}

impl<V> Default for Tst<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Tst<V> {
    pub fn new() -> Self {
        Self {
            root: None,
            empty: None,
            len: 0,
        }
    }

    /// Insert a value, returning the one it replaced.
    pub fn insert(&mut self, key: &str, value: V) -> Option<V> {
        let bytes = key.as_bytes();
        if bytes.is_empty() {
            let old = self.empty.replace(value);
            if old.is_none() {
                self.len += 1;
            }
            return old;
        }

        let mut slot = &mut self.root;
        let mut i = 0;
        loop {
            let byte = bytes[i];
            let node = slot.get_or_insert_with(|| Box::new(Node::new(byte)));
            match byte.cmp(&node.split) {
                Ordering::Less => slot = &mut node.low,
                Ordering::Greater => slot = &mut node.high,
                Ordering::Equal => {
                    i += 1;
                    if i == bytes.len() {
                        let old = node.value.replace(value);
                        if old.is_none() {
                            self.len += 1;
                        }
                        return old;
                    }
                    slot = &mut node.equal;
                }
            }
        }
    }

    /// Exact lookup.
    pub fn search(&self, key: &str) -> Option<&V> {
        let bytes = key.as_bytes();
        if bytes.is_empty() {
            return self.empty.as_ref();
        }

        let mut node = self.root.as_deref();
        let mut i = 0;
        while let Some(n) = node {
            match bytes[i].cmp(&n.split) {
                Ordering::Less => node = n.low.as_deref(),
                Ordering::Greater => node = n.high.as_deref(),
                Ordering::Equal => {
                    i += 1;
                    if i == bytes.len() {
                        return n.value.as_ref();
                    }
                    node = n.equal.as_deref();
                }
            }
        }
        None
    }

    /// Value of the longest stored key that is a prefix of `key`.
    pub fn longest_prefix(&self, key: &str) -> Option<&V> {
        let bytes = key.as_bytes();
        let mut best = self.empty.as_ref();
        if bytes.is_empty() {
            return best;
        }

        let mut node = self.root.as_deref();
        let mut i = 0;
        while let Some(n) = node {
            match bytes[i].cmp(&n.split) {
                Ordering::Less => node = n.low.as_deref(),
                Ordering::Greater => node = n.high.as_deref(),
                Ordering::Equal => {
                    if n.value.is_some() {
                        best = n.value.as_ref();
                    }
                    i += 1;
                    if i == bytes.len() {
                        break;
                    }
                    node = n.equal.as_deref();
                }
            }
        }
        best
    }

    pub fn contains(&self, key: &str) -> bool {
        self.search(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
