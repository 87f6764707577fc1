//! Collision chains.
//!
//! Every slot of the bucket array is a [`Bucket`]: an optional head of a
//! singly linked list of owned nodes. An unused slot is a bare `None`, so the
//! array costs one pointer per slot until keys arrive.

use alloc::boxed::Box;
use core::mem;

/// A stored `(key, value)` association.
#[derive(Debug)]
pub(crate) struct Entry<V> {
    pub(crate) key: Box<str>,
    pub(crate) value: V,
}

/// Chain node. `hash` and `key` come first since scans only touch those.
struct Node<V> {
    hash: u64,
    entry: Entry<V>,
    next: Option<Box<Node<V>>>,
}

impl<V> Node<V> {
    #[inline(always)]
    fn matches(&self, hash: u64, key: &str) -> bool {
        // Integer compare first, bytes only on a hash hit.
        self.hash == hash && &*self.entry.key == key
    }
}

/// Result of [`Bucket::insert_or_update`].
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Outcome<V> {
    /// A new node was linked at the head.
    Inserted,
    /// The key was already present; carries the replaced value.
    Updated(V),
}

/// One slot of the bucket array.
pub(crate) struct Bucket<V> {
    head: Option<Box<Node<V>>>,
}

impl<V> Default for Bucket<V> {
    fn default() -> Self {
        Self { head: None }
    }
}

impl<V> Bucket<V> {
    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Number of entries on this chain.
    pub(crate) fn len(&self) -> usize {
        let mut count = 0;
        let mut current = self.head.as_deref();
        while let Some(node) = current {
            count += 1;
            current = node.next.as_deref();
        }
        count
    }

    pub(crate) fn find(&self, hash: u64, key: &str) -> Option<&Entry<V>> {
        let mut current = self.head.as_deref();
        while let Some(node) = current {
            if node.matches(hash, key) {
                return Some(&node.entry);
            }
            current = node.next.as_deref();
        }
        None
    }

    pub(crate) fn find_mut(&mut self, hash: u64, key: &str) -> Option<&mut Entry<V>> {
        let mut current = self.head.as_deref_mut();
        while let Some(node) = current {
            if node.matches(hash, key) {
                return Some(&mut node.entry);
            }
            current = node.next.as_deref_mut();
        }
        None
    }

    /// Replaces the value of an existing key in place, or links a new node at
    /// the head of the chain.
    pub(crate) fn insert_or_update(&mut self, hash: u64, key: &str, value: V) -> Outcome<V> {
        if let Some(entry) = self.find_mut(hash, key) {
            return Outcome::Updated(mem::replace(&mut entry.value, value));
        }

        let node = Box::new(Node {
            hash,
            entry: Entry {
                key: key.into(),
                value,
            },
            next: self.head.take(),
        });
        self.head = Some(node);
        Outcome::Inserted
    }

    /// Unlinks the node holding `key` and returns its value.
    pub(crate) fn remove(&mut self, hash: u64, key: &str) -> Option<V> {
        // `link` trails the scan: it is the owner of the node under test,
        // either the head slot or the previous node's `next`.
        let mut link = &mut self.head;
        while link.as_ref().is_some_and(|node| !node.matches(hash, key)) {
            link = &mut link.as_mut()?.next;
        }

        let mut node = link.take()?;
        *link = node.next.take();
        Some(node.entry.value)
    }

    /// Drops every node on the chain.
    pub(crate) fn clear(&mut self) {
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
    }
}

impl<V> Drop for Bucket<V> {
    fn drop(&mut self) {
        // Unlink one node at a time; the default recursive drop would use one
        // stack frame per node.
        self.clear();
    }
}
