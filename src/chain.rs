//! Bucket array and per-bucket chains.
//!
//! Chain nodes live in a generational arena; each bucket slot holds the
//! arena key of its chain head and every node holds the key of its
//! successor. A node is reachable from exactly one slot.

use crate::index::bucket_index;
use slotmap::{DefaultKey, SlotMap};

#[derive(Debug)]
pub(crate) struct Entry<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    // Computed once at insertion; rehashing reads this instead of `K: Hash`.
    pub(crate) hash: u64,
    next: Option<DefaultKey>,
}

impl<K, V> Entry<K, V> {
    pub(crate) fn new(key: K, value: V, hash: u64) -> Self {
        Self {
            key,
            value,
            hash,
            next: None,
        }
    }
}

/// Outcome of walking one chain looking for a node.
pub(crate) enum Probe {
    Found(DefaultKey),
    /// No node matched; carries the chain tail (`None` for an empty slot).
    Vacant(Option<DefaultKey>),
}

pub(crate) struct Buckets<K, V> {
    heads: Vec<Option<DefaultKey>>,
    nodes: SlotMap<DefaultKey, Entry<K, V>>,
}

impl<K, V> Buckets<K, V> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        debug_assert!(capacity > 0);
        Self {
            heads: vec![None; capacity],
            nodes: SlotMap::with_key(),
        }
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.heads.len()
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn probe<F>(&self, slot: usize, mut matches: F) -> Probe
    where
        F: FnMut(&Entry<K, V>) -> bool,
    {
        let mut cur = self.heads[slot];
        let mut last = None;
        while let Some(k) = cur {
            let e = &self.nodes[k];
            if matches(e) {
                return Probe::Found(k);
            }
            last = Some(k);
            cur = e.next;
        }
        Probe::Vacant(last)
    }

    pub(crate) fn find<F>(&self, slot: usize, matches: F) -> Option<DefaultKey>
    where
        F: FnMut(&Entry<K, V>) -> bool,
    {
        match self.probe(slot, matches) {
            Probe::Found(k) => Some(k),
            Probe::Vacant(_) => None,
        }
    }

    #[inline]
    pub(crate) fn entry(&self, k: DefaultKey) -> &Entry<K, V> {
        &self.nodes[k]
    }

    #[inline]
    pub(crate) fn entry_mut(&mut self, k: DefaultKey) -> &mut Entry<K, V> {
        &mut self.nodes[k]
    }

    /// Stores `entry` and links it after `tail`, or as the head of `slot`
    /// when `tail` is `None`. `tail` must come from a `Probe::Vacant` on the
    /// same slot with no mutation in between.
    pub(crate) fn link(
        &mut self,
        slot: usize,
        tail: Option<DefaultKey>,
        entry: Entry<K, V>,
    ) -> DefaultKey {
        let k = self.nodes.insert(entry);
        match tail {
            Some(t) => self.nodes[t].next = Some(k),
            None => self.heads[slot] = Some(k),
        }
        k
    }

    /// Removes the first node of `slot`'s chain accepted by `matches`,
    /// relinking its predecessor (or the slot) to its successor.
    pub(crate) fn unlink<F>(&mut self, slot: usize, mut matches: F) -> Option<Entry<K, V>>
    where
        F: FnMut(&Entry<K, V>) -> bool,
    {
        let head = self.heads[slot]?;
        if matches(&self.nodes[head]) {
            self.heads[slot] = self.nodes[head].next;
            return self.nodes.remove(head);
        }
        let mut prev = head;
        while let Some(k) = self.nodes[prev].next {
            if matches(&self.nodes[k]) {
                self.nodes[prev].next = self.nodes[k].next;
                return self.nodes.remove(k);
            }
            prev = k;
        }
        None
    }

    /// Replaces the bucket array with `capacity` slots and relinks every node
    /// into the slot its stored hash maps to. Nodes that share a new slot keep
    /// their previous relative order. Node storage is untouched.
    pub(crate) fn rehome(&mut self, capacity: usize) {
        debug_assert!(capacity > 0);
        let mut heads: Vec<Option<DefaultKey>> = vec![None; capacity];
        let mut tails: Vec<Option<DefaultKey>> = vec![None; capacity];
        let old = std::mem::take(&mut self.heads);
        for head in old {
            let mut cur = head;
            while let Some(k) = cur {
                let node = &mut self.nodes[k];
                cur = node.next.take();
                let slot = bucket_index(node.hash, capacity);
                match tails[slot] {
                    Some(t) => self.nodes[t].next = Some(k),
                    None => heads[slot] = Some(k),
                }
                tails[slot] = Some(k);
            }
        }
        self.heads = heads;
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.heads.fill(None);
    }

    pub(crate) fn chain(&self, slot: usize) -> Chain<'_, K, V> {
        Chain {
            nodes: &self.nodes,
            cur: self.heads[slot],
        }
    }

    pub(crate) fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            buckets: self,
            next_slot: 0,
            chain: Chain {
                nodes: &self.nodes,
                cur: None,
            },
        }
    }

    pub(crate) fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut {
            it: self.nodes.iter_mut(),
        }
    }

    pub(crate) fn values(&self) -> impl Iterator<Item = &V> {
        self.nodes.values().map(|e| &e.value)
    }

    /// Structural self-check used by tests: every live node is reachable
    /// from exactly one slot, and from the slot its hash maps to.
    #[cfg(test)]
    pub(crate) fn assert_linked(&self) {
        let mut seen = std::collections::HashSet::new();
        for slot in 0..self.capacity() {
            let mut cur = self.heads[slot];
            while let Some(k) = cur {
                assert!(seen.insert(k), "node reachable twice");
                let e = &self.nodes[k];
                assert_eq!(
                    bucket_index(e.hash, self.capacity()),
                    slot,
                    "node linked into the wrong slot"
                );
                cur = e.next;
            }
        }
        assert_eq!(seen.len(), self.nodes.len(), "unreachable nodes in arena");
    }
}

/// Iterator over the `(key, value)` pairs of one bucket, in chain order.
pub(crate) struct Chain<'a, K, V> {
    nodes: &'a SlotMap<DefaultKey, Entry<K, V>>,
    cur: Option<DefaultKey>,
}

impl<'a, K, V> Iterator for Chain<'a, K, V> {
    type Item = (&'a K, &'a V);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let nodes = self.nodes;
        let e = &nodes[self.cur?];
        self.cur = e.next;
        Some((&e.key, &e.value))
    }
}

/// Iterator over all `(key, value)` pairs, bucket by bucket.
///
/// The order follows the current bucket layout and changes when the table
/// is resized; it is not a stable ordering.
pub struct Iter<'a, K, V> {
    buckets: &'a Buckets<K, V>,
    next_slot: usize,
    chain: Chain<'a, K, V>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.chain.next() {
                return Some(item);
            }
            let buckets = self.buckets;
            if self.next_slot >= buckets.capacity() {
                return None;
            }
            self.chain = buckets.chain(self.next_slot);
            self.next_slot += 1;
        }
    }
}

/// Iterator over mutable values, in unspecified order.
pub struct ValuesMut<'a, K, V> {
    it: slotmap::basic::IterMut<'a, DefaultKey, Entry<K, V>>,
}

impl<'a, K, V> Iterator for ValuesMut<'a, K, V> {
    type Item = &'a mut V;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it.next().map(|(_, e)| &mut e.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(capacity: usize, hashes: &[u64]) -> Buckets<u64, u64> {
        let mut b = Buckets::with_capacity(capacity);
        for &h in hashes {
            let slot = bucket_index(h, capacity);
            match b.probe(slot, |e| e.key == h) {
                Probe::Vacant(tail) => {
                    b.link(slot, tail, Entry::new(h, h * 10, h));
                }
                Probe::Found(_) => panic!("duplicate test key {h}"),
            }
        }
        b
    }

    fn keys_in(b: &Buckets<u64, u64>, slot: usize) -> Vec<u64> {
        b.chain(slot).map(|(k, _)| *k).collect()
    }

    #[test]
    fn link_appends_in_insertion_order() {
        let b = filled(4, &[1, 5, 9, 2]);
        assert_eq!(keys_in(&b, 1), vec![1, 5, 9]);
        assert_eq!(keys_in(&b, 2), vec![2]);
        assert!(keys_in(&b, 0).is_empty());
        assert_eq!(b.len(), 4);
        b.assert_linked();
    }

    #[test]
    fn unlink_head_middle_and_tail() {
        let mut b = filled(4, &[1, 5, 9, 13]);

        let e = b.unlink(1, |e| e.key == 5).expect("middle");
        assert_eq!((e.key, e.value), (5, 50));
        assert_eq!(keys_in(&b, 1), vec![1, 9, 13]);

        let e = b.unlink(1, |e| e.key == 1).expect("head");
        assert_eq!(e.key, 1);
        assert_eq!(keys_in(&b, 1), vec![9, 13]);

        let e = b.unlink(1, |e| e.key == 13).expect("tail");
        assert_eq!(e.key, 13);
        assert_eq!(keys_in(&b, 1), vec![9]);

        assert!(b.unlink(1, |e| e.key == 42).is_none());
        assert!(b.unlink(3, |_| true).is_none(), "empty slot");
        assert_eq!(b.len(), 1);
        b.assert_linked();
    }

    #[test]
    fn probe_reports_tail_for_vacancy() {
        let b = filled(4, &[1, 5]);
        match b.probe(1, |e| e.key == 99) {
            Probe::Vacant(Some(t)) => assert_eq!(b.entry(t).key, 5),
            _ => panic!("expected vacancy after tail"),
        }
        assert!(matches!(b.probe(0, |_| true), Probe::Vacant(None)));
        assert!(b.find(1, |e| e.key == 5).is_some());
    }

    #[test]
    fn rehome_redistributes_and_keeps_relative_order() {
        let mut b = filled(4, &[1, 5, 9, 13, 2, 6]);
        b.rehome(8);
        assert_eq!(b.capacity(), 8);
        assert_eq!(keys_in(&b, 1), vec![1, 9]);
        assert_eq!(keys_in(&b, 5), vec![5, 13]);
        assert_eq!(keys_in(&b, 2), vec![2]);
        assert_eq!(keys_in(&b, 6), vec![6]);
        assert_eq!(b.len(), 6);
        b.assert_linked();

        // Shrinking is a rehash too.
        b.rehome(1);
        assert_eq!(keys_in(&b, 0).len(), 6);
        b.assert_linked();
    }

    #[test]
    fn iter_walks_buckets_then_chains() {
        let b = filled(4, &[3, 1, 5, 0]);
        let order: Vec<u64> = b.iter().map(|(k, _)| *k).collect();
        assert_eq!(order, vec![0, 1, 5, 3]);
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut b = filled(4, &[1, 2, 3]);
        b.clear();
        assert_eq!(b.len(), 0);
        assert_eq!(b.capacity(), 4);
        assert_eq!(b.iter().count(), 0);
        b.assert_linked();
    }
}
