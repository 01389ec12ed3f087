use alloc::vec::Vec;

use super::filter::Filter;
use super::parse::{Clause, Op};
use crate::registry;
use crate::suites::{
    Authentication, BulkAlgorithm, KeyExchange, MacAlgorithm, SupportedCipherSuite,
};

#[derive(Clone, Copy, Debug)]
struct Entry {
    suite: &'static SupportedCipherSuite,
    active: bool,
}

/// An ordered set of candidate suites, some of them selected.
///
/// Every suite appears at most once; killed suites are gone from the
/// list entirely.
#[derive(Clone, Debug)]
pub(crate) struct Selection {
    entries: Vec<Entry>,
}

impl Selection {
    /// Every pre-1.3 suite in descending wire value, none selected.
    fn by_descending_value() -> Self {
        let mut entries: Vec<Entry> = registry::legacy_suites()
            .map(|suite| Entry {
                suite,
                active: false,
            })
            .collect();
        entries.reverse();
        Self { entries }
    }

    /// Every pre-1.3 suite in preference order, none selected.
    pub(crate) fn preference_order() -> Self {
        use Filter::{Auth, Bulk, Kx, Mac};

        let mut sel = Self::by_descending_value();

        // forward secrecy first
        sel.apply(Op::Add, &[Kx(KeyExchange::Ecdhe)]);
        sel.apply(Op::Delete, &[Kx(KeyExchange::Ecdhe)]);

        sel.apply(Op::Add, &[Bulk(&[BulkAlgorithm::Chacha20Poly1305])]);
        sel.apply(
            Op::Add,
            &[Bulk(&[
                BulkAlgorithm::Aes128,
                BulkAlgorithm::Aes256,
                BulkAlgorithm::Aes128Gcm,
                BulkAlgorithm::Aes256Gcm,
            ])],
        );
        sel.apply(Op::Add, &[]);

        sel.push_back(&[Mac(MacAlgorithm::Md5)]);
        sel.push_back(&[Auth(Authentication::Anonymous)]);
        sel.push_back(&[Kx(KeyExchange::Rsa)]);
        sel.push_back(&[Bulk(&[BulkAlgorithm::Rc4])]);

        sel.sort_by_strength();
        sel.apply(Op::Delete, &[]);
        sel
    }

    pub(crate) fn run(&mut self, clauses: &[Clause]) {
        for clause in clauses {
            match clause {
                Clause::Select { op, filters } => self.apply(*op, filters),
                Clause::SortByStrength => self.sort_by_strength(),
            }
        }
    }

    /// Apply `op` to every suite matching all of `filters`.
    pub(crate) fn apply(&mut self, op: Op, filters: &[Filter]) {
        let hit = |e: &Entry| matches_all(filters, e);

        match op {
            Op::Add => self.move_to_tail(|e| !e.active && hit(e)),
            Op::Order => self.deselect(|e| e.active && !hit(e)),
            Op::Delete => self.deselect(|e| e.active && hit(e)),
            Op::Kill => self.entries.retain(|e| !hit(e)),
        }
    }

    /// Move selected suites matching all of `filters` to the end.
    fn push_back(&mut self, filters: &[Filter]) {
        self.move_to_tail(|e| e.active && matches_all(filters, e));
    }

    /// Move entries matching `pred` to the end, selecting them.
    fn move_to_tail(&mut self, pred: impl Fn(&Entry) -> bool) {
        let (mut moved, mut rest): (Vec<Entry>, Vec<Entry>) =
            self.entries.iter().copied().partition(|e| pred(e));
        for e in &mut moved {
            e.active = true;
        }
        rest.extend(moved);
        self.entries = rest;
    }

    /// Move entries matching `pred` to the front, deselecting them.
    fn deselect(&mut self, pred: impl Fn(&Entry) -> bool) {
        let (mut moved, rest): (Vec<Entry>, Vec<Entry>) =
            self.entries.iter().copied().partition(|e| pred(e));
        for e in &mut moved {
            e.active = false;
        }
        moved.extend(rest);
        self.entries = moved;
    }

    /// Stable sort of the selected suites by strength bits, strongest
    /// first.  Unselected suites keep their place ahead of them.
    pub(crate) fn sort_by_strength(&mut self) {
        let (rest, mut active): (Vec<Entry>, Vec<Entry>) =
            self.entries.iter().copied().partition(|e| !e.active);
        active.sort_by(|a, b| b.suite.strength_bits.cmp(&a.suite.strength_bits));
        self.entries = rest;
        self.entries.extend(active);
    }

    /// The selected suites, in order.
    pub(crate) fn selected(&self) -> Vec<&'static SupportedCipherSuite> {
        self.entries
            .iter()
            .filter(|e| e.active)
            .map(|e| e.suite)
            .collect()
    }

    /// Every suite still in the list, selected or not.
    pub(crate) fn candidates(&self) -> impl Iterator<Item = &'static SupportedCipherSuite> + '_ {
        self.entries.iter().map(|e| e.suite)
    }
}

fn matches_all(filters: &[Filter], entry: &Entry) -> bool {
    filters.iter().all(|f| f.matches(entry.suite))
}
