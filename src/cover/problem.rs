use log::debug;

use super::solve::Solutions;

pub type ItemId = usize;
pub type RowId = usize;

const ABSENT: usize = usize::MAX;

/// Set of dense ids with O(1) membership and removal. A removed id can be
/// restored to its exact former slot, provided restorations happen in the
/// reverse order of removals.
#[derive(Clone, Debug, Default)]
pub(crate) struct SparseSet {
    dense: Vec<usize>,
    slots: Vec<usize>,
}

impl SparseSet {
    fn new() -> SparseSet {
        SparseSet::default()
    }

    fn full(universe: usize) -> SparseSet {
        SparseSet {
            dense: (0..universe).collect(),
            slots: (0..universe).collect(),
        }
    }

    fn insert(&mut self, id: usize) {
        if self.slots.len() <= id {
            self.slots.resize(id + 1, ABSENT);
        }
        debug_assert_eq!(self.slots[id], ABSENT);
        self.slots[id] = self.dense.len();
        self.dense.push(id);
    }

    fn contains(&self, id: usize) -> bool {
        self.slots.get(id).is_some_and(|&slot| slot != ABSENT)
    }

    fn len(&self) -> usize {
        self.dense.len()
    }

    fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.dense.iter().copied()
    }

    fn snapshot(&self) -> Vec<usize> {
        self.dense.clone()
    }

    /// Removes `id`, returning the slot it occupied.
    fn remove(&mut self, id: usize) -> usize {
        let slot = self.slots[id];
        debug_assert_ne!(slot, ABSENT);
        let last = self.dense.len() - 1;
        self.dense.swap(slot, last);
        self.slots[self.dense[slot]] = slot;
        self.dense.pop();
        self.slots[id] = ABSENT;
        slot
    }

    /// Puts `id` back into the slot returned by [`SparseSet::remove`].
    fn restore(&mut self, id: usize, slot: usize) {
        self.slots[id] = self.dense.len();
        self.dense.push(id);
        let last = self.dense.len() - 1;
        self.dense.swap(slot, last);
        self.slots[self.dense[slot]] = slot;
        self.slots[self.dense[last]] = last;
    }
}

/// One reversible mutation performed by a cover step. Replaying a log of
/// these in reverse restores the problem to its exact prior state; the
/// search depends on that exactness, since re-deriving the structure could
/// resurrect rows eliminated by selections made earlier in the recursion.
#[derive(Clone, Copy, Debug)]
pub(crate) enum UndoOp {
    RowRemoved {
        item: ItemId,
        row: RowId,
        slot: usize,
    },
    ItemCovered {
        item: ItemId,
        slot: usize,
    },
}

/// An exact cover problem over a fixed item universe.
///
/// Items are dense indices `0..num_items`; rows are added with [`add_row`]
/// and identified by insertion order. Known selections ("givens") can be
/// applied up front with [`preselect`].
///
/// [`add_row`]: Problem::add_row
/// [`preselect`]: Problem::preselect
pub struct Problem {
    row_items: Vec<Vec<ItemId>>,
    item_rows: Vec<SparseSet>,
    active_items: SparseSet,
    poisoned: bool,
}

impl Problem {
    pub fn new(num_items: usize) -> Problem {
        Problem {
            row_items: Vec::new(),
            item_rows: (0..num_items).map(|_| SparseSet::new()).collect(),
            active_items: SparseSet::full(num_items),
            poisoned: false,
        }
    }

    /// Adds a candidate row covering `items`, returning its id.
    pub fn add_row(&mut self, items: impl IntoIterator<Item = ItemId>) -> RowId {
        let row = self.row_items.len();
        let items: Vec<ItemId> = items.into_iter().collect();
        debug_assert!(items.iter().all(|&item| item < self.item_rows.len()));
        for &item in &items {
            self.item_rows[item].insert(row);
        }
        self.row_items.push(items);
        row
    }

    pub fn num_items(&self) -> usize {
        self.item_rows.len()
    }

    pub fn num_rows(&self) -> usize {
        self.row_items.len()
    }

    /// Selects a given row before the search begins. The row's items are
    /// covered exactly as during the search, narrowing the problem. A given
    /// that conflicts with earlier selections poisons the problem:
    /// [`Problem::solutions`] then yields nothing, which is the only signal —
    /// there is no error for unsatisfiable input.
    pub fn preselect(&mut self, row: RowId) {
        if self.poisoned {
            return;
        }
        let consistent = self.row_items[row]
            .iter()
            .all(|&item| self.active_items.contains(item) && self.item_rows[item].contains(row));
        if !consistent {
            debug!("given row {row} conflicts with an earlier selection");
            self.poisoned = true;
            return;
        }
        // Givens stay selected for the lifetime of the problem, so their
        // undo entries are discarded.
        let mut log = Vec::new();
        self.select(row, &mut log);
    }

    /// Covers every item of `row`: each other row that covers one of those
    /// items is eliminated, and the items leave the active universe. Every
    /// mutation is recorded in `log` for [`Problem::undo_to`].
    pub(crate) fn select(&mut self, row: RowId, log: &mut Vec<UndoOp>) {
        let items = self.row_items[row].clone();
        for &covered in &items {
            // Snapshot: sibling sets shrink while this item is processed.
            for conflicting in self.item_rows[covered].snapshot() {
                for idx in 0..self.row_items[conflicting].len() {
                    let other = self.row_items[conflicting][idx];
                    if other != covered {
                        let slot = self.item_rows[other].remove(conflicting);
                        log.push(UndoOp::RowRemoved {
                            item: other,
                            row: conflicting,
                            slot,
                        });
                    }
                }
            }
            let slot = self.active_items.remove(covered);
            log.push(UndoOp::ItemCovered {
                item: covered,
                slot,
            });
        }
    }

    /// Unwinds `log` back to `checkpoint`, inverting each mutation in
    /// reverse order.
    pub(crate) fn undo_to(&mut self, log: &mut Vec<UndoOp>, checkpoint: usize) {
        while log.len() > checkpoint {
            match log.pop() {
                Some(UndoOp::ItemCovered { item, slot }) => self.active_items.restore(item, slot),
                Some(UndoOp::RowRemoved { item, row, slot }) => {
                    self.item_rows[item].restore(row, slot)
                }
                None => break,
            }
        }
    }

    /// Picks the active item with the fewest remaining covering rows, ties
    /// broken by first encounter. Returns `None` once every item is covered.
    pub(crate) fn choose_item(&self) -> Option<ItemId> {
        self.active_items
            .iter()
            .min_by_key(|&item| self.item_rows[item].len())
    }

    pub(crate) fn rows_covering(&self, item: ItemId) -> Vec<RowId> {
        self.item_rows[item].snapshot()
    }

    pub(crate) fn is_poisoned(&self) -> bool {
        self.poisoned
    }

    /// Lazily enumerates every exact cover of the remaining active items.
    /// Preselected given rows are not repeated in the yielded row sets.
    pub fn solutions(self) -> Solutions {
        debug!(
            "solving exact cover: {} active items, {} rows",
            self.active_items.len(),
            self.num_rows()
        );
        Solutions::new(self)
    }
}
