use super::problem::{Problem, RowId, UndoOp};

/// One level of the search: the rows that covered the chosen item when the
/// level was entered, and a cursor over them. `applied` marks whether the
/// cursor's row is currently selected in the problem state.
struct Frame {
    rows: Vec<RowId>,
    next: usize,
    applied: bool,
}

/// Lazy, pull-based enumeration of every exact cover.
///
/// Each call to [`Iterator::next`] resumes the depth-first search exactly
/// where the previous solution was yielded; nothing beyond the pulled
/// solutions is ever computed. Dropping the iterator abandons the rest of
/// the search.
pub struct Solutions {
    problem: Problem,
    stack: Vec<Frame>,
    chosen: Vec<RowId>,
    log: Vec<UndoOp>,
    checkpoints: Vec<usize>,
    started: bool,
    finished: bool,
}

impl Solutions {
    pub(crate) fn new(problem: Problem) -> Solutions {
        Solutions {
            problem,
            stack: Vec::new(),
            chosen: Vec::new(),
            log: Vec::new(),
            checkpoints: Vec::new(),
            started: false,
            finished: false,
        }
    }

    fn enter_level(&mut self, item: usize) {
        self.stack.push(Frame {
            rows: self.problem.rows_covering(item),
            next: 0,
            applied: false,
        });
    }
}

impl Iterator for Solutions {
    type Item = Vec<RowId>;

    fn next(&mut self) -> Option<Vec<RowId>> {
        if self.finished {
            return None;
        }

        if !self.started {
            self.started = true;
            if self.problem.is_poisoned() {
                self.finished = true;
                return None;
            }
            match self.problem.choose_item() {
                Some(item) => self.enter_level(item),
                // The preselected givens alone already cover every item.
                None => return Some(self.chosen.clone()),
            }
        }

        loop {
            if self.stack.is_empty() {
                self.finished = true;
                return None;
            }
            let top = self.stack.len() - 1;

            if self.stack[top].applied {
                self.stack[top].applied = false;
                self.stack[top].next += 1;
                let checkpoint = self.checkpoints.pop().unwrap_or(0);
                self.problem.undo_to(&mut self.log, checkpoint);
                self.chosen.pop();
            }

            if self.stack[top].next >= self.stack[top].rows.len() {
                // A chosen item covered by no remaining rows lands here with
                // an empty frame: the branch dies silently.
                self.stack.pop();
                continue;
            }

            let row = self.stack[top].rows[self.stack[top].next];
            self.stack[top].applied = true;
            self.checkpoints.push(self.log.len());
            self.problem.select(row, &mut self.log);
            self.chosen.push(row);

            match self.problem.choose_item() {
                Some(item) => self.enter_level(item),
                None => return Some(self.chosen.clone()),
            }
        }
    }
}
