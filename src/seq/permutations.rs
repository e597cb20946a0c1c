/// Lazy permutations of length `r` over the input, in lexicographic order of
/// the element *indices*.
///
/// Elements are distinguished by position, not value: an input with repeated
/// values yields the corresponding repeated permutations distinctly. `r`
/// defaults to the full input length; `r` larger than the input yields
/// nothing.
pub struct Permutations<T> {
    items: Vec<T>,
    indices: Vec<usize>,
    cycles: Vec<usize>,
    r: usize,
    started: bool,
    done: bool,
}

impl<T: Clone> Permutations<T> {
    pub fn new(items: Vec<T>, r: Option<usize>) -> Permutations<T> {
        let n = items.len();
        let r = r.unwrap_or(n);
        Permutations {
            indices: (0..n).collect(),
            cycles: (0..r).map(|i| n - i).collect(),
            done: r > n,
            items,
            r,
            started: false,
        }
    }

    fn current(&self) -> Vec<T> {
        self.indices[..self.r]
            .iter()
            .map(|&idx| self.items[idx].clone())
            .collect()
    }
}

impl<T: Clone> Iterator for Permutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.current());
        }

        let n = self.items.len();
        let mut i = self.r;
        while i > 0 {
            i -= 1;
            self.cycles[i] -= 1;
            if self.cycles[i] == 0 {
                self.indices[i..].rotate_left(1);
                self.cycles[i] = n - i;
            } else {
                let j = n - self.cycles[i];
                self.indices.swap(i, j);
                return Some(self.current());
            }
        }

        self.done = true;
        None
    }
}
