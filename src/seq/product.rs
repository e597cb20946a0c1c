/// Lazy Cartesian product over a list of pools.
///
/// The rightmost pool varies fastest. Pools are materialized by the caller
/// and traversed repeatedly by index, so each selection costs one clone per
/// coordinate. An empty pool anywhere makes the whole product empty; an
/// empty pool *list* yields exactly one empty selection.
pub struct CartesianProduct<T> {
    pools: Vec<Vec<T>>,
    indices: Vec<usize>,
    done: bool,
}

impl<T: Clone> CartesianProduct<T> {
    pub fn new(pools: Vec<Vec<T>>) -> CartesianProduct<T> {
        let done = pools.iter().any(Vec::is_empty);
        let indices = vec![0; pools.len()];
        CartesianProduct {
            pools,
            indices,
            done,
        }
    }
}

impl<T: Clone> Iterator for CartesianProduct<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if self.done {
            return None;
        }

        let current = self
            .indices
            .iter()
            .zip(&self.pools)
            .map(|(&idx, pool)| pool[idx].clone())
            .collect();

        // Advance like an odometer, rightmost digit first.
        let mut pos = self.pools.len();
        loop {
            if pos == 0 {
                self.done = true;
                break;
            }
            pos -= 1;
            self.indices[pos] += 1;
            if self.indices[pos] < self.pools[pos].len() {
                break;
            }
            self.indices[pos] = 0;
        }

        Some(current)
    }
}
