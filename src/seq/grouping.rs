/// Eagerly groups elements by key, keeping one entry per distinct key in
/// order of first occurrence. Unlike [`runs_by_key`], elements with the same
/// key always end up in the same group no matter where they appear.
pub fn group_by_key<T, K, F>(items: impl IntoIterator<Item = T>, mut key: F) -> Vec<(K, Vec<T>)>
where
    K: PartialEq,
    F: FnMut(&T) -> K,
{
    let mut groups: Vec<(K, Vec<T>)> = Vec::new();
    for item in items {
        let k = key(&item);
        match groups.iter_mut().find(|(group_key, _)| *group_key == k) {
            Some((_, members)) => members.push(item),
            None => groups.push((k, vec![item])),
        }
    }
    groups
}

/// Lazily yields consecutive runs of elements sharing a key.
///
/// Runs with equal keys separated by other keys are not merged; inputs that
/// want one group per key must be pre-clustered (or use [`group_by_key`]).
pub fn runs_by_key<I, K, F>(items: I, key: F) -> Runs<I::IntoIter, K, F>
where
    I: IntoIterator,
    K: PartialEq,
    F: FnMut(&I::Item) -> K,
{
    Runs {
        iter: items.into_iter(),
        key,
        pending: None,
    }
}

pub struct Runs<I: Iterator, K, F> {
    iter: I,
    key: F,
    pending: Option<(K, I::Item)>,
}

impl<I, K, F> Iterator for Runs<I, K, F>
where
    I: Iterator,
    K: PartialEq,
    F: FnMut(&I::Item) -> K,
{
    type Item = (K, Vec<I::Item>);

    fn next(&mut self) -> Option<Self::Item> {
        let (run_key, first) = match self.pending.take() {
            Some(carried) => carried,
            None => {
                let item = self.iter.next()?;
                let k = (self.key)(&item);
                (k, item)
            }
        };

        let mut members = vec![first];
        for item in self.iter.by_ref() {
            let k = (self.key)(&item);
            if k == run_key {
                members.push(item);
            } else {
                self.pending = Some((k, item));
                break;
            }
        }

        Some((run_key, members))
    }
}
