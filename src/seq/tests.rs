use crate::seq::{CartesianProduct, Permutations, group_by_key, runs_by_key};

#[test]
fn product_rightmost_varies_fastest() {
    let pairs: Vec<Vec<u32>> = CartesianProduct::new(vec![vec![1, 2], vec![10, 20, 30]]).collect();
    assert_eq!(
        pairs,
        vec![
            vec![1, 10],
            vec![1, 20],
            vec![1, 30],
            vec![2, 10],
            vec![2, 20],
            vec![2, 30],
        ]
    );
}

#[test]
fn product_with_empty_pool_is_empty() {
    let mut product = CartesianProduct::new(vec![vec![1, 2], vec![]]);
    assert_eq!(product.next(), None);
}

#[test]
fn product_of_no_pools_yields_one_empty_selection() {
    let selections: Vec<Vec<u32>> = CartesianProduct::new(Vec::new()).collect();
    assert_eq!(selections, vec![Vec::<u32>::new()]);
}

#[test]
fn permutations_full_length_in_index_order() {
    let perms: Vec<Vec<u32>> = Permutations::new(vec![0, 1, 2], None).collect();
    assert_eq!(
        perms,
        vec![
            vec![0, 1, 2],
            vec![0, 2, 1],
            vec![1, 0, 2],
            vec![1, 2, 0],
            vec![2, 0, 1],
            vec![2, 1, 0],
        ]
    );
}

#[test]
fn permutations_of_length_r() {
    let perms: Vec<Vec<u32>> = Permutations::new(vec![0, 1, 2], Some(2)).collect();
    assert_eq!(
        perms,
        vec![
            vec![0, 1],
            vec![0, 2],
            vec![1, 0],
            vec![1, 2],
            vec![2, 0],
            vec![2, 1],
        ]
    );
}

#[test]
fn permutations_keep_duplicate_values_distinct() {
    let perms: Vec<Vec<u32>> = Permutations::new(vec![2, 2], None).collect();
    assert_eq!(perms, vec![vec![2, 2], vec![2, 2]]);
}

#[test]
fn permutations_r_longer_than_input_is_empty() {
    let mut perms = Permutations::new(vec![1, 2], Some(3));
    assert_eq!(perms.next(), None);
}

#[test]
fn permutations_of_empty_input_yield_one_empty_permutation() {
    let perms: Vec<Vec<u32>> = Permutations::new(Vec::new(), None).collect();
    assert_eq!(perms, vec![Vec::<u32>::new()]);
}

#[test]
fn group_by_key_keeps_first_occurrence_order() {
    let groups = group_by_key(vec![1, 6, 2, 7, 11, 3], |n| n % 5);
    assert_eq!(
        groups,
        vec![(1, vec![1, 6, 11]), (2, vec![2, 7]), (3, vec![3])]
    );
}

#[test]
fn runs_by_key_does_not_merge_separated_runs() {
    let runs: Vec<(bool, Vec<u32>)> = runs_by_key(vec![1, 3, 2, 4, 5], |n| n % 2 == 0).collect();
    assert_eq!(
        runs,
        vec![
            (false, vec![1, 3]),
            (true, vec![2, 4]),
            (false, vec![5]),
        ]
    );
}

#[test]
fn runs_by_key_is_lazy() {
    // An infinite alternating input still yields its first runs on demand.
    let mut runs = runs_by_key((0..).map(|n| n / 3), |&k| k);
    assert_eq!(runs.next(), Some((0, vec![0, 0, 0])));
    assert_eq!(runs.next(), Some((1, vec![1, 1, 1])));
}
