/// Sorts a short slice in place by repeated adjacent swaps.
///
/// Quadratic, so only meant for the fixed-size groups of median-of-medians.
pub fn insertion_sort<T: PartialOrd>(arr: &mut [T]) {
    for i in 1..arr.len() {
        let mut j = i;
        while j > 0 && arr[j - 1] > arr[j] {
            arr.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Sorts `group` and returns the index of its lower median.
///
/// # Panics
///
/// Panics if `group` is empty.
pub fn group_median<T: PartialOrd>(group: &mut [T]) -> usize {
    assert!(!group.is_empty(), "group must not be empty");
    insertion_sort(group);
    (group.len() - 1) / 2
}
