/// Partitions `arr` around the value at `pivot_index` using swaps only.
///
/// After the call, `arr[..boundary]` holds exactly the elements strictly
/// less than the pivot value and `arr[boundary..]` holds the rest, where
/// `boundary` is the returned position.
///
/// When nothing is strictly less than the pivot (the pivot is a minimum of
/// the range), the pivot is swapped to the front and `1` is returned, so the
/// prefix is the single pivot element. The boundary is therefore never `0`,
/// and callers that narrow the range on either side always make progress.
///
/// # Panics
///
/// Panics if `pivot_index` is out of bounds.
pub fn partition<T: PartialOrd + Clone>(arr: &mut [T], pivot_index: usize) -> usize {
    let pivot = arr[pivot_index].clone();
    let mut boundary = 0;
    for j in 0..arr.len() {
        if arr[j] < pivot {
            arr.swap(boundary, j);
            boundary += 1;
        }
    }
    if boundary == 0 {
        // No swaps happened, so the pivot is still at `pivot_index`.
        arr.swap(pivot_index, 0);
        boundary = 1;
    }
    boundary
}

/// Moves the elements of `arr` that are not greater than `pivot` to the
/// front and returns how many there are.
///
/// Applied to the "greater-or-equal" side of a [`partition`], this gathers
/// the copies of the pivot value, so a selection loop can stop as soon as
/// the target rank falls among them instead of peeling them off one at a
/// time.
pub fn partition_equal<T: PartialOrd>(arr: &mut [T], pivot: &T) -> usize {
    let mut boundary = 0;
    for j in 0..arr.len() {
        if !(*pivot < arr[j]) {
            arr.swap(boundary, j);
            boundary += 1;
        }
    }
    boundary
}
