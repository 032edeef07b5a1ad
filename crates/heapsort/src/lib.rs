//! In-place heapsort.
//!
//! Elements are compared directly. A child replaces its parent only when it is
//! strictly greater than the best candidate so far, so equal elements are never
//! exchanged and equal children resolve to the left one.

use std::cmp::Ordering;

pub fn sort<T: Ord>(data: &mut [T]) {
    sort_by(data, T::cmp);
}

/// Sorts the first `size` elements of `data`.
pub fn sort_len<T: Ord>(data: &mut [T], size: usize) {
    assert!(
        size <= data.len(),
        "sort length {} exceeds buffer length {}",
        size,
        data.len()
    );
    sort(&mut data[..size]);
}

pub fn sort_by<T, F>(data: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let size = data.len();
    if size < 2 {
        return;
    }
    for root in (0..=(size - 1) / 2).rev() {
        sift_down(data, &mut compare, root, size);
    }
    for boundary in (1..size).rev() {
        data.swap(0, boundary);
        sift_down(data, &mut compare, 0, boundary);
    }
}

fn sift_down<T, F>(data: &mut [T], compare: &mut F, mut root: usize, size: usize)
where
    F: FnMut(&T, &T) -> Ordering,
{
    loop {
        let left = 2 * root + 1;
        let right = left + 1;
        let mut best = root;
        if left < size && compare(&data[left], &data[best]) == Ordering::Greater {
            best = left;
        }
        if right < size && compare(&data[right], &data[best]) == Ordering::Greater {
            best = right;
        }
        if best == root {
            break;
        }
        data.swap(root, best);
        root = best;
    }
}
