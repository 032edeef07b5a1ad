use base::error::HeapError;
use base::options::HeapOptions;
use base::priority::Keyed;
use heap::BoundedPriorityHeap;

#[test]
fn capacity_five_extraction() {
    let mut heap = BoundedPriorityHeap::new(5).unwrap();
    for x in [5u32, 1, 9, 3] {
        heap.insert(x).unwrap();
    }
    assert_eq!(heap.remove_max(), Ok(9));
    assert_eq!(heap.remove_max(), Ok(5));
    assert_eq!(heap.remove_max(), Ok(3));
    assert_eq!(heap.remove_max(), Ok(1));
    assert_eq!(heap.remove_max(), Err(HeapError::Empty));
}

#[test]
fn capacity_two_boundary() {
    let mut heap = BoundedPriorityHeap::new(2).unwrap();
    heap.insert(1u32).unwrap();
    heap.insert(2u32).unwrap();
    let err = heap.insert(3u32).unwrap_err();
    assert_eq!(HeapError::from(err), HeapError::Full);
    assert_eq!(heap.len(), 2);
}

#[test]
fn heap_from_toml_options() {
    let options = HeapOptions::from_toml("capacity = 3").unwrap();
    let mut heap = BoundedPriorityHeap::from_options(&options).unwrap();
    for (p, name) in [(2, "low"), (7, "high"), (4, "mid")] {
        heap.insert(Keyed::new(p, name)).unwrap();
    }
    assert!(heap.is_full());
    let names = heap.into_ranked_vec().into_iter().map(|x| x.value).collect::<Vec<_>>();
    assert_eq!(names, vec!["high", "mid", "low"]);
}

#[test]
fn levels_expose_tree_shape() {
    let heap = BoundedPriorityHeap::from_vec(7, vec![1u32, 2, 3, 4, 5, 6, 7]).unwrap();
    let widths = heap.levels().map(<[u32]>::len).collect::<Vec<_>>();
    assert_eq!(widths, vec![1, 2, 4]);
    assert_eq!(heap.levels().next(), Some(&[7u32][..]));
    assert_eq!(heap.iter().count(), 7);
}

#[test]
fn round_trip_is_descending_permutation() {
    let input = [12u64, 4, 4, 19, 0, 7, 7, 7, 3, 25];
    let mut heap = BoundedPriorityHeap::new(input.len()).unwrap();
    for x in input {
        heap.insert(x).unwrap();
    }
    let out = heap.into_ranked_vec();
    let mut expected = input.to_vec();
    expected.sort_by(|a, b| b.cmp(a));
    assert_eq!(out, expected);
}

#[test]
fn custom_comparator_closure() {
    let by_len = |a: &usize, b: &usize| a.cmp(b).reverse();
    let mut heap = BoundedPriorityHeap::with_comparator(3, by_len).unwrap();
    for word in ["ccc", "a", "bb"] {
        heap.insert(Keyed::new(word.len(), word)).unwrap();
    }
    assert_eq!(heap.remove_max().map(|x| x.value), Ok("a"));
}
