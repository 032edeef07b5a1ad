//! Positional addressing of the implicit binary tree.

pub fn parent(i: usize) -> Option<usize> {
    if i == 0 {
        None
    } else {
        Some((i - 1) / 2)
    }
}

pub fn left(i: usize, len: usize) -> Option<usize> {
    let l = 2 * i + 1;
    (l < len).then_some(l)
}

pub fn right(i: usize, len: usize) -> Option<usize> {
    let r = 2 * i + 2;
    (r < len).then_some(r)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_has_no_parent() {
        assert_eq!(parent(0), None);
        assert_eq!(parent(1), Some(0));
        assert_eq!(parent(2), Some(0));
        assert_eq!(parent(6), Some(2));
    }

    #[test]
    fn children_respect_length() {
        assert_eq!(left(0, 3), Some(1));
        assert_eq!(right(0, 3), Some(2));
        assert_eq!(right(0, 2), None);
        assert_eq!(left(1, 3), None);
        assert_eq!(left(2, 6), Some(5));
    }
}
