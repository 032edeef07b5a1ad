/// Iterator over the depths of a heap, yielding the slice of each level.
#[derive(Debug, Clone)]
pub struct Levels<'a, T> {
    rest: &'a [T],
    width: usize,
}

impl<'a, T> Levels<'a, T> {
    pub(crate) fn new(live: &'a [T]) -> Self {
        Self {
            rest: live,
            width: 1,
        }
    }
}

impl<'a, T> Iterator for Levels<'a, T> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<&'a [T]> {
        if self.rest.is_empty() {
            return None;
        }
        let n = self.width.min(self.rest.len());
        let (level, rest) = self.rest.split_at(n);
        self.rest = rest;
        self.width *= 2;
        Some(level)
    }
}
