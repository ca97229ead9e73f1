use fnv::FnvHashSet;

/// Remembers which entries of an observed element list have already fired.
///
/// An `IntersectionObserver` batch can hold more than one entry for the same
/// target before `unobserve` takes effect; this keeps the action one-shot.
#[derive(Clone, Debug, Default)]
pub struct TriggerSet {
    fired: FnvHashSet<usize>,
}

impl TriggerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// True the first time `index` is seen, false afterwards.
    #[inline]
    pub fn fire(&mut self, index: usize) -> bool {
        self.fired.insert(index)
    }

    #[inline]
    pub fn has_fired(&self, index: usize) -> bool {
        self.fired.contains(&index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fired.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fired.is_empty()
    }
}
