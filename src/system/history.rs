use std::collections::VecDeque;

/// Samples kept per series; also the sparkline's fixed horizontal scale.
pub const CAPACITY: usize = 30;

/// Bounded, oldest-evicted series in arrival order.
#[derive(Debug, Clone)]
pub struct RollingHistory<T = f64> {
    samples: VecDeque<T>,
    capacity: usize,
}

impl<T> RollingHistory<T> {
    pub fn new() -> Self {
        Self::with_capacity(CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, value: T) {
        self.samples.push_back(value);
        while self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
    }

    pub fn values(&self) -> impl ExactSizeIterator<Item = &T> + DoubleEndedIterator + '_ {
        self.samples.iter()
    }

    pub fn latest(&self) -> Option<&T> {
        self.samples.back()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<T: Copy> RollingHistory<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.samples.iter().copied().collect()
    }
}

impl<T> Default for RollingHistory<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_keeps_arrival_order() {
        let mut history = RollingHistory::new();
        history.push(1.0);
        history.push(2.0);
        assert_eq!(history.len(), 2);
        assert_eq!(history.to_vec(), vec![1.0, 2.0]);
        assert_eq!(history.latest(), Some(&2.0));
    }

    #[test]
    fn caps_at_capacity() {
        let mut history = RollingHistory::with_capacity(5);
        for i in 0..10 {
            history.push(i as f64);
        }
        assert_eq!(history.len(), 5);
        assert_eq!(history.to_vec(), vec![5.0, 6.0, 7.0, 8.0, 9.0]);
    }

    #[test]
    fn forty_pushes_of_ten() {
        let mut history = RollingHistory::new();
        for _ in 0..40 {
            history.push(10.0);
        }
        assert_eq!(history.len(), CAPACITY);
        assert!(history.values().all(|v| *v == 10.0));
    }

    #[test]
    fn zero_capacity_keeps_newest() {
        let mut history = RollingHistory::with_capacity(0);
        history.push(3u8);
        history.push(4u8);
        assert_eq!(history.capacity(), 1);
        assert_eq!(history.to_vec(), vec![4]);
    }

    #[test]
    fn empty_by_default() {
        let history: RollingHistory = RollingHistory::default();
        assert!(history.is_empty());
        assert_eq!(history.latest(), None);
        assert_eq!(history.capacity(), CAPACITY);
    }
}
