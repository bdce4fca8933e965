use std::ops::{Add, AddAssign, Index, IndexMut, Mul, Sub};

/// A small N-dimensional vector used by the constraint solver, where N is
/// fixed at construction (6 for generalized velocities, 1 or 2 for
/// constraint impulses).
#[derive(Debug, Clone, PartialEq)]
pub struct VecN {
    data: Vec<f64>,
}

impl VecN {
    /// Creates a zeroed vector of the given dimension.
    ///
    /// Panics if `n` is zero; a zero-dimensional vector is an engine bug.
    pub fn new(n: usize) -> Self {
        assert!(n > 0, "VecN dimension must be greater than zero");
        Self { data: vec![0.0; n] }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false: `new` rejects a zero dimension.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Resets every component to zero.
    pub fn zero(&mut self) {
        for v in &mut self.data {
            *v = 0.0;
        }
    }

    /// Dot product. Panics on dimension mismatch.
    pub fn dot(&self, other: &VecN) -> f64 {
        assert_eq!(
            self.len(),
            other.len(),
            "VecN dot product requires equal dimensions"
        );
        self.data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| a * b)
            .sum()
    }
}

impl Index<usize> for VecN {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.data[index]
    }
}

impl IndexMut<usize> for VecN {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        &mut self.data[index]
    }
}

impl Add for &VecN {
    type Output = VecN;

    fn add(self, other: &VecN) -> VecN {
        assert_eq!(self.len(), other.len(), "VecN add requires equal dimensions");
        VecN {
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(a, b)| a + b)
                .collect(),
        }
    }
}

impl Sub for &VecN {
    type Output = VecN;

    fn sub(self, other: &VecN) -> VecN {
        assert_eq!(self.len(), other.len(), "VecN sub requires equal dimensions");
        VecN {
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(a, b)| a - b)
                .collect(),
        }
    }
}

impl AddAssign<&VecN> for VecN {
    fn add_assign(&mut self, other: &VecN) {
        assert_eq!(self.len(), other.len(), "VecN add requires equal dimensions");
        for (a, b) in self.data.iter_mut().zip(&other.data) {
            *a += b;
        }
    }
}

impl Mul<f64> for &VecN {
    type Output = VecN;

    fn mul(self, scalar: f64) -> VecN {
        VecN {
            data: self.data.iter().map(|a| a * scalar).collect(),
        }
    }
}
