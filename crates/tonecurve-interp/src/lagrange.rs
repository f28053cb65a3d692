use num_traits::Float;

use crate::error::InterpolatorError;

/// Barycentric Lagrange polynomial interpolator over a growable set of
/// control points.
///
/// Maintains the unique polynomial L(x) of degree n-1 passing through all
/// n control points. The barycentric weights are precomputed so that a
/// single evaluation costs O(n); every mutation of the node set recomputes
/// the full weight vector in O(n²), which is the right tradeoff for the
/// small, interactively edited point sets tone curves are built from.
///
/// # Example
///
/// ```
/// use tonecurve_interp::Lagrange;
///
/// let mut curve = Lagrange::new(0.0, 0.0, 1.0, 1.0).unwrap();
/// let index = curve.add_point(0.5, 0.8).unwrap();
/// assert_eq!(index, 2);
/// assert_eq!(curve.value_of(0.5), 0.8);
///
/// curve.change_point(index, 0.5, 0.1).unwrap();
/// assert_eq!(curve.value_of(0.5), 0.1);
/// ```
#[derive(Debug, Clone)]
pub struct Lagrange<T: Float> {
    /// interpolation nodes, insertion order = index order
    xs: Vec<T>,
    /// value associated with each node
    ys: Vec<T>,
    /// barycentric weights, derived from `xs`
    ws: Vec<T>,
}

impl<T: Float> Lagrange<T> {
    /// Create a new interpolator from two initial control points.
    ///
    /// The polynomial through two points is the line between them; further
    /// points are added with [`Lagrange::add_point`].
    ///
    /// # Errors
    ///
    /// Returns an error if `x1 == x2`.
    pub fn new(x1: T, y1: T, x2: T, y2: T) -> Result<Self, InterpolatorError> {
        if x1 == x2 {
            return Err(InterpolatorError::DuplicateNode(0));
        }

        let mut interp = Self {
            xs: vec![x1, x2],
            ys: vec![y1, y2],
            ws: Vec::new(),
        };
        interp.update_weights();

        Ok(interp)
    }

    /// Add a new control point so that L(x) = y.
    ///
    /// # Arguments
    ///
    /// * `x` - The node x-coordinate. Must differ from every existing node.
    /// * `y` - The value the polynomial must take at `x`.
    ///
    /// # Returns
    ///
    /// The zero-based index of the added point, to be used with
    /// [`Lagrange::change_point`].
    ///
    /// # Errors
    ///
    /// Returns an error if `x` equals the x-coordinate of an existing node.
    pub fn add_point(&mut self, x: T, y: T) -> Result<usize, InterpolatorError> {
        if let Some(i) = self.find_node(x, None) {
            return Err(InterpolatorError::DuplicateNode(i));
        }

        self.xs.push(x);
        self.ys.push(y);
        self.update_weights();

        Ok(self.xs.len() - 1)
    }

    /// Move the control point at `index` to a new position.
    ///
    /// Overwrites both coordinates of the node in place and recomputes the
    /// weights; the previous position no longer influences evaluation.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range, or if the new `x`
    /// collides with any other node.
    pub fn change_point(&mut self, index: usize, x: T, y: T) -> Result<(), InterpolatorError> {
        if index >= self.xs.len() {
            return Err(InterpolatorError::InvalidIndex(index, self.xs.len()));
        }
        if let Some(i) = self.find_node(x, Some(index)) {
            return Err(InterpolatorError::DuplicateNode(i));
        }

        self.xs[index] = x;
        self.ys[index] = y;
        self.update_weights();

        Ok(())
    }

    /// Add several control points at once from `[flag, x, y]` triples.
    ///
    /// A triple contributes a node only when its flag is neither 0 nor 1;
    /// flagged triples are silently skipped. The flag convention belongs to
    /// the caller (curve editors use it to mark the endpoints that were
    /// already supplied at construction) and is not validated here.
    ///
    /// # Errors
    ///
    /// Returns an error if a contributed `x` collides with an existing node;
    /// triples before the offending one have already been added.
    pub fn add_multi_points(&mut self, points: &[[T; 3]]) -> Result<(), InterpolatorError> {
        for point in points {
            if point[0] != T::zero() && point[0] != T::one() {
                self.add_point(point[1], point[2])?;
            }
        }
        Ok(())
    }

    /// Recompute the barycentric weights `w_j = 1 / Π_{i≠j} (x_j - x_i)`.
    ///
    /// Called internally after every mutation of the node set; calling it
    /// again without mutating is idempotent. O(n²).
    pub fn update_weights(&mut self) {
        let len = self.xs.len();
        self.ws.resize(len, T::one());
        for j in 0..len {
            let mut weight = T::one();
            for i in 0..len {
                if i != j {
                    weight = weight * (self.xs[j] - self.xs[i]);
                }
            }
            self.ws[j] = T::one() / weight;
        }
    }

    /// Evaluate L(x) using the barycentric formula.
    ///
    /// If `x` is exactly a node, the stored value is returned as-is rather
    /// than routed through the 0/0 division the formula would hit there.
    /// Otherwise the two sums of the barycentric form are accumulated
    /// left-to-right over the nodes in index order.
    ///
    /// Never fails for finite `x` on a validly constructed instance.
    pub fn value_of(&self, x: T) -> T {
        let mut num = T::zero();
        let mut den = T::zero();
        for j in 0..self.xs.len() {
            if x == self.xs[j] {
                return self.ys[j];
            }
            let a = self.ws[j] / (x - self.xs[j]);
            num = num + a * self.ys[j];
            den = den + a;
        }
        num / den
    }

    /// The number of control points.
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Always false; an interpolator carries at least two points.
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// The control point at `index`, if it exists.
    pub fn node(&self, index: usize) -> Option<(T, T)> {
        Some((*self.xs.get(index)?, *self.ys.get(index)?))
    }

    /// The current barycentric weights.
    pub fn weights(&self) -> &[T] {
        &self.ws
    }

    /// Index of the node whose x equals `x`, ignoring `skip` if given.
    fn find_node(&self, x: T, skip: Option<usize>) -> Option<usize> {
        self.xs
            .iter()
            .position(|&xi| xi == x)
            .filter(|&i| Some(i) != skip)
    }
}
