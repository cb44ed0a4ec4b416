//! Oriented node handles.


//-----------------------------------------------------------------------------

/// Orientation of a node visit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Orientation {
    /// The node is visited in its forward orientation.
    Forward,
    /// The node is visited as its reverse complement.
    Reverse,
}

impl Orientation {
    /// Returns the other orientation.
    #[inline]
    pub fn flip(self) -> Self {
        match self {
            Orientation::Forward => Orientation::Reverse,
            Orientation::Reverse => Orientation::Forward,
        }
    }
}

/// Returns the node handle corresponding to the given node identifier and orientation.
///
/// # Panics
///
/// May panic if `id > usize::MAX / 2`.
///
/// # Examples
///
/// ```
/// use handlegraph::Orientation;
/// use handlegraph::support;
///
/// let handle = support::encode_node(12, Orientation::Reverse);
/// assert_eq!(support::node_id(handle), 12);
/// assert_eq!(support::node_orientation(handle), Orientation::Reverse);
/// assert_eq!(support::flip_node(handle), support::encode_node(12, Orientation::Forward));
/// ```
#[inline]
pub fn encode_node(id: usize, orientation: Orientation) -> usize {
    2 * id + (orientation == Orientation::Reverse) as usize
}

/// Returns the node identifier of the given node handle.
#[inline]
pub fn node_id(handle: usize) -> usize {
    handle / 2
}

/// Returns the orientation of the given node handle.
#[inline]
pub fn node_orientation(handle: usize) -> Orientation {
    if handle & 1 == 0 { Orientation::Forward } else { Orientation::Reverse }
}

/// Returns the handle for the same node in the other orientation.
#[inline]
pub fn flip_node(handle: usize) -> usize {
    handle ^ 1
}

//-----------------------------------------------------------------------------
