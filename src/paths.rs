//! An in-memory collection of named paths over node handles.
//!
//! [`PathCollection`] stores path names and oriented node visits, but no node sequences or edges.
//! It implements the graph capabilities needed by the path metadata interface.

use crate::graph::{PathHandleGraph, MutablePathHandleGraph, PathMetadata, MutablePathMetadata};
use crate::support;

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

#[cfg(test)]
mod tests;

//-----------------------------------------------------------------------------

/// A step on a path: the path identifier and the offset of the node visit on the path.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Step {
    /// Path identifier.
    pub path: usize,
    /// Offset of the visit on the path.
    pub offset: usize,
}

impl Step {
    /// Creates a new step.
    #[inline]
    pub fn new(path: usize, offset: usize) -> Self {
        Step {
            path, offset,
        }
    }
}

impl From<(usize, usize)> for Step {
    #[inline]
    fn from(step: (usize, usize)) -> Self {
        Self::new(step.0, step.1)
    }
}

//-----------------------------------------------------------------------------

/// A set of named paths.
///
/// Paths have consecutive identifiers starting from `0`, in the order they were added.
/// Each path is a sequence of node handles (see [`support::encode_node`]).
/// Path names must be unique.
///
/// # Examples
///
/// ```
/// use handlegraph::{PathCollection, Orientation, PathMetadata, Sense, Step};
/// use handlegraph::support;
///
/// let mut paths = PathCollection::new();
/// let reference = paths.add_path("GRCh38#0#chr1", false);
/// let haplotype = paths.add_path("HG002#1#chr1#0", false);
/// paths.append_step(reference, support::encode_node(1, Orientation::Forward));
/// paths.append_step(haplotype, support::encode_node(2, Orientation::Forward));
/// paths.append_step(haplotype, support::encode_node(1, Orientation::Reverse));
///
/// assert_eq!(paths.path_handle("HG002#1#chr1#0"), Some(haplotype));
/// assert_eq!(paths.step_count(haplotype), 2);
///
/// let mut steps = Vec::new();
/// paths.for_each_step_of_sense(support::encode_node(1, Orientation::Forward), Sense::Haplotype, |step| {
///     steps.push(step); true
/// });
/// assert_eq!(steps, vec![Step::new(haplotype, 1)]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PathCollection {
    names: Vec<String>,
    ids: HashMap<String, usize>,
    circular: Vec<bool>,
    paths: Vec<Vec<usize>>,
    // Steps visiting each node id, in the order they were appended.
    occurrences: BTreeMap<usize, Vec<Step>>,
}

impl PathCollection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        PathCollection::default()
    }

    /// Returns the number of paths.
    #[inline]
    pub fn paths(&self) -> usize {
        self.paths.len()
    }

    /// Returns `true` if the collection is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.paths() == 0
    }

    /// Returns `true` if there is a path with the given name.
    pub fn has_path(&self, name: &str) -> bool {
        self.path_handle(name).is_some()
    }

    /// Returns the identifier of the path with the given name, or [`None`] if there is no such path.
    pub fn path_handle(&self, name: &str) -> Option<usize> {
        self.ids.get(name).copied()
    }

    /// Returns the name of the path.
    ///
    /// # Panics
    ///
    /// May panic if `path >= self.paths()`.
    #[inline]
    pub fn path_name(&self, path: usize) -> &str {
        &self.names[path]
    }

    /// Returns `true` if the path is circular.
    ///
    /// # Panics
    ///
    /// May panic if `path >= self.paths()`.
    #[inline]
    pub fn is_circular(&self, path: usize) -> bool {
        self.circular[path]
    }

    /// Returns the number of steps on the path.
    ///
    /// # Panics
    ///
    /// May panic if `path >= self.paths()`.
    #[inline]
    pub fn step_count(&self, path: usize) -> usize {
        self.paths[path].len()
    }

    /// Returns the node handles visited by the path.
    ///
    /// # Panics
    ///
    /// May panic if `path >= self.paths()`.
    #[inline]
    pub fn path(&self, path: usize) -> &[usize] {
        &self.paths[path]
    }

    /// Returns the node handle visited by the step.
    ///
    /// # Panics
    ///
    /// May panic if the step does not exist.
    #[inline]
    pub fn handle_of_step(&self, step: Step) -> usize {
        self.paths[step.path][step.offset]
    }

    /// Adds an empty path with the given name and returns its identifier.
    ///
    /// # Panics
    ///
    /// Panics if there is already a path with the same name.
    pub fn add_path(&mut self, name: &str, is_circular: bool) -> usize {
        if self.ids.contains_key(name) {
            panic!("PathCollection: Path {} already exists", name);
        }
        let path = self.names.len();
        self.names.push(String::from(name));
        self.ids.insert(String::from(name), path);
        self.circular.push(is_circular);
        self.paths.push(Vec::new());
        path
    }

    /// Appends a visit to the given node handle to the end of the path and returns the step.
    ///
    /// # Panics
    ///
    /// May panic if `path >= self.paths()`.
    pub fn append_step(&mut self, path: usize, handle: usize) -> Step {
        let step = Step::new(path, self.paths[path].len());
        self.paths[path].push(handle);
        self.occurrences.entry(support::node_id(handle)).or_insert_with(Vec::new).push(step);
        step
    }
}

//-----------------------------------------------------------------------------

impl PathHandleGraph for PathCollection {
    type Handle = usize;
    type PathHandle = usize;
    type StepHandle = Step;

    fn get_path_name(&self, path: Self::PathHandle) -> Cow<'_, str> {
        Cow::Borrowed(self.path_name(path))
    }

    fn for_each_path_handle<F>(&self, mut visitor: F) -> bool
        where F: FnMut(Self::PathHandle) -> bool
    {
        (0..self.paths()).all(|path| visitor(path))
    }

    fn for_each_step_on_handle<F>(&self, handle: Self::Handle, mut visitor: F) -> bool
        where F: FnMut(Self::StepHandle) -> bool
    {
        match self.occurrences.get(&support::node_id(handle)) {
            Some(steps) => steps.iter().all(|&step| visitor(step)),
            None => true,
        }
    }

    #[inline]
    fn get_path_handle_of_step(&self, step: Self::StepHandle) -> Self::PathHandle {
        step.path
    }
}

impl MutablePathHandleGraph for PathCollection {
    /// Same as [`PathCollection::add_path`].
    ///
    /// # Panics
    ///
    /// Panics if there is already a path with the same name.
    fn create_path_handle(&mut self, name: &str, is_circular: bool) -> Self::PathHandle {
        self.add_path(name, is_circular)
    }
}

impl PathMetadata for PathCollection {}

impl MutablePathMetadata for PathCollection {}

//-----------------------------------------------------------------------------
