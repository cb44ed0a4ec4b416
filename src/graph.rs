//! Handle graph capabilities and the path metadata interface built on them.
//!
//! A graph that stores named paths implements [`PathHandleGraph`].
//! By also implementing [`PathMetadata`], usually with an empty `impl` block, it gains accessors for the metadata encoded in path names (see [`crate::format`]) and iteration over paths and steps filtered by metadata.
//! Any of the default methods can be overridden, for example by a graph that stores the metadata separately from path names.
//!
//! Iteration uses visitor functions.
//! A visitor returns `false` to stop the iteration, and the iterating method returns `false` if it stopped early.

use crate::format::{self, PathIdentity, Sense, Subrange, InvalidMetadata};

use std::borrow::Cow;
use std::collections::HashSet;


//-----------------------------------------------------------------------------

/// The graph capabilities required by [`PathMetadata`].
///
/// Handles are opaque graph-local identifiers.
/// Passing an invalid handle to any method is an error the graph may report by panicking.
pub trait PathHandleGraph {
    /// Node handle: a node in a specific orientation.
    type Handle: Copy;
    /// Path handle.
    type PathHandle: Copy;
    /// Handle to a step (node visit) on a path.
    type StepHandle: Copy;

    /// Returns the name of the path.
    fn get_path_name(&self, path: Self::PathHandle) -> Cow<'_, str>;

    /// Calls `visitor` on each path handle in the graph.
    ///
    /// Stops and returns `false` if the visitor returns `false`.
    fn for_each_path_handle<F>(&self, visitor: F) -> bool
        where F: FnMut(Self::PathHandle) -> bool;

    /// Calls `visitor` on each step visiting the node of the handle in any orientation.
    ///
    /// Stops and returns `false` if the visitor returns `false`.
    fn for_each_step_on_handle<F>(&self, handle: Self::Handle, visitor: F) -> bool
        where F: FnMut(Self::StepHandle) -> bool;

    /// Returns the path the step is on.
    fn get_path_handle_of_step(&self, step: Self::StepHandle) -> Self::PathHandle;
}

/// A graph that can create new named paths.
pub trait MutablePathHandleGraph: PathHandleGraph {
    /// Creates an empty path with the given name and returns a handle to it.
    ///
    /// Handles to existing paths remain valid.
    /// The caller must ensure that there is no path with the same name.
    ///
    /// # Panics
    ///
    /// May panic if there is already a path with the same name.
    fn create_path_handle(&mut self, name: &str, is_circular: bool) -> Self::PathHandle;
}

//-----------------------------------------------------------------------------

/// Path metadata derived from path names.
///
/// Every method has a default implementation that parses the name returned by [`PathHandleGraph::get_path_name`].
/// The accessors never fail: missing fields are reported as [`None`].
///
/// # Examples
///
/// ```
/// use handlegraph::{PathCollection, PathMetadata, Sense};
///
/// let mut paths = PathCollection::new();
/// let reference = paths.add_path("GRCh38#0#chr1", false);
/// let haplotype = paths.add_path("HG002#1#chr1#0", false);
/// let contig = paths.add_path("alt_contig", false);
///
/// assert_eq!(paths.get_sense(reference), Sense::Reference);
/// assert_eq!(paths.get_sample_name(haplotype).as_deref(), Some("HG002"));
/// assert_eq!(paths.get_locus_name(contig).as_deref(), Some("alt_contig"));
/// assert_eq!(paths.get_sense(contig), Sense::Reference);
///
/// let mut found = Vec::new();
/// paths.for_each_path_of_sense(Sense::Haplotype, |path| { found.push(path); true });
/// assert_eq!(found, vec![haplotype]);
/// ```
pub trait PathMetadata: PathHandleGraph {
    /// Returns all metadata for the path.
    fn get_path_identity(&self, path: Self::PathHandle) -> PathIdentity {
        format::decode_path_name(&self.get_path_name(path))
    }

    /// Returns what the path represents.
    fn get_sense(&self, path: Self::PathHandle) -> Sense {
        self.get_path_identity(path).sense
    }

    /// Returns the sample or assembly name of the path, or [`None`] if it has none.
    fn get_sample_name(&self, path: Self::PathHandle) -> Option<String> {
        self.get_path_identity(path).sample
    }

    /// Returns the contig or gene name of the path, or [`None`] if it has none.
    fn get_locus_name(&self, path: Self::PathHandle) -> Option<String> {
        self.get_path_identity(path).locus
    }

    /// Returns the haplotype number of the path, or [`None`] if it has none.
    fn get_haplotype(&self, path: Self::PathHandle) -> Option<usize> {
        self.get_path_identity(path).haplotype
    }

    /// Returns the phase block of the path, or [`None`] if it has none.
    fn get_phase_block(&self, path: Self::PathHandle) -> Option<usize> {
        self.get_path_identity(path).phase_block
    }

    /// Returns the part of the full path stored in this path, or [`None`] if the entire path is stored.
    fn get_subrange(&self, path: Self::PathHandle) -> Option<Subrange> {
        self.get_path_identity(path).subrange
    }

    /// Calls `visitor` on each path with the given sense, in the order the graph enumerates them.
    ///
    /// Stops and returns `false` if the visitor returns `false`.
    fn for_each_path_of_sense<F>(&self, sense: Sense, mut visitor: F) -> bool
        where F: FnMut(Self::PathHandle) -> bool
    {
        self.for_each_path_handle(|path| {
            if self.get_sense(path) == sense { visitor(path) } else { true }
        })
    }

    /// Calls `visitor` on each path matching all of the given constraints, in the order the graph enumerates them.
    ///
    /// A missing constraint matches all paths.
    /// Otherwise the sense, sample name, or locus name of the path must be in the given set.
    /// A path without a sample or locus name is matched by the empty string.
    /// Stops and returns `false` if the visitor returns `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use handlegraph::{PathCollection, PathMetadata, Sense};
    /// use std::collections::HashSet;
    ///
    /// let mut paths = PathCollection::new();
    /// let first = paths.add_path("HG002#1#chr1#0", false);
    /// let _ = paths.add_path("HG002#1#chr2#0", false);
    /// let _ = paths.add_path("HG003#1#chr1#0", false);
    /// let last = paths.add_path("HG002#2#chr1#0", false);
    ///
    /// let samples: HashSet<String> = vec![String::from("HG002")].into_iter().collect();
    /// let loci: HashSet<String> = vec![String::from("chr1")].into_iter().collect();
    /// let mut found = Vec::new();
    /// paths.for_each_path_matching(None, Some(&samples), Some(&loci), |path| { found.push(path); true });
    /// assert_eq!(found, vec![first, last]);
    /// ```
    fn for_each_path_matching<F>(
        &self,
        senses: Option<&HashSet<Sense>>,
        samples: Option<&HashSet<String>>,
        loci: Option<&HashSet<String>>,
        mut visitor: F
    ) -> bool
        where F: FnMut(Self::PathHandle) -> bool
    {
        self.for_each_path_handle(|path| {
            let identity = self.get_path_identity(path);
            let matches = senses.map_or(true, |set| set.contains(&identity.sense))
                && samples.map_or(true, |set| set.contains(identity.sample_name().unwrap_or("")))
                && loci.map_or(true, |set| set.contains(identity.locus_name().unwrap_or("")));
            if matches { visitor(path) } else { true }
        })
    }

    /// Calls `visitor` on each step visiting the node of the handle on a path with the given sense.
    ///
    /// Stops and returns `false` if the visitor returns `false`.
    fn for_each_step_of_sense<F>(&self, handle: Self::Handle, sense: Sense, mut visitor: F) -> bool
        where F: FnMut(Self::StepHandle) -> bool
    {
        self.for_each_step_on_handle(handle, |step| {
            let path = self.get_path_handle_of_step(step);
            if self.get_sense(path) == sense { visitor(step) } else { true }
        })
    }
}

//-----------------------------------------------------------------------------

/// Creating paths from metadata.
///
/// The default implementation encodes the metadata as a path name and creates the path with [`MutablePathHandleGraph::create_path_handle`].
pub trait MutablePathMetadata: PathMetadata + MutablePathHandleGraph {
    /// Creates an empty path with the given metadata and returns a handle to it.
    ///
    /// Nothing is created if the metadata is invalid.
    /// The caller must ensure that there is no path with the same metadata.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMetadata`] if the metadata cannot be encoded as a path name.
    ///
    /// # Panics
    ///
    /// May panic if the graph already has a path with the same metadata, depending on [`MutablePathHandleGraph::create_path_handle`].
    /// [`crate::PathCollection`] panics in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use handlegraph::{MutablePathMetadata, PathCollection, PathIdentity, PathMetadata};
    ///
    /// let mut paths = PathCollection::new();
    /// let identity = PathIdentity::reference("GRCh38", 0, "chrM");
    /// let path = paths.create_path(&identity, true).unwrap();
    /// assert_eq!(paths.path_name(path), "GRCh38#0#chrM");
    /// assert_eq!(paths.get_path_identity(path), identity);
    ///
    /// let invalid = PathIdentity { haplotype: None, ..identity };
    /// assert!(paths.create_path(&invalid, false).is_err());
    /// assert_eq!(paths.paths(), 1);
    /// ```
    fn create_path(&mut self, identity: &PathIdentity, is_circular: bool) -> Result<Self::PathHandle, InvalidMetadata> {
        let name = format::encode_path_name(identity).map_err(|err| {
            log::debug!("Cannot create a path for {:?}: {}", identity, err);
            err
        })?;
        Ok(self.create_path_handle(&name, is_circular))
    }
}

//-----------------------------------------------------------------------------
