//! # Handle graph path metadata
//!
//! Paths in a handle graph (a sequence graph addressed by node / orientation handles) often represent reference assemblies or haplotypes rather than arbitrary walks.
//! This crate stores the metadata of such paths in path names, using the mini-format described in [`format`]:
//!
//! * `alt_contig`: a locus name without a sample, read as a reference path.
//! * `GRCh38#0#chrM`: a reference path with a sample name, a haplotype number, and a locus name.
//! * `NA29239#1#chr1#0`: a haplotype path that also has a phase block.
//! * `CHM13#0#chr12[300-400]`: a subrange of a reference path.
//!
//! A graph exposes its paths by implementing [`PathHandleGraph`].
//! The [`PathMetadata`] trait then provides metadata accessors and iteration over paths and steps filtered by metadata.
//! [`MutablePathMetadata`] creates paths from metadata.
//! [`PathCollection`] is an in-memory implementation of these interfaces.
//!
//! # Notes
//!
//! * Parsing a path name never fails. Names that do not follow the format are generic paths.
//! * Building a path name validates the metadata and fails with [`InvalidMetadata`] if the fields do not match the [`Sense`].
//! * Handles are opaque. The graph decides how invalid handles are reported.

pub mod format;
pub mod graph;
pub mod paths;
pub mod support;

//-----------------------------------------------------------------------------

pub use crate::format::{Sense, PathIdentity, Subrange, Field, InvalidMetadata, decode_path_name, encode_path_name};
pub use crate::graph::{PathHandleGraph, MutablePathHandleGraph, PathMetadata, MutablePathMetadata};
pub use crate::paths::{PathCollection, Step};
pub use crate::support::Orientation;

//-----------------------------------------------------------------------------
