//! Path name mini-format: path metadata packed into a single path name.
//!
//! A path name consists of up to four `#`-separated components, optionally followed by a bracketed subrange.
//! The number of components determines how they are interpreted:
//!
//! | Name | Sense | Fields |
//! |---|---|---|
//! | `chr1` | [`Sense::Reference`] | locus |
//! | `GRCh38#chrM` | [`Sense::Reference`] | sample, locus |
//! | `NA19239#1#chr1` | [`Sense::Reference`] | sample, haplotype, locus |
//! | `NA29239#1#chr1#0` | [`Sense::Haplotype`] | sample, haplotype, locus, phase block |
//!
//! Any of these may end with a subrange `[start]` or `[start-end]`, as in `CHM13#chr12[300-400]`.
//! Components cannot contain `#` or `[`.
//! Haplotype numbers, phase blocks, and subrange coordinates are unsigned decimal integers.
//!
//! Decoding never fails.
//! A name that does not follow the format is treated as a generic path with the entire name as the locus.
//! Only such names decode as [`Sense::Generic`].
//! Encoding validates the fields against the requirements of the sense before building the name.
//!
//! Decoding does not validate.
//! A generic path encodes to its bare locus name, which decodes as a reference path without a sample or a haplotype.

use std::fmt;

use thiserror::Error;


//-----------------------------------------------------------------------------

/// Separator between path name components.
pub const SEPARATOR: char = '#';

/// Starts the subrange suffix.
pub const RANGE_START_SEPARATOR: char = '[';

/// Separates the start and the end of the subrange.
pub const RANGE_END_SEPARATOR: char = '-';

/// Terminates the subrange suffix.
pub const RANGE_TERMINATOR: char = ']';

/// Signed sentinel for a missing haplotype number.
pub const NO_HAPLOTYPE: i64 = -1;

/// Signed sentinel for a missing phase block.
pub const NO_PHASE_BLOCK: i64 = -1;

/// Signed sentinel for a missing subrange end.
pub const NO_END_POSITION: i64 = -1;

/// Signed sentinel pair for a path without a subrange.
pub const NO_SUBRANGE: (i64, i64) = (-1, NO_END_POSITION);

//-----------------------------------------------------------------------------

/// The structural role a path plays.
///
/// Each sense requires and forbids a different set of fields:
///
/// | Sense | Sample | Locus | Haplotype | Phase block |
/// |---|---|---|---|---|
/// | `Generic` | forbidden | required | forbidden | forbidden |
/// | `Reference` | required | required | required | forbidden |
/// | `Haplotype` | required | required | required | required |
///
/// A subrange is optional for all senses.
/// These requirements apply when encoding; a decoded identity may not satisfy them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sense {
    /// A generic named path.
    Generic,
    /// A part of a reference assembly.
    Reference,
    /// A haplotype from a particular individual.
    Haplotype,
}

impl fmt::Display for Sense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Sense::Generic => "generic",
            Sense::Reference => "reference",
            Sense::Haplotype => "haplotype",
        };
        write!(f, "{}", name)
    }
}

/// A metadata field stored in a path name.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    /// Sample or assembly name.
    Sample,
    /// Contig, scaffold, or gene name.
    Locus,
    /// Haplotype number.
    Haplotype,
    /// Phase block identifier.
    PhaseBlock,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Sample => "sample name",
            Field::Locus => "locus name",
            Field::Haplotype => "haplotype number",
            Field::PhaseBlock => "phase block",
        };
        write!(f, "{}", name)
    }
}

/// The metadata cannot be encoded as a path name.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvalidMetadata {
    /// The sense requires a field that is missing.
    #[error("{sense} path requires a {field}")]
    Missing { sense: Sense, field: Field },

    /// The sense does not allow a field that is present.
    #[error("{sense} path cannot have a {field}")]
    Forbidden { sense: Sense, field: Field },

    /// A text field contains a separator.
    #[error("{field} {value:?} contains a reserved character")]
    ReservedCharacter { field: Field, value: String },
}

//-----------------------------------------------------------------------------

/// The part of a conceptually longer sequence represented by a stored path.
///
/// Coordinates are 0-based, with an inclusive start and an exclusive end.
/// The end may be unknown.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Subrange {
    /// Start of the subrange.
    pub start: usize,
    /// End of the subrange, or [`None`] if it is not known.
    pub end: Option<usize>,
}

impl Subrange {
    /// Creates a new subrange.
    #[inline]
    pub fn new(start: usize, end: Option<usize>) -> Self {
        Subrange { start, end }
    }

    /// Returns the length of the subrange, or [`None`] if the end is not known.
    pub fn len(&self) -> Option<usize> {
        self.end.map(|end| end.saturating_sub(self.start))
    }
}

impl From<(usize, usize)> for Subrange {
    #[inline]
    fn from(range: (usize, usize)) -> Self {
        Self::new(range.0, Some(range.1))
    }
}

//-----------------------------------------------------------------------------

/// Identity metadata of a path: everything a path name can encode.
///
/// Empty strings in `sample` and `locus` are treated as missing values.
///
/// # Examples
///
/// ```
/// use handlegraph::{PathIdentity, Sense, Subrange};
///
/// let identity = PathIdentity::haplotype("NA29239", 1, "chr1", 0)
///     .with_subrange(Subrange::new(1000, Some(2000)));
/// assert_eq!(identity.sense, Sense::Haplotype);
/// assert_eq!(identity.encode().unwrap(), "NA29239#1#chr1#0[1000-2000]");
/// assert_eq!(PathIdentity::decode("NA29239#1#chr1#0[1000-2000]"), identity);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PathIdentity {
    /// What the path represents.
    pub sense: Sense,
    /// Sample or assembly name.
    pub sample: Option<String>,
    /// Contig, scaffold, or gene name.
    pub locus: Option<String>,
    /// Haplotype number. Haplotype `0` indicates that only one haplotype is present.
    pub haplotype: Option<usize>,
    /// Phase block identifier, unique within a sample, locus, and haplotype.
    pub phase_block: Option<usize>,
    /// The stored part of the full path, or [`None`] if the entire path is stored.
    pub subrange: Option<Subrange>,
}

impl PathIdentity {
    /// Creates an identity for a generic named path.
    pub fn generic(locus: &str) -> Self {
        PathIdentity {
            sense: Sense::Generic,
            sample: None,
            locus: Some(locus.to_string()),
            haplotype: None,
            phase_block: None,
            subrange: None,
        }
    }

    /// Creates an identity for a reference path.
    pub fn reference(sample: &str, haplotype: usize, locus: &str) -> Self {
        PathIdentity {
            sense: Sense::Reference,
            sample: Some(sample.to_string()),
            locus: Some(locus.to_string()),
            haplotype: Some(haplotype),
            phase_block: None,
            subrange: None,
        }
    }

    /// Creates an identity for a haplotype path.
    pub fn haplotype(sample: &str, haplotype: usize, locus: &str, phase_block: usize) -> Self {
        PathIdentity {
            sense: Sense::Haplotype,
            sample: Some(sample.to_string()),
            locus: Some(locus.to_string()),
            haplotype: Some(haplotype),
            phase_block: Some(phase_block),
            subrange: None,
        }
    }

    /// Returns the same identity restricted to the given subrange.
    pub fn with_subrange(self, subrange: Subrange) -> Self {
        PathIdentity {
            subrange: Some(subrange),
            ..self
        }
    }

    /// Parses a path name. See [`decode_path_name`].
    #[inline]
    pub fn decode(name: &str) -> Self {
        decode_path_name(name)
    }

    /// Builds the path name. See [`encode_path_name`].
    #[inline]
    pub fn encode(&self) -> Result<String, InvalidMetadata> {
        encode_path_name(self)
    }

    /// Returns the sample name, or [`None`] if there is no sample.
    pub fn sample_name(&self) -> Option<&str> {
        non_empty(&self.sample)
    }

    /// Returns the locus name, or [`None`] if there is no locus.
    pub fn locus_name(&self) -> Option<&str> {
        non_empty(&self.locus)
    }

    /// Returns the subrange as a signed pair, with [`NO_SUBRANGE`] / [`NO_END_POSITION`] for missing values.
    pub fn subrange_pair(&self) -> (i64, i64) {
        match self.subrange {
            Some(range) => (range.start as i64, range.end.map_or(NO_END_POSITION, |end| end as i64)),
            None => NO_SUBRANGE,
        }
    }

    /// Checks that the fields are compatible with the sense.
    pub fn validate(&self) -> Result<(), InvalidMetadata> {
        let sense = self.sense;
        let sample = self.sample_name();
        match (sense, sample) {
            (Sense::Generic, Some(_)) => return Err(InvalidMetadata::Forbidden { sense, field: Field::Sample }),
            (Sense::Reference, None) | (Sense::Haplotype, None) => return Err(InvalidMetadata::Missing { sense, field: Field::Sample }),
            _ => {},
        }
        let locus = self.locus_name().ok_or(InvalidMetadata::Missing { sense, field: Field::Locus })?;
        match (sense, self.haplotype) {
            (Sense::Generic, Some(_)) => return Err(InvalidMetadata::Forbidden { sense, field: Field::Haplotype }),
            (Sense::Reference, None) | (Sense::Haplotype, None) => return Err(InvalidMetadata::Missing { sense, field: Field::Haplotype }),
            _ => {},
        }
        match (sense, self.phase_block) {
            (Sense::Generic, Some(_)) | (Sense::Reference, Some(_)) => return Err(InvalidMetadata::Forbidden { sense, field: Field::PhaseBlock }),
            (Sense::Haplotype, None) => return Err(InvalidMetadata::Missing { sense, field: Field::PhaseBlock }),
            _ => {},
        }

        if let Some(sample) = sample {
            check_component(Field::Sample, sample)?;
        }
        check_component(Field::Locus, locus)
    }

    // The fallback for names that do not follow the format.
    fn unstructured(name: &str) -> Self {
        PathIdentity {
            sense: Sense::Generic,
            sample: None,
            locus: owned_non_empty(name),
            haplotype: None,
            phase_block: None,
            subrange: None,
        }
    }
}

//-----------------------------------------------------------------------------

/// Parses the metadata stored in a path name.
///
/// This never fails.
/// If the name does not follow the format, the result is a generic path with the entire name as the locus.
/// A name with a single component, such as `chr1`, is a reference path with only a locus.
///
/// # Examples
///
/// ```
/// use handlegraph::{Sense, Subrange, decode_path_name};
///
/// let identity = decode_path_name("CHM13#chr12[300-400]");
/// assert_eq!(identity.sense, Sense::Reference);
/// assert_eq!(identity.sample_name(), Some("CHM13"));
/// assert_eq!(identity.locus_name(), Some("chr12"));
/// assert_eq!(identity.subrange, Some(Subrange::new(300, Some(400))));
///
/// let locus = decode_path_name("chr1");
/// assert_eq!(locus.sense, Sense::Reference);
/// assert_eq!(locus.sample_name(), None);
///
/// let fallback = decode_path_name("a#b#c#d#e");
/// assert_eq!(fallback.sense, Sense::Generic);
/// assert_eq!(fallback.locus_name(), Some("a#b#c#d#e"));
/// ```
pub fn decode_path_name(name: &str) -> PathIdentity {
    match parse_structured(name) {
        Some(identity) => identity,
        None => {
            log::trace!("Path name {:?} does not follow the structured format", name);
            PathIdentity::unstructured(name)
        },
    }
}

/// Builds the canonical path name for the given metadata.
///
/// The fields are validated first, and nothing is built if the validation fails.
///
/// # Errors
///
/// Returns [`InvalidMetadata`] if a field required by the sense is missing, a field forbidden by the sense is present, or the sample or locus name contains `#` or `[`.
///
/// # Examples
///
/// ```
/// use handlegraph::{PathIdentity, Subrange, encode_path_name};
///
/// let identity = PathIdentity::reference("NA19239", 1, "chr1");
/// assert_eq!(encode_path_name(&identity).unwrap(), "NA19239#1#chr1");
///
/// let generic = PathIdentity::generic("1").with_subrange(Subrange::new(100, None));
/// assert_eq!(encode_path_name(&generic).unwrap(), "1[100]");
///
/// let mut invalid = PathIdentity::generic("L");
/// invalid.sample = Some(String::from("X"));
/// assert!(encode_path_name(&invalid).is_err());
/// ```
pub fn encode_path_name(identity: &PathIdentity) -> Result<String, InvalidMetadata> {
    identity.validate()?;

    let mut name = String::new();
    if let Some(sample) = identity.sample_name() {
        name.push_str(sample);
        name.push(SEPARATOR);
    }
    if let Some(haplotype) = identity.haplotype {
        name.push_str(&haplotype.to_string());
        name.push(SEPARATOR);
    }
    if let Some(locus) = identity.locus_name() {
        name.push_str(locus);
    }
    if let Some(phase_block) = identity.phase_block {
        name.push(SEPARATOR);
        name.push_str(&phase_block.to_string());
    }
    if let Some(range) = identity.subrange {
        name.push(RANGE_START_SEPARATOR);
        name.push_str(&range.start.to_string());
        if let Some(end) = range.end {
            name.push(RANGE_END_SEPARATOR);
            name.push_str(&end.to_string());
        }
        name.push(RANGE_TERMINATOR);
    }

    Ok(name)
}

//-----------------------------------------------------------------------------

// Returns `None` if the name does not match the format.
fn parse_structured(name: &str) -> Option<PathIdentity> {
    let (body, subrange) = match name.find(RANGE_START_SEPARATOR) {
        Some(offset) => (&name[..offset], Some(parse_subrange(&name[offset + 1..])?)),
        None => (name, None),
    };

    let components: Vec<&str> = body.split(SEPARATOR).collect();
    let (sense, sample, haplotype, locus, phase_block) = match components.as_slice() {
        [locus] => (Sense::Reference, None, None, *locus, None),
        [sample, locus] => (Sense::Reference, Some(*sample), None, *locus, None),
        [sample, haplotype, locus] => {
            (Sense::Reference, Some(*sample), Some(parse_number(haplotype)?), *locus, None)
        },
        [sample, haplotype, locus, phase_block] => {
            (Sense::Haplotype, Some(*sample), Some(parse_number(haplotype)?), *locus, Some(parse_number(phase_block)?))
        },
        _ => return None,
    };

    Some(PathIdentity {
        sense,
        sample: sample.and_then(owned_non_empty),
        locus: owned_non_empty(locus),
        haplotype,
        phase_block,
        subrange,
    })
}

// Parses `start]` or `start-end]`, with the terminator at the end of the name.
fn parse_subrange(suffix: &str) -> Option<Subrange> {
    let range = suffix.strip_suffix(RANGE_TERMINATOR)?;
    match range.split_once(RANGE_END_SEPARATOR) {
        Some((start, end)) => Some(Subrange::new(parse_number(start)?, Some(parse_number(end)?))),
        None => Some(Subrange::new(parse_number(range)?, None)),
    }
}

// Digits only; `str::parse` would also accept a leading `+`.
fn parse_number(component: &str) -> Option<usize> {
    if component.is_empty() || !component.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    component.parse().ok()
}

fn check_component(field: Field, value: &str) -> Result<(), InvalidMetadata> {
    if value.contains(SEPARATOR) || value.contains(RANGE_START_SEPARATOR) {
        return Err(InvalidMetadata::ReservedCharacter { field, value: value.to_string() });
    }
    Ok(())
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

fn owned_non_empty(value: &str) -> Option<String> {
    if value.is_empty() { None } else { Some(value.to_string()) }
}

//-----------------------------------------------------------------------------
