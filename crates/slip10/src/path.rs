//! Hardened-only derivation paths.
//!
//! A path is written `m` or `m/i1'/i2'/.../in'`, where each `i` is a decimal index below
//! 2^31. The `'` marker is mandatory because ed25519 only supports hardened derivation.

use std::{fmt, str::FromStr};

use crate::{constants::FIRST_HARDENED_INDEX, errors::PathError};

/// Derivation index is a 32 bits number.
///
/// Indices handed to [`crate::Node::derive`] must have the highest bit set (hardened).
pub type DerivationIndex = u32;

/// Root marker of every path.
const ROOT: &str = "m";

/// Separator between path segments.
const SEPARATOR: char = '/';

/// Hardened marker closing every segment.
const HARDENED_MARKER: char = '\'';

/// An ordered sequence of plain (pre-hardening) indices, each in `[0, 2^31 - 1]`.
///
/// The empty sequence is the master path `m`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DerivationPath(Vec<u32>);

impl DerivationPath {
    /// The master path `m`.
    pub const fn master() -> Self {
        Self(Vec::new())
    }

    /// Builds a path from plain indices, rejecting any index at or above 2^31.
    pub fn from_indices(indices: impl IntoIterator<Item = u32>) -> Result<Self, PathError> {
        indices
            .into_iter()
            .enumerate()
            .map(|(i, index)| {
                if index < FIRST_HARDENED_INDEX {
                    Ok(index)
                } else {
                    Err(PathError::IndexOutOfRange {
                        position: i + 1,
                        segment: index.to_string(),
                    })
                }
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Plain indices, in derivation order.
    pub fn indices(&self) -> &[u32] {
        &self.0
    }

    /// Hardened indices (`i + 2^31`), in derivation order.
    pub fn hardened_indices(&self) -> impl Iterator<Item = DerivationIndex> + '_ {
        // Every stored index is below 2^31, so the addition cannot overflow.
        self.0.iter().map(|index| index + FIRST_HARDENED_INDEX)
    }

    /// Number of derivation steps.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the path has no derivation steps.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether this is the master path `m`.
    pub fn is_master(&self) -> bool {
        self.is_empty()
    }
}

impl FromStr for DerivationPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(PathError::Empty);
        }

        let mut segments = s.split(SEPARATOR);
        if segments.next() != Some(ROOT) {
            return Err(PathError::MissingRoot);
        }

        // Shape first, so a malformed segment wins over an out-of-range one.
        let digits = segments
            .enumerate()
            .map(|(i, segment)| check_shape(i + 1, segment))
            .collect::<Result<Vec<_>, _>>()?;

        digits
            .into_iter()
            .enumerate()
            .map(|(i, digits)| parse_index(i + 1, digits))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(ROOT)?;
        for index in &self.0 {
            write!(f, "{SEPARATOR}{index}{HARDENED_MARKER}")?;
        }
        Ok(())
    }
}

/// Checks whether `path` is a well-formed, all-hardened derivation path.
pub fn is_valid_path(path: &str) -> bool {
    path.parse::<DerivationPath>().is_ok()
}

/// Returns the digit run of a `[0-9]+'` segment.
fn check_shape(position: usize, segment: &str) -> Result<&str, PathError> {
    if segment.is_empty() {
        return Err(PathError::EmptySegment { position });
    }

    let is_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

    match segment.strip_suffix(HARDENED_MARKER) {
        Some(digits) if is_digits(digits) => Ok(digits),
        None if is_digits(segment) => Err(PathError::NotHardened {
            position,
            segment: segment.to_owned(),
        }),
        _ => Err(PathError::InvalidSegment {
            position,
            segment: segment.to_owned(),
        }),
    }
}

/// Parses a digit run into a plain index below 2^31.
fn parse_index(position: usize, digits: &str) -> Result<u32, PathError> {
    let out_of_range = || PathError::IndexOutOfRange {
        position,
        segment: digits.to_owned(),
    };

    // The shape check leaves overflow as the only possible parse failure.
    let index: u32 = digits.parse().map_err(|_| out_of_range())?;
    if index >= FIRST_HARDENED_INDEX {
        return Err(out_of_range());
    }

    Ok(index)
}
