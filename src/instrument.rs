//! Musical instrument catalogue
//!
//! A small concrete record type with ready-made leaf predicates, used by the
//! demonstration and as a worked example of plugging a domain into the
//! engine. Attribute targets coming from untrusted input go through the
//! fallible `parse` constructors, so an unknown material or instrument type
//! is rejected when the predicate is built rather than when it is evaluated.
//!
//! # Example
//!
//! ```rust
//! use sift::prelude::*;
//!
//! let catalogue = sample_instruments();
//! let spec = KindIs::parse("wind")?.or(KindIs::parse("percussion")?);
//! let names: Vec<&str> = catalogue.iter().filter_by(spec).map(|i| i.name.as_str()).collect();
//! assert_eq!(names, vec!["Flute", "Drums"]);
//!
//! assert!(MaterialIs::parse("Bronze").is_err());
//! # Ok::<(), FilterError>(())
//! ```

use crate::error::{FilterError, Result};
use crate::predicate::Predicate;
use std::fmt;
use std::str::FromStr;

/// What an instrument is made of.
///
/// Deserialization goes through [`FromStr`], so it accepts the same
/// case-insensitive names as `parse` and rejects unknown ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String")
)]
pub enum Material {
    /// Wood.
    Wood,
    /// Metal.
    Metal,
    /// Plastic.
    Plastic,
}

impl Material {
    /// Every material, in declaration order.
    pub const ALL: [Material; 3] = [Material::Wood, Material::Metal, Material::Plastic];

    /// The canonical name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Material::Wood => "Wood",
            Material::Metal => "Metal",
            Material::Plastic => "Plastic",
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Material {
    type Err = FilterError;

    /// Parse a material name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self> {
        Material::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FilterError::invalid_target("material", s))
    }
}

impl TryFrom<&str> for Material {
    type Error = FilterError;

    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl TryFrom<String> for Material {
    type Error = FilterError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl TryFrom<u8> for Material {
    type Error = FilterError;

    fn try_from(raw: u8) -> Result<Self> {
        Material::ALL
            .get(usize::from(raw))
            .copied()
            .ok_or_else(|| FilterError::invalid_target("material", raw.to_string()))
    }
}

/// How an instrument produces sound.
///
/// Deserialized through [`FromStr`], like [`Material`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String")
)]
pub enum InstrumentType {
    /// Wind instruments.
    Wind,
    /// Chordophones.
    Chord,
    /// Percussion.
    Percussion,
}

impl InstrumentType {
    /// Every instrument type, in declaration order.
    pub const ALL: [InstrumentType; 3] = [
        InstrumentType::Wind,
        InstrumentType::Chord,
        InstrumentType::Percussion,
    ];

    /// The canonical name.
    pub fn as_str(&self) -> &'static str {
        match self {
            InstrumentType::Wind => "Wind",
            InstrumentType::Chord => "Chord",
            InstrumentType::Percussion => "Percussion",
        }
    }
}

impl fmt::Display for InstrumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InstrumentType {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self> {
        InstrumentType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FilterError::invalid_target("instrument type", s))
    }
}

impl TryFrom<&str> for InstrumentType {
    type Error = FilterError;

    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl TryFrom<String> for InstrumentType {
    type Error = FilterError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl TryFrom<u8> for InstrumentType {
    type Error = FilterError;

    fn try_from(raw: u8) -> Result<Self> {
        InstrumentType::ALL
            .get(usize::from(raw))
            .copied()
            .ok_or_else(|| FilterError::invalid_target("instrument type", raw.to_string()))
    }
}

/// A catalogued instrument.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instrument {
    /// Display name.
    pub name: String,
    /// Sound production family.
    pub kind: InstrumentType,
    /// Body material.
    pub material: Material,
}

impl Instrument {
    /// Create an instrument.
    pub fn new(name: impl Into<String>, kind: InstrumentType, material: Material) -> Self {
        Self {
            name: name.into(),
            kind,
            material,
        }
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.kind, self.material)
    }
}

/// The three-instrument catalogue: Flute, Piano and Drums.
pub fn sample_instruments() -> Vec<Instrument> {
    vec![
        Instrument::new("Flute", InstrumentType::Wind, Material::Metal),
        Instrument::new("Piano", InstrumentType::Chord, Material::Wood),
        Instrument::new("Drums", InstrumentType::Percussion, Material::Metal),
    ]
}

/// Satisfied by instruments made of the given material.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaterialIs(pub Material);

impl MaterialIs {
    /// Match `material`.
    pub fn new(material: Material) -> Self {
        Self(material)
    }

    /// Match the material named `raw`, rejecting unknown names.
    pub fn parse(raw: &str) -> Result<Self> {
        Ok(Self(raw.parse()?))
    }
}

impl Predicate<Instrument> for MaterialIs {
    #[inline]
    fn is_satisfied(&self, record: &Instrument) -> bool {
        record.material == self.0
    }
}

/// Satisfied by instruments of the given type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindIs(pub InstrumentType);

impl KindIs {
    /// Match `kind`.
    pub fn new(kind: InstrumentType) -> Self {
        Self(kind)
    }

    /// Match the instrument type named `raw`, rejecting unknown names.
    pub fn parse(raw: &str) -> Result<Self> {
        Ok(Self(raw.parse()?))
    }
}

impl Predicate<Instrument> for KindIs {
    #[inline]
    fn is_satisfied(&self, record: &Instrument) -> bool {
        record.kind == self.0
    }
}

/// Satisfied by the instrument with exactly this name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameIs(String);

impl NameIs {
    /// Match `name` exactly.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl Predicate<Instrument> for NameIs {
    #[inline]
    fn is_satisfied(&self, record: &Instrument) -> bool {
        record.name == self.0
    }
}

/// Satisfied by instruments whose name contains a fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameContains(String);

impl NameContains {
    /// Match names containing `fragment`.
    pub fn new(fragment: impl Into<String>) -> Self {
        Self(fragment.into())
    }
}

impl Predicate<Instrument> for NameContains {
    #[inline]
    fn is_satisfied(&self, record: &Instrument) -> bool {
        record.name.contains(self.0.as_str())
    }
}
