//! Name table for the transforms exposed to scripting hosts.
//!
//! Host objects look transforms up by property name. The table is static, so
//! it can be resolved once when the host object is built.

use std::fmt;
use std::str::FromStr;

use super::crop::CenterCrop;

/// A transform that can be constructed by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransformKind {
    /// Center crop of the trailing `[H, W]` dimensions.
    CenterCrop,
}

impl TransformKind {
    /// Every transform, in property order.
    pub const ALL: [TransformKind; 1] = [TransformKind::CenterCrop];

    /// Property name under which the transform factory is exposed.
    pub fn name(self) -> &'static str {
        match self {
            TransformKind::CenterCrop => "centerCrop",
        }
    }

    /// Look a transform up by its property name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// All exposed property names.
    pub fn property_names() -> Vec<&'static str> {
        Self::ALL.iter().map(|kind| kind.name()).collect()
    }

    /// Bind the factory arguments and return the reusable operation.
    pub fn build(self, args: &[f64]) -> CenterCrop {
        match self {
            TransformKind::CenterCrop => CenterCrop::from_args(args),
        }
    }
}

impl fmt::Display for TransformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TransformKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("Unknown transform: {}", s))
    }
}
