//! Vendor.
//!
//! This module contains the supported JDK vendors.

// The id for OpenJDK as vendor.
#[doc(hidden)]
const OPENJDK_ID: &str = "openjdk";

// The id for Zulu as vendor.
#[doc(hidden)]
const ZULU_ID: &str = "zulu";

/// Enumeration of supported vendors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Vendor {
    /// OpenJDK
    OpenJdk,
    /// Azul Zulu
    Zulu,
}

impl Vendor {
    /// Returns the id of the vendor.
    pub(crate) fn id(&self) -> &str {
        match self {
            Self::OpenJdk => OPENJDK_ID,
            Self::Zulu => ZULU_ID,
        }
    }

    /// Returns the archive name for the given version of the vendor.
    pub(crate) fn archive_name(&self, version: &str) -> String {
        match self {
            Self::OpenJdk => format!("openjdk{version}.tar.gz"),
            Self::Zulu => format!("zulu-{version}.tar.gz"),
        }
    }
}

impl TryFrom<&str> for Vendor {
    type Error = &'static str;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let value = value.trim().to_lowercase();
        match value.as_str() {
            OPENJDK_ID => Ok(Self::OpenJdk),
            ZULU_ID => Ok(Self::Zulu),
            _ => Err("unsupported vendor"),
        }
    }
}
