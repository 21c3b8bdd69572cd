//! Arguments.
//!
//! This module contains the definition for the available command-line parameter.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(author)]
pub(crate) struct Args {
    /// Change level of verbosity (apply multiple times to increase level)
    #[clap(short, long, action = clap::ArgAction::Count)]
    pub(crate) verbose: u8,
    /// Print version information
    #[clap(short = 'V', long, action)]
    pub(crate) version: bool,
    /// The operation to perform
    #[clap(subcommand)]
    pub(crate) operation: Option<Operation>,
}

/// Enumeration of the available operations.
#[derive(Debug, Subcommand)]
pub(crate) enum Operation {
    /// Print the runtime version pinned in a java properties file
    ReadVersionDefinition {
        /// Path to the properties file
        file: PathBuf,
    },
    /// Print the canonical version resolved from a version token
    VersionFromVersionDefinition {
        /// The version token (e.g. "11" or "zulu-13.0.1")
        token: String,
    },
    /// Print the vendor resolved from a version token
    VendorFromVersionDefinition {
        /// The version token (e.g. "11" or "zulu-13.0.1")
        token: String,
    },
    /// Print the verified download URL for a prebuilt JDK archive
    JdkDownloadUrl {
        /// The stack the archive was built for
        stack: String,
        /// The vendor of the archive (openjdk or zulu)
        vendor: String,
        /// The exact version of the archive
        version: String,
    },
}
