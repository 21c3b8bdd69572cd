mod args;
mod colors;
mod definition;
mod download;
mod resolve;
mod vendor;
mod version;

use crate::args::{Args, Operation};
use crate::colors::*;
use crate::download::DownloadRequest;
use crate::resolve::ResolvedVersion;
use crate::version::Version;
use clap::Parser;
use clap::error::ErrorKind;
use std::path::Path;
use tracing::{level_filters::*, *};
use tracing_subscriber::EnvFilter;

// Exit code used in case there were no errors.
#[doc(hidden)]
const EXIT_OK: i32 = 0;

// Exit code used in case of errors.
#[doc(hidden)]
const EXIT_NOK: i32 = 1;

/// Main entry point for the application.
fn main() {
    // enable ansi support to use colorised/styled output
    #[cfg(windows)]
    let _ = nu_ansi_term::enable_ansi_support();

    // delegate
    if let Err(err) = internal_main() {
        let err_str = ATTENTION_COLOR.paint(format!("err = {err:?}"));
        eprintln!("Failed!\r\n\t{err_str}");
        std::process::exit(EXIT_NOK);
    } else {
        std::process::exit(EXIT_OK);
    }
}

// Internal main entry point for the application.
#[doc(hidden)]
fn internal_main() -> anyhow::Result<()> {
    // parse arguments (clap renders its own usage-style diagnostic)
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let requested = matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion);
            let _ = err.print();
            std::process::exit(if requested { EXIT_OK } else { EXIT_NOK });
        }
    };

    // stop here in case only the version was requested
    if args.version {
        print_info();
        return Ok(());
    }

    // init tracing
    init_tracing(&args);

    // print parsed arguments
    trace!("arguments: {args:#?}");

    // dispatch
    let Some(operation) = args.operation else {
        anyhow::bail!("no operation specified, see --help for the available operations");
    };
    match operation {
        Operation::ReadVersionDefinition { file } => read_version_definition(&file),
        Operation::VersionFromVersionDefinition { token } => {
            let resolved = ResolvedVersion::from_token(&token);
            println!("{}", resolved.version);
            Ok(())
        }
        Operation::VendorFromVersionDefinition { token } => {
            let resolved = ResolvedVersion::from_token(&token);
            println!("{}", resolved.vendor);
            Ok(())
        }
        Operation::JdkDownloadUrl { stack, vendor, version } => jdk_download_url(&stack, &vendor, &version),
    }
}

// Reads the pinned runtime version from the given properties file.
#[doc(hidden)]
fn read_version_definition(file: &Path) -> anyhow::Result<()> {
    debug!(file = %file.display());
    let version = definition::read_version(file)?;
    println!("{version}");

    Ok(())
}

// Derives and verifies the download URL for a prebuilt JDK archive.
#[doc(hidden)]
fn jdk_download_url(stack: &str, vendor: &str, version: &str) -> anyhow::Result<()> {
    let request = DownloadRequest::new(stack, vendor, version)?;
    let url = request.resolve()?;
    println!("{url}");

    Ok(())
}

// Prints some information (version, path of executable, etc.).
#[doc(hidden)]
fn print_info() {
    let version = Version::default();
    if let Ok(exe) = std::env::current_exe() {
        let exe = PATH_COLOR.paint(exe.to_string_lossy());
        println!("{version} [{exe}]");
    } else {
        println!("{version}");
    }
}

// Initialises the tracing framework based on given command line arguments.
// Logs go to stderr so that stdout only ever carries the resolved value.
#[doc(hidden)]
fn init_tracing(args: &Args) {
    let level_filter = match args.verbose {
        0 => LevelFilter::ERROR.into(),
        1 => LevelFilter::WARN.into(),
        2 => LevelFilter::INFO.into(),
        3 => LevelFilter::DEBUG.into(),
        _ => LevelFilter::TRACE.into(),
    };
    let env_filter = EnvFilter::from_default_env().add_directive(level_filter);
    tracing_subscriber::fmt().with_env_filter(env_filter).with_writer(std::io::stderr).init();
}
