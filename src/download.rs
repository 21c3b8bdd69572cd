//! Download.
//!
//! This module contains the code to derive and verify the download URL of a prebuilt JDK archive.

use crate::vendor::Vendor;
use anyhow::anyhow;
use reqwest::{StatusCode, Url};
use tracing::{instrument, trace};

// Base URL under which the prebuilt JDK archives are hosted.
#[doc(hidden)]
const BASE_URL: &str = "https://lang-jvm.s3.amazonaws.com/jdk/";

/// The request to derive the download URL for a prebuilt JDK archive.
#[derive(Debug)]
pub(crate) struct DownloadRequest {
    stack: String,
    vendor: Vendor,
    version: String,
}

impl DownloadRequest {
    /// Creates a new `DownloadRequest` after validating the vendor.
    pub(crate) fn new(stack: &str, vendor: &str, version: &str) -> anyhow::Result<Self> {
        let vendor = Vendor::try_from(vendor).map_err(|_| anyhow!("unsupported vendor '{vendor}'"))?;

        Ok(Self {
            stack: stack.to_string(),
            vendor,
            version: version.to_string(),
        })
    }

    /// Derives the download URL and verifies that the archive actually exists.
    pub(crate) fn resolve(&self) -> anyhow::Result<String> {
        let url = self.download_url()?;
        trace!(%url);
        self.probe(url.as_str())?;

        Ok(url.into())
    }

    // Build the download URL for the archive.
    // The stack is stripped of surrounding slashes so a joined segment can never
    // resolve as absolute and drop the base path.
    fn download_url(&self) -> anyhow::Result<Url> {
        let url = Url::parse(BASE_URL)?;
        let stack = self.stack.trim_matches('/');
        let url = if stack.is_empty() {
            url
        } else {
            url.join(&format!("{stack}/"))?
        };
        let url = url.join(&self.vendor.archive_name(&self.version))?;

        Ok(url)
    }

    // Issue a HEAD request to check that the archive exists at the given URL.
    #[instrument(level = "trace", skip(self))]
    fn probe(&self, url: &str) -> anyhow::Result<()> {
        let client = reqwest::blocking::Client::new();
        let response = client.head(url).send()?;
        let status = response.status();
        trace!(%status);
        if status != StatusCode::OK {
            return Err(anyhow!(
                "could not determine valid download URL for {} {} {} (status {status})",
                self.stack,
                self.vendor.id(),
                self.version
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use test_log::test;

    #[test]
    fn download_url_openjdk() {
        let request = DownloadRequest::new("stack1", "openjdk", "11.0.5").unwrap();
        let url = request.download_url().unwrap();
        assert_eq!(url.as_str(), "https://lang-jvm.s3.amazonaws.com/jdk/stack1/openjdk11.0.5.tar.gz");
    }

    #[test]
    fn download_url_zulu() {
        let request = DownloadRequest::new("stack1", "zulu", "11.0.5").unwrap();
        let url = request.download_url().unwrap();
        assert!(url.as_str().ends_with("/stack1/zulu-11.0.5.tar.gz"));
    }

    #[test]
    fn download_url_one_off_9_release() {
        let request = DownloadRequest::new("heroku-18", "openjdk", "9-181").unwrap();
        let url = request.download_url().unwrap();
        assert_eq!(url.as_str(), "https://lang-jvm.s3.amazonaws.com/jdk/heroku-18/openjdk9-181.tar.gz");
    }

    #[test]
    fn download_url_empty_stack_keeps_base_path() {
        let request = DownloadRequest::new("", "openjdk", "11.0.5").unwrap();
        let url = request.download_url().unwrap();
        assert_eq!(url.as_str(), "https://lang-jvm.s3.amazonaws.com/jdk/openjdk11.0.5.tar.gz");
    }

    #[test]
    fn download_url_slash_prefixed_stack_keeps_base_path() {
        let request = DownloadRequest::new("/stack1/", "openjdk", "11.0.5").unwrap();
        let url = request.download_url().unwrap();
        assert_eq!(url.as_str(), "https://lang-jvm.s3.amazonaws.com/jdk/stack1/openjdk11.0.5.tar.gz");
    }

    // the vendor is rejected before any network traffic
    #[test]
    fn unsupported_vendor() {
        let request = DownloadRequest::new("stack1", "unsupported", "11.0.5");
        assert!(request.is_err());
    }
}
