//! AndroidManifest.xml generation.
//!
//! The AAR carries a minimal manifest: the package id and the SDK levels the
//! bundled binaries were built for. Nothing in it is derived from the input
//! tree.

use std::io::Cursor;

use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use thiserror::Error;

use crate::core::config::ExportConfig;

/// Manifest rendering errors.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("XML write error: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// The minimal manifest document embedded in the AAR.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AndroidManifest {
    /// Java package id
    pub package: String,
    /// android:versionCode
    pub version_code: u32,
    /// android:versionName
    pub version_name: String,
    /// uses-sdk android:minSdkVersion
    pub min_sdk_version: u32,
    /// uses-sdk android:targetSdkVersion
    pub target_sdk_version: u32,
}

impl AndroidManifest {
    pub fn new(config: &ExportConfig) -> Self {
        AndroidManifest {
            package: config.manifest_package.clone(),
            version_code: 1,
            version_name: "1.0".to_string(),
            min_sdk_version: config.min_sdk_version,
            target_sdk_version: config.target_sdk_version,
        }
    }

    /// Render the manifest document.
    pub fn render(&self) -> Result<String, ManifestError> {
        let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 4);

        let mut manifest = BytesStart::new("manifest");
        manifest.push_attribute((
            "xmlns:android",
            "http://schemas.android.com/apk/res/android",
        ));
        manifest.push_attribute(("package", self.package.as_str()));
        manifest.push_attribute(("android:versionCode", self.version_code.to_string().as_str()));
        manifest.push_attribute(("android:versionName", self.version_name.as_str()));
        writer.write_event(Event::Start(manifest))?;

        let mut uses_sdk = BytesStart::new("uses-sdk");
        uses_sdk.push_attribute((
            "android:minSdkVersion",
            self.min_sdk_version.to_string().as_str(),
        ));
        uses_sdk.push_attribute((
            "android:targetSdkVersion",
            self.target_sdk_version.to_string().as_str(),
        ));
        writer.write_event(Event::Empty(uses_sdk))?;

        writer.write_event(Event::End(BytesEnd::new("manifest")))?;

        let mut xml = String::from_utf8(writer.into_inner().into_inner())?;
        xml.push('\n');
        Ok(xml)
    }
}
