// src/fs/types.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use ts_rs::TS;

// ============================================================================
// Base Directories
// ============================================================================

/// Symbolic anchor the host resolves to a platform directory.
///
/// Sent as its variant name; never resolved on this side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum BaseDirectory {
    ConfigLocal,
    Data,
    LocalData,
    Audio,
    Cache,
    Config,
    Desktop,
    Document,
    Download,
    Executable,
    Font,
    Home,
    Picture,
    Public,
    Runtime,
    Temp,
    Template,
    Video,
}

impl BaseDirectory {
    pub const ALL: [BaseDirectory; 18] = [
        BaseDirectory::ConfigLocal,
        BaseDirectory::Data,
        BaseDirectory::LocalData,
        BaseDirectory::Audio,
        BaseDirectory::Cache,
        BaseDirectory::Config,
        BaseDirectory::Desktop,
        BaseDirectory::Document,
        BaseDirectory::Download,
        BaseDirectory::Executable,
        BaseDirectory::Font,
        BaseDirectory::Home,
        BaseDirectory::Picture,
        BaseDirectory::Public,
        BaseDirectory::Runtime,
        BaseDirectory::Temp,
        BaseDirectory::Template,
        BaseDirectory::Video,
    ];

    /// Wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            BaseDirectory::ConfigLocal => "ConfigLocal",
            BaseDirectory::Data => "Data",
            BaseDirectory::LocalData => "LocalData",
            BaseDirectory::Audio => "Audio",
            BaseDirectory::Cache => "Cache",
            BaseDirectory::Config => "Config",
            BaseDirectory::Desktop => "Desktop",
            BaseDirectory::Document => "Document",
            BaseDirectory::Download => "Download",
            BaseDirectory::Executable => "Executable",
            BaseDirectory::Font => "Font",
            BaseDirectory::Home => "Home",
            BaseDirectory::Picture => "Picture",
            BaseDirectory::Public => "Public",
            BaseDirectory::Runtime => "Runtime",
            BaseDirectory::Temp => "Temp",
            BaseDirectory::Template => "Template",
            BaseDirectory::Video => "Video",
        }
    }
}

impl fmt::Display for BaseDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown base directory: {0}")]
pub struct UnknownBaseDirectory(pub String);

impl FromStr for BaseDirectory {
    type Err = UnknownBaseDirectory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BaseDirectory::ALL
            .into_iter()
            .find(|dir| dir.as_str() == s)
            .ok_or_else(|| UnknownBaseDirectory(s.to_string()))
    }
}

// ============================================================================
// Directory Listing
// ============================================================================

/// Directory entry as listed by the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FileEntry {
    /// Entry name (not full path)
    pub name: String,
    /// Full path
    pub path: String,
    /// Child entries; `null` for files and unexpanded directories
    #[serde(default)]
    pub children: Option<Vec<FileEntry>>,
}

impl FileEntry {
    pub fn is_expanded(&self) -> bool {
        self.children.is_some()
    }
}

// ============================================================================
// Options
// ============================================================================
//
// Every field is optional. Unset fields are left out of the request so the
// host applies its own defaults.

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CopyFileOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub from_base_dir: Option<BaseDirectory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub to_base_dir: Option<BaseDirectory>,
}

impl CopyFileOptions {
    pub fn from_base_dir(mut self, dir: BaseDirectory) -> Self {
        self.from_base_dir = Some(dir);
        self
    }

    pub fn to_base_dir(mut self, dir: BaseDirectory) -> Self {
        self.to_base_dir = Some(dir);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FsBaseDirectoryOption {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub dir: Option<BaseDirectory>,
}

impl FsBaseDirectoryOption {
    pub fn dir(mut self, dir: BaseDirectory) -> Self {
        self.dir = Some(dir);
        self
    }
}

impl From<BaseDirectory> for FsBaseDirectoryOption {
    fn from(dir: BaseDirectory) -> Self {
        Self { dir: Some(dir) }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FsDirOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub dir: Option<BaseDirectory>,
    /// Create missing parents / remove non-empty directories
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub recursive: Option<bool>,
}

impl FsDirOptions {
    pub fn dir(mut self, dir: BaseDirectory) -> Self {
        self.dir = Some(dir);
        self
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = Some(recursive);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FsWriteFileOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub dir: Option<BaseDirectory>,
    /// Append instead of truncating
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub append: Option<bool>,
    /// Create missing parent directories
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub recursive: Option<bool>,
}

impl FsWriteFileOptions {
    pub fn dir(mut self, dir: BaseDirectory) -> Self {
        self.dir = Some(dir);
        self
    }

    pub fn append(mut self, append: bool) -> Self {
        self.append = Some(append);
        self
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = Some(recursive);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RenameFileOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub old_dir: Option<BaseDirectory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub new_dir: Option<BaseDirectory>,
}

impl RenameFileOptions {
    pub fn old_dir(mut self, dir: BaseDirectory) -> Self {
        self.old_dir = Some(dir);
        self
    }

    pub fn new_dir(mut self, dir: BaseDirectory) -> Self {
        self.new_dir = Some(dir);
        self
    }
}
