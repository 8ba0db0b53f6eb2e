// src/fs/commands.rs
//!
//! Command names and argument records
//!
//! Each record holds the required parameters of one command, with the
//! caller's option struct flattened into the same JSON object.

use serde::Serialize;
use std::path::Path;

use super::contents::BinaryContents;
use super::types::{CopyFileOptions, FsWriteFileOptions, RenameFileOptions};

pub const COPY_FILE: &str = "FLURX|fs::copy_file";
pub const CREATE_DIR: &str = "FLURX|fs::create_dir";
pub const EXISTS: &str = "FLURX|fs::exists";
pub const READ_BINARY_FILE: &str = "FLURX|fs::read_binary_file";
pub const READ_TEXT_FILE: &str = "FLURX|fs::read_text_file";
pub const REMOVE_FILE: &str = "FLURX|fs::remove_file";
pub const RENAME_FILE: &str = "FLURX|fs::rename_file";
pub const WRITE_TEXT_FILE: &str = "FLURX|fs::write_text_file";
pub const WRITE_BINARY_FILE: &str = "FLURX|fs::write_binary_file";
pub const READ_DIR: &str = "FLURX|fs::read_dir";
pub const REMOVE_DIR: &str = "FLURX|fs::remove_dir";

pub const ALL: [&str; 11] = [
    COPY_FILE,
    CREATE_DIR,
    EXISTS,
    READ_BINARY_FILE,
    READ_TEXT_FILE,
    REMOVE_FILE,
    RENAME_FILE,
    WRITE_TEXT_FILE,
    WRITE_BINARY_FILE,
    READ_DIR,
    REMOVE_DIR,
];

/// `{ path, ...options }`
#[derive(Serialize)]
pub(crate) struct PathArgs<'a, O> {
    pub path: &'a Path,
    #[serde(flatten)]
    pub options: &'a O,
}

#[derive(Serialize)]
pub(crate) struct CopyFileArgs<'a> {
    pub from: &'a Path,
    pub to: &'a Path,
    #[serde(flatten)]
    pub options: &'a CopyFileOptions,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RenameFileArgs<'a> {
    pub old_path: &'a Path,
    pub new_path: &'a Path,
    #[serde(flatten)]
    pub options: &'a RenameFileOptions,
}

#[derive(Serialize)]
pub(crate) struct WriteTextFileArgs<'a> {
    pub path: &'a Path,
    pub contents: &'a str,
    #[serde(flatten)]
    pub options: &'a FsWriteFileOptions,
}

#[derive(Serialize)]
pub(crate) struct WriteBinaryFileArgs<'a> {
    pub path: &'a Path,
    pub contents: &'a BinaryContents,
    #[serde(flatten)]
    pub options: &'a FsWriteFileOptions,
}
