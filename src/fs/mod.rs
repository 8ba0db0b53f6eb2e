// src/fs/mod.rs
//!
//! Filesystem Facade
//!
//! Typed filesystem calls forwarded to the host through an [`Invoke`] bridge.
//! Nothing here touches the disk: every call becomes exactly one command with
//! a flat argument record, and the host's answer (or failure) comes back as is.

pub mod commands;
mod contents;
mod types;

pub use contents::BinaryContents;
pub use types::{
    BaseDirectory, CopyFileOptions, FileEntry, FsBaseDirectoryOption, FsDirOptions,
    FsWriteFileOptions, RenameFileOptions, UnknownBaseDirectory,
};

use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;
use std::path::Path;

use crate::bridge::Invoke;
use crate::error::FsError;
use commands::{CopyFileArgs, PathArgs, RenameFileArgs, WriteBinaryFileArgs, WriteTextFileArgs};

/// Filesystem API bound to a bridge.
///
/// Calls only borrow `&self`, so any number of them may be in flight at once.
#[derive(Clone)]
pub struct Fs<B> {
    bridge: B,
}

impl<B: Invoke> Fs<B> {
    pub fn new(bridge: B) -> Self {
        Self { bridge }
    }

    pub fn bridge(&self) -> &B {
        &self.bridge
    }

    pub fn into_bridge(self) -> B {
        self.bridge
    }

    /// Copies a file to a destination.
    pub async fn copy_file(
        &self,
        from: impl AsRef<Path>,
        to: impl AsRef<Path>,
        options: Option<CopyFileOptions>,
    ) -> Result<(), FsError> {
        let options = options.unwrap_or_default();
        let args = CopyFileArgs {
            from: from.as_ref(),
            to: to.as_ref(),
            options: &options,
        };
        self.call_unit(commands::COPY_FILE, &args).await
    }

    /// Creates a directory. Set `recursive` to create missing parents.
    pub async fn create_dir(
        &self,
        path: impl AsRef<Path>,
        options: Option<FsDirOptions>,
    ) -> Result<(), FsError> {
        let options = options.unwrap_or_default();
        let args = PathArgs {
            path: path.as_ref(),
            options: &options,
        };
        self.call_unit(commands::CREATE_DIR, &args).await
    }

    /// Checks if a path exists. A missing path is `Ok(false)`, not an error.
    pub async fn exists(
        &self,
        path: impl AsRef<Path>,
        options: Option<FsBaseDirectoryOption>,
    ) -> Result<bool, FsError> {
        let options = options.unwrap_or_default();
        let args = PathArgs {
            path: path.as_ref(),
            options: &options,
        };
        self.call(commands::EXISTS, &args).await
    }

    /// Reads a file as raw bytes.
    pub async fn read_binary_file(
        &self,
        path: impl AsRef<Path>,
        options: Option<FsBaseDirectoryOption>,
    ) -> Result<Vec<u8>, FsError> {
        let options = options.unwrap_or_default();
        let args = PathArgs {
            path: path.as_ref(),
            options: &options,
        };
        let contents: BinaryContents = self.call(commands::READ_BINARY_FILE, &args).await?;
        Ok(contents.into_vec())
    }

    /// Reads a file as UTF-8 text.
    pub async fn read_text_file(
        &self,
        path: impl AsRef<Path>,
        options: Option<FsBaseDirectoryOption>,
    ) -> Result<String, FsError> {
        let options = options.unwrap_or_default();
        let args = PathArgs {
            path: path.as_ref(),
            options: &options,
        };
        self.call(commands::READ_TEXT_FILE, &args).await
    }

    /// Removes a file.
    pub async fn remove_file(
        &self,
        path: impl AsRef<Path>,
        options: Option<FsBaseDirectoryOption>,
    ) -> Result<(), FsError> {
        let options = options.unwrap_or_default();
        let args = PathArgs {
            path: path.as_ref(),
            options: &options,
        };
        self.call_unit(commands::REMOVE_FILE, &args).await
    }

    /// Renames a file.
    pub async fn rename_file(
        &self,
        old_path: impl AsRef<Path>,
        new_path: impl AsRef<Path>,
        options: Option<RenameFileOptions>,
    ) -> Result<(), FsError> {
        let options = options.unwrap_or_default();
        let args = RenameFileArgs {
            old_path: old_path.as_ref(),
            new_path: new_path.as_ref(),
            options: &options,
        };
        self.call_unit(commands::RENAME_FILE, &args).await
    }

    /// Writes a UTF-8 text file.
    pub async fn write_text_file(
        &self,
        path: impl AsRef<Path>,
        contents: impl AsRef<str>,
        options: Option<FsWriteFileOptions>,
    ) -> Result<(), FsError> {
        let options = options.unwrap_or_default();
        let args = WriteTextFileArgs {
            path: path.as_ref(),
            contents: contents.as_ref(),
            options: &options,
        };
        self.call_unit(commands::WRITE_TEXT_FILE, &args).await
    }

    /// Writes raw bytes to a file.
    ///
    /// Accepts anything with a `BinaryContents` conversion: byte vectors, slices, arrays and
    /// strings. A byte iterator is collected first, e.g.
    /// `(0u8..4).collect::<BinaryContents>()`.
    pub async fn write_binary_file(
        &self,
        path: impl AsRef<Path>,
        contents: impl Into<BinaryContents>,
        options: Option<FsWriteFileOptions>,
    ) -> Result<(), FsError> {
        let options = options.unwrap_or_default();
        let contents = contents.into();
        let args = WriteBinaryFileArgs {
            path: path.as_ref(),
            contents: &contents,
            options: &options,
        };
        self.call_unit(commands::WRITE_BINARY_FILE, &args).await
    }

    /// Lists a directory. Whether children are expanded is up to the host.
    pub async fn read_dir(
        &self,
        path: impl AsRef<Path>,
        options: Option<FsBaseDirectoryOption>,
    ) -> Result<Vec<FileEntry>, FsError> {
        let options = options.unwrap_or_default();
        let args = PathArgs {
            path: path.as_ref(),
            options: &options,
        };
        self.call(commands::READ_DIR, &args).await
    }

    /// Removes a directory. Non-empty directories need `recursive`.
    pub async fn remove_dir(
        &self,
        path: impl AsRef<Path>,
        options: Option<FsDirOptions>,
    ) -> Result<(), FsError> {
        let options = options.unwrap_or_default();
        let args = PathArgs {
            path: path.as_ref(),
            options: &options,
        };
        self.call_unit(commands::REMOVE_DIR, &args).await
    }

    async fn call<A, R>(&self, command: &'static str, args: &A) -> Result<R, FsError>
    where
        A: Serialize + Sync + ?Sized,
        R: DeserializeOwned,
    {
        let args =
            serde_json::to_value(args).map_err(|source| FsError::Encode { command, source })?;

        tracing::debug!(command, "invoking host command");
        let reply = self.bridge.invoke(command, args).await.map_err(|e| {
            tracing::debug!(command, error = %e, "host command failed");
            FsError::from_invoke(command, e)
        })?;

        serde_json::from_value(reply).map_err(|source| FsError::Decode { command, source })
    }

    /// Like `call`, for commands whose success value carries nothing.
    async fn call_unit<A>(&self, command: &'static str, args: &A) -> Result<(), FsError>
    where
        A: Serialize + Sync + ?Sized,
    {
        let _: IgnoredAny = self.call(command, args).await?;
        Ok(())
    }
}
