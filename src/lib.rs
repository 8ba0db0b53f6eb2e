//! Filesystem access for webview front-ends.
//!
//! [`fs::Fs`] turns typed calls into host commands and sends them through any
//! [`bridge::Invoke`] transport. The host does all real work; this crate only
//! shapes requests and hands back replies.
//!
//! ```no_run
//! use fs_bridge::bridge::WebSocketBridge;
//! use fs_bridge::config::BridgeConfig;
//! use fs_bridge::fs::{BaseDirectory, Fs, FsWriteFileOptions};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let bridge = WebSocketBridge::connect(&BridgeConfig::from_env()?).await?;
//! let fs = Fs::new(bridge);
//!
//! let options = FsWriteFileOptions::default()
//!     .dir(BaseDirectory::Config)
//!     .recursive(true);
//! fs.write_text_file("app/settings.json", "{}", Some(options)).await?;
//! # Ok(())
//! # }
//! ```

pub mod bridge;
pub mod config;
pub mod error;
pub mod fs;
pub mod logging;

pub use error::FsError;
