//! Core library for remuxing Matroska files into QuickTime-compatible MP4s
//! using ffmpeg and ffprobe.
//!
//! This crate provides media probing, remux planning (stream copy with
//! selective DTS-to-ALAC audio transcoding and HEVC fourcc re-tagging),
//! supervised ffmpeg execution, and incremental progress parsing.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use qtremux_core::{build_plan, probe, run_remux};
//!
//! let descriptor = probe(Path::new("/media/Movie.mkv")).unwrap();
//! let plan = build_plan(&descriptor, None);
//! let result = run_remux(&plan, descriptor.duration_seconds, |update| {
//!     println!("{:.2} %", update.percent);
//! })
//! .unwrap();
//!
//! std::process::exit(result.exit_code);
//! ```

pub mod error;
pub mod external;
pub mod planning;
pub mod progress;
pub mod utils;

// Re-exports for public API
pub use error::{CoreError, CoreResult};
pub use external::check_dependency;
pub use external::ffmpeg::{RunResult, run_engine, run_remux};
pub use external::ffprobe::{MediaDescriptor, probe};
pub use planning::{AudioAction, RemuxPlan, VideoAction, build_plan, derive_output_path};
pub use progress::{ProgressTracker, ProgressUpdate};
pub use utils::{format_bytes, format_duration, is_valid_source_file, parse_ffmpeg_time};
