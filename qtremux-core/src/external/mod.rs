// ============================================================================
// qtremux-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with ffmpeg and ffprobe
//
// This module encapsulates every interaction with the external command-line
// tools qtremux orchestrates: ffprobe for metadata queries and ffmpeg for
// the actual remux. Nothing else in the crate spawns processes.
//
// KEY COMPONENTS:
// - check_dependency: verifies an external tool is present and runnable
// - ffprobe: scalar metadata queries producing a MediaDescriptor
// - ffmpeg: engine supervision with incremental progress parsing

// ---- Internal crate imports ----
use crate::error::{CoreError, CoreResult};

// ---- Standard library imports ----
use std::io;
use std::process::{Command, Stdio};

// ============================================================================
// SUBMODULES
// ============================================================================

/// Engine supervision: spawning ffmpeg and streaming its progress output
pub mod ffmpeg;

/// Metadata probing via ffprobe scalar queries
pub mod ffprobe;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use ffmpeg::{RunResult, run_engine, run_remux};
pub use ffprobe::{MediaDescriptor, probe};

// ============================================================================
// DEPENDENCY CHECKING
// ============================================================================

/// Checks if a required external command is available and executable.
///
/// Runs the command with `-version` and discards its output; only whether
/// the process could start matters here.
///
/// # Errors
///
/// * `CoreError::DependencyNotFound` if the command is not on PATH
/// * `CoreError::CommandStart` if it exists but fails to start
pub fn check_dependency(cmd_name: &str) -> CoreResult<()> {
    let result = Command::new(cmd_name)
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match result {
        Ok(_) => {
            log::debug!("Found dependency: {cmd_name}");
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::warn!("Dependency '{cmd_name}' not found.");
            Err(CoreError::DependencyNotFound(cmd_name.to_string()))
        }
        Err(e) => {
            log::error!("Failed to start dependency check command '{cmd_name}': {e}");
            Err(CoreError::CommandStart {
                tool: cmd_name.to_string(),
                source: e,
            })
        }
    }
}
