//! Engine supervision: running ffmpeg and streaming its progress.
//!
//! The remux engine runs as a child process with its machine-readable
//! progress stream (`-progress pipe:1`) on stdout and diagnostics on
//! stderr. Pipe buffers are bounded and a child that cannot write stalls,
//! so both pipes are consumed incrementally while the process runs: the
//! progress stream is read on the calling thread while a dedicated thread
//! drains stderr into the debug log. The process is waited on only after
//! its output reaches end-of-stream, which also guarantees no buffered
//! progress lines are dropped.

use crate::error::{CoreError, CoreResult};
use crate::planning::RemuxPlan;
use crate::progress::{ProgressTracker, ProgressUpdate};

use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::thread;

/// Terminal outcome of one supervised engine run.
///
/// The exit code is the child's, verbatim; the supervisor never masks or
/// reinterprets it. A non-zero code is the engine's own failure report and
/// the destination file must be treated as undefined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    pub exit_code: i32,
    pub output_path: PathBuf,
}

impl RunResult {
    /// Whether the engine reported success.
    #[must_use]
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Runs ffmpeg for the given plan, streaming progress updates to the sink.
///
/// Blocks until the engine exits. A non-zero engine exit is NOT an error
/// of this function; it comes back as a failed [`RunResult`].
///
/// # Errors
///
/// `CoreError::CommandStart` if ffmpeg cannot be launched,
/// `CoreError::CommandWait` if waiting on the process fails.
pub fn run_remux<F>(
    plan: &RemuxPlan,
    total_duration_secs: f64,
    on_progress: F,
) -> CoreResult<RunResult>
where
    F: FnMut(ProgressUpdate),
{
    let args = plan.to_engine_args();
    let mut tracker = ProgressTracker::new(total_duration_secs);
    let exit_code = run_engine("ffmpeg", &args, &mut tracker, on_progress)?;
    Ok(RunResult {
        exit_code,
        output_path: plan.output_path.clone(),
    })
}

/// Launches `program` with `args` and supervises it to completion.
///
/// Every line of the progress stream is offered to `tracker`; lines it
/// cannot interpret are discarded without error (the stream interleaves
/// other key=value pairs with the timing keys). The child's exit code is
/// returned verbatim, with -1 standing in for termination by signal.
///
/// Split out from [`run_remux`] so tests can substitute a scripted engine
/// for the real binary.
pub fn run_engine<F>(
    program: &str,
    args: &[String],
    tracker: &mut ProgressTracker,
    mut on_progress: F,
) -> CoreResult<i32>
where
    F: FnMut(ProgressUpdate),
{
    log::debug!("Launching engine: {program} {}", args.join(" "));

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| CoreError::CommandStart {
            tool: program.to_string(),
            source: e,
        })?;

    // Drain stderr concurrently; the child must never block on a full
    // diagnostic pipe while we read the progress stream. Unreadable lines
    // (non-UTF-8 filenames in diagnostics) are skipped, not fatal.
    let stderr_handle = child.stderr.take().map(|stderr| {
        thread::spawn(move || {
            #[allow(clippy::manual_flatten)]
            for line_result in BufReader::new(stderr).lines() {
                if let Ok(line) = line_result {
                    log::debug!(target: "qtremux::engine", "{line}");
                }
            }
        })
    });

    // Read the progress stream as it is produced, not after exit.
    if let Some(stdout) = child.stdout.take() {
        #[allow(clippy::manual_flatten)]
        for line_result in BufReader::new(stdout).lines() {
            if let Ok(line) = line_result {
                if let Some(update) = tracker.parse_line(&line) {
                    on_progress(update);
                }
            }
        }
    }

    if let Some(handle) = stderr_handle {
        let _ = handle.join();
    }

    // Output reached end-of-stream; now it is safe to reap the child.
    let status = child.wait().map_err(|e| CoreError::CommandWait {
        tool: program.to_string(),
        source: e,
    })?;

    let exit_code = status.code().unwrap_or(-1);
    log::debug!("Engine exited with code {exit_code}");
    Ok(exit_code)
}
