//! FFprobe integration for media metadata queries.
//!
//! Each probe is an isolated ffprobe invocation answering a single scalar
//! question: the container duration, or the codec name of the first video
//! or audio stream. Probing is idempotent and cheap, so failures surface
//! immediately with the identity of the failing query; there are no
//! retries.

use crate::error::{CoreError, CoreResult};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Probed facts about one media file, gathered once per remux request.
///
/// Codec fields hold ffprobe's `codec_name` for the first stream of that
/// kind; an empty string means the stream is absent or the field was not
/// reported, which is valid input for planning.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaDescriptor {
    pub path: PathBuf,
    pub duration_seconds: f64,
    pub video_codec: String,
    pub audio_codec: String,
}

/// Probes a media file for the metadata remux planning needs.
///
/// # Errors
///
/// `CoreError::ProbeFailed` if ffprobe cannot run, exits non-zero, or the
/// duration does not parse as a finite number. An empty codec answer is
/// not an error.
pub fn probe(path: &Path) -> CoreResult<MediaDescriptor> {
    let duration_raw = query_scalar(path, None, "format=duration", "format duration")?;
    let duration_seconds = parse_duration(&duration_raw, path)?;

    let video_codec = query_scalar(path, Some("v:0"), "stream=codec_name", "video codec")?;
    let audio_codec = query_scalar(path, Some("a:0"), "stream=codec_name", "audio codec")?;

    log::debug!(
        "Probed {}: duration={duration_seconds}s video={video_codec:?} audio={audio_codec:?}",
        path.display()
    );

    Ok(MediaDescriptor {
        path: path.to_path_buf(),
        duration_seconds,
        video_codec,
        audio_codec,
    })
}

/// Runs one ffprobe query and returns its trimmed scalar answer.
///
/// An empty answer means "stream absent or field not reported" and is
/// returned as an empty string rather than an error.
fn query_scalar(
    path: &Path,
    stream_selector: Option<&str>,
    entries: &str,
    query: &str,
) -> CoreResult<String> {
    let mut cmd = Command::new("ffprobe");
    cmd.args(["-v", "error"]);
    if let Some(selector) = stream_selector {
        cmd.args(["-select_streams", selector]);
    }
    cmd.args(["-show_entries", entries]);
    cmd.args(["-of", "default=noprint_wrappers=1:nokey=1"]);
    cmd.arg(path);

    log::debug!("Running ffprobe query '{query}' on {}", path.display());

    let output = cmd
        .output()
        .map_err(|e| CoreError::probe_failed(query, path, format!("failed to run ffprobe: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(CoreError::probe_failed(
            query,
            path,
            format!("ffprobe exited with {}: {}", output.status, stderr.trim()),
        ));
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Parses the duration scalar, rejecting anything that cannot back a
/// progress percentage later on.
fn parse_duration(raw: &str, path: &Path) -> CoreResult<f64> {
    let parsed = raw.parse::<f64>().ok().filter(|d| d.is_finite() && *d >= 0.0);
    parsed.ok_or_else(|| {
        CoreError::probe_failed(
            "format duration",
            path,
            format!("expected a numeric duration, got {raw:?}"),
        )
    })
}
