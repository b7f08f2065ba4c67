//! Remux planning: from probed metadata to an ffmpeg argument list.
//!
//! The policy is the whole point of this tool: video is never re-encoded,
//! DTS audio is transcoded to lossless ALAC for Apple compatibility, and
//! HEVC video is re-tagged as `hvc1` so QuickTime recognises the stream.
//! Planning is a pure function of the probed descriptor; any codec value,
//! including an empty one, maps to a defined default.

use std::path::{Path, PathBuf};

use crate::external::ffprobe::MediaDescriptor;

/// How the video stream is handled. Remuxing never re-encodes video.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoAction {
    Copy,
}

/// How the audio stream is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioAction {
    Copy,
    /// Transcode to ALAC, a lossless codec QuickTime can play.
    TranscodeLossless,
}

/// Deterministic remux decision for one source file.
///
/// Immutable once built; [`RemuxPlan::to_engine_args`] turns it into the
/// ffmpeg invocation exactly once.
#[derive(Debug, Clone)]
pub struct RemuxPlan {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub video_action: VideoAction,
    pub audio_action: AudioAction,
    /// Four-character-code override applied to the video stream (`hvc1`).
    pub video_tag_override: Option<String>,
    /// Place the moov atom at the head of the file (`-movflags +faststart`).
    pub faststart: bool,
}

/// QuickTime does not recognise HEVC streams tagged with the default
/// `hev1` fourcc.
const HEVC_COMPAT_TAG: &str = "hvc1";

/// Builds the remux plan for a probed source file.
///
/// `output_override` replaces the derived output path (source path with its
/// extension swapped for `mp4`). This is pure and infallible: unknown or
/// absent codecs fall back to stream copy.
#[must_use]
pub fn build_plan(descriptor: &MediaDescriptor, output_override: Option<PathBuf>) -> RemuxPlan {
    let audio_action = if descriptor.audio_codec.eq_ignore_ascii_case("dts") {
        AudioAction::TranscodeLossless
    } else {
        AudioAction::Copy
    };

    let vcodec = descriptor.video_codec.to_ascii_lowercase();
    let video_tag_override = if vcodec == "hevc" || vcodec == "h265" {
        Some(HEVC_COMPAT_TAG.to_string())
    } else {
        None
    };

    let output_path =
        output_override.unwrap_or_else(|| derive_output_path(&descriptor.path));

    RemuxPlan {
        input_path: descriptor.path.clone(),
        output_path,
        video_action: VideoAction::Copy,
        audio_action,
        video_tag_override,
        faststart: true,
    }
}

/// Derives the output path by replacing the source's extension with `mp4`.
#[must_use]
pub fn derive_output_path(input_path: &Path) -> PathBuf {
    input_path.with_extension("mp4")
}

impl RemuxPlan {
    /// Builds the ordered ffmpeg argument list for this plan.
    ///
    /// The engine is always asked for machine-readable progress on stdout
    /// (`-progress pipe:1`) with the per-frame statistics spam suppressed
    /// (`-nostats`), and the output is overwritten without prompting.
    #[must_use]
    pub fn to_engine_args(&self) -> Vec<String> {
        let mut args: Vec<String> = vec![
            "-y".into(),
            "-i".into(),
            self.input_path.to_string_lossy().into_owned(),
        ];

        match self.video_action {
            VideoAction::Copy => {
                args.push("-c:v".into());
                args.push("copy".into());
            }
        }

        match self.audio_action {
            AudioAction::TranscodeLossless => {
                args.push("-c:a".into());
                args.push("alac".into());
            }
            AudioAction::Copy => {
                args.push("-c:a".into());
                args.push("copy".into());
            }
        }

        if self.faststart {
            args.push("-movflags".into());
            args.push("+faststart".into());
        }

        if let Some(ref tag) = self.video_tag_override {
            args.push("-tag:v".into());
            args.push(tag.clone());
        }

        args.push("-progress".into());
        args.push("pipe:1".into());
        args.push("-nostats".into());

        args.push(self.output_path.to_string_lossy().into_owned());
        args
    }

    /// One-line description of the planned actions, for logging.
    #[must_use]
    pub fn describe(&self) -> String {
        let audio = match self.audio_action {
            AudioAction::Copy => "copy",
            AudioAction::TranscodeLossless => "transcode to alac",
        };
        let tag = match self.video_tag_override {
            Some(ref t) => format!(", tag video as {t}"),
            None => String::new(),
        };
        format!("video: copy{tag} | audio: {audio}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(video: &str, audio: &str) -> MediaDescriptor {
        MediaDescriptor {
            path: PathBuf::from("/media/Movie.mkv"),
            duration_seconds: 120.0,
            video_codec: video.to_string(),
            audio_codec: audio.to_string(),
        }
    }

    #[test]
    fn test_dts_audio_transcodes_lossless() {
        for codec in ["dts", "DTS", "DtS"] {
            let plan = build_plan(&descriptor("h264", codec), None);
            assert_eq!(plan.audio_action, AudioAction::TranscodeLossless);
        }
    }

    #[test]
    fn test_non_dts_audio_copies() {
        for codec in ["aac", "ac3", "truehd", "opus", ""] {
            let plan = build_plan(&descriptor("h264", codec), None);
            assert_eq!(plan.audio_action, AudioAction::Copy, "codec: {codec:?}");
        }
    }

    #[test]
    fn test_hevc_video_gets_compat_tag() {
        for codec in ["hevc", "HEVC", "h265", "H265"] {
            let plan = build_plan(&descriptor(codec, "aac"), None);
            assert_eq!(plan.video_tag_override.as_deref(), Some("hvc1"), "codec: {codec:?}");
        }
    }

    #[test]
    fn test_other_video_gets_no_tag() {
        for codec in ["h264", "av1", "vp9", ""] {
            let plan = build_plan(&descriptor(codec, "aac"), None);
            assert!(plan.video_tag_override.is_none(), "codec: {codec:?}");
        }
    }

    #[test]
    fn test_hevc_dts_scenario() {
        // HEVC + DTS: copy video with tag override, transcode audio.
        let plan = build_plan(&descriptor("hevc", "dts"), None);
        assert_eq!(plan.video_action, VideoAction::Copy);
        assert_eq!(plan.audio_action, AudioAction::TranscodeLossless);
        assert_eq!(plan.video_tag_override.as_deref(), Some("hvc1"));
        assert!(plan.faststart);
    }

    #[test]
    fn test_h264_aac_scenario() {
        // Already-compatible streams: copy everything, no tag.
        let plan = build_plan(&descriptor("h264", "aac"), None);
        assert_eq!(plan.video_action, VideoAction::Copy);
        assert_eq!(plan.audio_action, AudioAction::Copy);
        assert!(plan.video_tag_override.is_none());
    }

    #[test]
    fn test_output_path_derivation() {
        let plan = build_plan(&descriptor("h264", "aac"), None);
        assert_eq!(plan.output_path, PathBuf::from("/media/Movie.mp4"));
    }

    #[test]
    fn test_output_path_override_wins() {
        let plan = build_plan(
            &descriptor("h264", "aac"),
            Some(PathBuf::from("/tmp/custom.mp4")),
        );
        assert_eq!(plan.output_path, PathBuf::from("/tmp/custom.mp4"));
    }

    #[test]
    fn test_engine_args_copy_case() {
        let plan = build_plan(&descriptor("h264", "aac"), None);
        let args = plan.to_engine_args();
        assert_eq!(
            args,
            vec![
                "-y",
                "-i",
                "/media/Movie.mkv",
                "-c:v",
                "copy",
                "-c:a",
                "copy",
                "-movflags",
                "+faststart",
                "-progress",
                "pipe:1",
                "-nostats",
                "/media/Movie.mp4",
            ]
        );
    }

    #[test]
    fn test_engine_args_transcode_and_tag_case() {
        let plan = build_plan(&descriptor("hevc", "dts"), None);
        let args = plan.to_engine_args();
        assert_eq!(
            args,
            vec![
                "-y",
                "-i",
                "/media/Movie.mkv",
                "-c:v",
                "copy",
                "-c:a",
                "alac",
                "-movflags",
                "+faststart",
                "-tag:v",
                "hvc1",
                "-progress",
                "pipe:1",
                "-nostats",
                "/media/Movie.mp4",
            ]
        );
    }
}
