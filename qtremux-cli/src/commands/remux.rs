// qtremux-cli/src/commands/remux.rs
//
// The remux command: validate the input, probe it, plan the operation, and
// supervise the engine with live progress. The engine's exit code is
// forwarded verbatim so qtremux composes in scripts the way ffmpeg does.

use std::fs;

use qtremux_core::{
    CoreError, CoreResult, build_plan, check_dependency, format_bytes, format_duration,
    is_valid_source_file, probe, run_remux,
};

use crate::cli::RemuxArgs;
use crate::output::{self, ProgressReporter};

pub fn execute(args: RemuxArgs) -> CoreResult<i32> {
    let input = &args.input_path;

    if !input.is_file() {
        return Err(CoreError::InvalidPath(format!(
            "input '{}' does not exist or is not a file",
            input.display()
        )));
    }
    if !is_valid_source_file(input) {
        return Err(CoreError::InvalidPath(format!(
            "input '{}' is not an .mkv file",
            input.display()
        )));
    }

    check_dependency("ffprobe")?;
    check_dependency("ffmpeg")?;

    log::info!("Remux run started: {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"));

    let descriptor = probe(input)?;
    output::print_status("Video codec", non_empty_or_unknown(&descriptor.video_codec));
    output::print_status("Audio codec", non_empty_or_unknown(&descriptor.audio_codec));
    let duration = if descriptor.duration_seconds > 0.0 {
        format_duration(descriptor.duration_seconds)
    } else {
        "unknown".to_string()
    };
    output::print_status("Duration", &duration);

    let plan = build_plan(&descriptor, args.output);
    log::info!("Plan: {}", plan.describe());

    let mut reporter = ProgressReporter::new(descriptor.duration_seconds > 0.0);
    let result = run_remux(&plan, descriptor.duration_seconds, |update| {
        reporter.update(update);
    })?;
    reporter.finish();

    if result.success() {
        output::print_success(&format!("Completed: {}", result.output_path.display()));
        if let (Ok(input_meta), Ok(output_meta)) =
            (fs::metadata(&plan.input_path), fs::metadata(&result.output_path))
        {
            output::print_status("Input size", &format_bytes(input_meta.len()));
            output::print_status("Output size", &format_bytes(output_meta.len()));
        }
    } else {
        // The destination is undefined after a failed run.
        output::print_failure(&format!(
            "Failed (engine exit code {}): {}",
            result.exit_code,
            result.output_path.display()
        ));
    }

    Ok(result.exit_code)
}

fn non_empty_or_unknown(codec: &str) -> &str {
    if codec.is_empty() { "unknown" } else { codec }
}
