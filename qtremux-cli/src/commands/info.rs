// qtremux-cli/src/commands/info.rs
//
// The info command: probe a file and print what the remux planner would
// see, without touching anything.

use qtremux_core::{CoreError, CoreResult, check_dependency, format_duration, probe};

use crate::cli::InfoArgs;
use crate::output::print_status;

pub fn execute(args: InfoArgs) -> CoreResult<i32> {
    let input = &args.input_path;

    if !input.is_file() {
        return Err(CoreError::InvalidPath(format!(
            "input '{}' does not exist or is not a file",
            input.display()
        )));
    }

    check_dependency("ffprobe")?;

    let descriptor = probe(input)?;

    print_status("File", &descriptor.path.display().to_string());
    let duration = if descriptor.duration_seconds > 0.0 {
        format_duration(descriptor.duration_seconds)
    } else {
        "unknown".to_string()
    };
    print_status("Duration", &duration);
    print_status("Video codec", fallback(&descriptor.video_codec));
    print_status("Audio codec", fallback(&descriptor.audio_codec));

    Ok(0)
}

fn fallback(codec: &str) -> &str {
    if codec.is_empty() { "unknown" } else { codec }
}
