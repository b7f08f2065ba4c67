//! Utility functions for formatting and file checks.
//!
//! General-purpose helpers used by both the core pipeline and the CLI:
//! duration and byte formatting, ffmpeg timestamp parsing, and input file
//! validation.

use std::path::Path;

/// Checks if the given path is a valid remux source. Currently only
/// Matroska (.mkv) containers are accepted (case-insensitive).
#[must_use]
pub fn is_valid_source_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext_str| ext_str.eq_ignore_ascii_case("mkv"))
            .unwrap_or(false)
}

/// Formats seconds as HH:MM:SS (e.g., 3725.0 -> "01:02:05"). Returns "??:??:??" for invalid inputs.
#[must_use]
pub fn format_duration(seconds: f64) -> String {
    if seconds < 0.0 || !seconds.is_finite() {
        return "??:??:??".to_string();
    }

    let total_seconds = seconds as u64;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}

/// Formats bytes with appropriate binary units (B, KiB, MiB, GiB).
#[must_use]
pub fn format_bytes(bytes: u64) -> String {
    const KIB: f64 = 1024.0;
    const MIB: f64 = KIB * 1024.0;
    const GIB: f64 = MIB * 1024.0;

    let bytes_f64 = bytes as f64;
    if bytes_f64 >= GIB {
        format!("{:.2} GiB", bytes_f64 / GIB)
    } else if bytes_f64 >= MIB {
        format!("{:.2} MiB", bytes_f64 / MIB)
    } else if bytes_f64 >= KIB {
        format!("{:.2} KiB", bytes_f64 / KIB)
    } else {
        format!("{bytes} B")
    }
}

/// Parses an ffmpeg time string (H:MM:SS.ffffff) to seconds. Returns None if invalid.
#[must_use]
pub fn parse_ffmpeg_time(time: &str) -> Option<f64> {
    let parts: Vec<&str> = time.split(':').collect();
    if parts.len() == 3 {
        let hours = parts[0].parse::<f64>().ok()?;
        let minutes = parts[1].parse::<f64>().ok()?;
        let seconds = parts[2].parse::<f64>().ok()?;
        Some(hours * 3600.0 + minutes * 60.0 + seconds)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_source_file() {
        use std::fs::File;

        let temp_dir = std::env::temp_dir();
        let test_file = temp_dir.join("qtremux_test_source.mkv");
        let test_file_upper = temp_dir.join("qtremux_test_source.MKV");
        let test_file_mp4 = temp_dir.join("qtremux_test_source.mp4");

        let _ = File::create(&test_file);
        let _ = File::create(&test_file_upper);
        let _ = File::create(&test_file_mp4);

        // Valid MKV files (case insensitive)
        assert!(is_valid_source_file(&test_file));
        assert!(is_valid_source_file(&test_file_upper));

        // Invalid files
        assert!(!is_valid_source_file(&test_file_mp4));
        assert!(!is_valid_source_file(Path::new("missing.mkv")));
        assert!(!is_valid_source_file(Path::new("")));
        assert!(!is_valid_source_file(&temp_dir));

        let _ = std::fs::remove_file(&test_file);
        let _ = std::fs::remove_file(&test_file_upper);
        let _ = std::fs::remove_file(&test_file_mp4);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0.0), "00:00:00");
        assert_eq!(format_duration(59.0), "00:00:59");
        assert_eq!(format_duration(3661.0), "01:01:01");
        assert_eq!(format_duration(86399.0), "23:59:59");
        assert_eq!(format_duration(90061.0), "25:01:01");

        // Fractional seconds truncate
        assert_eq!(format_duration(59.9), "00:00:59");

        // Invalid inputs
        assert_eq!(format_duration(-1.0), "??:??:??");
        assert_eq!(format_duration(f64::INFINITY), "??:??:??");
        assert_eq!(format_duration(f64::NAN), "??:??:??");
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(1023), "1023 B");
        assert_eq!(format_bytes(1024), "1.00 KiB");
        assert_eq!(format_bytes(1536), "1.50 KiB");
        assert_eq!(format_bytes(1024 * 1024), "1.00 MiB");
        assert_eq!(format_bytes(1024 * 1024 * 1024 * 2), "2.00 GiB");
    }

    #[test]
    fn test_parse_ffmpeg_time() {
        assert_eq!(parse_ffmpeg_time("00:00:00"), Some(0.0));
        assert_eq!(parse_ffmpeg_time("00:01:00"), Some(60.0));
        assert_eq!(parse_ffmpeg_time("01:02:03"), Some(3723.0));
        assert_eq!(parse_ffmpeg_time("00:00:05.000000"), Some(5.0));
        assert_eq!(parse_ffmpeg_time("01:30:45.75"), Some(5445.75));

        assert_eq!(parse_ffmpeg_time(""), None);
        assert_eq!(parse_ffmpeg_time("00:00"), None);
        assert_eq!(parse_ffmpeg_time("00:00:00:00"), None);
        assert_eq!(parse_ffmpeg_time("aa:bb:cc"), None);
    }
}
