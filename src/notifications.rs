/// Desktop notification and sound support
/// Currently only implements macOS; everywhere else these are no-ops.

#[cfg(target_os = "macos")]
use std::process::Command;

#[cfg(target_os = "macos")]
fn play_sound(name: &str) {
    let path = format!("/System/Library/Sounds/{}.aiff", name);
    let _ = Command::new("afplay").arg(&path).spawn();
}

#[cfg(target_os = "macos")]
fn notify(title: &str, message: &str) {
    let script = format!(
        r#"display notification "{}" with title "{}""#,
        message.replace('"', "\\\""),
        title.replace('"', "\\\"")
    );
    let _ = Command::new("osascript").arg("-e").arg(&script).spawn();
}

/// Short beep when a countdown starts
pub fn play_start_beep() {
    #[cfg(target_os = "macos")]
    play_sound("Pop");
}

/// Fanfare plus notification when a work phase completes
pub fn notify_work_complete(daily_count: u32) {
    #[cfg(target_os = "macos")]
    {
        play_sound("Glass");
        notify(
            "Tomate - Pomodoro Complete",
            &format!("🍅 {} today. Break time!", daily_count),
        );
    }

    #[cfg(not(target_os = "macos"))]
    {
        let _ = daily_count;
    }
}

/// Chime plus notification when a break completes
pub fn notify_break_complete() {
    #[cfg(target_os = "macos")]
    {
        play_sound("Submarine");
        notify("Tomate - Break Over", "Back to work when you're ready.");
    }
}
