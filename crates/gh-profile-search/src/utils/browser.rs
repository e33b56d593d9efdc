//! Browser utilities
//!
//! Functions for opening URLs in the system's default browser.

/// Command and arguments that open `url` on the current platform
fn opener_command(url: &str) -> (&'static str, Vec<String>) {
    if cfg!(target_os = "macos") {
        ("open", vec![url.to_string()])
    } else if cfg!(target_os = "windows") {
        (
            "cmd",
            vec!["/C".to_string(), "start".to_string(), url.to_string()],
        )
    } else {
        ("xdg-open", vec![url.to_string()])
    }
}

/// Open a URL in the system's default browser
///
/// Uses platform-specific commands:
/// - macOS: `open`
/// - Linux: `xdg-open`
/// - Windows: `cmd /C start`
pub async fn open_url(url: String) {
    let (program, args) = opener_command(&url);

    match tokio::process::Command::new(program).args(&args).spawn() {
        Ok(mut child) => {
            if let Err(e) = child.wait().await {
                log::error!("Browser command for {} failed: {}", url, e);
            }
        }
        Err(e) => log::error!("Failed to open URL in browser: {}", e),
    }
}
