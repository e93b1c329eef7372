//! System browser integration
//!
//! Issues are read in the terminal but commented on in the browser, so the
//! only navigation out of the TUI is opening an issue's page.

/// Open an issue's page in the system's default browser
pub async fn open_issue_page(number: u64, url: String) {
    log::info!("Opening issue #{} in the system browser", number);

    let spawned = {
        #[cfg(target_os = "windows")]
        {
            tokio::process::Command::new("cmd")
                .args(["/C", "start", &url])
                .spawn()
        }
        #[cfg(not(target_os = "windows"))]
        {
            #[cfg(target_os = "macos")]
            let opener = "open";
            #[cfg(not(target_os = "macos"))]
            let opener = "xdg-open";

            tokio::process::Command::new(opener).arg(&url).spawn()
        }
    };

    if let Err(e) = spawned {
        log::error!("Could not open issue #{} ({}): {}", number, url, e);
    }
}
