//! External link methods

use crate::App;
use dogtui::log_debug;
use dogtui::ui::footer::DONATE_URL;

impl App {
    /// Open the Dog API donation page with the configured open_command
    pub(crate) fn open_donate_link(&mut self) {
        let Some(ref open_cmd) = self.open_command else {
            self.model
                .ui
                .show_toast("Error: open_command not configured".to_string());
            return;
        };

        let result = std::process::Command::new(open_cmd)
            .arg(DONATE_URL)
            .stdin(std::process::Stdio::null())
            .stdout(std::process::Stdio::null())
            .stderr(std::process::Stdio::null())
            .spawn();

        match result {
            Ok(_) => {
                log_debug(&format!("open_command: spawned {} {}", open_cmd, DONATE_URL));
                self.model.ui.show_toast(format!("Opened: {}", DONATE_URL));
            }
            Err(e) => {
                log_debug(&format!(
                    "Failed to execute open_command '{}': {}",
                    open_cmd, e
                ));
                let toast_msg = format!("Error: Failed to open with '{}'", open_cmd);
                self.model.ui.show_toast(toast_msg);
            }
        }
    }
}
