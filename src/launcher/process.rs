//! Child process handling for the helper launch

use crate::backlight::ColorCommand;
use crate::error::{OmenRgbError, Result};
use crate::launcher::{DEFAULT_ESCALATOR, EXIT_AUTH_CANCELLED, EXIT_AUTH_FAILED};
use crate::policy::HELPER_PATH;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Default time to wait for the helper, password prompt included
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// How often the child is polled while waiting
const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Captured output of a successful helper run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchOutput {
    /// Helper stdout
    pub stdout: String,
    /// Helper stderr
    pub stderr: String,
}

/// Runs the helper through the escalation program
#[derive(Debug, Clone)]
pub struct Launcher {
    escalator: PathBuf,
    helper_path: PathBuf,
    timeout: Duration,
}

impl Default for Launcher {
    fn default() -> Self {
        Self::new(DEFAULT_ESCALATOR, HELPER_PATH, DEFAULT_TIMEOUT)
    }
}

impl Launcher {
    /// Create a launcher
    pub fn new(
        escalator: impl Into<PathBuf>,
        helper_path: impl Into<PathBuf>,
        timeout: Duration,
    ) -> Self {
        Self {
            escalator: escalator.into(),
            helper_path: helper_path.into(),
            timeout,
        }
    }

    /// Escalation program
    pub fn escalator(&self) -> &Path {
        &self.escalator
    }

    /// Helper executable passed to the escalation program
    pub fn helper_path(&self) -> &Path {
        &self.helper_path
    }

    /// Maximum time to wait for the helper
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Full command line for `command`, program first
    pub fn command_line(&self, command: &ColorCommand) -> Vec<String> {
        let [zone, color] = command.to_args();
        vec![
            self.escalator.to_string_lossy().into_owned(),
            self.helper_path.to_string_lossy().into_owned(),
            zone,
            color,
        ]
    }

    /// Run the helper for `command` and wait for it.
    pub fn apply(&self, command: &ColorCommand) -> Result<LaunchOutput> {
        let line = self.command_line(command);
        info!(
            "Executing: {}",
            line.iter().map(|arg| shell_quote(arg)).collect::<Vec<_>>().join(" ")
        );

        let mut child = match Command::new(&self.escalator)
            .arg(&self.helper_path)
            .args(command.to_args())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
        {
            Ok(child) => child,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("{} not found", self.escalator.display());
                return Err(OmenRgbError::EscalatorNotFound(self.escalator.clone()));
            }
            Err(e) => return Err(e.into()),
        };

        let deadline = Instant::now() + self.timeout;
        let stdout = spawn_reader(child.stdout.take());
        let stderr = spawn_reader(child.stderr.take());

        let status = self.wait_with_deadline(&mut child, deadline)?;

        // A background process left by the helper can keep the pipes open;
        // the readers only get what is left of the deadline
        let output = LaunchOutput {
            stdout: recv_reader(stdout, deadline, "stdout"),
            stderr: recv_reader(stderr, deadline, "stderr"),
        };
        debug!("Helper stdout: {}", output.stdout.trim_end());
        debug!("Helper stderr: {}", output.stderr.trim_end());

        map_status(status, output)
    }

    fn wait_with_deadline(&self, child: &mut Child, deadline: Instant) -> Result<ExitStatus> {
        loop {
            if let Some(status) = child.try_wait()? {
                return Ok(status);
            }

            if Instant::now() >= deadline {
                warn!("Helper still running after {:?}, killing it", self.timeout);
                if let Err(e) = child.kill() {
                    warn!("Failed to kill helper: {}", e);
                }
                if let Err(e) = child.wait() {
                    debug!("Failed to reap helper: {}", e);
                }
                return Err(OmenRgbError::HelperTimeout(self.timeout));
            }

            thread::sleep(POLL_INTERVAL);
        }
    }
}

fn map_status(status: ExitStatus, output: LaunchOutput) -> Result<LaunchOutput> {
    match status.code() {
        Some(0) => Ok(output),
        Some(EXIT_AUTH_CANCELLED) => Err(OmenRgbError::AuthorizationCancelled),
        Some(EXIT_AUTH_FAILED) => Err(OmenRgbError::AuthorizationFailed),
        Some(code) => Err(OmenRgbError::HelperFailed {
            code,
            stderr: output.stderr.trim().to_string(),
        }),
        None => Err(OmenRgbError::HelperTerminated),
    }
}

fn spawn_reader<R: Read + Send + 'static>(pipe: Option<R>) -> Option<Receiver<String>> {
    pipe.map(|mut pipe| {
        let (tx, rx) = mpsc::sync_channel(1);
        thread::spawn(move || {
            let mut buf = Vec::new();
            if let Err(e) = pipe.read_to_end(&mut buf) {
                debug!("Failed to read helper output: {}", e);
            }
            // The receiver is gone if the deadline already passed
            let _ = tx.send(String::from_utf8_lossy(&buf).into_owned());
        });
        rx
    })
}

fn recv_reader(reader: Option<Receiver<String>>, deadline: Instant, name: &str) -> String {
    let Some(reader) = reader else {
        return String::new();
    };

    match reader.recv_timeout(deadline.saturating_duration_since(Instant::now())) {
        Ok(text) => text,
        Err(e) => {
            warn!("Helper {} still open at the deadline, dropping it: {}", name, e);
            String::new()
        }
    }
}

/// Quote an argument for display the way a POSIX shell would accept it
fn shell_quote(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b"-_./=:,+@%".contains(&b));
    if plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backlight::{Color, ZoneTarget};
    use crate::test_utils::{create_test_dir, write_script};
    use std::fs;

    fn red_all() -> ColorCommand {
        ColorCommand::new(ZoneTarget::All, Color::rgb(255, 0, 0))
    }

    #[test]
    fn test_default_launcher() {
        let launcher = Launcher::default();
        assert_eq!(launcher.escalator(), Path::new("pkexec"));
        assert_eq!(
            launcher.helper_path(),
            Path::new("/usr/local/bin/omen-rgb-helper")
        );
        assert_eq!(launcher.timeout(), Duration::from_secs(15));
    }

    #[test]
    fn test_command_line() {
        let launcher = Launcher::default();
        let command = ColorCommand::parse("1", "00ff00").unwrap();
        assert_eq!(
            launcher.command_line(&command),
            vec!["pkexec", "/usr/local/bin/omen-rgb-helper", "1", "00FF00"]
        );
    }

    #[test]
    fn test_shell_quote() {
        assert_eq!(shell_quote("FF0000"), "FF0000");
        assert_eq!(shell_quote("/usr/bin/x"), "/usr/bin/x");
        assert_eq!(shell_quote(""), "''");
        assert_eq!(shell_quote("a b"), "'a b'");
        assert_eq!(shell_quote("it's"), r"'it'\''s'");
    }

    #[test]
    fn test_success_passes_arguments() {
        let temp_dir = create_test_dir();
        let args_file = temp_dir.path().join("args");
        let script = write_script(
            temp_dir.path(),
            "helper.sh",
            &format!(
                "printf '%s %s' \"$1\" \"$2\" > '{}'\necho done",
                args_file.display()
            ),
        );
        let launcher = Launcher::new("sh", script, Duration::from_secs(5));

        let output = launcher.apply(&red_all()).unwrap();

        assert_eq!(output.stdout.trim(), "done");
        assert_eq!(fs::read_to_string(args_file).unwrap(), "all FF0000");
    }

    #[test]
    fn test_auth_exit_codes() {
        let temp_dir = create_test_dir();

        let cancelled = write_script(temp_dir.path(), "cancel.sh", "exit 126");
        let result = Launcher::new("sh", cancelled, Duration::from_secs(5)).apply(&red_all());
        assert!(matches!(result, Err(OmenRgbError::AuthorizationCancelled)));

        let refused = write_script(temp_dir.path(), "refuse.sh", "exit 127");
        let result = Launcher::new("sh", refused, Duration::from_secs(5)).apply(&red_all());
        assert!(matches!(result, Err(OmenRgbError::AuthorizationFailed)));
    }

    #[test]
    fn test_helper_failure_carries_stderr() {
        let temp_dir = create_test_dir();
        let script = write_script(
            temp_dir.path(),
            "fail.sh",
            "echo 'Zone 3 not found' >&2\nexit 1",
        );
        let launcher = Launcher::new("sh", script, Duration::from_secs(5));

        match launcher.apply(&red_all()) {
            Err(OmenRgbError::HelperFailed { code, stderr }) => {
                assert_eq!(code, 1);
                assert_eq!(stderr, "Zone 3 not found");
            }
            other => panic!("expected HelperFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_escalator() {
        let launcher = Launcher::new(
            "/nonexistent/omen-rgb-escalator",
            "/nonexistent/helper",
            Duration::from_secs(1),
        );

        let result = launcher.apply(&red_all());

        assert!(matches!(result, Err(OmenRgbError::EscalatorNotFound(_))));
    }

    #[test]
    fn test_background_child_does_not_outlive_timeout() {
        let temp_dir = create_test_dir();
        let script = write_script(temp_dir.path(), "detach.sh", "sleep 6 &\nexit 0");
        let launcher = Launcher::new("sh", script, Duration::from_secs(1));

        let started = Instant::now();
        let result = launcher.apply(&red_all());

        assert!(result.is_ok(), "helper exited 0: {result:?}");
        assert!(
            started.elapsed() < Duration::from_secs(3),
            "took {:?}",
            started.elapsed()
        );
    }

    #[test]
    fn test_signal_maps_to_terminated() {
        let temp_dir = create_test_dir();
        let script = write_script(temp_dir.path(), "killed.sh", "kill -9 $$");
        let launcher = Launcher::new("sh", script, Duration::from_secs(5));

        let result = launcher.apply(&red_all());

        assert!(matches!(result, Err(OmenRgbError::HelperTerminated)));
    }

    #[test]
    fn test_timeout_kills_helper() {
        let temp_dir = create_test_dir();
        let script = write_script(temp_dir.path(), "hang.sh", "exec sleep 10");
        let launcher = Launcher::new("sh", script, Duration::from_millis(200));

        let started = Instant::now();
        let result = launcher.apply(&red_all());

        assert!(matches!(result, Err(OmenRgbError::HelperTimeout(_))));
        assert!(started.elapsed() < Duration::from_secs(5));
    }
}
