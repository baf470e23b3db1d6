use std::io::Read;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};
use tracing::debug;

const TOKEN_ENV_VARS: [&str; 2] = ["GITHUB_TOKEN", "GH_TOKEN"];
const GH_CLI_TIMEOUT: Duration = Duration::from_secs(10);
const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Finds a GitHub token: `GITHUB_TOKEN`, then `GH_TOKEN`, then `gh auth token`.
pub fn discover() -> Option<String> {
    let from_env = first_non_empty(TOKEN_ENV_VARS.iter().map(|name| std::env::var(name).ok()));
    if from_env.is_some() {
        debug!("using token from environment");
        return from_env;
    }
    gh_cli_token()
}

fn first_non_empty<I>(candidates: I) -> Option<String>
where
    I: IntoIterator<Item = Option<String>>,
{
    candidates
        .into_iter()
        .flatten()
        .map(|t| t.trim().to_string())
        .find(|t| !t.is_empty())
}

/// Asks the GitHub CLI for its stored token.
pub fn gh_cli_token() -> Option<String> {
    let mut cmd = Command::new("gh");
    cmd.args(["auth", "token"]);
    let token = run_with_timeout(cmd, GH_CLI_TIMEOUT);
    if token.is_some() {
        debug!("using token from gh CLI");
    }
    token
}

/// Runs `cmd` and returns its trimmed stdout if it exits successfully within
/// `timeout`. The child is killed on timeout.
fn run_with_timeout(mut cmd: Command, timeout: Duration) -> Option<String> {
    let mut child = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .ok()?;

    let deadline = Instant::now() + timeout;
    let status = loop {
        match child.try_wait().ok()? {
            Some(status) => break status,
            None if Instant::now() >= deadline => {
                let _ = child.kill();
                let _ = child.wait();
                debug!("gh CLI timed out");
                return None;
            }
            None => thread::sleep(POLL_INTERVAL),
        }
    };

    if !status.success() {
        return None;
    }

    let mut output = String::new();
    child.stdout.take()?.read_to_string(&mut output).ok()?;
    let output = output.trim().to_string();
    if output.is_empty() {
        None
    } else {
        Some(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_non_empty_skips_missing_and_blank() {
        assert_eq!(
            first_non_empty(vec![None, Some("  ".into()), Some("ghp_x\n".into())]),
            Some("ghp_x".to_string())
        );
        assert_eq!(
            first_non_empty(vec![Some("first".into()), Some("second".into())]),
            Some("first".to_string())
        );
        assert_eq!(first_non_empty(vec![None, None]), None);
    }

    #[test]
    fn missing_binary_yields_none() {
        let cmd = Command::new("reposcout-definitely-not-a-binary");
        assert_eq!(run_with_timeout(cmd, Duration::from_secs(1)), None);
    }

    #[cfg(unix)]
    #[test]
    fn captures_trimmed_stdout() {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", "printf '  tok123\\n'"]);
        assert_eq!(run_with_timeout(cmd, Duration::from_secs(5)), Some("tok123".to_string()));
    }

    #[cfg(unix)]
    #[test]
    fn failing_command_yields_none() {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", "echo tok; exit 1"]);
        assert_eq!(run_with_timeout(cmd, Duration::from_secs(5)), None);
    }

    #[cfg(unix)]
    #[test]
    fn slow_command_times_out() {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", "sleep 5; echo late"]);
        let started = Instant::now();
        assert_eq!(run_with_timeout(cmd, Duration::from_millis(100)), None);
        assert!(started.elapsed() < Duration::from_secs(4));
    }
}
