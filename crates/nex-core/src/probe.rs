//! Runtime detection on `PATH`.

use nex_schema::Runtime;
use std::path::PathBuf;

/// Looks up executables by name.
pub trait RuntimeProbe: Send + Sync {
    /// Full path of `program` if it is on `PATH`.
    fn find(&self, program: &str) -> Option<PathBuf>;

    /// Whether `program` is on `PATH`.
    fn has(&self, program: &str) -> bool {
        self.find(program).is_some()
    }
}

/// Probe backed by the real `PATH` (via the `which` crate).
#[derive(Debug, Clone, Copy, Default)]
pub struct PathProbe;

impl RuntimeProbe for PathProbe {
    fn find(&self, program: &str) -> Option<PathBuf> {
        which::which(program).ok()
    }
}

/// Executable names that satisfy `runtime`, in preference order.
pub fn candidates(runtime: Runtime) -> &'static [&'static str] {
    match runtime {
        Runtime::Python if cfg!(windows) => &["python"],
        Runtime::Python => &["python", "python3"],
        Runtime::Node => &["node"],
        Runtime::Bash => &["bash"],
        Runtime::PowerShell => &["powershell", "pwsh"],
        Runtime::Go => &["go"],
        Runtime::Binary | Runtime::Unknown => &[],
    }
}

/// First candidate of `runtime` found by `probe`.
pub fn detect(probe: &dyn RuntimeProbe, runtime: Runtime) -> Option<&'static str> {
    candidates(runtime).iter().copied().find(|p| probe.has(p))
}

/// How to get `runtime` onto the machine.
pub fn install_instructions(runtime: Runtime) -> &'static str {
    match runtime {
        Runtime::Python => {
            "Install Python from https://www.python.org/downloads/\n\
             or use your package manager: apt install python3 / brew install python"
        }
        Runtime::Node => {
            "Install Node.js from https://nodejs.org/\n\
             or use your package manager: apt install nodejs / brew install node"
        }
        Runtime::Bash => {
            "Bash ships with most Unix systems.\n\
             On Windows, install Git for Windows or enable WSL"
        }
        Runtime::PowerShell => {
            "Install PowerShell from https://github.com/PowerShell/PowerShell"
        }
        Runtime::Go => "Install Go from https://go.dev/dl/",
        Runtime::Binary | Runtime::Unknown => "",
    }
}

/// First line of `<program> --version`, for diagnostics.
pub async fn version_of(program: &str) -> Option<String> {
    let output = tokio::process::Command::new(program)
        .arg("--version")
        .output()
        .await
        .ok()?;
    // Some interpreters (older python) print their version on stderr.
    let text = if output.stdout.is_empty() {
        output.stderr
    } else {
        output.stdout
    };
    String::from_utf8_lossy(&text)
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .map(str::to_string)
}


#[cfg(test)]
mod tests {
    use super::testing::FakeProbe;
    use super::*;

    #[test]
    fn test_detect_prefers_first_candidate() {
        let probe = FakeProbe::with(&["pwsh", "powershell"]);
        assert_eq!(detect(&probe, Runtime::PowerShell), Some("powershell"));

        let probe = FakeProbe::with(&["pwsh"]);
        assert_eq!(detect(&probe, Runtime::PowerShell), Some("pwsh"));
    }

    #[cfg(not(windows))]
    #[test]
    fn test_python3_satisfies_python() {
        let probe = FakeProbe::with(&["python3"]);
        assert_eq!(detect(&probe, Runtime::Python), Some("python3"));
        assert_eq!(detect(&FakeProbe::default(), Runtime::Python), None);
    }

    #[test]
    fn test_binary_is_never_probed() {
        assert!(candidates(Runtime::Binary).is_empty());
        assert!(candidates(Runtime::Unknown).is_empty());
        assert!(install_instructions(Runtime::Binary).is_empty());
        assert!(install_instructions(Runtime::Python).contains("python.org"));
    }
}
