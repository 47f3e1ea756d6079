//! Repository cloning.

use crate::{NexError, Result};
use std::path::Path;
use tokio::process::Command;

/// Materialises a package repository into a directory.
#[async_trait::async_trait]
pub trait RepoCloner: Send + Sync {
    /// Shallow-clone `url` into `dest`. `dest` must not exist yet.
    async fn clone_repo(&self, url: &str, dest: &Path) -> Result<()>;
}

/// Clones with the system `git` binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitCloner;

#[async_trait::async_trait]
impl RepoCloner for GitCloner {
    async fn clone_repo(&self, url: &str, dest: &Path) -> Result<()> {
        tracing::debug!("git clone --depth 1 {url} {}", dest.display());
        let status = Command::new("git")
            .arg("clone")
            .arg("--depth")
            .arg("1")
            .arg(url)
            .arg(dest)
            .status()
            .await
            .map_err(|e| NexError::io("Failed to run git", dest, e))?;

        if status.success() {
            Ok(())
        } else {
            Err(NexError::Subprocess {
                program: "git clone".to_string(),
                code: status.code().unwrap_or(1),
            })
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::RepoCloner;
    use crate::{NexError, Result};
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;

    /// Cloner that creates the destination with a placeholder file and
    /// records every request.
    #[derive(Debug, Default)]
    pub struct FakeCloner {
        pub calls: Mutex<Vec<(String, PathBuf)>>,
        pub fail_with: Option<i32>,
    }

    impl FakeCloner {
        pub fn failing(code: i32) -> Self {
            Self {
                calls: Mutex::default(),
                fail_with: Some(code),
            }
        }

        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait::async_trait]
    impl RepoCloner for FakeCloner {
        async fn clone_repo(&self, url: &str, dest: &Path) -> Result<()> {
            self.calls
                .lock()
                .unwrap()
                .push((url.to_string(), dest.to_path_buf()));
            if let Some(code) = self.fail_with {
                return Err(NexError::Subprocess {
                    program: "git clone".to_string(),
                    code,
                });
            }
            std::fs::create_dir_all(dest).unwrap();
            std::fs::write(dest.join("README.md"), b"cloned").unwrap();
            Ok(())
        }
    }
}
