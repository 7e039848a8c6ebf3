use crate::domain::AppError;
use crate::ports::{CommitIdentity, Git};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use git2::{ErrorCode, Repository, Status};
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Debug, Clone)]
pub struct GitCommandAdapter {
    root: PathBuf,
}

impl GitCommandAdapter {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn repo(&self) -> Result<Repository, AppError> {
        Repository::open(&self.root).map_err(|e| AppError::GitError {
            command: "git2::Repository::open".to_string(),
            details: e.to_string(),
        })
    }

    fn run(&self, args: &[&str]) -> Result<String, AppError> {
        self.run_with_config(&[], args)
    }

    /// Run git with `-c key=value` overrides. Overrides are kept out of error
    /// messages since they may carry credentials.
    fn run_with_config(&self, config: &[String], args: &[&str]) -> Result<String, AppError> {
        let mut command = Command::new("git");
        for entry in config {
            command.arg("-c").arg(entry);
        }
        command.args(args);
        command.current_dir(&self.root);

        let output = command.output().map_err(|e| AppError::GitError {
            command: format!("git {}", args.join(" ")),
            details: e.to_string(),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::GitError {
                command: format!("git {}", args.join(" ")),
                details: if stderr.is_empty() { "Unknown error".to_string() } else { stderr },
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn relative<'p>(&self, path: &'p Path) -> &'p Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }

    fn path_arg<'p>(&self, path: &'p Path) -> Result<&'p str, AppError> {
        self.relative(path).to_str().ok_or_else(|| {
            AppError::Validation("File path contains invalid unicode".to_string())
        })
    }
}

fn identity_config(identity: &CommitIdentity) -> Vec<String> {
    vec![format!("user.name={}", identity.name), format!("user.email={}", identity.email)]
}

fn auth_config(token: Option<&str>) -> Vec<String> {
    match token.map(str::trim).filter(|t| !t.is_empty()) {
        Some(token) => {
            let basic = STANDARD.encode(format!("x-access-token:{}", token));
            vec![format!("http.extraheader=AUTHORIZATION: basic {}", basic)]
        }
        None => Vec::new(),
    }
}

impl Git for GitCommandAdapter {
    fn get_head_sha(&self) -> Result<String, AppError> {
        let repo = self.repo()?;
        let head = repo.head().map_err(|e| AppError::GitError {
            command: "git2::Repository::head".to_string(),
            details: e.to_string(),
        })?;
        let target = head.target().ok_or_else(|| AppError::GitError {
            command: "git2::Reference::target".to_string(),
            details: "HEAD is not a direct reference".to_string(),
        })?;
        Ok(target.to_string())
    }

    fn get_current_branch(&self) -> Result<String, AppError> {
        let repo = self.repo()?;

        match repo.head() {
            Ok(head) => {
                let shorthand = head.shorthand().ok_or_else(|| AppError::GitError {
                    command: "git2::Reference::shorthand".to_string(),
                    details: "HEAD has no shorthand".to_string(),
                })?;
                Ok(shorthand.to_string())
            }
            Err(e) if e.code() == ErrorCode::UnbornBranch => {
                let head_ref = repo.find_reference("HEAD").map_err(|e| AppError::GitError {
                    command: "git2::Repository::find_reference(HEAD)".to_string(),
                    details: e.to_string(),
                })?;

                if let Some(target) = head_ref.symbolic_target() {
                    Ok(target.strip_prefix("refs/heads/").unwrap_or(target).to_string())
                } else {
                    Err(AppError::GitError {
                        command: "get_current_branch".to_string(),
                        details: "HEAD is detached and unborn".to_string(),
                    })
                }
            }
            Err(e) => Err(AppError::GitError {
                command: "git2::Repository::head".to_string(),
                details: e.to_string(),
            }),
        }
    }

    fn has_uncommitted_changes(&self, path: &Path) -> Result<bool, AppError> {
        let repo = self.repo()?;
        match repo.status_file(self.relative(path)) {
            Ok(status) => Ok(!status.is_empty() && !status.contains(Status::IGNORED)),
            Err(e) if e.code() == ErrorCode::NotFound => Ok(false),
            Err(e) => Err(AppError::GitError {
                command: "git2::Repository::status_file".to_string(),
                details: e.to_string(),
            }),
        }
    }

    fn commit_files(
        &self,
        message: &str,
        files: &[&Path],
        author: &CommitIdentity,
    ) -> Result<String, AppError> {
        for file in files {
            self.run(&["add", "--", self.path_arg(file)?])?;
        }

        let identity = identity_config(author);
        let mut args = vec!["commit", "-m", message, "--"];
        for file in files {
            args.push(self.path_arg(file)?);
        }
        self.run_with_config(&identity, &args)?;

        self.get_head_sha()
    }

    fn push_head(&self, remote: &str, branch: &str, token: Option<&str>) -> Result<(), AppError> {
        let refspec = format!("HEAD:refs/heads/{}", branch);
        self.run_with_config(&auth_config(token), &["push", remote, &refspec])?;
        Ok(())
    }

    fn reset_to_remote(
        &self,
        remote: &str,
        branch: &str,
        token: Option<&str>,
    ) -> Result<(), AppError> {
        let refspec = format!("refs/heads/{}", branch);
        self.run_with_config(&auth_config(token), &["fetch", remote, &refspec])?;
        // --keep refuses to clobber local edits to files that differ from the fetched tip.
        self.run(&["reset", "--keep", "FETCH_HEAD"])?;
        Ok(())
    }

    fn commits_ahead_of(&self, remote: &str, branch: &str) -> Result<Option<usize>, AppError> {
        let repo = self.repo()?;

        let tracking = format!("refs/remotes/{}/{}", remote, branch);
        let upstream = match repo.refname_to_id(&tracking) {
            Ok(oid) => oid,
            Err(e) if e.code() == ErrorCode::NotFound => return Ok(None),
            Err(e) => {
                return Err(AppError::GitError {
                    command: format!("git2::Repository::refname_to_id({})", tracking),
                    details: e.to_string(),
                });
            }
        };
        let head = match repo.head() {
            Ok(head) => match head.target() {
                Some(oid) => oid,
                None => return Ok(None),
            },
            Err(e) if e.code() == ErrorCode::UnbornBranch => return Ok(None),
            Err(e) => {
                return Err(AppError::GitError {
                    command: "git2::Repository::head".to_string(),
                    details: e.to_string(),
                });
            }
        };

        let (ahead, _behind) =
            repo.graph_ahead_behind(head, upstream).map_err(|e| AppError::GitError {
                command: "git2::Repository::graph_ahead_behind".to_string(),
                details: e.to_string(),
            })?;
        Ok(Some(ahead))
    }
}
