use anyhow::{Context, Result};
use std::path::PathBuf;

pub(crate) const STATEMENT_ENV: &str = "OFXDASH_STATEMENT";
const FILE_FLAG: &str = "--file";

/// Where the statement lives. Resolved once at startup and passed down.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Config {
    pub(crate) statement_path: PathBuf,
}

impl Config {
    /// Resolve from the command line and environment. Returns the config and
    /// the arguments with `--file <path>` removed.
    pub(crate) fn from_args(args: &[String]) -> Result<(Self, Vec<String>)> {
        let (file_flag, rest) = take_flag(args, FILE_FLAG)?;
        let env = std::env::var(STATEMENT_ENV).ok();
        let statement_path =
            resolve_path(file_flag.as_deref(), env.as_deref(), default_statement_path)?;
        Ok((Self { statement_path }, rest))
    }
}

/// `--file` wins over the environment, which wins over the data directory.
fn resolve_path(
    flag: Option<&str>,
    env: Option<&str>,
    default: impl FnOnce() -> Result<PathBuf>,
) -> Result<PathBuf> {
    match flag.or(env).map(str::trim).filter(|p| !p.is_empty()) {
        Some(p) => Ok(PathBuf::from(shellexpand(p))),
        None => default(),
    }
}

fn take_flag(args: &[String], flag: &str) -> Result<(Option<String>, Vec<String>)> {
    let Some(pos) = args.iter().position(|a| a == flag) else {
        return Ok((None, args.to_vec()));
    };
    let value = args
        .get(pos + 1)
        .filter(|v| !v.starts_with("--"))
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("Usage: {flag} <statement.ofx>"))?;
    let rest = args
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != pos && *i != pos + 1)
        .map(|(_, a)| a.clone())
        .collect();
    Ok((Some(value), rest))
}

fn default_statement_path() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "ofxdash", "ofxdash")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
    Ok(data_dir.join("statement.ofx"))
}

pub(crate) fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/{rest}")
    } else {
        path.to_string()
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
