use anyhow::{Context, Result};
use log::LevelFilter;
use std::path::PathBuf;
use std::str::FromStr;

/// Where transactions live for this run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum StoreMode {
    Sqlite(PathBuf),
    /// In-memory example data; nothing is saved.
    Demo,
}

#[derive(Debug, Clone)]
pub(crate) struct Config {
    pub(crate) store: StoreMode,
    pub(crate) user: Option<String>,
    pub(crate) require_login: bool,
    pub(crate) log_level: LevelFilter,
    pub(crate) log_path: Option<PathBuf>,
    /// Arguments left after the global flags, e.g. `["summary"]`.
    pub(crate) command: Vec<String>,
}

impl Config {
    /// Resolve from command-line arguments (without the program name), then
    /// the environment, then defaults.
    pub(crate) fn load(args: &[String]) -> Result<Self> {
        let data_dir = data_dir()?;
        Self::resolve(args, |key| std::env::var(key).ok(), data_dir)
    }

    pub(crate) fn resolve(
        args: &[String],
        env: impl Fn(&str) -> Option<String>,
        data_dir: PathBuf,
    ) -> Result<Self> {
        let mut demo = false;
        let mut user = None;
        let mut db_path = None;
        let mut require_login = None;
        let mut command = Vec::new();

        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--demo" => demo = true,
                "--require-login" => require_login = Some(true),
                "--user" | "-u" => {
                    let value = iter
                        .next()
                        .ok_or_else(|| anyhow::anyhow!("--user needs a value"))?;
                    user = Some(value.clone());
                }
                "--db" => {
                    let value = iter
                        .next()
                        .ok_or_else(|| anyhow::anyhow!("--db needs a path"))?;
                    db_path = Some(PathBuf::from(crate::run::shellexpand(value)));
                }
                _ => command.push(arg.clone()),
            }
        }

        let user = user.or_else(|| env("MONEYPAZ_USER")).filter(|u| !u.trim().is_empty());
        let require_login = match require_login {
            Some(v) => v,
            None => env("MONEYPAZ_REQUIRE_LOGIN")
                .map(|v| parse_flag(&v))
                .transpose()?
                .unwrap_or(false),
        };

        let store = if demo {
            StoreMode::Demo
        } else {
            let path = db_path
                .or_else(|| env("MONEYPAZ_DB").map(|p| PathBuf::from(crate::run::shellexpand(&p))))
                .unwrap_or_else(|| data_dir.join("moneypaz.db"));
            StoreMode::Sqlite(path)
        };

        let log_level = match env("MONEYPAZ_LOG") {
            Some(level) => LevelFilter::from_str(level.trim())
                .with_context(|| format!("Invalid MONEYPAZ_LOG level: {level}"))?,
            None => LevelFilter::Info,
        };
        let log_path = (log_level != LevelFilter::Off).then(|| data_dir.join("moneypaz.log"));

        Ok(Self {
            store,
            user,
            require_login,
            log_level,
            log_path,
            command,
        })
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => anyhow::bail!("Expected a boolean, got '{other}'"),
    }
}

fn data_dir() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "moneypaz", "Moneypaz")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
    Ok(data_dir.to_path_buf())
}
