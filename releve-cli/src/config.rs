use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use releve_ingest::StatementHeaders;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub statement: StatementSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatementSection {
    /// Column names of the consumed fields, as the bank writes them in the
    /// header row. Defaults match the French-locale export.
    #[serde(default)]
    pub headers: StatementHeaders,
}

pub fn releve_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".releve"))
}

pub fn ensure_releve_home() -> Result<PathBuf> {
    let dir = releve_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

pub fn config_path() -> Result<PathBuf> {
    Ok(releve_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    Ok(toml::from_str(&s).context("parse config.toml")?)
}

pub fn save_config(cfg: &Config) -> Result<()> {
    ensure_releve_home()?;
    let p = config_path()?;
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    let cfg = Config::default();
    save_config(&cfg)?;
    println!("Wrote {}", p.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_french_headers() {
        let cfg = Config::default();
        assert_eq!(cfg.statement.headers.date, "Date d'exécution");
        assert_eq!(cfg.statement.headers.amount, "Montant");
    }

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let cfg: Config = toml::from_str("").unwrap();
        assert_eq!(cfg.statement.headers, StatementHeaders::default());

        let cfg: Config = toml::from_str(
            "[statement.headers]\ndate = \"Boekingsdatum\"\namount = \"Bedrag\"\n",
        )
        .unwrap();
        assert_eq!(cfg.statement.headers.date, "Boekingsdatum");
        assert_eq!(cfg.statement.headers.amount, "Bedrag");
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let cfg = Config::default();
        let text = toml::to_string_pretty(&cfg).unwrap();
        let back: Config = toml::from_str(&text).unwrap();
        assert_eq!(back.statement.headers, cfg.statement.headers);
    }
}
