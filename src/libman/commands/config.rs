use crate::commands::{CmdMessage, CmdResult, LibmanPaths};
use crate::config::LibmanConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &LibmanPaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = &paths.config_dir;
    match action {
        ConfigAction::ShowAll => {
            let config = LibmanConfig::load(dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = LibmanConfig::load(dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = LibmanConfig::load(dir)?;
            if let Err(e) = config.set(&key, &value) {
                let mut res = CmdResult::default();
                res.add_message(CmdMessage::error(e.to_string()));
                return Ok(res);
            }
            config.save(dir)?;
            let display_val = config.get(&key).unwrap_or(value);
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn paths(dir: &TempDir) -> LibmanPaths {
        LibmanPaths {
            config_dir: dir.path().to_path_buf(),
            data_file: dir.path().join("library.json"),
        }
    }

    #[test]
    fn show_all_returns_defaults() {
        let dir = TempDir::new().unwrap();
        let result = run(&paths(&dir), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(LibmanConfig::default()));
    }

    #[test]
    fn set_persists_value() {
        let dir = TempDir::new().unwrap();
        let p = paths(&dir);

        let result = run(
            &p,
            ConfigAction::Set("data-file".into(), "books.json".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].content, "data-file set to books.json");

        let loaded = LibmanConfig::load(&p.config_dir).unwrap();
        assert_eq!(loaded.data_file, PathBuf::from("books.json"));

        let shown = run(&p, ConfigAction::ShowKey("data-file".into())).unwrap();
        assert_eq!(shown.messages[0].content, "books.json");
    }

    #[test]
    fn unknown_key_reports_error_message() {
        let dir = TempDir::new().unwrap();
        let result = run(&paths(&dir), ConfigAction::ShowKey("nope".into())).unwrap();
        assert!(matches!(result.messages[0].level, MessageLevel::Error));

        let result = run(
            &paths(&dir),
            ConfigAction::Set("nope".into(), "x".into()),
        )
        .unwrap();
        assert!(matches!(result.messages[0].level, MessageLevel::Error));
        assert!(result.config.is_none());
    }
}
