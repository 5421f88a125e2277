use std::collections::HashMap;
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};

use super::*;

#[derive(Default)]
struct MockFileSystem {
    files: HashMap<PathBuf, String>,
    unreadable: Option<PathBuf>,
}

impl MockFileSystem {
    fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(PathBuf::from(path), content.to_string());
        self
    }

    fn with_unreadable(mut self, path: &str) -> Self {
        self.unreadable = Some(PathBuf::from(path));
        self
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        if self.unreadable.as_deref() == Some(path) {
            return Err(Error::new(ErrorKind::PermissionDenied, "permission denied"));
        }
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| Error::new(ErrorKind::NotFound, "file not found"))
    }
}

#[test]
fn missing_file_yields_defaults() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::default());
    let config = loader.load(Path::new("config.json")).unwrap();
    assert_eq!(config, PartialConfig::default());
}

#[test]
fn empty_path_yields_defaults() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::default());
    assert_eq!(loader.load(Path::new("")).unwrap(), PartialConfig::default());
}

#[test]
fn loads_json_config() {
    let fs = MockFileSystem::default().with_file(
        "config.json",
        r#"{"username": "octo", "top": 3, "exclude": ["TeX"]}"#,
    );
    let config = FileConfigLoader::with_fs(fs)
        .load(Path::new("config.json"))
        .unwrap();

    assert_eq!(config.username.as_deref(), Some("octo"));
    assert_eq!(config.top, Some(3));
    assert_eq!(config.exclude, Some(vec!["TeX".to_string()]));
}

#[test]
fn loads_toml_config_by_extension() {
    let fs = MockFileSystem::default().with_file(
        "lang-rank.toml",
        "username = \"acme\"\norg = true\nshow_other = false\n",
    );
    let config = FileConfigLoader::with_fs(fs)
        .load(Path::new("lang-rank.toml"))
        .unwrap();

    assert_eq!(config.username.as_deref(), Some("acme"));
    assert_eq!(config.org, Some(true));
    assert_eq!(config.show_other, Some(false));
}

#[test]
fn malformed_json_is_parse_error() {
    let fs = MockFileSystem::default().with_file("config.json", "{ \"username\": ");
    let err = FileConfigLoader::with_fs(fs)
        .load(Path::new("config.json"))
        .unwrap_err();

    assert!(matches!(err, LangRankError::ConfigParse { ref path, .. } if path == Path::new("config.json")));
    assert!(err.is_config_error());
}

#[test]
fn wrong_field_type_is_parse_error() {
    let fs = MockFileSystem::default().with_file("config.json", r#"{"top": "three"}"#);
    let err = FileConfigLoader::with_fs(fs)
        .load(Path::new("config.json"))
        .unwrap_err();

    assert!(matches!(err, LangRankError::ConfigParse { .. }));
}

#[test]
fn malformed_toml_is_parse_error() {
    let fs = MockFileSystem::default().with_file("c.toml", "username = ");
    let err = FileConfigLoader::with_fs(fs)
        .load(Path::new("c.toml"))
        .unwrap_err();

    assert!(matches!(err, LangRankError::ConfigParse { .. }));
}

#[test]
fn unreadable_file_is_read_error() {
    let fs = MockFileSystem::default().with_unreadable("config.json");
    let err = FileConfigLoader::with_fs(fs)
        .load(Path::new("config.json"))
        .unwrap_err();

    assert!(matches!(err, LangRankError::ConfigRead { .. }));
    assert!(err.is_config_error());
}

#[test]
fn real_filesystem_reads_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"username": "octo"}"#).unwrap();

    let config = FileConfigLoader::new().load(&path).unwrap();

    assert_eq!(config.username.as_deref(), Some("octo"));
}
