use std::fs;
use std::io::Cursor;
use std::sync::Arc;
use valheim_backup_core::{Config, ConfigError, Direction, FileSynchronizer, ValidationError};
use valheim_backup_json::JsonConfigStore;

fn sample() -> Config {
    Config::new(
        "TestWorld",
        "C:\\Users\\TestUser\\AppData\\LocalLow\\IronGate\\Valheim\\worlds_local",
        "C:\\Users\\TestUser\\ValheimRepo",
    )
}

fn store_in(dir: &tempfile::TempDir) -> JsonConfigStore {
    JsonConfigStore::new(dir.path().join("config.json"))
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    store.save(&sample()).unwrap();
    assert_eq!(store.load().unwrap(), sample());
}

#[test]
fn non_ascii_round_trips_unescaped() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    let cfg = Config::new("世界", "/saves", "D:/Backups/ヴァルハイム");
    store.save(&cfg).unwrap();

    let raw = fs::read_to_string(store.path()).unwrap();
    assert!(raw.contains("\"世界\""));
    assert!(!raw.contains("\\u"));
    assert_eq!(store.load().unwrap(), cfg);
}

#[test]
fn saved_file_uses_two_space_indent() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    store.save(&Config::new("W", "/a", "/b")).unwrap();

    let raw = fs::read_to_string(store.path()).unwrap();
    assert_eq!(
        raw,
        "{\n  \"world_file_name\": \"W\",\n  \"local_path\": \"/a\",\n  \"repo_path\": \"/b\"\n}"
    );
}

#[test]
fn save_overwrites_and_creates_parents() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonConfigStore::new(dir.path().join("nested/deeper/config.json"));
    store.save(&sample()).unwrap();
    store.save(&Config::new("NewWorld", "D:\\Games", "D:\\Backups")).unwrap();
    assert_eq!(store.load().unwrap().world_file_name, "NewWorld");
}

#[test]
fn missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let err = store_in(&dir).load().unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn directory_path_is_invalid() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("config.json")).unwrap();
    let err = store_in(&dir).load().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPath { .. }));
}

#[test]
fn empty_and_invalid_content_are_parse_errors() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    for body in ["", "{invalid json}", "[\"not\", \"an object\"]"] {
        fs::write(store.path(), body).unwrap();
        assert!(matches!(store.load(), Err(ConfigError::Parse(_))), "case {body:?}");
    }
}

#[test]
fn invalid_field_sets_are_validation_errors() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    let cases = [
        (
            r#"{"local_path": "/a", "repo_path": "/b"}"#,
            ValidationError::MissingFields(vec!["world_file_name".into()]),
        ),
        (
            r#"{"world_file_name": "W", "local_path": "/a", "repo_path": "/b", "unexpected_field": "x"}"#,
            ValidationError::UnexpectedFields(vec!["unexpected_field".into()]),
        ),
        (
            r#"{"world_file_name": "", "local_path": "/a", "repo_path": "/b"}"#,
            ValidationError::EmptyFields(vec!["world_file_name".into()]),
        ),
        (
            r#"{"world_file_name": "W", "local_path": "/a", "repo_path": null}"#,
            ValidationError::EmptyFields(vec!["repo_path".into()]),
        ),
    ];
    for (body, want) in cases {
        fs::write(store.path(), body).unwrap();
        match store.load() {
            Err(ConfigError::Validation(v)) => assert_eq!(v, want),
            other => panic!("{body}: unexpected {other:?}"),
        }
    }
}

#[test]
fn external_edits_are_seen_on_next_load() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    store.save(&sample()).unwrap();
    fs::write(
        store.path(),
        r#"{"world_file_name": "Edited", "local_path": "/a", "repo_path": "/b"}"#,
    )
    .unwrap();
    assert_eq!(store.load().unwrap().world_file_name, "Edited");
}

#[test]
fn generate_prompts_and_saves() {
    let dir = tempfile::tempdir().unwrap();
    let saves = dir.path().join("worlds_local");
    let store = store_in(&dir).with_save_dir(&saves);

    let mut input = Cursor::new("\n  Midgard \n/srv/valheim-repo\n");
    let mut out = Vec::new();
    let cfg = store.generate_with(&mut input, &mut out).unwrap();

    assert_eq!(cfg, Config::new("Midgard", &saves, "/srv/valheim-repo"));
    assert_eq!(store.load().unwrap(), cfg);
    let shown = String::from_utf8(out).unwrap();
    assert!(shown.contains("A value is required."));
    assert!(shown.contains("Path to Valheim remote repository"));
}

#[test]
fn generate_aborts_on_closed_input() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir).with_save_dir(dir.path());
    let err = store
        .generate_with(&mut Cursor::new("OnlyWorld\n"), &mut Vec::new())
        .unwrap_err();
    assert!(matches!(err, ConfigError::Io { ref source, .. } if source.kind() == std::io::ErrorKind::UnexpectedEof));
    assert!(!store.path().exists());
}

#[test]
fn synchronizer_reads_through_the_json_store() {
    let dir = tempfile::tempdir().unwrap();
    let local = dir.path().join("local");
    let repo = dir.path().join("repo");
    fs::create_dir_all(&local).unwrap();
    fs::create_dir_all(&repo).unwrap();
    fs::write(local.join("W.db"), b"db").unwrap();
    fs::write(local.join("W.fwl"), b"fwl").unwrap();

    let store = store_in(&dir);
    store.save(&Config::new("W", &local, &repo)).unwrap();
    let sync = FileSynchronizer::new(Arc::new(store));

    let report = sync.sync(Direction::Upload).unwrap();
    assert!(report.is_complete());
    assert_eq!(fs::read(repo.join("W.db")).unwrap(), b"db");

    fs::write(repo.join("W.fwl"), b"newer").unwrap();
    sync.sync(Direction::Download).unwrap();
    assert_eq!(fs::read(local.join("W.fwl")).unwrap(), b"newer");
}

#[test]
fn synchronizer_swallows_bad_config() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    fs::write(store.path(), "{oops").unwrap();
    let sync = FileSynchronizer::new(Arc::new(store));
    assert!(sync.sync(Direction::Upload).is_none());
}

#[cfg(unix)]
#[test]
fn unreadable_file_is_a_permission_error() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    store.save(&sample()).unwrap();
    fs::set_permissions(store.path(), fs::Permissions::from_mode(0o000)).unwrap();
    // root ignores mode bits
    if fs::File::open(store.path()).is_ok() {
        return;
    }

    let err = store.load().unwrap_err();
    fs::set_permissions(store.path(), fs::Permissions::from_mode(0o600)).unwrap();
    assert!(matches!(err, ConfigError::Permission { .. }), "{err:?}");
}

#[cfg(unix)]
#[test]
fn read_only_directory_is_a_permission_error_on_save() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let locked = dir.path().join("locked");
    fs::create_dir(&locked).unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o500)).unwrap();
    if fs::write(locked.join("write-check"), b"").is_ok() {
        return;
    }

    let err = JsonConfigStore::new(locked.join("config.json"))
        .save(&sample())
        .unwrap_err();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o700)).unwrap();
    assert!(matches!(err, ConfigError::Permission { .. }), "{err:?}");
}
