use kiln::bootstrap::ensure_template_root;
use kiln::error::Error;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_creates_missing_directory_with_parents() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("config").join("kiln").join("templates");

    ensure_template_root(&root).unwrap();
    assert!(root.is_dir());

    // Second call is a no-op.
    ensure_template_root(&root).unwrap();
    assert!(root.is_dir());
}

#[test]
fn test_existing_directory_is_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let marker = temp_dir.path().join("marker.txt");
    fs::write(&marker, "keep").unwrap();

    ensure_template_root(temp_dir.path()).unwrap();

    let entries: Vec<_> = fs::read_dir(temp_dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
    assert_eq!(fs::read_to_string(&marker).unwrap(), "keep");
}

#[test]
fn test_file_in_place_of_directory() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("templates");
    fs::write(&file, "").unwrap();

    let err = ensure_template_root(&file).unwrap_err();
    assert!(matches!(err, Error::TemplateDirNotADirectory { .. }), "{err:?}");
}

#[test]
fn test_uncreatable_directory_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("blocker");
    fs::write(&file, "").unwrap();

    let err = ensure_template_root(file.join("templates")).unwrap_err();
    assert!(
        matches!(err, Error::TemplateDirCreateError { .. } | Error::TemplateDirAccessError { .. }),
        "{err:?}"
    );
    assert!(err.to_string().contains("blocker"), "{err}");
}

#[test]
fn test_empty_path_is_fatal() {
    assert!(matches!(
        ensure_template_root(""),
        Err(Error::TemplateDirCreateError { .. })
    ));
}

#[cfg(unix)]
#[test]
fn test_unreadable_parent_is_fatal() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    let locked = temp_dir.path().join("locked");
    fs::create_dir(&locked).unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Permission bits do not apply to privileged users.
    let privileged = fs::read_dir(&locked).is_ok();
    let result = ensure_template_root(locked.join("templates"));
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
    if privileged {
        return;
    }

    let err = result.unwrap_err();
    assert!(matches!(err, Error::TemplateDirAccessError { .. }), "{err:?}");
}
