use super::*;
use std::fs;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_sorted_js_files_only() {
    let dir = TempDir::new().unwrap();
    write(&dir, "zebra.js", b"// @name Zebra\nzebra();\n");
    write(&dir, "alpha.js", b"alpha();\n");
    write(&dir, "notes.txt", b"// @name Not a script\n");
    write(&dir, "style.css", b"body {}\n");
    fs::create_dir(dir.path().join("nested.js")).unwrap();

    let library = LibraryLoader::new().load(dir.path()).unwrap();
    let names: Vec<_> = library.bookmarklets().iter().map(|b| b.name()).collect();

    assert_eq!(names, vec!["alpha", "Zebra"]);
    assert_eq!(library.len(), 2);
    assert!(library.skipped().is_empty());
    assert_eq!(library.folder(), dir.path());
}

#[test]
fn test_load_is_not_recursive() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub").join("deep.js"), "deep();").unwrap();

    let library = LibraryLoader::new().load(dir.path()).unwrap();
    assert!(library.is_empty());
}

#[test]
fn test_missing_folder() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing");

    let result = LibraryLoader::new().load(&missing);
    assert!(matches!(result, Err(LoadError::FolderNotFound(path)) if path == missing));
}

#[test]
fn test_bad_file_does_not_stop_others() {
    let dir = TempDir::new().unwrap();
    write(&dir, "broken.js", &[0xFF, 0xFE, 0x00]);
    write(&dir, "good.js", b"good();");

    let library = LibraryLoader::new().load(dir.path()).unwrap();

    assert_eq!(library.len(), 1);
    assert_eq!(library.bookmarklets()[0].file_name(), "good.js");
    assert_eq!(library.skipped().len(), 1);
    assert!(library.skipped()[0].path.ends_with("broken.js"));
    assert!(matches!(library.skipped()[0].error, LoadError::NotUtf8(_)));
}

#[test]
fn test_file_size_limit() {
    let dir = TempDir::new().unwrap();
    write(&dir, "small.js", b"ok();");
    write(&dir, "large.js", b"this is way too large();");

    let library = LibraryLoader::new().max_file_size(10).load(dir.path()).unwrap();

    assert_eq!(library.len(), 1);
    assert!(
        library.skipped()[0]
            .error
            .to_string()
            .contains("File too large")
    );
}

#[test]
fn test_custom_extension() {
    let dir = TempDir::new().unwrap();
    write(&dir, "a.js", b"a();");
    write(&dir, "b.mjs", b"b();");

    let library = LibraryLoader::new().extension("mjs").load(dir.path()).unwrap();
    let files: Vec<_> = library
        .into_bookmarklets()
        .into_iter()
        .map(|b| b.file_name().to_string())
        .collect();

    assert_eq!(files, vec!["b.mjs"]);
}

#[test]
fn test_load_file_keeps_header_in_code() {
    let dir = TempDir::new().unwrap();
    let source = "// @name Confetti\n// @script https://cdn.example/confetti.js\nwindow.confetti();\n";
    let path = write(&dir, "confetti.js", source.as_bytes());

    let bookmarklet = Bookmarklet::from_file(&path).unwrap();

    assert_eq!(bookmarklet.name(), "Confetti");
    assert_eq!(bookmarklet.code(), source);
    assert_eq!(
        bookmarklet.metadata().scripts,
        vec!["https://cdn.example/confetti.js"]
    );
}

#[test]
fn test_load_file_missing() {
    let dir = TempDir::new().unwrap();
    let result = Bookmarklet::from_file(dir.path().join("absent.js"));

    let error = result.unwrap_err();
    assert!(matches!(error, LoadError::ReadFailed { .. }));
    assert!(error.path().ends_with("absent.js"));
}
