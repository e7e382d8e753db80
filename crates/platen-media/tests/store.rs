use std::path::PathBuf;

use uuid::Uuid;

use platen_media::error::MediaError;
use platen_media::store::MediaStore;

fn temp_root() -> PathBuf {
    let root = std::env::temp_dir().join(format!("platen-media-{}", Uuid::new_v4()));
    std::fs::create_dir_all(&root).unwrap();
    root
}

#[test]
fn generated_path_joins_root_subdir_and_filename() {
    let store = MediaStore::new("/media");
    assert_eq!(
        store.generated_pdf_path("r.pdf"),
        PathBuf::from("/media/generated_pdf/r.pdf")
    );
}

#[test]
fn write_generated_creates_the_subdirectory() {
    let root = temp_root();
    let store = MediaStore::new(&root);

    let path = store.write_generated("out.pdf", b"%PDF-1.7 fake").unwrap();

    assert_eq!(path, root.join("generated_pdf").join("out.pdf"));
    assert_eq!(std::fs::read(&path).unwrap(), b"%PDF-1.7 fake");

    std::fs::remove_dir_all(&root).unwrap();
}

#[test]
fn bytes_are_written_verbatim() {
    // Non-UTF8 content must survive untouched; a text-mode write would not.
    let root = temp_root();
    let store = MediaStore::new(&root);
    let binary: Vec<u8> = (0u8..=255).collect();

    let path = store.write_generated("bin.pdf", &binary).unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), binary);

    std::fs::remove_dir_all(&root).unwrap();
}

#[test]
fn write_to_does_not_create_parents() {
    let root = temp_root();
    let store = MediaStore::new(&root);
    let target = root.join("missing-dir").join("out.pdf");

    let err = store.write_to(&target, b"x").unwrap_err();
    assert!(matches!(err, MediaError::Write { .. }));

    std::fs::remove_dir_all(&root).unwrap();
}

#[test]
fn write_to_honors_explicit_paths() {
    let root = temp_root();
    let store = MediaStore::new("/elsewhere/ignored");
    let target = root.join("override.pdf");

    store.write_to(&target, b"override").unwrap();
    assert_eq!(std::fs::read(&target).unwrap(), b"override");

    std::fs::remove_dir_all(&root).unwrap();
}
