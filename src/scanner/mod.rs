//! 画像ファイルの選択
//!
//! 入力境界で PNG/JPEG 以外を弾く。

use crate::error::{ImageVerseError, Result};
use image_verse_common::MimeType;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// ユーザーが選択した画像ファイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub path: PathBuf,
    pub file_name: String,
    pub mime_type: MimeType,
}

impl SelectedFile {
    /// パスから作成（拡張子でMIMEタイプを判定）
    pub fn from_path(path: &Path) -> Result<Self> {
        let mime_type = path
            .extension()
            .and_then(|ext| MimeType::from_extension(&ext.to_string_lossy()))
            .ok_or_else(|| ImageVerseError::UnsupportedFile(path.display().to_string()))?;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        Ok(Self {
            path: path.to_path_buf(),
            file_name,
            mime_type,
        })
    }
}

/// コマンドライン引数のパスを選択順のまま検証
pub fn select_files(paths: &[PathBuf]) -> Result<Vec<SelectedFile>> {
    paths
        .iter()
        .map(|path| {
            if !path.is_file() {
                return Err(ImageVerseError::FileNotFound(path.display().to_string()));
            }
            SelectedFile::from_path(path)
        })
        .collect()
}

/// フォルダ直下の PNG/JPEG をファイル名順に列挙
pub fn scan_folder(folder: &Path) -> Result<Vec<SelectedFile>> {
    if !folder.is_dir() {
        return Err(ImageVerseError::FolderNotFound(folder.display().to_string()));
    }

    let mut images: Vec<SelectedFile> = WalkDir::new(folder)
        .max_depth(1)  // 直下のみ（再帰しない）
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .filter_map(|e| SelectedFile::from_path(e.path()).ok())
        .collect();

    images.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    Ok(images)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_from_path_mime() {
        let png = SelectedFile::from_path(Path::new("a.png")).unwrap();
        assert_eq!(png.mime_type, MimeType::Png);
        assert_eq!(png.file_name, "a.png");

        let jpg = SelectedFile::from_path(Path::new("dir/b.JPG")).unwrap();
        assert_eq!(jpg.mime_type, MimeType::Jpeg);
        assert_eq!(jpg.file_name, "b.JPG");
    }

    #[test]
    fn test_from_path_unsupported() {
        assert!(matches!(
            SelectedFile::from_path(Path::new("anim.gif")),
            Err(ImageVerseError::UnsupportedFile(_))
        ));
        assert!(SelectedFile::from_path(Path::new("no_extension")).is_err());
    }

    #[test]
    fn test_select_files_keeps_order() {
        let dir = tempdir().unwrap();
        let b = dir.path().join("b.jpg");
        let a = dir.path().join("a.png");
        File::create(&b).unwrap().write_all(b"b").unwrap();
        File::create(&a).unwrap().write_all(b"a").unwrap();

        let files = select_files(&[b.clone(), a.clone()]).unwrap();
        assert_eq!(files[0].path, b);
        assert_eq!(files[1].path, a);
    }

    #[test]
    fn test_select_files_missing() {
        let result = select_files(&[PathBuf::from("/nonexistent/x.png")]);
        assert!(matches!(result, Err(ImageVerseError::FileNotFound(_))));
    }

    #[test]
    fn test_scan_folder_not_found() {
        let result = scan_folder(Path::new("/nonexistent/folder"));
        assert!(matches!(result, Err(ImageVerseError::FolderNotFound(_))));
    }

    #[test]
    fn test_scan_folder_filters_and_sorts() {
        let dir = tempdir().unwrap();
        for name in ["c.jpg", "a.png", "b.JPEG", "readme.txt", "anim.gif"] {
            File::create(dir.path().join(name)).unwrap().write_all(b"dummy").unwrap();
        }
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        File::create(dir.path().join("sub").join("d.png")).unwrap();

        let result = scan_folder(dir.path()).unwrap();
        let names: Vec<&str> = result.iter().map(|f| f.file_name.as_str()).collect();
        assert_eq!(names, vec!["a.png", "b.JPEG", "c.jpg"]);
    }
}
