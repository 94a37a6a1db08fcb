//! Reading photos from disk into data URLs.

use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use futures::future::try_join_all;
use tracing::{debug, info};

use crate::error::{Result, StylistError};

fn mime_for(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

/// `data:<mime>;base64,<payload>` for one file
pub async fn file_to_data_url(path: &Path) -> Result<String> {
    let bytes = tokio::fs::read(path).await.map_err(|source| StylistError::ReadFile {
        path: path.display().to_string(),
        source,
    })?;
    Ok(format!("data:{};base64,{}", mime_for(path), STANDARD.encode(bytes)))
}

/// Read up to `max_files` of `paths` concurrently, keeping input order
pub async fn select_files(paths: &[PathBuf], max_files: usize) -> Result<Vec<String>> {
    let selected = &paths[..paths.len().min(max_files)];
    if selected.is_empty() {
        return Err(StylistError::NoFilesSelected);
    }
    if selected.len() < paths.len() {
        debug!(kept = selected.len(), dropped = paths.len() - selected.len(), "truncated selection");
    }

    let urls = try_join_all(selected.iter().map(|p| file_to_data_url(p))).await?;
    info!(count = urls.len(), "read selected photos");
    Ok(urls)
}

/// Image files directly inside `dir`, in name order, whose MIME type is allowed
pub async fn list_folder_images(dir: &Path, max_images: usize, allowed_types: &[String]) -> Result<Vec<PathBuf>> {
    let mut entries = tokio::fs::read_dir(dir).await?;
    let mut files = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        if entry.file_type().await?.is_file() {
            files.push(entry.path());
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(files
        .into_iter()
        .filter(|path| {
            let mime = mime_for(path);
            allowed_types.iter().any(|allowed| allowed.eq_ignore_ascii_case(&mime))
        })
        .take(max_images)
        .collect())
}

/// Read up to `max_images` allowed images from `dir`
pub async fn scan_folder(dir: &Path, max_images: usize, allowed_types: &[String]) -> Result<Vec<String>> {
    let paths = list_folder_images(dir, max_images, allowed_types).await?;
    if paths.is_empty() {
        return Err(StylistError::NoImagesFound);
    }

    let urls = try_join_all(paths.iter().map(|p| file_to_data_url(p))).await?;
    info!(count = urls.len(), dir = %dir.display(), "read photos from folder");
    Ok(urls)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use vic_config::PhotosConfig;

    fn allowed() -> Vec<String> {
        PhotosConfig::default().allowed_types
    }

    async fn write(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
        let path = dir.path().join(name);
        tokio::fs::write(&path, bytes).await.unwrap();
        path
    }

    #[tokio::test]
    async fn test_select_files_keeps_order_and_truncates() {
        let dir = TempDir::new().unwrap();
        let a = write(&dir, "a.png", b"first").await;
        let b = write(&dir, "b.jpg", b"second").await;
        let c = write(&dir, "c.png", b"third").await;

        let urls = select_files(&[b.clone(), a.clone(), c], 2).await.unwrap();
        assert_eq!(urls.len(), 2);
        assert_eq!(urls[0], format!("data:image/jpeg;base64,{}", STANDARD.encode(b"second")));
        assert_eq!(urls[1], format!("data:image/png;base64,{}", STANDARD.encode(b"first")));
    }

    #[tokio::test]
    async fn test_select_files_rejects_empty_selection() {
        let err = select_files(&[], 20).await.unwrap_err();
        assert_eq!(err.to_string(), "No files selected");
    }

    #[tokio::test]
    async fn test_select_files_reports_missing_file() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("gone.png");
        let err = select_files(&[missing], 20).await.unwrap_err();
        assert!(matches!(err, StylistError::ReadFile { .. }));
    }

    #[tokio::test]
    async fn test_scan_folder_filters_sorts_and_caps() {
        let dir = TempDir::new().unwrap();
        write(&dir, "c.webp", b"c").await;
        write(&dir, "a.jpg", b"a").await;
        write(&dir, "notes.txt", b"not an image").await;
        write(&dir, "b.png", b"b").await;
        tokio::fs::create_dir(dir.path().join("nested.png")).await.unwrap();

        let paths = list_folder_images(dir.path(), 50, &allowed()).await.unwrap();
        let names: Vec<_> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.jpg", "b.png", "c.webp"]);

        let urls = scan_folder(dir.path(), 2, &allowed()).await.unwrap();
        assert_eq!(urls.len(), 2);
        assert!(urls[0].starts_with("data:image/jpeg;base64,"));
    }

    #[tokio::test]
    async fn test_scan_folder_without_images() {
        let dir = TempDir::new().unwrap();
        write(&dir, "readme.md", b"# hi").await;

        let err = scan_folder(dir.path(), 50, &allowed()).await.unwrap_err();
        assert_eq!(err.to_string(), "No images found in the selected folder.");
    }
}
