use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use futures::future::try_join_all;

use crate::error::StoreError;
use crate::models::Attachment;

/// Read one file and convert it to an inline base64 data URL, named after
/// the file.
pub async fn encode_attachment(path: impl AsRef<Path>) -> Result<Attachment, StoreError> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| StoreError::AttachmentRead {
            path: path.to_path_buf(),
            source,
        })?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(Attachment {
        name,
        url: format!(
            "data:application/octet-stream;base64,{}",
            STANDARD.encode(&bytes)
        ),
    })
}

/// Convert a batch of files, awaiting all reads collectively.
///
/// One failed read fails the whole batch and nothing is returned; partial
/// results are never merged into edit state.
pub async fn encode_attachments(paths: &[PathBuf]) -> Result<Vec<Attachment>, StoreError> {
    try_join_all(paths.iter().map(encode_attachment)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_encode_attachment_produces_data_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan.png");
        tokio::fs::write(&path, b"fake image bytes").await.unwrap();

        let attachment = encode_attachment(&path).await.unwrap();
        assert_eq!(attachment.name, "scan.png");

        let encoded = attachment
            .url
            .strip_prefix("data:application/octet-stream;base64,")
            .expect("data URL prefix");
        assert_eq!(STANDARD.decode(encoded).unwrap(), b"fake image bytes");
    }

    #[tokio::test]
    async fn test_missing_file_is_an_attachment_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = encode_attachment(dir.path().join("absent.pdf"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::AttachmentRead { .. }));
    }

    #[tokio::test]
    async fn test_batch_is_all_or_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("notes.txt");
        tokio::fs::write(&good, b"post-op notes").await.unwrap();

        let paths = vec![good, dir.path().join("absent.pdf")];
        assert!(encode_attachments(&paths).await.is_err());

        let only_good = vec![paths[0].clone()];
        let attachments = encode_attachments(&only_good).await.unwrap();
        assert_eq!(attachments.len(), 1);
        assert_eq!(attachments[0].name, "notes.txt");
    }
}
