//! Image download command.

use futures::TryStreamExt;
use std::path::Path;
use std::sync::Arc;
use tokio::io::AsyncWriteExt;
use tokio::runtime::Runtime;
use tokio_util::sync::CancellationToken;

use crate::error::{Error, Result, ResultExt};
use crate::lookup::transport::BodyStream;
use crate::lookup::{FilmaffinityApi, ImageProvider, LookupError};

/// Download `url` to `output`, streaming the body to disk
pub fn cmd_download(
    rt: &Runtime,
    api: Arc<dyn FilmaffinityApi>,
    cancel: &CancellationToken,
    url: &str,
    output: &Path,
) -> anyhow::Result<()> {
    let provider = ImageProvider::new(api);

    match rt.block_on(download(&provider, cancel, url, output)) {
        Ok(written) => {
            println!("✓ Saved {} ({} bytes)", output.display(), written);
            Ok(())
        }
        Err(e) if e.is_cancelled() => {
            eprintln!("Download cancelled");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

async fn download(
    provider: &ImageProvider,
    cancel: &CancellationToken,
    url: &str,
    output: &Path,
) -> Result<usize> {
    if let Some(dir) = output
        .parent()
        .filter(|d| !d.as_os_str().is_empty() && !d.is_dir())
    {
        return Err(Error::not_found(dir));
    }

    let response = provider
        .image_response(url, cancel)
        .await
        .with_context(format!("Failed to fetch {}", url))?;

    if !response.status.is_success() {
        return Err(Error::Lookup(LookupError::Protocol(format!(
            "HTTP {}",
            response.status
        )))
        .context(format!("Failed to fetch {}", url)));
    }

    save_body(response.body, output, cancel).await
}

/// Stream `body` into `output`; the file is removed again if anything fails
async fn save_body(body: BodyStream, output: &Path, cancel: &CancellationToken) -> Result<usize> {
    let file = tokio::fs::File::create(output)
        .await
        .with_context(format!("Failed to create {}", output.display()))?;

    let result = write_body(body, file, output, cancel).await;
    if result.is_err() {
        if let Err(e) = tokio::fs::remove_file(output).await {
            tracing::warn!("Failed to remove partial file {:?}: {}", output, e);
        }
    }
    result
}

async fn write_body(
    mut body: BodyStream,
    mut file: tokio::fs::File,
    output: &Path,
    cancel: &CancellationToken,
) -> Result<usize> {
    let mut written = 0usize;
    loop {
        let chunk = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(LookupError::Cancelled.into()),
            chunk = body.try_next() => chunk.with_context("Failed to read image body")?,
        };
        let Some(chunk) = chunk else { break };

        file.write_all(&chunk)
            .await
            .with_context(format!("Failed to write {}", output.display()))?;
        written += chunk.len();
    }
    file.flush().await?;

    tracing::debug!("Wrote {} bytes to {:?}", written, output);
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::traits::mocks::MockApi;
    use bytes::Bytes;
    use futures::stream::{self, StreamExt};

    #[tokio::test]
    async fn test_body_is_written_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("cover.jpg");
        let provider = ImageProvider::new(Arc::new(MockApi::default()));

        let written = download(
            &provider,
            &CancellationToken::new(),
            "https://img.example.com/o.jpg",
            &output,
        )
        .await
        .unwrap();

        assert_eq!(written, "https://img.example.com/o.jpg".len());
        assert_eq!(
            std::fs::read(&output).unwrap(),
            b"https://img.example.com/o.jpg"
        );
    }

    #[tokio::test]
    async fn test_stream_error_removes_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("cover.jpg");
        let body = stream::iter(vec![
            Ok(Bytes::from_static(b"partial")),
            Err(LookupError::Transport("connection reset".to_string())),
        ])
        .boxed();

        let err = save_body(body, &output, &CancellationToken::new())
            .await
            .unwrap_err();

        assert!(err.to_string().contains("connection reset"));
        assert!(!output.exists());
    }

    #[tokio::test]
    async fn test_cancelled_download_removes_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("cover.jpg");
        let body = stream::pending().boxed();
        let cancel = CancellationToken::new();
        cancel.cancel();

        let err = save_body(body, &output, &cancel).await.unwrap_err();

        assert!(err.is_cancelled());
        assert!(!output.exists());
    }

    #[tokio::test]
    async fn test_missing_output_dir_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("missing").join("cover.jpg");
        let provider = ImageProvider::new(Arc::new(MockApi::default()));

        let err = download(
            &provider,
            &CancellationToken::new(),
            "https://img.example.com/o.jpg",
            &output,
        )
        .await
        .unwrap_err();

        assert!(matches!(err, Error::NotFound(_)));
    }
}
