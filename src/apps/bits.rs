use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::{Bytes, BytesMut};
use futures_util::stream::{BoxStream, Stream, StreamExt};
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use crate::types::app::JobReference;
use crate::{check_status, decode, Client, Error, Result};

const APPS: &str = "/v2/apps";

#[derive(Deserialize)]
struct JobEnvelope {
    #[serde(default)]
    metadata: JobReference,
}

/// Content downloaded from the blobstore, read incrementally as a
/// [`Stream`] of chunks or at once with [`Bits::bytes`].
pub struct Bits {
    content_type: Option<String>,
    content_length: Option<u64>,
    stream: BoxStream<'static, reqwest::Result<Bytes>>,
}

impl Bits {
    fn new(response: reqwest::Response) -> Self {
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        Self {
            content_type,
            content_length: response.content_length(),
            stream: response.bytes_stream().boxed(),
        }
    }

    /// Content type reported by the blobstore
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Size in bytes, if the blobstore reported one
    #[must_use]
    pub const fn content_length(&self) -> Option<u64> {
        self.content_length
    }

    /// Read the next chunk, `None` at the end of the content
    pub async fn chunk(&mut self) -> Result<Option<Bytes>> {
        Ok(self.stream.next().await.transpose()?)
    }

    /// Read the remaining content
    pub async fn bytes(mut self) -> Result<Bytes> {
        let mut buf = BytesMut::new();
        while let Some(chunk) = self.chunk().await? {
            buf.extend_from_slice(&chunk);
        }
        Ok(buf.freeze())
    }
}

impl Stream for Bits {
    type Item = Result<Bytes>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.stream
            .poll_next_unpin(cx)
            .map(|chunk| chunk.map(|res| res.map_err(Error::from)))
    }
}

impl std::fmt::Debug for Bits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bits")
            .field("content_type", &self.content_type)
            .field("content_length", &self.content_length)
            .finish_non_exhaustive()
    }
}

fn file_part(bits: impl Into<reqwest::Body>, file_name: &'static str) -> Result<Part> {
    Ok(Part::stream(bits)
        .file_name(file_name)
        .mime_str("application/octet-stream")?)
}

impl Client {
    /// Upload the source bundle of an application, usually a zip archive.
    /// The bytes are sent as is.
    pub async fn upload_app_bits(&self, guid: &str, bits: impl Into<reqwest::Body>) -> Result<()> {
        let form = Form::new()
            .text("resources", "[]")
            .part("application", file_part(bits, "application.zip")?);

        self.put_multipart(&format!("{APPS}/{guid}/bits"), form)
            .await?;
        Ok(())
    }

    /// Upload the source bundle from a file
    pub async fn upload_app_bits_from_file<P: AsRef<std::path::Path>>(
        &self,
        guid: &str,
        path: P,
    ) -> Result<()> {
        let data = tokio::fs::read(path).await?;
        self.upload_app_bits(guid, data).await
    }

    /// Upload a compiled droplet, usually a gzipped tarball. Returns the job
    /// processing the upload.
    pub async fn upload_droplet_bits(
        &self,
        guid: &str,
        droplet: impl Into<reqwest::Body>,
    ) -> Result<JobReference> {
        let form = Form::new().part("droplet", file_part(droplet, "droplet.tgz")?);

        let path = format!("{APPS}/{guid}/droplet/upload");
        let response = self.put_multipart(&path, form).await?;
        let job: JobEnvelope = decode(response, &path).await?;

        tracing::debug!("droplet upload job {}", job.metadata.guid);
        Ok(job.metadata)
    }

    /// Upload a compiled droplet from a file
    pub async fn upload_droplet_bits_from_file<P: AsRef<std::path::Path>>(
        &self,
        guid: &str,
        path: P,
    ) -> Result<JobReference> {
        let data = tokio::fs::read(path).await?;
        self.upload_droplet_bits(guid, data).await
    }

    /// Download the source bundle of an application
    pub async fn get_app_bits(&self, guid: &str) -> Result<Bits> {
        self.download(&format!("{APPS}/{guid}/download")).await
    }

    /// Download the current droplet of an application
    pub async fn get_droplet_bits(&self, guid: &str) -> Result<Bits> {
        self.download(&format!("{APPS}/{guid}/droplet/download"))
            .await
    }

    async fn put_multipart(&self, path: &str, form: Form) -> Result<reqwest::Response> {
        let url = self.url(path)?;

        tracing::debug!("PUT {} (multipart)", url);

        let result = self
            .request(reqwest::Method::PUT, url.clone())
            .multipart(form)
            .send()
            .await?;

        check_status(result, url.as_str()).await
    }

    /// The API answers downloads with a redirect to the blobstore. The
    /// blobstore URL is signed, the bearer token is not sent there.
    async fn download(&self, path: &str) -> Result<Bits> {
        let url = self.url(path)?;

        tracing::debug!("GET {}", url);

        let result = self
            .request(reqwest::Method::GET, url.clone())
            .send()
            .await?;

        let result = if result.status().is_redirection() {
            let location = result
                .headers()
                .get(reqwest::header::LOCATION)
                .and_then(|l| l.to_str().ok())
                .ok_or_else(|| Error::API(format!("Redirect from {url} without a location")))?;
            let location = url.join(location)?;

            tracing::debug!("GET {} (redirected)", location);

            let result = self
                .client
                .get(location.clone())
                .header(reqwest::header::USER_AGENT, &self.user_agent)
                .send()
                .await?;
            check_status(result, location.as_str()).await?
        } else {
            // The transport may have followed the redirect already
            check_status(result, url.as_str()).await?
        };

        Ok(Bits::new(result))
    }
}
