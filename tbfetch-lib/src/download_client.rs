use anyhow::Result;
use bytes::Bytes;
use futures_util::stream::BoxStream;

/// Chunks of an artifact body as they arrive from the server.
pub type ByteStream = BoxStream<'static, Result<Bytes>>;

pub struct ArtifactBody {
    /// `Content-Length` reported by the server, when there is one
    pub content_length: Option<u64>,
    pub stream: ByteStream,
}

/// Network seam between the pipeline and the distribution server.
///
/// Both methods treat a non-success HTTP status as an error.
pub trait DownloadClient {
    /// Fetches a listing page and returns its raw body.
    fn fetch_page(&self, url: &str) -> impl Future<Output = Result<Bytes>> + Send;

    /// Starts downloading an artifact; the body is consumed by the caller.
    fn open_artifact(&self, url: &str) -> impl Future<Output = Result<ArtifactBody>> + Send;
}
