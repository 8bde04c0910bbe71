use super::Response;

use std::ffi::OsStr;
use std::io;
use std::path::{Component, Path, PathBuf};

use http::header::{HeaderValue, CONTENT_TYPE};
use http::StatusCode;
use hyper::Body;

/// Receives the outcome of serving a static asset.
pub trait AssetSink {
    fn error(&mut self, status: StatusCode);
    fn success(&mut self, bytes: Vec<u8>, content_type: &'static str, encoding: Encoding);
}

/// Transfer encoding of a served asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Utf8,
    Binary,
}

impl Encoding {
    pub fn of(content_type: &str) -> Self {
        let textual = content_type.starts_with("text/")
            || matches!(
                content_type,
                "application/json" | "application/xml" | "image/svg+xml"
            );
        if textual {
            Self::Utf8
        } else {
            Self::Binary
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Binary => "binary",
        }
    }
}

/// Maps a file extension to its MIME type. Unknown extensions are served as `text/html`.
pub fn content_type(path: &Path) -> &'static str {
    let ext = match path.extension().and_then(OsStr::to_str) {
        Some(ext) => ext.to_ascii_lowercase(),
        None => return "text/html",
    };
    match ext.as_str() {
        "txt" => "text/plain",
        "html" => "text/html",
        "xml" => "application/xml",
        "css" => "text/css",
        "js" => "text/javascript",
        "png" => "image/png",
        "json" => "application/json",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "pdf" => "application/pdf",
        "mid" | "midi" => "audio/midi",
        "wav" => "audio/x-wav",
        "mp3" => "audio/mpeg",
        "ogg" => "audio/ogg",
        "mp4" => "video/mp4",
        "mpeg" => "video/mpeg",
        "avi" => "video/x-msvideo",
        _ => "text/html",
    }
}

/// Serves files under `root` for URLs starting with `prefix`.
#[derive(Debug, Clone)]
pub struct StaticFiles {
    prefix: String,
    root: PathBuf,
}

impl Default for StaticFiles {
    fn default() -> Self {
        Self::new("/public", "public")
    }
}

impl StaticFiles {
    pub fn new(prefix: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            prefix: prefix.into(),
            root: root.into(),
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// True if `url` is the prefix itself or lies below it.
    ///
    /// `/publicity.html` is not under `/public`.
    pub fn matches(&self, url: &str) -> bool {
        self.strip(url).is_some()
    }

    /// Maps `url` to a file below the root.
    ///
    /// The remainder after the prefix is percent-decoded. Returns `None` if
    /// `url` is outside the prefix, names the root itself, does not decode to
    /// utf-8, or contains anything but plain segments (`..`, `.`, absolute parts).
    pub fn resolve(&self, url: &str) -> Option<PathBuf> {
        let rest = self.strip(url)?;
        let rest = urlencoding::decode(rest).ok()?;
        let rest = rest.trim_start_matches('/');
        if rest.is_empty() {
            return None;
        }
        let rel = Path::new(rest);
        if !rel.components().all(|c| matches!(c, Component::Normal(_))) {
            return None;
        }
        Some(self.root.join(rel))
    }

    fn strip<'u>(&self, url: &'u str) -> Option<&'u str> {
        let rest = url.strip_prefix(&*self.prefix)?;
        if rest.is_empty() || rest.starts_with('/') || self.prefix.ends_with('/') {
            Some(rest)
        } else {
            None
        }
    }

    pub async fn serve<S>(&self, url: &str, sink: &mut S)
    where
        S: AssetSink + ?Sized,
    {
        let path = match self.resolve(url) {
            Some(p) => p,
            None => {
                tracing::debug!(url = %url, "static asset outside of root");
                return sink.error(StatusCode::NOT_FOUND);
            }
        };

        match tokio::fs::read(&path).await {
            Ok(bytes) => {
                let content_type = content_type(&path);
                sink.success(bytes, content_type, Encoding::of(content_type));
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "static asset not found");
                sink.error(StatusCode::NOT_FOUND);
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to read static asset");
                sink.error(StatusCode::INTERNAL_SERVER_ERROR);
            }
        }
    }
}

impl AssetSink for Response {
    fn error(&mut self, status: StatusCode) {
        *self.status_mut() = status;
        self.headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static("text/html"));
        *self.body_mut() = Body::empty();
    }

    fn success(&mut self, bytes: Vec<u8>, content_type: &'static str, encoding: Encoding) {
        let value = match encoding {
            Encoding::Utf8 => {
                let value = format!("{}; charset={}", content_type, encoding.as_str());
                HeaderValue::from_str(&value)
            }
            Encoding::Binary => Ok(HeaderValue::from_static(content_type)),
        };
        *self.status_mut() = StatusCode::OK;
        if let Ok(value) = value {
            self.headers_mut().insert(CONTENT_TYPE, value);
        }
        *self.body_mut() = Body::from(bytes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_table() {
        let cases = [
            ("a.txt", "text/plain"),
            ("a.JPEG", "image/jpeg"),
            ("a.midi", "audio/midi"),
            ("a.tar.gz", "text/html"),
            ("README", "text/html"),
        ];
        for &(file, mime) in cases.iter() {
            assert_eq!(content_type(Path::new(file)), mime, "{}", file);
        }
    }

    #[test]
    fn encoding_of_mime() {
        assert_eq!(Encoding::of("text/css"), Encoding::Utf8);
        assert_eq!(Encoding::of("image/svg+xml").as_str(), "utf-8");
        assert_eq!(Encoding::of("image/png").as_str(), "binary");
    }

    #[test]
    fn resolve_rejects_traversal() {
        let files = StaticFiles::new("/public", "/srv/www");
        assert_eq!(
            files.resolve("/public/css/site.css"),
            Some(PathBuf::from("/srv/www/css/site.css"))
        );
        assert_eq!(files.resolve("/public/../etc/passwd"), None);
        assert_eq!(files.resolve("/public/"), None);
        assert_eq!(files.resolve("/private/a.txt"), None);
        assert_eq!(files.resolve("/public/%2e%2e/etc/passwd"), None);
    }

    #[test]
    fn prefix_is_segment_bounded() {
        let files = StaticFiles::new("/public", "/srv/www");
        assert!(files.matches("/public"));
        assert!(files.matches("/public/a.txt"));
        assert!(!files.matches("/publichello.txt"));
        assert!(!files.matches("/publicity.html"));
        assert_eq!(files.resolve("/publicity.html"), None);

        let files = StaticFiles::new("/assets/", "/srv/www");
        assert!(files.matches("/assets/a.txt"));
    }

    #[test]
    fn resolve_percent_decodes() {
        let files = StaticFiles::new("/public", "/srv/www");
        assert_eq!(
            files.resolve("/public/a%20b.txt"),
            Some(PathBuf::from("/srv/www/a b.txt"))
        );
        assert_eq!(files.resolve("/public/%FF.txt"), None);
    }
}
