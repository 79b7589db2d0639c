use crate::{Error, Result};

/// Media type of a servable HLS asset, keyed on file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    /// `.m3u8` playlist (master or media).
    Playlist,
    /// `.ts` MPEG-TS segment.
    Segment,
    /// `.vtt` WebVTT subtitle track.
    Subtitle,
}

impl MediaType {
    /// Determine the media type from a file extension.
    pub fn from_extension(ext: &str) -> Result<Self> {
        match ext.to_lowercase().as_str() {
            "m3u8" => Ok(Self::Playlist),
            "ts" => Ok(Self::Segment),
            "vtt" => Ok(Self::Subtitle),
            _ => Err(Error::UnsupportedType),
        }
    }

    /// Determine the media type from a path, rejecting missing extensions.
    pub fn from_path(path: &str) -> Result<Self> {
        let name = path.rsplit('/').next().unwrap_or(path);
        match name.rsplit_once('.') {
            Some((_, ext)) => Self::from_extension(ext),
            None => Err(Error::UnsupportedType),
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Playlist => "application/vnd.apple.mpegurl",
            Self::Segment => "video/mp2t",
            Self::Subtitle => "text/vtt",
        }
    }

    /// Whether a reference inside a playlist points at a rewritable asset.
    pub fn is_known_extension(path: &str) -> bool {
        Self::from_path(path).is_ok()
    }
}
