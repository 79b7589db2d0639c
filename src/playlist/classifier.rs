/// Represents the type of a line in an M3U8 playlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineType {
    Empty,
    /// `#EXT-X-MEDIA:` tag, may carry a `URI="..."` attribute.
    ExtXMedia,
    /// `#EXT-X-I-FRAME-STREAM-INF:` tag, carries a `URI="..."` attribute.
    ExtXIFrameStreamInf,
    /// Any other `#EXT...` tag.
    Tag,
    Comment,
    Uri,
}

/// Classifier for M3U8 lines.
pub struct LineClassifier;

impl LineClassifier {
    /// Classify a line from an M3U8 playlist.
    pub fn classify(line: &str) -> LineType {
        let line = line.trim();

        if line.is_empty() {
            return LineType::Empty;
        }

        if !line.starts_with('#') {
            return LineType::Uri;
        }

        if line.starts_with("#EXT-X-MEDIA:") {
            LineType::ExtXMedia
        } else if line.starts_with("#EXT-X-I-FRAME-STREAM-INF:") {
            LineType::ExtXIFrameStreamInf
        } else if line.starts_with("#EXT") {
            LineType::Tag
        } else {
            LineType::Comment
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_uri() {
        assert_eq!(LineClassifier::classify("segment001.ts"), LineType::Uri);
        assert_eq!(
            LineClassifier::classify("https://example.com/playlist.m3u8"),
            LineType::Uri
        );
    }

    #[test]
    fn test_classify_tags() {
        assert_eq!(LineClassifier::classify("#EXTM3U"), LineType::Tag);
        assert_eq!(LineClassifier::classify("#EXTINF:10.0,"), LineType::Tag);
        assert_eq!(
            LineClassifier::classify("#EXT-X-MEDIA:TYPE=SUBTITLES,URI=\"sub.m3u8\""),
            LineType::ExtXMedia
        );
        assert_eq!(
            LineClassifier::classify("#EXT-X-I-FRAME-STREAM-INF:URI=\"iframe.m3u8\""),
            LineType::ExtXIFrameStreamInf
        );
    }

    #[test]
    fn test_classify_comment() {
        assert_eq!(
            LineClassifier::classify("# This is a comment"),
            LineType::Comment
        );
    }

    #[test]
    fn test_classify_empty() {
        assert_eq!(LineClassifier::classify(""), LineType::Empty);
        assert_eq!(LineClassifier::classify("  "), LineType::Empty);
    }
}
