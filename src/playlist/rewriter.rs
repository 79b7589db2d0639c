//! Line-oriented manifest rewriting.
//!
//! Every in-manifest reference to a `.m3u8`, `.ts` or `.vtt` asset is
//! replaced with a freshly signed absolute URL; every other byte passes
//! through unchanged. The pass is purely textual and never touches the
//! filesystem.

use super::classifier::{LineClassifier, LineType};
use crate::{media::MediaType, sandbox, server::signer::UrlSigner};

/// Context for rewriting one playlist.
#[derive(Debug, Clone)]
pub struct RewriteContext {
    /// Issuer used to mint signed URLs for referenced sub-assets.
    pub signer: UrlSigner,

    /// Public directory of the playlist being rewritten, relative to the
    /// asset root (empty for a root-level playlist).
    pub playlist_dir: String,

    /// TTL minted for each rewritten reference. Each sub-asset gets its
    /// own fresh window, independent of the parent link's remaining life.
    pub ttl: u64,
}

impl RewriteContext {
    /// Context for a playlist at the given public path.
    pub fn for_playlist(signer: UrlSigner, playlist_path: &str, ttl: u64) -> Self {
        let playlist_dir = match playlist_path.rsplit_once('/') {
            Some((dir, _)) => dir.to_string(),
            None => String::new(),
        };
        Self {
            signer,
            playlist_dir,
            ttl,
        }
    }
}

/// Rewrites playlist text, substituting signed URLs for asset references.
pub struct PlaylistRewriter {
    context: RewriteContext,
}

impl PlaylistRewriter {
    pub fn new(context: RewriteContext) -> Self {
        Self { context }
    }

    /// Rewrite an entire playlist. Non-reference lines round-trip
    /// byte-for-byte, line terminators included (HLS permits CRLF).
    pub fn rewrite(&self, input: &str) -> String {
        let mut output = String::with_capacity(input.len());

        for line in input.split_inclusive('\n') {
            let (content, terminator) = split_terminator(line);
            output.push_str(&self.rewrite_line(content));
            output.push_str(terminator);
        }

        output
    }

    fn rewrite_line(&self, line: &str) -> String {
        match LineClassifier::classify(line) {
            LineType::Uri => self
                .signed_reference(line.trim())
                .unwrap_or_else(|| line.to_string()),
            LineType::ExtXMedia | LineType::ExtXIFrameStreamInf => {
                self.rewrite_uri_attribute(line)
            }
            _ => line.to_string(),
        }
    }

    /// Mint a signed URL for a relative reference with a recognized
    /// extension. Absolute references and unknown extensions are left to
    /// the caller to pass through.
    fn signed_reference(&self, reference: &str) -> Option<String> {
        // Protocol-relative (`//host/...`) counts as absolute too.
        if reference.contains("://") || reference.starts_with("//") {
            return None;
        }

        // A reference may carry its own query; the signed URL replaces it.
        let path = reference.split('?').next().unwrap_or(reference);
        if !MediaType::is_known_extension(path) {
            return None;
        }

        let joined = sandbox::normalize(&format!("{}/{}", self.context.playlist_dir, path));
        if joined.is_empty() {
            return None;
        }

        let signed = self.context.signer.issue(&joined, self.context.ttl);
        Some(signed.url.to_string())
    }

    /// Rewrite the `URI="..."` attribute of a tag line, leaving the rest
    /// of the tag untouched.
    fn rewrite_uri_attribute(&self, line: &str) -> String {
        let Some(start) = line.find("URI=\"") else {
            return line.to_string();
        };
        let value_start = start + "URI=\"".len();
        let Some(value_len) = line[value_start..].find('"') else {
            return line.to_string();
        };

        let value = &line[value_start..value_start + value_len];
        match self.signed_reference(value) {
            Some(signed) => format!(
                "{}{}{}",
                &line[..value_start],
                signed,
                &line[value_start + value_len..]
            ),
            None => line.to_string(),
        }
    }
}

/// Split a line from `split_inclusive('\n')` into content and terminator.
fn split_terminator(line: &str) -> (&str, &str) {
    if let Some(content) = line.strip_suffix("\r\n") {
        (content, "\r\n")
    } else if let Some(content) = line.strip_suffix('\n') {
        (content, "\n")
    } else {
        (line, "")
    }
}
