pub mod classifier;
pub mod rewriter;

pub use classifier::{LineClassifier, LineType};
pub use rewriter::{PlaylistRewriter, RewriteContext};
