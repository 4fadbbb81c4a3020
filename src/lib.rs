pub mod patterns;
pub mod rewriter;
