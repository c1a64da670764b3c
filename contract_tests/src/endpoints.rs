//! Well-known endpoint contract tests
//!
//! Host and shelf resolve these addresses independently at process start;
//! they must never drift between releases.
