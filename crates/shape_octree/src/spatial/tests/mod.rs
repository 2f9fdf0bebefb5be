//! Cross-module octree tests
//!
//! End-to-end scenarios and randomised comparisons against the linear index.

mod properties;
