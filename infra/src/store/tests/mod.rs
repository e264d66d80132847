//! Unit tests for store implementations
