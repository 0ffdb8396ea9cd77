//! Loader tests for the positional controller export
