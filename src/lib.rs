//! Workspace-level integration tests for fittrack live in `tests/`.
