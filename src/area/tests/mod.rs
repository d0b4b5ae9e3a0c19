//! Unit tests for the message area module.
