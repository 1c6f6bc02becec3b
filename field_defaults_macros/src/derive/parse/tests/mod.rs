//! Unit tests for derive attribute and type parsing.
