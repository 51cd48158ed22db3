//! Unit tests for the coordinate module

mod parser_tests;
