//! Utility modules for common functionality

pub(crate) mod number_utils;
