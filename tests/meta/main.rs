//! Structural checks on the test layout
