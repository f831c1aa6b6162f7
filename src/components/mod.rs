//! Reusable UI components shared by pages.

pub mod toast_stack;
