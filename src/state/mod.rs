/// State management module
///
/// This module handles all application state, including:
/// - Shared data structures (data.rs)
/// - The view state and its mutators (view.rs)

pub mod data;
pub mod view;
