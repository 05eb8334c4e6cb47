//! Reusable HTML components for page generation
//!
//! This module provides Maud component functions shared across the page
//! types (index, tag pages, individual posts). Components handle specific
//! UI elements with consistent styling, eliminating duplication across
//! the render passes.

pub mod layout;
pub mod post_list;
pub mod social;
