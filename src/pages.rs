//! Page body generation for the three page types
//!
//! This module organizes the inner-page templates by page type (index, tag
//! listing, individual post). Each page module produces the body markup
//! that the base layout wraps into a complete document.

pub mod index;
pub mod post;
pub mod tags;
