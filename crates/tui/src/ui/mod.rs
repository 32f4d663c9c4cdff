//! UI rendering module for the navigation surface.
//!
//! This module provides the layout rules, components, theme and the runtime
//! that drives them.

pub mod components;
pub mod layout;
pub mod main_component;
pub mod runtime;
pub mod theme;
