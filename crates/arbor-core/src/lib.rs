//! Arbor Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Arbor tree layout
//! engine and its renderers. It includes:
//!
//! - **Geometry**: Points, sizes, bounds and insets ([`geometry`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Documents**: The ordered value model diagrams are built from ([`document`] module)
//! - **Text**: Font-backed text measurement ([`text`] module)

pub mod color;
pub mod document;
pub mod geometry;
pub mod text;
