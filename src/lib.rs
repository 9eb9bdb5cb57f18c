//! Lemonade — declarative page builder.
//!
//! DESIGN
//! ======
//! A page is described as data: sections hold blocks, blocks hold component
//! references. The builder walks that three-level tree once and asks the
//! component registry to render each reference, producing a `Node` tree that
//! mirrors the input. The HTML writer and the HTTP routes are hosts for that
//! tree; neither feeds back into the builder.

pub mod builder;
pub mod error;
pub mod html;
pub mod node;
pub mod page;
pub mod registry;
pub mod routes;
pub mod sample;

pub use builder::build;
pub use error::PageError;
pub use node::{Attr, Element, Node, Tag};
pub use page::{Block, PageDescription, Section};
pub use registry::{ButtonProps, ButtonVariant, Children, Component, ComponentKind, TextProps, TextTag};
