//! # layx
//!
//! Retained-mode, two-pass flexbox-style 2D layout engine.
//!
//! Items live in an arena owned by a single [`Context`]; style and tree
//! structure are mutated freely between runs. [`run_context`]/[`run_item`]
//! compute every item's rect in four half-passes — calc-X, arrange-X,
//! calc-Y, arrange-Y — each strictly sequential.
//!
//! ## Modules
//!
//! - [`id`] - the arena's stable item handle
//! - [`geom`] - scalar/axis/rect primitives
//! - [`flags`] - bit-packed boolean markers and style enums
//! - [`item`] - the per-item data record
//! - [`context`] - the arena itself
//! - [`tree`] - parent/child/sibling linking
//! - [`properties`] - typed style setters and getters
//! - [`style`] - bulk `Style` application
//! - [`calc`] - size-calculation pass
//! - [`arrange`] - placement pass
//! - [`scroll`] - content size, scrollbars, scroll offset
//! - [`hit_test`] - screen-point hit testing
//! - [`run`] - top-level entry points

pub mod arrange;
pub mod calc;
pub mod context;
pub mod flags;
pub mod geom;
pub mod id;
pub mod item;
pub mod properties;
pub mod run;
pub mod scroll;
pub mod style;
pub mod tree;

pub use context::Context;
pub use flags::{AlignContent, AlignItems, AlignSelf, Display, FlexDirection, FlexWrap, Justify, Overflow};
pub use geom::{Axis, Scalar};
pub use hit_test::{find_scroll_parent, hit_test};
pub use id::ItemId;
pub use item::MeasureTextFn;
pub use run::{run_context, run_item};
pub use style::{style_reset, Style};
