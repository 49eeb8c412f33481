//! Section composers. Each section draws into the [`SheetBuilder`] starting
//! at the cursor it is given and returns the cursor advanced past itself;
//! sections with a fixed shape also expose a `height` twin so the assembler
//! can call `ensure_space` before composing.
//!
//! [`SheetBuilder`]: orderslip_layout::SheetBuilder

pub mod footer;
pub mod header;
pub mod items;
pub mod order_info;
pub mod payment;
pub mod totals;

/// Vertical gap between consecutive sections.
pub(crate) const SECTION_GAP: f32 = 10.0;
