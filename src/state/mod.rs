//! Site behavior state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`theme`, `notification`, `inquiry`, etc.) so
//! each piece can be tested without a document. `SiteController` owns one of
//! each.

pub mod inquiry;
pub mod navigation;
pub mod notification;
pub mod tabs;
pub mod theme;
