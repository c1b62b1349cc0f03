//! Stock pages: purchase orders and their editor.

pub mod purchase_order_editor;
pub mod purchase_orders;
