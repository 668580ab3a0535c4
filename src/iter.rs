mod in_order;
mod pre_order;

pub use in_order::InOrder;
pub use pre_order::PreOrder;
