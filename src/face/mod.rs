mod order;
mod slot;
mod value;

pub use order::{face_order, FaceOrder, Handedness};
pub use slot::FaceSlot;
pub use value::FaceValue;
