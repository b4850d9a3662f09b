mod classify;
mod directions;

pub use classify::{face_on_top, FaceClassifier};
pub use directions::{compute_face_directions, FaceDirectionSet};
