pub use self::{action::*, arena::*, geometry::*, grid::*, observe::*, seed::*};

pub mod action;
pub mod arena;
pub mod geometry;
pub mod grid;
pub mod observe;
pub mod seed;
