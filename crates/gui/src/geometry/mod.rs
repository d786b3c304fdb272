//! Geometry core: plane model, projection framing, convex hull and input parsing.

pub mod hull;
pub mod parse;
pub mod plane;
pub mod projection;

pub use hull::{convex_hull, Hull};
pub use parse::{parse_angle, parse_plane_input, parse_vertex_list};
pub use plane::Plane;
pub use projection::{frame_bounds, plane_basis, ProjectionCamera, ProjectionFrame};
