//! Input adapters producing candidate street names
//!
//! Every adapter follows the same single-capability contract: it walks one
//! source and invokes a `FnMut(&str)` sink once per observed street-name
//! occurrence. The aggregation core never learns where candidates came
//! from.

pub mod osm;
pub mod text;

pub use osm::OsmNameExtractor;
pub use text::TextNameExtractor;
