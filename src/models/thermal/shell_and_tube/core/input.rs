mod design;
mod process;
mod tubes;

pub use design::{DesignInput, Side};
pub use process::{ProcessConditions, StreamConditions, StreamRole};
pub use tubes::{PitchLayout, TubeGeometry, TubePitch};
