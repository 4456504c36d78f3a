// Presentation layer: display-only derivations and text rendering of the
// wizard screens. Nothing here mutates a RoadmapResult.

pub mod derive;
pub mod render;
