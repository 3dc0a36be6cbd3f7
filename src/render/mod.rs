//! The boundary between styled interaction graphs and the external GraphViz and
//! ImageMagick tools.
//!
//! A `Renderer` pipes the `.dot` text of a graph into the `dot` layout engine, either to
//! create an image file or to capture the image bytes. Animations are assembled by
//! `convert` from one image per activity assignment. Paths to both tools are taken from
//! an explicit `RendererConfig`.
//!
//! Every call blocks until the external tool finishes. A call either produces its declared
//! output or fails with `IgraphError::Render`. Empty graphs are not an error: nothing is
//! rendered and `RenderOutcome::NothingProduced` is returned instead.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// **(internal)** Implements `RendererConfig` and `AnimationSettings`.
mod _impl_config;
/// **(internal)** Implements the naming of animation frames.
mod _impl_frame_template;
/// **(internal)** Implements the process invocations of `Renderer`.
mod _impl_renderer;

/// Paths to the external tools used by a `Renderer`.
///
/// Missing fields fall back to `dot` and `convert`, which are resolved using `PATH`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RendererConfig {
    /// The GraphViz layout engine.
    pub dot: PathBuf,
    /// The ImageMagick animation assembler.
    pub convert: PathBuf,
}

/// The result of a successful rendering call.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RenderOutcome {
    /// The declared output file was created.
    Created(PathBuf),
    /// There was nothing to draw (an empty graph or no frames), so no tool was invoked.
    NothingProduced,
}

/// A file name template for animation frames with exactly one `*`, which is replaced by
/// a zero-padded frame counter, e.g. `tmp*.jpg`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FrameTemplate {
    template: String,
    counter: usize,
}

/// Parameters of `Renderer::render_animation`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AnimationSettings {
    /// Names of the temporary frame images.
    pub template: FrameTemplate,
    /// Delay between frames in hundredths of a second.
    pub delay: u32,
    /// Number of repetitions, `0` repeats forever.
    pub repeat: u32,
}

/// Renders interaction graphs using the external tools given by a `RendererConfig`.
#[derive(Clone, Debug, Default)]
pub struct Renderer {
    config: RendererConfig,
}
