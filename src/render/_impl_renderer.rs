use crate::render::{AnimationSettings, RenderOutcome, Renderer, RendererConfig};
use crate::style::AttributeKey;
use crate::{Activities, IgraphError, InteractionGraph};
use log::{debug, error, info};
use std::ffi::OsString;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

impl Renderer {
    pub fn new(config: RendererConfig) -> Renderer {
        Renderer { config }
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    /// Render the graph into an image file. The image format is given by the extension
    /// of `output` (see `dot -T?` for the supported formats).
    ///
    /// Returns `Err` if the extension is not alphanumeric, if `dot` fails, or if it does not
    /// create `output`.
    pub fn render_image(
        &self,
        graph: &InteractionGraph,
        output: &Path,
    ) -> Result<RenderOutcome, IgraphError> {
        let format = output
            .extension()
            .and_then(|it| it.to_str())
            .unwrap_or("");
        check_format(format, &output.display().to_string())?;
        if graph.is_empty() {
            debug!("Graph is empty, {} is not created.", output.display());
            return Ok(RenderOutcome::NothingProduced);
        }

        let args = vec![
            OsString::from(format!("-T{}", format)),
            OsString::from("-o"),
            output.as_os_str().to_os_string(),
        ];
        let result = self.run_dot(graph, &args)?;
        if !output.exists() {
            error!("{}", describe_output(&result));
            return Err(IgraphError::render(format!(
                "`{}` did not create {}.",
                self.config.dot.display(),
                output.display()
            )));
        }
        info!("created {}", output.display());
        Ok(RenderOutcome::Created(output.to_path_buf()))
    }

    /// Render the graph in the given `format` and return the image data written by `dot`
    /// to its standard output.
    ///
    /// Returns `None` if the graph is empty.
    pub fn render_to_bytes(
        &self,
        graph: &InteractionGraph,
        format: &str,
    ) -> Result<Option<Vec<u8>>, IgraphError> {
        check_format(format, format)?;
        if graph.is_empty() {
            debug!("Graph is empty, nothing is rendered.");
            return Ok(None);
        }
        let output = self.run_dot(graph, &[OsString::from(format!("-T{}", format))])?;
        Ok(Some(output.stdout))
    }

    /// Create an animated `.gif` with one frame for every activity assignment in `frames`.
    ///
    /// Each frame shows the graph styled by `InteractionGraph::add_style_activities` and
    /// labelled `"<i> of <N>"`. Frames are rendered in order using `settings.template` and
    /// assembled by `convert`. The frames are deleted once `convert` succeeds. When it
    /// fails, they are kept in place so that they can be inspected.
    pub fn render_animation(
        &self,
        graph: &InteractionGraph,
        frames: &[Activities],
        output: &Path,
        settings: &AnimationSettings,
    ) -> Result<RenderOutcome, IgraphError> {
        let is_gif = output
            .extension()
            .and_then(|it| it.to_str())
            .map(|it| it.eq_ignore_ascii_case("gif"))
            .unwrap_or(false);
        if !is_gif {
            return Err(IgraphError::validation(format!(
                "Animation {} must be a `.gif` file.",
                output.display()
            )));
        }
        if graph.is_empty() || frames.is_empty() {
            debug!("Nothing to animate, {} is not created.", output.display());
            return Ok(RenderOutcome::NothingProduced);
        }

        let total = frames.len();
        let mut frame_files = Vec::with_capacity(total);
        for (i, activities) in frames.iter().enumerate() {
            let mut frame = graph.clone();
            frame.add_style_activities(activities);
            frame
                .graph_attributes_mut()
                .set(AttributeKey::Label, &format!("{} of {}", i + 1, total));
            let path = settings.template.frame_name(i + 1, total);
            self.render_image(&frame, &path)?;
            frame_files.push(path);
        }

        let result = Command::new(&self.config.convert)
            .arg("-delay")
            .arg(settings.delay.to_string())
            .arg("-loop")
            .arg(settings.repeat.to_string())
            .arg(settings.template.as_str())
            .arg(output)
            .output()
            .map_err(|e| cannot_start(&self.config.convert, e))?;
        if !result.status.success() {
            error!("{}", describe_output(&result));
            error!(
                "`{}` finished with {}, frames are kept for inspection.",
                self.config.convert.display(),
                result.status
            );
            return Err(IgraphError::render(format!(
                "`{}` finished with {}.",
                self.config.convert.display(),
                result.status
            )));
        }

        for path in &frame_files {
            std::fs::remove_file(path)?;
        }
        info!("created {}", output.display());
        Ok(RenderOutcome::Created(output.to_path_buf()))
    }

    /// **(internal)** Pipe the `.dot` representation of `graph` into the layout engine with
    /// the given arguments. Fails unless the engine exits with code zero.
    fn run_dot(&self, graph: &InteractionGraph, args: &[OsString]) -> Result<Output, IgraphError> {
        let mut child = Command::new(&self.config.dot)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| cannot_start(&self.config.dot, e))?;

        // The pipe is closed when `stdin` goes out of scope.
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(graph.to_dot().as_bytes()),
            None => Ok(()),
        };
        let output = child.wait_with_output()?;

        if !output.status.success() {
            error!("{}", describe_output(&output));
            return Err(IgraphError::render(format!(
                "`{}` did not respond with return code 0 ({}).",
                self.config.dot.display(),
                output.status
            )));
        }
        if let Err(e) = written {
            return Err(IgraphError::render(format!(
                "Cannot write graph to `{}`: {}",
                self.config.dot.display(),
                e
            )));
        }
        Ok(output)
    }
}

/// **(internal)** Image formats are passed to `dot` as `-T<format>`.
fn check_format(format: &str, name: &str) -> Result<(), IgraphError> {
    if format.is_empty() || !format.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(IgraphError::validation(format!(
            "Cannot determine an image format from `{}`.",
            name
        )));
    }
    Ok(())
}

fn cannot_start(program: &Path, e: std::io::Error) -> IgraphError {
    IgraphError::render(format!("Cannot start `{}`: {}", program.display(), e))
}

/// **(internal)** Captured output of a failed process, for the error log.
fn describe_output(output: &Output) -> String {
    format!(
        "stdout: {}\nstderr: {}",
        String::from_utf8_lossy(&output.stdout).trim(),
        String::from_utf8_lossy(&output.stderr).trim()
    )
}
