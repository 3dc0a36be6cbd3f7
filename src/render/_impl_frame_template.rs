use crate::render::FrameTemplate;
use crate::IgraphError;
use std::convert::TryFrom;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

impl TryFrom<&str> for FrameTemplate {
    type Error = IgraphError;

    /// The template must contain exactly one `*` and end with an alphanumeric extension
    /// (following the last `.`, which must come after the `*`).
    fn try_from(template: &str) -> Result<Self, Self::Error> {
        let stars = template.matches('*').count();
        if stars != 1 {
            return Err(IgraphError::validation(format!(
                "Frame template `{}` must contain exactly one `*`, found {}.",
                template, stars
            )));
        }
        let extension = template.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("");
        if extension.is_empty() || !extension.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(IgraphError::validation(format!(
                "Frame template `{}` must end with an alphanumeric file extension.",
                template
            )));
        }
        Ok(FrameTemplate {
            template: template.to_string(),
            counter: template.find('*').unwrap_or_default(),
        })
    }
}

impl FrameTemplate {
    /// Width of the zero-padded counter used for `total` frames: one more than the number
    /// of decimal digits of `total`.
    pub fn counter_width(total: usize) -> usize {
        total.to_string().len() + 1
    }

    /// The file name of the frame with the given (1-based) `index`.
    pub fn frame_name(&self, index: usize, total: usize) -> PathBuf {
        let width = FrameTemplate::counter_width(total);
        PathBuf::from(format!(
            "{}{:0width$}{}",
            &self.template[..self.counter],
            index,
            &self.template[self.counter + 1..],
            width = width
        ))
    }

    /// The image format of the frames, given by the extension of the template.
    pub fn extension(&self) -> &str {
        self.template.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("")
    }

    /// The template itself, usable as a glob pattern matching all frames.
    pub fn as_str(&self) -> &str {
        &self.template
    }
}

impl Display for FrameTemplate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.template)
    }
}
