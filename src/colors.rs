//! Global colors.

use nu_ansi_term::Color;

/// The attention color.
pub(crate) const ATTENTION_COLOR: Color = Color::Red;

/// The color used to colorise the path.
pub(crate) const PATH_COLOR: Color = Color::LightBlue;
