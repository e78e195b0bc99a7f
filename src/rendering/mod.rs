pub mod figure_svg;
pub mod png_encode;
pub mod svg_to_png;

pub use figure_svg::compose_svg;
pub use png_encode::{encode_rgb_png, encode_sample_image, optimize_png};
pub use svg_to_png::SvgRenderer;
