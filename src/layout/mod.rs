pub(crate) mod engine;
pub(crate) mod glyph_width;
pub(crate) mod measure;
pub(crate) mod position;
pub(crate) mod scale;
