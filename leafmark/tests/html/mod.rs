mod properties;
mod render;
