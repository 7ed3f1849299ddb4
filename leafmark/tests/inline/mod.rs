mod pipeline;
mod properties;
