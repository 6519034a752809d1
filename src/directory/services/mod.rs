mod filter_options;
mod view_pipeline;

pub use filter_options::FilterOptions;
pub use view_pipeline::ViewPipeline;
