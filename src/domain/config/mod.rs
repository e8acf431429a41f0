pub mod parse;
pub mod paths;
pub mod settings;

pub use parse::{parse_config_content, render_config};
pub use settings::{
    CloudflareSettings, CloudflareZone, HerokuSettings, ReviewConfig, split_list,
};
