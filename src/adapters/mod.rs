pub mod cloudflare_http;
pub mod config_file;
pub mod git_command;
pub mod heroku_http;
pub mod terminal_prompter;

pub use cloudflare_http::CloudflareHttpClient;
pub use config_file::IniConfigStore;
pub use git_command::GitCommandAdapter;
pub use heroku_http::HerokuHttpClient;
pub use terminal_prompter::TerminalPrompter;
