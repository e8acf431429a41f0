mod fake_dns;
mod fake_git;
mod fake_platform;
mod scripted_prompter;

pub use fake_dns::FakeDns;
pub use fake_git::FakeGit;
pub use fake_platform::{FakePlatform, PlatformCall};
pub use scripted_prompter::ScriptedPrompter;
