mod git_provider;

pub use git_provider::GitProvider;
