//! GitHub REST API access: repository listings and per-repository languages.

mod api;
mod client;

pub use api::{GITHUB_API_URL, GitHubApi};
pub use client::{HttpClient, ReqwestClient};
