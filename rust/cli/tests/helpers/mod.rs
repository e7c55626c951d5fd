//! Shared helpers for CLI integration tests.
//!
//! `run_cli` drives the library entry point with captured streams.
//! `run_cli_with_env` does the same with temporary environment variables;
//! callers must be `#[serial]` since the process environment is shared.

#![allow(dead_code)]

use handrank_cli::config::{CONFIG_ENV, FORMAT_ENV, SHOW_ALL_ENV, UNICODE_ENV};
use handrank_cli::run;

#[derive(Debug, Clone)]
pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

struct EnvGuard {
    restores: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    fn apply(pairs: &[(&str, &str)]) -> Self {
        let mut restores = Vec::new();
        for key in [CONFIG_ENV, FORMAT_ENV, SHOW_ALL_ENV, UNICODE_ENV] {
            restores.push((key.to_string(), std::env::var(key).ok()));
            // SAFETY: env-mutating tests are serialized.
            unsafe { std::env::remove_var(key) };
        }
        for (key, value) in pairs {
            restores.push((key.to_string(), std::env::var(key).ok()));
            unsafe { std::env::set_var(key, value) };
        }
        EnvGuard { restores }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, previous) in self.restores.iter().rev() {
            match previous {
                Some(val) => unsafe { std::env::set_var(key, val) },
                None => unsafe { std::env::remove_var(key) },
            }
        }
    }
}

pub fn run_cli(args: &[&str]) -> CliResult {
    run_cli_with_env(args, &[])
}

/// Runs with every `HANDRANK_*` variable cleared, then `env` applied.
pub fn run_cli_with_env(args: &[&str], env: &[(&str, &str)]) -> CliResult {
    let _guard = EnvGuard::apply(env);
    let mut argv = vec!["handrank"];
    argv.extend_from_slice(args);
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let exit_code = run(argv, &mut out, &mut err);
    CliResult {
        exit_code,
        stdout: String::from_utf8_lossy(&out).into_owned(),
        stderr: String::from_utf8_lossy(&err).into_owned(),
    }
}
