//! Helper functions for environment variables

/// The environment variable holding the remote endpoint used by fork tests.
pub const FORK_URL_VAR: &str = "ANVIL_FORK_URL";

fn get_non_empty_env_var_or_panic(name: &'static str) -> String {
    let result = std::env::var_os(name)
        .unwrap_or_else(|| panic!("{name} environment variable not defined"))
        .into_string()
        .expect("Couldn't convert OsString into a String");
    if result.is_empty() {
        panic!("{name} environment variable is empty")
    } else {
        result
    }
}

/// Returns the remote endpoint that fork tests fork from.
///
/// # Panics
///
/// Panics if the `ANVIL_FORK_URL` environment variable is not defined or is
/// empty.
pub fn fork_url() -> String {
    get_non_empty_env_var_or_panic(FORK_URL_VAR)
}
