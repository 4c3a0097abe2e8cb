//! Account commands: signup and login.

use tracing::info;

use storerate_core::Role;
use storerate_platform::state::Platform;
use storerate_platform::storage::StoragePort;

/// Create a visitor account.
///
/// # Errors
///
/// Returns an error if a field fails validation, the email is taken, or
/// storage fails.
pub fn signup<S: StoragePort>(
    platform: &Platform<S>,
    email: &str,
    password: &str,
    name: &str,
    address: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let account = platform.identity().register(email, password, name, address)?;

    info!("Account created. Welcome to StoreRate, {}!", account.display_name);
    info!("  Email: {}", account.email);
    info!("  Account ID: {}", account.id);
    Ok(())
}

/// Sign in and report which dashboard the account lands on.
///
/// # Errors
///
/// Returns an error if the email or password is wrong or storage fails.
pub fn login<S: StoragePort>(
    platform: &Platform<S>,
    email: &str,
    password: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let account = platform.identity().authenticate(email, password)?;

    info!("Login successful. Welcome back, {}!", account.display_name);
    let dashboard = match account.role {
        Role::Admin => "admin dashboard",
        Role::User => "user dashboard",
        Role::StoreOwner => "store owner dashboard",
    };
    info!("  Role: {} ({})", account.role, dashboard);
    info!("  Account ID: {}", account.id);
    Ok(())
}
