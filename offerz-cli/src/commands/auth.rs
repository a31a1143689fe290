//! Admin sign-in

use anyhow::bail;
use offerz_client::{AuthState, LoginOutcome, Notice};

use super::Client;
use crate::render;

pub async fn login(client: &mut Client, email: &str, password: &str) -> anyhow::Result<()> {
    match client.login(email, password).await {
        LoginOutcome::Success(admin) => {
            let name = if admin.name.is_empty() { admin.email } else { admin.name };
            render::notice(&Notice::success("Login successful!"));
            println!("Signed in as {}", name);
            Ok(())
        }
        LoginOutcome::Failed(message) => bail!(message),
    }
}

pub async fn logout(client: &mut Client) -> anyhow::Result<()> {
    client.logout().await?;
    render::notice(&Notice::success("Logged out successfully"));
    Ok(())
}

pub async fn whoami(client: &mut Client) -> anyhow::Result<()> {
    match client.restore().await {
        AuthState::Authenticated(admin) => {
            println!("{} <{}>", admin.name, admin.email);
        }
        AuthState::Unauthenticated | AuthState::Loading => {
            println!("Not signed in");
        }
    }
    Ok(())
}
