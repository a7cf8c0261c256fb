//! Account command handlers

use crate::config::Config;
use crate::services::CreateAccount;
use crate::state::SharedState;

pub async fn cmd_account_create(
    config: Config,
    email: String,
    password: String,
    first_name: Option<String>,
    last_name: Option<String>,
) -> anyhow::Result<()> {
    let state = SharedState::new(config).await?;
    let created = state
        .account_service
        .create_account(CreateAccount {
            email,
            password,
            first_name,
            last_name,
        })
        .await?;

    println!("{}", created.message);
    println!("  ID:    {}", created.user_id);
    println!("  Email: {}", created.email);

    Ok(())
}

pub async fn cmd_account_delete(config: Config, id: &str) -> anyhow::Result<()> {
    let state = SharedState::new(config).await?;
    let outcome = state.account_service.delete_account(id).await;

    println!("{}", outcome.message);

    if !outcome.deleted {
        anyhow::bail!("Account {id} was not deleted");
    }

    Ok(())
}
