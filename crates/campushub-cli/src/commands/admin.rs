//! `create-admin` command.

use clap::Args;

use campushub_auth::PasswordHasher;
use campushub_core::config::AppConfig;
use campushub_core::error::AppError;
use campushub_database::{DatabasePool, store::Stores};
use campushub_entity::identity::{Identity, Role};

/// Arguments for creating an administrative account.
#[derive(Debug, Args)]
pub struct CreateAdminArgs {
    /// Login name
    pub username: String,

    /// Plaintext password, hashed before storage
    #[arg(short, long)]
    pub password: String,

    /// Email address
    #[arg(short, long)]
    pub email: Option<String>,

    /// Grant the superuser role instead of staff
    #[arg(long)]
    pub superuser: bool,
}

/// Create a staff or superuser identity.
pub async fn execute(args: &CreateAdminArgs, config: &AppConfig) -> Result<(), AppError> {
    if args.password.len() < 8 {
        return Err(AppError::validation(
            "Password must be at least 8 characters",
        ));
    }

    let pool = DatabasePool::connect(&config.database).await?;
    let stores = Stores::postgres(pool.into_pool());

    let role = if args.superuser {
        Role::SuperUser
    } else {
        Role::Staff
    };

    let password_hash = PasswordHasher::new().hash_password(&args.password)?;
    let identity = Identity::new(
        &args.username,
        args.email.clone(),
        "",
        "",
        password_hash,
        role,
    );
    stores.identities.create(&identity).await?;

    println!("Created {} account '{}'.", role, identity.username);
    Ok(())
}
