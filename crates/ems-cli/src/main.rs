use anyhow::Result;
use clap::{Parser, Subcommand};
use dialoguer::{Confirm, Input, Password};
use dotenvy::dotenv;

use ems_cli::{admin::create_admin, seeder};
use ems_config::DatabaseConfig;
use ems_db::{init_db_pool, run_migrations};

#[derive(Parser)]
#[command(name = "ems-cli")]
#[command(about = "EMS CLI - Administrative tools for the Employee Management API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an administrator account
    CreateAdmin {
        /// Display name
        #[arg(short = 'n', long)]
        name: Option<String>,

        #[arg(short = 'u', long)]
        username: Option<String>,

        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Password (prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Insert fake employees
    SeedEmployees {
        /// Number of employees to create
        #[arg(short = 'c', long, default_value = "50")]
        count: usize,
    },
    /// Delete every employee record
    ClearEmployees {
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    if let Err(e) = run(Cli::parse()).await {
        eprintln!("\n❌ {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut db_config = DatabaseConfig::from_env()?;
    db_config.max_connections = 5;
    let pool = init_db_pool(&db_config).await?;
    run_migrations(&pool).await?;

    match cli.command {
        Commands::CreateAdmin {
            name,
            username,
            email,
            password,
        } => {
            let name = prompt_unless_given(name, "Name")?;
            let username = prompt_unless_given(username, "Username")?;
            let email = prompt_unless_given(email, "Email address")?;
            let password = match password {
                Some(password) => password,
                None => Password::new()
                    .with_prompt("Password")
                    .with_confirmation("Confirm password", "Passwords don't match")
                    .interact()?,
            };

            let user_id = create_admin(&pool, &name, &username, &email, &password).await?;

            println!("\n✅ Admin created successfully!");
            println!("   ID: {}", user_id);
            println!("   Username: {}", username);
            println!("   Email: {}", email);
        }
        Commands::SeedEmployees { count } => {
            let inserted = seeder::seed_employees(&pool, count).await?;
            println!("✅ Created {} employees", inserted);
        }
        Commands::ClearEmployees { yes } => {
            let confirmed = yes
                || Confirm::new()
                    .with_prompt("Delete ALL employee records?")
                    .default(false)
                    .interact()?;

            if !confirmed {
                println!("Aborted.");
                return Ok(());
            }

            let removed = seeder::clear_employees(&pool).await?;
            println!("✅ Removed {} employees", removed);
        }
    }

    Ok(())
}

fn prompt_unless_given(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(value) => Ok(value),
        None => Ok(Input::new().with_prompt(prompt).interact_text()?),
    }
}
