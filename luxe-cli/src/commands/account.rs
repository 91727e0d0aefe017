//! Account commands - signup, login, logout, whoami, profile, agent portal

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;
use dialoguer::Input;

use luxe_core::domain::UserUpdate;
use luxe_core::services::SignupRequest;
use luxe_core::User;

use super::{
    get_context, get_new_password_or_prompt, get_password_or_prompt, print_json_result,
    with_spinner,
};
use crate::output;

#[derive(Subcommand)]
pub enum AgentCommands {
    /// Register an agent account
    Signup {
        /// Full name
        #[arg(long)]
        name: String,
        /// Email address
        #[arg(long)]
        email: String,
        /// Real estate license number
        #[arg(long)]
        license: String,
        /// Phone number
        #[arg(long)]
        phone: Option<String>,
        /// Password (at least 8 characters, or set LUXE_PASSWORD)
        #[arg(short, long)]
        password: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Sign in to the agent portal
    Login {
        /// Email address
        email: String,
        /// Password
        #[arg(short, long)]
        password: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Inspection requests from every client
    Inspections {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn print_user(user: &User) {
    println!("{}", user.name.bold());
    println!("  Email: {}", user.email);
    if let Some(phone) = &user.phone {
        println!("  Phone: {}", phone);
    }
    println!("  Role: {}", user.role);
    println!("  Member since: {}", user.created_at.format("%B %Y"));
    println!("  Favorites: {}", user.favorites.len());
}

pub fn signup(
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    password: Option<String>,
    json: bool,
) -> Result<()> {
    let name = match name {
        Some(n) => n,
        None => Input::new().with_prompt("Full name").interact_text()?,
    };
    let email = match email {
        Some(e) => e,
        None => Input::new().with_prompt("Email").interact_text()?,
    };
    let password = get_new_password_or_prompt(password, "Password (min 8 characters)")?;

    let ctx = get_context()?;
    let result = with_spinner("Creating account...", json, || {
        ctx.session_service.signup(SignupRequest {
            name,
            email,
            password,
            phone,
            ..Default::default()
        })
    });

    if json {
        return print_json_result(result);
    }
    let user = result?;
    output::success(&format!("Welcome to Luxe Estates, {}!", user.name));
    Ok(())
}

pub fn login(email: &str, password: Option<String>, json: bool) -> Result<()> {
    let password = get_password_or_prompt(password, "Password")?;
    let ctx = get_context()?;
    let result = with_spinner("Signing in...", json, || {
        ctx.session_service.login(email, &password)
    });

    if json {
        return print_json_result(result);
    }
    let user = result?;
    output::success(&format!("Signed in as {}", user.name));
    Ok(())
}

pub fn logout() -> Result<()> {
    let ctx = get_context()?;
    ctx.session_service.logout()?;
    output::success("Signed out");
    Ok(())
}

pub fn whoami(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let user = ctx.session_service.current()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&user)?);
        return Ok(());
    }

    match user {
        Some(user) => print_user(&user),
        None => output::warning("Not signed in. Run `luxe login <email>` or `luxe signup`."),
    }
    Ok(())
}

/// Show the profile, or update it when any field is given
pub fn profile(
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    json: bool,
) -> Result<()> {
    let ctx = get_context()?;
    let update = UserUpdate { name, email, phone };

    if update.is_empty() {
        let user = ctx.session_service.require_user()?;
        if json {
            println!("{}", serde_json::to_string_pretty(&user)?);
        } else {
            print_user(&user);
        }
        return Ok(());
    }

    let result = with_spinner("Saving profile...", json, || {
        ctx.session_service.update_user(&update)
    });
    if json {
        return print_json_result(result);
    }
    let user = result?;
    output::success("Profile updated");
    print_user(&user);
    Ok(())
}

pub fn run_agent(command: AgentCommands) -> Result<()> {
    match command {
        AgentCommands::Signup {
            name,
            email,
            license,
            phone,
            password,
            json,
        } => {
            let password = get_new_password_or_prompt(password, "Password (min 8 characters)")?;
            let ctx = get_context()?;
            let result = with_spinner("Creating agent account...", json, || {
                ctx.session_service.signup_agent(
                    SignupRequest {
                        name,
                        email,
                        password,
                        phone,
                        ..Default::default()
                    },
                    &license,
                )
            });
            if json {
                return print_json_result(result);
            }
            let user = result?;
            output::success(&format!("Agent account created for {}", user.name));
        }
        AgentCommands::Login {
            email,
            password,
            json,
        } => {
            let password = get_password_or_prompt(password, "Password")?;
            let ctx = get_context()?;
            let result = with_spinner("Signing in to the agent portal...", json, || {
                ctx.session_service.login_agent(&email, &password)
            });
            if json {
                return print_json_result(result);
            }
            let user = result?;
            output::success(&format!("Agent portal: signed in as {}", user.name));
        }
        AgentCommands::Inspections { json } => {
            let ctx = get_context()?;
            let result = ctx.booking_service.inspections();
            if json {
                return print_json_result(result);
            }
            let inspections = result?;
            if inspections.is_empty() {
                output::info("No inspection requests yet.");
                return Ok(());
            }
            println!("{}", output::inspection_table(&inspections));
            println!("{} request(s)", inspections.len());
        }
    }
    Ok(())
}
