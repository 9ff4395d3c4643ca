//! `placement` command-line driver for the placement portal data layer.
//!
//! Each invocation seeds a fresh in-memory store from the fixtures. Only the
//! session slot persists between runs.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::io;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tokio::runtime::Builder;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use placement_portal::bootstrap::{PortalService, build_service};
use placement_portal::domain::ports::{
    AccountCommand, ApplicationsCommand, ApplicationsQuery, CatalogueQuery, SessionQuery,
};
use placement_portal::domain::{
    ApplicationId, ApplicationStatus, CompanyId, Error, LoginCredentials, PositionId,
    RegistrationRequest, User,
};
use placement_portal::settings::PortalSettings;

/// `placement` command arguments.
#[derive(Debug, Parser)]
#[command(
    name = "placement",
    about = "Browse placement companies, apply for positions and track applications",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Log in with the email of an existing account.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account and log in as it.
    Register(RegisterArgs),
    /// Clear the current session.
    Logout,
    /// Show the logged-in student.
    Whoami,
    /// List companies with their positions.
    Companies {
        /// Only companies whose name, description or location match.
        #[arg(long)]
        search: Option<String>,
    },
    /// Show one company.
    Company { id: String },
    /// List positions.
    Positions {
        /// Only positions of this company.
        #[arg(long)]
        company: Option<String>,
    },
    /// Show one position.
    Position { id: String },
    /// Apply for a position as the logged-in student.
    Apply { position_id: String },
    /// List the logged-in student's applications.
    Applications,
    /// Show dashboard totals for the logged-in student.
    Summary,
    /// Change an application's status.
    SetStatus {
        application_id: String,
        /// One of pending, applied, selected or rejected.
        status: ApplicationStatus,
    },
}

#[derive(Debug, Args)]
struct RegisterArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: String,
    #[arg(long = "roll-number")]
    roll_number: String,
    #[arg(long)]
    branch: String,
    #[arg(long)]
    year: u8,
    #[arg(long)]
    avatar: Option<String>,
}

fn main() -> io::Result<()> {
    let cli = Cli::try_parse().map_err(io::Error::other)?;
    let settings = PortalSettings::load_from_env().map_err(io::Error::other)?;
    init_tracing(settings.log_json());

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|error| io::Error::other(format!("create Tokio runtime: {error}")))?;
    runtime.block_on(async_main(cli, settings))
}

fn init_tracing(json: bool) {
    let builder = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr);
    let result = if json {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    };
    if let Err(e) = result {
        warn!(error = %e, "tracing init failed");
    }
}

async fn async_main(cli: Cli, settings: PortalSettings) -> io::Result<()> {
    let service = build_service(&settings)
        .map_err(|error| io::Error::other(format!("start placement portal: {error}")))?;

    match cli.command {
        Command::Login { email, password } => {
            let credentials = LoginCredentials::try_from_parts(&email, &password)
                .map_err(|error| io::Error::new(io::ErrorKind::InvalidInput, error))?;
            print_json(&service.login(&credentials).await.map_err(domain_error)?)
        }
        Command::Register(args) => {
            let request = RegistrationRequest {
                name: args.name,
                email: args.email,
                roll_number: args.roll_number,
                branch: args.branch,
                year: args.year,
                avatar: args.avatar,
            };
            print_json(&service.register(request).await.map_err(domain_error)?)
        }
        Command::Logout => service.logout().await.map_err(domain_error),
        Command::Whoami => print_json(&service.current_user().await),
        Command::Companies { search } => {
            let companies = match search {
                Some(term) => service.search_companies(&term).await,
                None => service.companies().await,
            };
            print_json(&companies.map_err(domain_error)?)
        }
        Command::Company { id } => {
            let id = CompanyId::new(&id).map_err(invalid_input)?;
            let company = service.company(&id).await.map_err(domain_error)?;
            print_json(&company.ok_or_else(|| not_found(format!("company {id}")))?)
        }
        Command::Positions { company } => {
            let company = company
                .map(|raw| CompanyId::new(raw).map_err(invalid_input))
                .transpose()?;
            print_json(&service.positions(company).await.map_err(domain_error)?)
        }
        Command::Position { id } => {
            let id = PositionId::new(&id).map_err(invalid_input)?;
            let position = service.position(&id).await.map_err(domain_error)?;
            print_json(&position.ok_or_else(|| not_found(format!("position {id}")))?)
        }
        Command::Apply { position_id } => {
            let user = require_user(&service).await?;
            let position_id = PositionId::new(&position_id).map_err(invalid_input)?;
            let application = service
                .apply_for_position(user.id(), &position_id)
                .await
                .map_err(domain_error)?;
            print_json(&application)
        }
        Command::Applications => {
            let user = require_user(&service).await?;
            print_json(
                &service
                    .user_applications(user.id())
                    .await
                    .map_err(domain_error)?,
            )
        }
        Command::Summary => {
            let user = require_user(&service).await?;
            print_json(
                &service
                    .application_summary(user.id())
                    .await
                    .map_err(domain_error)?,
            )
        }
        Command::SetStatus {
            application_id,
            status,
        } => {
            let id = ApplicationId::new(&application_id).map_err(invalid_input)?;
            let updated = service
                .update_application_status(&id, status)
                .await
                .map_err(domain_error)?;
            print_json(&updated.ok_or_else(|| not_found(format!("application {id}")))?)
        }
    }
}

async fn require_user(service: &PortalService) -> io::Result<User> {
    service.current_user().await.ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::PermissionDenied,
            "no active session; run `placement login` first",
        )
    })
}

fn print_json<T: Serialize>(value: &T) -> io::Result<()> {
    let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
    println!("{text}");
    Ok(())
}

fn domain_error(error: Error) -> io::Error {
    io::Error::other(format!("{:?}: {}", error.code(), error.message()))
}

fn invalid_input(error: impl std::error::Error + Send + Sync + 'static) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, error)
}

fn not_found(what: String) -> io::Error {
    io::Error::new(io::ErrorKind::NotFound, format!("{what} not found"))
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use rstest::rstest;

    use super::{Cli, Command};
    use placement_portal::domain::ApplicationStatus;

    #[rstest]
    fn set_status_parses_status_case_insensitively() {
        let cli = Cli::try_parse_from(["placement", "set-status", "3", "Selected"])
            .expect("arguments should parse");
        let Command::SetStatus {
            application_id,
            status,
        } = cli.command
        else {
            panic!("expected set-status");
        };
        assert_eq!(application_id, "3");
        assert_eq!(status, ApplicationStatus::Selected);
    }

    #[rstest]
    fn set_status_rejects_unknown_status() {
        assert!(Cli::try_parse_from(["placement", "set-status", "3", "hired"]).is_err());
    }

    #[rstest]
    fn register_requires_profile_fields() {
        assert!(
            Cli::try_parse_from(["placement", "register", "--name", "Ravi"]).is_err(),
            "email, roll number, branch and year are required"
        );
    }

    #[rstest]
    fn companies_accepts_optional_search() {
        let cli = Cli::try_parse_from(["placement", "companies", "--search", "bangalore"])
            .expect("arguments should parse");
        assert!(matches!(
            cli.command,
            Command::Companies { search: Some(term) } if term == "bangalore"
        ));
    }
}
