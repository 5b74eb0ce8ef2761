use clap::{Args, Subcommand};
use jiff::SignedDuration;
use tally_app::auth::{JwtAuthService, UserId};

/// Lifetime of issued tokens when `--ttl-seconds` is omitted.
const DEFAULT_TTL_SECONDS: u32 = 86_400;

#[derive(Debug, Args)]
pub(crate) struct TokenCommand {
    #[command(subcommand)]
    command: TokenSubcommand,
}

#[derive(Debug, Subcommand)]
enum TokenSubcommand {
    Issue(IssueTokenArgs),
}

#[derive(Debug, Args)]
pub(crate) struct IssueTokenArgs {
    /// Caller id the token is issued for (24 hex characters)
    #[arg(long)]
    user_id: UserId,

    /// HMAC secret shared with the API server
    #[arg(long, env = "JWT_SECRET", hide_env_values = true)]
    jwt_secret: String,

    /// Token lifetime in seconds
    #[arg(long, default_value_t = DEFAULT_TTL_SECONDS)]
    ttl_seconds: u32,
}

pub(crate) fn run(command: TokenCommand) -> Result<(), String> {
    match command.command {
        TokenSubcommand::Issue(args) => issue(&args),
    }
}

fn issue(args: &IssueTokenArgs) -> Result<(), String> {
    if args.ttl_seconds == 0 {
        return Err("ttl-seconds must be greater than zero".to_string());
    }

    let service = JwtAuthService::new(&args.jwt_secret);

    let token = service
        .issue_token(
            args.user_id,
            SignedDuration::from_secs(i64::from(args.ttl_seconds)),
        )
        .map_err(|error| format!("failed to issue token: {error}"))?;

    println!("user_id: {}", args.user_id);
    println!("bearer_token: {token}");

    Ok(())
}
