//! Rooli - A terminal client for the Rooli social-media scheduler
#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use rooli::api::{ApiClient, PostQuery};
use rooli::composer::Composer;
use rooli::models::{ContentType, Platform, PostStatus};
use rooli::schedule;
use rooli::{Config, Session};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging (RUST_LOG=debug for verbose output)
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match parse_args()? {
        Command::Login { email } => login(&email).await,
        Command::Logout => logout(),
        Command::Workspace { id } => switch_workspace(&id),
        Command::Connect { platform } => connect(&platform).await,
        Command::Profiles => list_profiles().await,
        Command::Compose(args) => compose(args).await,
        Command::Posts(query) => list_posts(query).await,
        Command::Show { id } => show_post(&id).await,
        Command::Delete { id } => delete_post(&id).await,
        Command::Help => {
            print_help();
            Ok(())
        }
        Command::Version => {
            println!("rooli {}", rooli::VERSION);
            Ok(())
        }
    }
}

/// CLI commands
enum Command {
    Login { email: String },
    Logout,
    Workspace { id: String },
    Connect { platform: String },
    Profiles,
    Compose(ComposeArgs),
    Posts(PostQuery),
    Show { id: String },
    Delete { id: String },
    Help,
    Version,
}

/// Arguments to the compose command
struct ComposeArgs {
    content: String,
    to: Vec<String>,
    at: Option<String>,
    timezone: Option<String>,
    content_type: Option<String>,
    media: Vec<String>,
    overrides: Vec<(String, String)>,
    auto: bool,
    dry_run: bool,
}

fn parse_args() -> Result<Command> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() == 1 {
        return Ok(Command::Help);
    }

    match args[1].as_str() {
        "-h" | "--help" | "help" => Ok(Command::Help),
        "-v" | "--version" | "version" => Ok(Command::Version),

        "login" => {
            let email = args
                .get(2)
                .ok_or_else(|| anyhow::anyhow!("Missing email\nUsage: rooli login <email>"))?
                .clone();
            Ok(Command::Login { email })
        }

        "logout" => Ok(Command::Logout),

        "workspace" | "ws" => {
            let id = args
                .get(2)
                .ok_or_else(|| anyhow::anyhow!("Missing workspace id\nUsage: rooli workspace <id>"))?
                .clone();
            Ok(Command::Workspace { id })
        }

        "connect" => {
            let platform = args
                .get(2)
                .ok_or_else(|| {
                    anyhow::anyhow!("Missing platform (twitter, instagram, facebook, linkedin)")
                })?
                .clone();
            Ok(Command::Connect { platform })
        }

        "profiles" => Ok(Command::Profiles),

        "compose" | "post" => {
            let content = args
                .get(2)
                .ok_or_else(|| anyhow::anyhow!("Missing post content"))?
                .clone();

            let mut compose = ComposeArgs {
                content,
                to: Vec::new(),
                at: None,
                timezone: None,
                content_type: None,
                media: Vec::new(),
                overrides: Vec::new(),
                auto: false,
                dry_run: false,
            };

            let mut i = 3;
            while i < args.len() {
                match args[i].as_str() {
                    "--to" | "-t" => {
                        if let Some(ids) = args.get(i + 1) {
                            compose.to.extend(ids.split(',').map(String::from));
                        }
                        i += 2;
                    }
                    "--at" | "-a" => {
                        compose.at = args.get(i + 1).cloned();
                        i += 2;
                    }
                    "--tz" => {
                        compose.timezone = args.get(i + 1).cloned();
                        i += 2;
                    }
                    "--type" => {
                        compose.content_type = args.get(i + 1).cloned();
                        i += 2;
                    }
                    "--media" | "-m" => {
                        if let Some(path) = args.get(i + 1) {
                            compose.media.push(path.clone());
                        }
                        i += 2;
                    }
                    "--override" | "-o" => {
                        let pair = args.get(i + 1).ok_or_else(|| {
                            anyhow::anyhow!("--override needs <profile-id>=<content>")
                        })?;
                        let (id, text) = pair.split_once('=').ok_or_else(|| {
                            anyhow::anyhow!("--override needs <profile-id>=<content>")
                        })?;
                        compose.overrides.push((id.to_string(), text.to_string()));
                        i += 2;
                    }
                    "--auto" => {
                        compose.auto = true;
                        i += 1;
                    }
                    "--dry-run" => {
                        compose.dry_run = true;
                        i += 1;
                    }
                    other => {
                        return Err(anyhow::anyhow!("Unknown compose option: {other}"));
                    }
                }
            }

            Ok(Command::Compose(compose))
        }

        "posts" => {
            let mut query = PostQuery::default();
            let mut i = 2;
            while i < args.len() {
                match args[i].as_str() {
                    "--status" | "-s" => {
                        let value = args
                            .get(i + 1)
                            .ok_or_else(|| anyhow::anyhow!("--status needs a value"))?;
                        query.status = Some(PostStatus::from_str(value).ok_or_else(|| {
                            anyhow::anyhow!(
                                "Unknown status: {value} (draft, scheduled, pending_approval, publishing, published, failed)"
                            )
                        })?);
                        i += 2;
                    }
                    "--type" => {
                        let value = args
                            .get(i + 1)
                            .ok_or_else(|| anyhow::anyhow!("--type needs a value"))?;
                        query.content_type = Some(ContentType::from_str(value).ok_or_else(
                            || anyhow::anyhow!("Unknown content type: {value} (post, reel, story, thread)"),
                        )?);
                        i += 2;
                    }
                    "--search" | "-q" => {
                        query.search = args.get(i + 1).cloned();
                        i += 2;
                    }
                    "--page" => {
                        query.page = args.get(i + 1).and_then(|s| s.parse().ok());
                        i += 2;
                    }
                    "--limit" | "-l" => {
                        query.limit = args.get(i + 1).and_then(|s| s.parse().ok());
                        i += 2;
                    }
                    other => {
                        return Err(anyhow::anyhow!("Unknown posts option: {other}"));
                    }
                }
            }
            Ok(Command::Posts(query))
        }

        "show" => {
            let id = args
                .get(2)
                .ok_or_else(|| anyhow::anyhow!("Missing post id\nUsage: rooli show <id>"))?
                .clone();
            Ok(Command::Show { id })
        }

        "delete" | "rm" => {
            let id = args
                .get(2)
                .ok_or_else(|| anyhow::anyhow!("Missing post id\nUsage: rooli delete <id>"))?
                .clone();
            Ok(Command::Delete { id })
        }

        other => Err(anyhow::anyhow!(
            "Unknown command: {other}\nRun 'rooli --help' for usage"
        )),
    }
}

/// Load config and an authenticated API client + session
fn authed_client() -> Result<(Config, Session, ApiClient)> {
    let config = Config::load()?;
    let session = Session::load()?;
    let token = session
        .access_token
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("Not logged in. Run: rooli login <email>"))?;
    let api = ApiClient::with_token(&config.api_base_url, token);
    Ok((config, session, api))
}

async fn login(email: &str) -> Result<()> {
    let config = Config::load()?;

    println!("Password for {email}:");
    let mut password = String::new();
    std::io::stdin().read_line(&mut password)?;
    let password = password.trim();

    let api = ApiClient::new(&config.api_base_url);
    let response = api.login(email, password).await?;

    let mut session = Session::load().unwrap_or_default();
    let name = response.user.full_name();
    session.login(response.access_token, response.refresh_token, response.user);
    session.organization_id = response.organization_id;
    session.save()?;

    println!("✓ Logged in as {name}");
    if session.workspace_id.is_none() {
        println!("Pick a workspace with: rooli workspace <id>");
    }
    Ok(())
}

fn logout() -> Result<()> {
    let mut session = Session::load().unwrap_or_default();
    session.clear();
    session.save()?;
    println!("✓ Logged out");
    Ok(())
}

fn switch_workspace(id: &str) -> Result<()> {
    let mut session = Session::load()?;
    session.switch_workspace(id);
    session.save()?;
    println!("✓ Workspace set to {id}");
    Ok(())
}

async fn connect(platform: &str) -> Result<()> {
    let platform = Platform::from_str(platform)
        .ok_or_else(|| anyhow::anyhow!("Unknown platform: {platform}"))?;
    let (_, session, api) = authed_client()?;
    let organization_id = session
        .organization_id
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("No organization on this session. Log in again."))?;

    let url = api.connect_auth_url(platform, organization_id).await?;

    println!("{} Connect your {} account:", platform.emoji(), platform.name());
    println!("\n  {url}\n");
    if open::that(&url).is_ok() {
        println!("Opened in your browser. Finish the flow there.");
    }
    Ok(())
}

async fn list_profiles() -> Result<()> {
    let (_, session, api) = authed_client()?;
    let workspace = session.require_workspace()?;
    let profiles = api.social_profiles(workspace).await?;

    if profiles.is_empty() {
        println!("No profiles connected.");
        println!("\nConnect one with: rooli connect <platform>");
        return Ok(());
    }

    println!("Connected profiles:\n");
    for profile in profiles {
        let state = if profile.is_active { "" } else { " (inactive)" };
        println!("  {}{}\n    id: {}", profile.label(), state, profile.id);
    }
    Ok(())
}

async fn compose(args: ComposeArgs) -> Result<()> {
    let (config, session, api) = authed_client()?;
    let workspace = session.require_workspace()?;
    let profiles = api.social_profiles(workspace).await?;

    let mut composer = Composer::new(config.limits.clone());

    if args.to.is_empty() {
        return Err(anyhow::anyhow!(
            "No destinations. Pass --to <profile-id>[,<profile-id>...] (see 'rooli profiles')"
        ));
    }
    for wanted in &args.to {
        let profile = profiles
            .iter()
            .find(|p| &p.id == wanted || &p.username == wanted)
            .ok_or_else(|| anyhow::anyhow!("No connected profile matches '{wanted}'"))?;
        composer.select_profile(profile);
    }

    composer.set_content(args.content);

    let kind = match &args.content_type {
        Some(kind) => ContentType::from_str(kind)
            .ok_or_else(|| anyhow::anyhow!("Unknown content type: {kind}"))?,
        None => config.default_content_type,
    };
    composer.set_content_type(kind);
    composer.set_timezone(args.timezone.unwrap_or_else(|| config.timezone.clone()));
    if let Some(at) = &args.at {
        composer.set_scheduled_at(schedule::parse_schedule_time(at)?);
    }
    composer.set_auto_schedule(args.auto);

    for path in &args.media {
        let media = api.upload_media(workspace, std::path::Path::new(path)).await?;
        println!("✓ Uploaded {} ({})", media.original_name, media.mime_type);
        composer.attach_media(media.id);
    }

    for (profile_id, text) in &args.overrides {
        composer.set_override(profile_id, text.clone());
    }

    print_preview(&composer);

    composer.validate(&config.timezones)?;
    let payload = composer.payload();

    if args.dry_run {
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    let post = api.create_post(workspace, &payload).await?;
    println!(
        "✓ {} scheduled for {} ({})",
        post.content_type.label(),
        post.scheduled_time_display(),
        post.time_until()
    );
    println!("  id: {}", post.id);
    Ok(())
}

/// Show how the draft will be posted before submitting it
fn print_preview(composer: &Composer) {
    let draft = composer.draft();

    println!("\nRoot post ({} chars):", draft.content.chars().count());
    println!("  {}", draft.content);

    for (i, segment) in draft.threads.iter().enumerate() {
        println!(
            "Thread {}/{} ({} chars, {} media):",
            i + 1,
            draft.threads.len(),
            segment.content.chars().count(),
            segment.media_ids.len()
        );
        println!("  {}", segment.content);
    }

    for warning in composer.warnings() {
        println!("⚠ {warning}");
    }
    println!();
}

async fn list_posts(query: PostQuery) -> Result<()> {
    let (_, session, api) = authed_client()?;
    let workspace = session.require_workspace()?;
    let posts = api.posts(workspace, &query).await?;

    if posts.is_empty() {
        println!("No posts found.");
        return Ok(());
    }

    for post in posts {
        println!(
            "{} {} · {} · {}",
            post.status.emoji(),
            post.scheduled_time_display(),
            post.content_type.label(),
            post.preview(60)
        );
        println!("  id: {}", post.id);
    }
    Ok(())
}

async fn show_post(id: &str) -> Result<()> {
    let (_, session, api) = authed_client()?;
    let workspace = session.require_workspace()?;
    let post = api.post(workspace, id).await?;

    println!("{} {} {}", post.status.emoji(), post.status.as_str(), post.id);
    println!("Scheduled: {} ({})", post.scheduled_time_display(), post.time_until());
    println!("Timezone:  {}", post.timezone);
    println!("Profiles:  {}", post.social_profile_ids.join(", "));
    if !post.media_ids.is_empty() {
        println!("Media:     {}", post.media_ids.join(", "));
    }
    println!("\n{}", post.content);
    Ok(())
}

async fn delete_post(id: &str) -> Result<()> {
    let (_, session, api) = authed_client()?;
    let workspace = session.require_workspace()?;
    api.delete_post(workspace, id).await?;
    println!("✓ Deleted {id}");
    Ok(())
}

fn print_help() {
    let config_path = Config::default_path()
        .map_or_else(|_| "Unknown".to_string(), |p| p.display().to_string());

    println!(
        r#"{}
📆 Rooli - schedule posts across your social profiles

USAGE:
    rooli [COMMAND]

COMMANDS:
    login <email>                      Log in to the backend
    logout                             Clear the local session
    workspace <id>                     Select the workspace to operate on
    connect <platform>                 Connect a social account (opens browser)
    profiles                           List connected social profiles

    compose <content> [OPTIONS]        Schedule a post
      Options:
        -t, --to <ids>                 Comma-separated profile ids (required)
        -a, --at <time>                Schedule time ('in 2h', '15:00', '2026-03-01 09:00')
        --tz <timezone>                IANA timezone (default from config)
        --type <kind>                  post, reel, story or thread (default: post)
        -m, --media <path>             Attach a file (repeatable)
        -o, --override <id>=<text>     Per-profile content override (repeatable)
        --auto                         Let the backend pick the slot
        --dry-run                      Print the payload instead of submitting
      Examples:
        rooli compose "Hello!" --to prof_123 --at "in 2h"
        rooli compose "Long announcement..." --to prof_123,prof_456 --at 15:00

    posts [OPTIONS]                    List scheduled posts
      Options:
        -s, --status <status>          Filter by status
        --type <kind>                  Filter by content type
        -q, --search <text>            Free-text search
        --page <n>, -l, --limit <n>    Pagination

    show <id>                          Show one post
    delete <id>                        Delete a post

OPTIONS:
    -h, --help                         Show this help message
    -v, --version                      Show version information

CONFIG:
    {}
"#,
        rooli::LOGO,
        config_path
    );
}
