//! fbwall CLI - Render a Facebook Page wall
//!
//! Fetches a page feed and writes the widget HTML to stdout or a file.

mod config;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::Password;
use fbwall::{embed_page, FacebookWall, WALL_SCRIPT};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use config::Config;

#[derive(Parser)]
#[command(name = "fbwall")]
#[command(about = "fbwall CLI - Render a Facebook Page wall to HTML", long_about = None)]
#[command(version)]
struct Cli {
    /// Log requests to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Store a Graph API access token
    Login {
        /// Access token (will prompt if not provided)
        #[arg(short, long)]
        token: Option<String>,
    },

    /// Manage page shortcuts
    Page {
        #[command(subcommand)]
        action: PageAction,
    },

    /// Render the wall as HTML
    Render {
        #[command(flatten)]
        target: Target,
        /// Language (en, de)
        #[arg(short, long)]
        lang: Option<String>,
        /// Number of posts to request
        #[arg(short = 'n', long)]
        limit: Option<u32>,
        /// Include posts by other authors
        #[arg(long)]
        all_posts: bool,
        /// Hide comments
        #[arg(long)]
        no_comments: bool,
        /// Hide likes
        #[arg(long)]
        no_likes: bool,
        /// Wrap in #fb-wall and append the toggle script
        #[arg(short, long)]
        embed: bool,
        /// Write to file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Dump the raw feed JSON (HTML-escaped, inside <pre>)
    Raw {
        #[command(flatten)]
        target: Target,
    },

    /// Print the client-side toggle script
    Script,

    /// Show current configuration
    Config,
}

#[derive(clap::Args)]
struct Target {
    /// Page shortcut or page id (defaults to the default page)
    #[arg(short, long)]
    page: Option<String>,
    /// Access token (overrides the stored token)
    #[arg(short, long, env = "FBWALL_ACCESS_TOKEN")]
    token: Option<String>,
}

#[derive(Subcommand)]
enum PageAction {
    /// Add a page shortcut
    Add {
        /// Shortcut name (e.g., "band")
        name: String,
        /// Facebook page id
        #[arg(long)]
        id: String,
        /// Display name (optional)
        #[arg(long)]
        display_name: Option<String>,
    },
    /// List page shortcuts
    List,
    /// Set default page
    Set {
        /// Shortcut name to set as default
        name: String,
    },
    /// Remove a page shortcut
    Remove {
        /// Shortcut name to remove
        name: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fbwall=debug")),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    match cli.command {
        Commands::Login { token } => cmd_login(token).await,
        Commands::Page { action } => cmd_page(action),
        Commands::Render {
            target,
            lang,
            limit,
            all_posts,
            no_comments,
            no_likes,
            embed,
            out,
        } => {
            let overrides = RenderOverrides {
                lang,
                limit,
                all_posts,
                no_comments,
                no_likes,
            };
            cmd_render(target, overrides, embed, out).await
        }
        Commands::Raw { target } => cmd_raw(target).await,
        Commands::Script => {
            print!("{}", WALL_SCRIPT);
            Ok(())
        }
        Commands::Config => cmd_config(),
    }
}

// ============================================
// Command Implementations
// ============================================

struct RenderOverrides {
    lang: Option<String>,
    limit: Option<u32>,
    all_posts: bool,
    no_comments: bool,
    no_likes: bool,
}

async fn cmd_login(token: Option<String>) -> Result<()> {
    let mut config = Config::load()?;

    let access_token = match token {
        Some(t) => t,
        None => Password::new()
            .with_prompt("Access token")
            .interact()
            .context("Failed to read access token")?,
    };

    // Test the token against the default page, if there is one
    if let Some(page_id) = config.resolve_page_id(None) {
        eprint!("Testing token against page {}... ", page_id);
        let options = config.wall_options()?.with_num_posts(1);
        let wall = FacebookWall::new(&page_id, &access_token).with_options(options);

        match wall.raw_dump().await {
            Ok(_) => eprintln!("{}", "OK".green()),
            Err(e) => {
                eprintln!("{}", "Failed".red());
                bail!("Token rejected: {}", e);
            }
        }
    }

    config.set_access_token(access_token);
    config.save()?;

    eprintln!("{} Access token saved to {:?}", "✓".green(), Config::config_path()?);

    if config.pages.is_empty() {
        eprintln!("\n{}", "Tip: Add a page shortcut:".yellow());
        eprintln!("  fbwall page add band --id <PAGE_ID>");
    }

    Ok(())
}

fn cmd_page(action: PageAction) -> Result<()> {
    let mut config = Config::load()?;

    match action {
        PageAction::Add {
            name,
            id,
            display_name,
        } => {
            config.add_page(name.clone(), id.clone(), display_name);
            config.save()?;
            eprintln!("{} Page '{}' added ({})", "✓".green(), name, id);
        }

        PageAction::List => {
            if config.pages.is_empty() {
                println!("No pages configured.");
                println!("\n{}", "Add one with:".dimmed());
                println!("  fbwall page add <name> --id <PAGE_ID>");
                return Ok(());
            }

            println!("{}", "Pages:".bold());
            for (name, page) in &config.pages {
                let is_default = config.default_page.as_ref() == Some(name);
                let default_marker = if is_default {
                    " (default)".green().to_string()
                } else {
                    String::new()
                };
                let display_name = page.name.as_deref().unwrap_or("-");

                println!(
                    "  {} {} ({}){}",
                    name.cyan(),
                    display_name.dimmed(),
                    page.page_id,
                    default_marker
                );
            }
        }

        PageAction::Set { name } => {
            if config.set_default_page(name.clone()) {
                config.save()?;
                eprintln!("{} Default page set to '{}'", "✓".green(), name);
            } else {
                bail!("Page '{}' not found", name);
            }
        }

        PageAction::Remove { name } => {
            if config.remove_page(&name) {
                config.save()?;
                eprintln!("{} Page '{}' removed", "✓".green(), name);
            } else {
                bail!("Page '{}' not found", name);
            }
        }
    }

    Ok(())
}

fn build_wall(config: &Config, target: Target) -> Result<FacebookWall> {
    let page_id = config
        .resolve_page_id(target.page.as_deref())
        .context("No page specified and no default page set. Use -p <page> or 'fbwall page add'.")?;
    let token = target
        .token
        .or_else(|| config.access_token.clone())
        .context("No access token. Run 'fbwall login' or pass --token.")?;

    tracing::debug!(page_id = %page_id, "Using page");
    let wall = FacebookWall::new(page_id, token).with_options(config.wall_options()?);
    Ok(wall)
}

async fn cmd_render(
    target: Target,
    overrides: RenderOverrides,
    embed: bool,
    out: Option<PathBuf>,
) -> Result<()> {
    let config = Config::load()?;
    let mut wall = build_wall(&config, target)?;

    if let Some(lang) = overrides.lang.as_deref() {
        if !wall.set_language(lang) {
            bail!("Unsupported language '{}' (use en or de)", lang);
        }
    }

    let mut flags = serde_json::Map::new();
    if let Some(limit) = overrides.limit {
        flags.insert("num_posts".into(), limit.into());
    }
    if overrides.all_posts {
        flags.insert("just_own_posts".into(), false.into());
    }
    if overrides.no_comments {
        flags.insert("show_comments".into(), false.into());
    }
    if overrides.no_likes {
        flags.insert("show_likes".into(), false.into());
    }
    wall.set_options(&serde_json::Value::Object(flags))?;

    let html = wall.render().await.context("Failed to render wall")?;
    let html = if embed { embed_page(&html) } else { html };

    match out {
        Some(path) => {
            fs::write(&path, &html)
                .with_context(|| format!("Failed to write {:?}", path))?;
            eprintln!(
                "{} Wall written to {:?} ({} bytes)",
                "✓".green(),
                path,
                html.len()
            );
        }
        None => println!("{}", html),
    }

    Ok(())
}

async fn cmd_raw(target: Target) -> Result<()> {
    let config = Config::load()?;
    let wall = build_wall(&config, target)?;

    let dump = wall.raw_dump().await.context("Failed to fetch feed")?;
    println!("{}", dump);

    Ok(())
}

/// Mask a secret, keeping a short prefix for recognition
fn mask(secret: &str) -> String {
    let prefix: String = secret.chars().take(4).collect();
    if secret.chars().count() > 4 {
        format!("{}...", prefix)
    } else {
        "****".to_string()
    }
}

fn cmd_config() -> Result<()> {
    let config = Config::load()?;
    let options = config.wall_options()?;

    println!("{}", "Configuration:".bold());
    println!("  Path: {:?}", Config::config_path()?);
    println!(
        "  Access token: {}",
        match config.access_token.as_deref() {
            Some(token) => mask(token).green(),
            None => "Not set".red(),
        }
    );
    println!(
        "  Default page: {}",
        config.default_page.as_deref().unwrap_or("None").cyan()
    );
    println!("  Pages: {}", config.pages.len());
    println!("  Language: {}", options.lang);
    println!("  Posts: {}", options.num_posts);
    println!("  Graph URL: {}", options.graph_url);

    Ok(())
}
