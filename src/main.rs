mod cache;
mod config;
mod content;
mod generator;
mod renderer;
mod store;
mod types;
mod writer;

use anyhow::Result;
use clap::{Parser as ClapParser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cache::needs_write;
use crate::config::{load_config, MockgenConfig, DEFAULT_CONFIG_PATH};
use crate::generator::{generate, GeneratorOptions};
use crate::renderer::{OutputFormat, Renderer};
use crate::store::{PostStore, DEFAULT_FEATURED_LIMIT, DEFAULT_LATEST_LIMIT, DEFAULT_RELATED_LIMIT};
use crate::types::{Fixture, PostType};
use crate::writer::write_artifact;

#[derive(ClapParser)]
#[command(name = "mockgen")]
#[command(about = "Deterministic mock news fixtures for front-end development")]
#[command(version)]
struct Cli {
    /// Path to the config file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the fixture and write it out
    Generate {
        /// Output path (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format (overrides config)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Write even when the output is unchanged
        #[arg(long)]
        force: bool,
    },

    /// Print the post type distribution as a readable summary
    Stats,

    /// Run a lookup helper against freshly generated data
    #[command(subcommand)]
    Query(QueryCommand),
}

#[derive(Subcommand)]
enum QueryCommand {
    /// Posts in a category ("home" returns everything)
    Category { slug: String },

    /// Posts of one type (article, video, audio)
    Type { post_type: PostType },

    /// A single post by slug
    Slug { slug: String },

    /// First posts in generation order
    Featured {
        #[arg(short, long, default_value_t = DEFAULT_FEATURED_LIMIT)]
        limit: usize,
    },

    /// Most recently published posts
    Latest {
        #[arg(short, long, default_value_t = DEFAULT_LATEST_LIMIT)]
        limit: usize,
    },

    /// Other posts from the same category
    Related {
        post_id: u32,
        category_id: u32,
        #[arg(short, long, default_value_t = DEFAULT_RELATED_LIMIT)]
        limit: usize,
    },

    /// Increment a post's view count and show the result
    View { post_id: u32 },

    /// A mock user by email, or the default admin when omitted
    User { email: Option<String> },

    /// Post type counts as JSON, like the other lookups
    Stats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(&cli.config)?;

    match cli.command {
        Commands::Generate {
            output,
            format,
            force,
        } => {
            let output = output.unwrap_or_else(|| PathBuf::from(&config.output.path));
            let format = format.unwrap_or(config.output.format);
            generate_fixture(&config, &output, format, force)?;
        }
        Commands::Stats => {
            let store = PostStore::from(build_fixture(&config));
            print_stats(&store);
        }
        Commands::Query(query) => {
            run_query(&config, query)?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn build_fixture(config: &MockgenConfig) -> Fixture {
    let options = GeneratorOptions::from(&config.generation);
    generate(&options, &content::news_tables())
}

fn generate_fixture(
    config: &MockgenConfig,
    output: &Path,
    format: OutputFormat,
    force: bool,
) -> Result<()> {
    println!("Generating mock data...\n");

    let fixture = build_fixture(config);
    let rendered = Renderer::new()?.render(&fixture, format)?;

    // Home owns no posts
    let category_count = fixture.categories.iter().filter(|c| !c.is_home()).count();
    let store = PostStore::from(fixture);

    if write_output(output, &rendered, force)? {
        println!("📦 Wrote {}", output.display());
    } else {
        println!("⏭  Skipping (unchanged): {}", output.display());
    }

    println!(
        "\nGenerated {} posts across {} categories",
        store.posts().len(),
        category_count
    );
    print_stats(&store);
    println!("\n✅ Mock data file created successfully!");

    Ok(())
}

/// Returns false when an identical artifact was left in place
fn write_output(output: &Path, rendered: &str, force: bool) -> Result<bool> {
    if !force && !needs_write(output, rendered) {
        return Ok(false);
    }

    write_artifact(output, rendered)?;
    Ok(true)
}

fn print_stats(store: &PostStore) {
    let stats = store.post_type_stats();
    println!("Post type distribution:");
    println!("  Articles: {}", stats.article);
    println!("  Videos: {}", stats.video);
    println!("  Audio: {}", stats.audio);
    println!("  Total: {}", stats.total);
}

fn run_query(config: &MockgenConfig, query: QueryCommand) -> Result<()> {
    let mut store = PostStore::from(build_fixture(config));

    match query {
        QueryCommand::Category { slug } => print_json(&store.posts_by_category(&slug)),
        QueryCommand::Type { post_type } => print_json(&store.posts_by_type(post_type)),
        QueryCommand::Slug { slug } => print_json(&store.post_by_slug(&slug)),
        QueryCommand::Featured { limit } => print_json(&store.featured_posts(limit)),
        QueryCommand::Latest { limit } => print_json(&store.latest_posts(limit)),
        QueryCommand::Related {
            post_id,
            category_id,
            limit,
        } => print_json(&store.related_posts(post_id, category_id, limit)),
        QueryCommand::View { post_id } => print_json(&store.increment_view_count(post_id)),
        QueryCommand::User { email } => match email {
            Some(email) => print_json(&store.user_by_email(&email)),
            None => print_json(&store.default_user()),
        },
        QueryCommand::Stats => print_json(&store.post_type_stats()),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
