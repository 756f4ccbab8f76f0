use clap::{Parser, Subcommand, ValueEnum};
use simple_blog::types::{BuildEnv, Manifest};
use simple_blog::{config, generate, output, scan};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

/// Build mode flag. Maps onto [`BuildEnv`] so the library stays clap-free.
#[derive(Clone, Copy, ValueEnum)]
enum EnvArg {
    Development,
    Production,
}

impl From<EnvArg> for BuildEnv {
    fn from(arg: EnvArg) -> Self {
        match arg {
            EnvArg::Development => BuildEnv::Development,
            EnvArg::Production => BuildEnv::Production,
        }
    }
}

#[derive(Parser)]
#[command(name = "simple-blog")]
#[command(about = "Static site generator for tag-organized blogs")]
#[command(long_about = "\
Static site generator for tag-organized blogs

Your content directory is the data source. Markdown files become pages,
tags partition them into sections, and every listing is derived from tag
membership plus file order.

Content structure:

  content/
  ├── config.toml                  # Site config (optional)
  ├── static/                      # Passthrough assets (see [passthrough])
  ├── posts/
  │   ├── 2026-01-05-hello.md      # Blog post (tagged 'posts')
  │   └── 2026-02-11-rust-tips.md
  ├── gifts/
  │   └── handmade-mug.md          # Gift entry (tagged 'pokloni')
  └── about.md                     # Standalone page (no section tags)

Front matter (all fields optional):

  ---
  title: Hello World
  date: 2026-01-05
  tags: [posts, rust]
  featured: true
  published: false
  ---

Development builds include unpublished items so drafts can be previewed;
production builds drop them and minify the HTML output.

Run 'simple-blog gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Directory for the intermediate manifest
    #[arg(long, default_value = ".simple-blog-temp", global = true)]
    temp_dir: PathBuf,

    /// Build mode: whether unpublished items are included and HTML minified
    #[arg(long, value_enum, default_value = "development", global = true)]
    env: EnvArg,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the content directory into a manifest
    Scan,
    /// Produce the HTML site from an existing manifest
    Generate,
    /// Run the full pipeline: scan → generate
    Build,
    /// Validate content and config without building
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let env: BuildEnv = cli.env.into();

    match cli.command {
        Command::Scan => {
            let manifest = scan::scan(&cli.source, env)?;
            write_manifest(&cli.temp_dir, &manifest)?;
            output::print_scan_output(&manifest);
        }
        Command::Generate => {
            let manifest_path = cli.temp_dir.join("manifest.json");
            let stats = generate::generate(&manifest_path, &cli.source, &cli.output)?;
            output::print_generate_output(&stats);
        }
        Command::Build => {
            println!("==> Stage 1: Scanning {}", cli.source.display());
            let manifest = scan::scan(&cli.source, env)?;
            write_manifest(&cli.temp_dir, &manifest)?;
            output::print_scan_output(&manifest);

            println!("==> Stage 2: Generating HTML → {}", cli.output.display());
            let stats =
                generate::generate_from_manifest(&manifest, &cli.source, &cli.output)?;
            output::print_generate_output(&stats);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let manifest = scan::scan(&cli.source, env)?;
            output::print_scan_output(&manifest);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

fn write_manifest(temp_dir: &std::path::Path, manifest: &Manifest) -> std::io::Result<()> {
    std::fs::create_dir_all(temp_dir)?;
    let json = serde_json::to_string_pretty(manifest)?;
    std::fs::write(temp_dir.join("manifest.json"), json)?;
    Ok(())
}
