use clap::{Parser, Subcommand};
use color_harmony::{
    describe, get_contrast, simulate_hex, ColorEntry, CvdMode, HarmonyMode, HexColor,
    PaletteSettings, PaletteSize,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use hueforge::api;
use hueforge::assets::{AssetCategory, AssetLoader};
use hueforge::models::{self, AppConfig, GeneratedPalette};
use hueforge::rendering::{ExportOptions, PaletteRenderer};
use hueforge::server;
use hueforge::services::{ColorSuggester, GeminiClient};

#[derive(Parser)]
#[command(name = "hueforge")]
#[command(about = "Hueforge - color harmony and accessibility engine")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Generate a palette and print it
    Generate {
        /// Base color (e.g. "#3366CC"); config default when omitted
        #[arg(short, long)]
        base: Option<String>,

        /// Harmony mode: golden-ratio, analogous, complementary, triadic, monochromatic
        #[arg(short, long)]
        mode: Option<String>,

        /// Number of colors (3-9)
        #[arg(short, long)]
        size: Option<usize>,

        /// Keep this color locked at the next position (repeatable)
        #[arg(short, long = "lock", value_name = "HEX")]
        locks: Vec<String>,

        /// Print the palette as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show WCAG contrast for a color
    Contrast {
        /// Color as #RRGGBB
        hex: String,
    },
    /// Simulate a color vision deficiency
    Simulate {
        /// Color as #RRGGBB
        hex: String,

        /// Vision mode: protanopia, deuteranopia, tritanopia, achromatopsia
        #[arg(short, long, default_value = "none")]
        mode: String,
    },
    /// Generate a palette and export it as PNG
    Export {
        /// Base color (e.g. "#3366CC"); config default when omitted
        #[arg(short, long)]
        base: Option<String>,

        /// Harmony mode
        #[arg(short, long)]
        mode: Option<String>,

        /// Number of colors (3-9)
        #[arg(short, long)]
        size: Option<usize>,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,

        /// Pixel density multiplier (1-4)
        #[arg(long)]
        scale: Option<u32>,

        /// Render without background and padding
        #[arg(long)]
        transparent: bool,
    },
    /// Ask the AI service for a palette
    Suggest {
        /// Describe the palette in words
        #[arg(short, long, conflicts_with = "image", required_unless_present = "image")]
        prompt: Option<String>,

        /// Extract the palette from an image file
        #[arg(short, long)]
        image: Option<PathBuf>,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hueforge API",
        description = "Color harmony generation, WCAG contrast and color vision simulation",
        version = "0.3.0",
        license(name = "MIT")
    ),
    paths(
        api::handle_generate,
        api::handle_edit,
        api::handle_describe,
        api::handle_export,
        api::handle_contrast,
        api::handle_simulate,
        api::handle_text_suggestion,
        api::handle_image_suggestion,
    ),
    components(schemas(
        api::GenerateRequest,
        api::EditOp,
        api::EditRequest,
        api::PaletteResponse,
        api::DescribeRequest,
        api::DescribeResponse,
        api::ExportRequest,
        api::SimulateResponse,
        api::TextSuggestionRequest,
        api::ImageSuggestionRequest,
        models::ColorRecord,
        models::SettingsRecord,
        models::GeneratedPalette,
        models::AccessibilityRecord,
        models::SwatchRecord,
    )),
    tags(
        (name = "Palette", description = "Palette generation, editing and export"),
        (name = "Metrics", description = "Contrast and color vision simulation"),
        (name = "AI", description = "Generative palette suggestions")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve) => run_server().await,
        Some(Commands::Generate {
            base,
            mode,
            size,
            locks,
            json,
        }) => run_generate_command(base, mode, size, &locks, json),
        Some(Commands::Contrast { hex }) => run_contrast_command(&hex),
        Some(Commands::Simulate { hex, mode }) => run_simulate_command(&hex, &mode),
        Some(Commands::Export {
            base,
            mode,
            size,
            output,
            scale,
            transparent,
        }) => run_export_command(base, mode, size, &output, scale, transparent),
        Some(Commands::Suggest { prompt, image }) => run_suggest_command(prompt, image).await,
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Minimal logging for one-shot commands
fn init_cli_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hueforge=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

/// Resolve CLI overrides against the configured defaults
fn resolve_settings(
    config: &AppConfig,
    base: Option<String>,
    mode: Option<String>,
    size: Option<usize>,
) -> anyhow::Result<PaletteSettings> {
    let base = base
        .map(|b| b.trim().parse::<HexColor>())
        .transpose()
        .map_err(|e| anyhow::anyhow!("Invalid base color: {e}"))?;
    let mode = mode
        .map(|m| m.parse::<HarmonyMode>())
        .transpose()
        .map_err(|e| anyhow::anyhow!("Invalid harmony mode: {e}"))?;
    let size = size
        .map(PaletteSize::new)
        .transpose()
        .map_err(|e| anyhow::anyhow!("Invalid size: {e}"))?;

    Ok(config.defaults.settings(mode, size, base))
}

/// Generate a palette and print it (no server needed)
fn run_generate_command(
    base: Option<String>,
    mode: Option<String>,
    size: Option<usize>,
    locks: &[String],
    json: bool,
) -> anyhow::Result<()> {
    init_cli_tracing();

    let config = AppConfig::load_from_assets(&AssetLoader::from_env());
    let settings = resolve_settings(&config, base, mode, size)?;

    let current = locks
        .iter()
        .map(|hex| {
            hex.trim()
                .parse::<HexColor>()
                .map(|h| ColorEntry::new(h).locked())
                .map_err(|e| anyhow::anyhow!("Invalid locked color {hex:?}: {e}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let colors = settings.generate(&current);

    if json {
        let palette = GeneratedPalette::new(&colors, settings);
        println!("{}", serde_json::to_string_pretty(&palette)?);
        return Ok(());
    }

    println!(
        "{} palette from {} ({} colors)\n",
        settings.harmony,
        settings.base_color,
        colors.len()
    );
    for swatch in describe(&colors, CvdMode::None) {
        let stats = swatch.accessibility;
        println!(
            "  {}  {:>5.2}:1  {:<4}  {} text{}",
            swatch.entry.hex,
            stats.contrast,
            stats.level,
            stats.text_color,
            if swatch.entry.locked { "  [locked]" } else { "" }
        );
    }

    Ok(())
}

/// Print WCAG contrast for one color
fn run_contrast_command(hex: &str) -> anyhow::Result<()> {
    init_cli_tracing();

    let stats = get_contrast(hex.trim()).map_err(|e| anyhow::anyhow!("Invalid color: {e}"))?;
    println!("Contrast: {:.2}:1", stats.contrast);
    println!("Level:    {}", stats.level);
    println!("Text:     {}", stats.text_color);

    Ok(())
}

/// Print the simulated color for one vision mode
fn run_simulate_command(hex: &str, mode: &str) -> anyhow::Result<()> {
    init_cli_tracing();

    let mode: CvdMode = mode.parse()?;
    println!("{}", simulate_hex(hex.trim(), mode));

    Ok(())
}

/// Generate a palette and write it to a PNG file
fn run_export_command(
    base: Option<String>,
    mode: Option<String>,
    size: Option<usize>,
    output: &Path,
    scale: Option<u32>,
    transparent: bool,
) -> anyhow::Result<()> {
    init_cli_tracing();

    let loader = AssetLoader::from_env();
    let config = AppConfig::load_from_assets(&loader);
    let settings = resolve_settings(&config, base, mode, size)?;
    let colors = settings.generate(&[]);

    let renderer = PaletteRenderer::from_assets(&loader, config.export)?;
    let defaults = renderer.default_options();
    let options = ExportOptions {
        scale: scale.unwrap_or(defaults.scale),
        transparent: transparent || defaults.transparent,
    };

    let png_bytes = renderer.render_png(&colors, options)?;
    std::fs::write(output, &png_bytes)?;
    println!("Exported {} ({} bytes)", output.display(), png_bytes.len());

    Ok(())
}

/// Data URL header for an image file, guessed from its extension
fn image_data_url_prefix(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => "data:image/jpeg;base64,",
        Some("webp") => "data:image/webp;base64,",
        _ => "data:image/png;base64,",
    }
}

/// Ask the AI service for colors and print them
async fn run_suggest_command(prompt: Option<String>, image: Option<PathBuf>) -> anyhow::Result<()> {
    use base64::Engine;

    init_cli_tracing();

    let config = AppConfig::load_from_assets(&AssetLoader::from_env());
    let client = GeminiClient::from_env(config.ai)?;
    if !client.has_api_key() {
        anyhow::bail!("GEMINI_API_KEY is not set");
    }

    let suggested = match (prompt, image) {
        (Some(prompt), _) => client.text_to_colors(&prompt).await,
        (None, Some(path)) => {
            let bytes = std::fs::read(&path)?;
            let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
            let data_url = format!("{}{encoded}", image_data_url_prefix(&path));
            client.image_to_colors(&data_url).await
        }
        (None, None) => anyhow::bail!("Either --prompt or --image is required"),
    };

    let colors = color_harmony::palette_from_hexes(&suggested);
    if colors.is_empty() {
        println!("No colors suggested.");
        return Ok(());
    }
    for color in &colors {
        println!("{}", color.hex);
    }

    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    // Read environment variables
    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();
    let fonts_dir = std::env::var("FONTS_DIR").ok();
    let has_key = ["GEMINI_API_KEY", "API_KEY"]
        .iter()
        .any(|name| std::env::var(name).is_ok_and(|v| !v.trim().is_empty()));

    // Header
    println!("Hueforge v{VERSION}");
    println!("Color harmony and accessibility engine\n");

    // Environment variables section
    println!("Environment Variables:");
    println!(
        "  BIND_ADDR      = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:3000 (default)")
    );
    println!(
        "  CONFIG_FILE    = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  FONTS_DIR      = {}",
        fonts_dir.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  GEMINI_API_KEY = {}",
        if has_key { "(set)" } else { "(not set)" }
    );

    // Asset sources section
    let loader = AssetLoader::new(
        fonts_dir.clone().map(PathBuf::from),
        config_file.map(PathBuf::from),
    );
    let fonts_count = loader.get_fonts().len();

    println!("\nAsset Sources:");
    println!("  Config:    {}", loader.config_source());
    println!(
        "  Templates: embedded ({})",
        AssetLoader::list_embedded(AssetCategory::Templates).join(", ")
    );
    match fonts_dir {
        Some(path) => println!(
            "  Fonts:     {path} ({fonts_count} {}) + system",
            if fonts_count == 1 { "file" } else { "files" }
        ),
        None => println!("  Fonts:     system"),
    }

    // Commands section
    println!("\nCommands:");
    println!("  hueforge serve      Start the HTTP server");
    println!("  hueforge generate   Generate a palette");
    println!("  hueforge contrast   Show WCAG contrast for a color");
    println!("  hueforge simulate   Simulate color vision deficiency");
    println!("  hueforge export     Export a palette as PNG");
    println!("  hueforge suggest    Ask the AI service for a palette");
    println!("\nRun 'hueforge --help' for more details.");
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hueforge=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let asset_loader = Arc::new(AssetLoader::from_env());

    tracing::info!(
        config = %asset_loader.config_source(),
        fonts = asset_loader.get_fonts().len(),
        "Asset sources configured"
    );

    // Create application state using shared server module
    let state = server::create_app_state(asset_loader)?;

    // Build router: start with shared API routes, add production-only routes
    let app = server::build_router(state)
        // OpenAPI documentation (production only)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Hueforge server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
