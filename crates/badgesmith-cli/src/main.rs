mod card;
mod cli;

use badgesmith::{BadgeRenderer, RasterError, Rasterizer};
use badgesmith_server::AppState;
use clap::Parser;
use cli::{Cli, Command, OutputFormat, RasterArgs, RenderArgs, ServeArgs};
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
enum CliError {
    Io(std::io::Error),
    Raster(RasterError),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Raster(err) => write!(f, "{err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<RasterError> for CliError {
    fn from(value: RasterError) -> Self {
        Self::Raster(value)
    }
}

fn build_renderer(raster: &RasterArgs) -> BadgeRenderer {
    BadgeRenderer::new(Rasterizer::detect()).with_raster_options(raster.to_options())
}

fn render(
    args: &RenderArgs,
    renderer: &BadgeRenderer,
    out: &mut impl std::io::Write,
) -> Result<(), CliError> {
    let spec = args.badge.to_spec();
    match OutputFormat::from_path(&args.out) {
        OutputFormat::Svg => {
            let svg = renderer.render_spec_svg(&spec);
            std::fs::write(&args.out, svg)?;
            writeln!(out, "SVG saved: {}", args.out.display())?;
        }
        OutputFormat::Png => {
            let bytes = renderer.render_spec_png(&spec)?;
            std::fs::write(&args.out, bytes)?;
            writeln!(out, "PNG saved: {}", args.out.display())?;
        }
    }
    Ok(())
}

fn serve(args: ServeArgs) -> Result<(), CliError> {
    let renderer = build_renderer(&args.raster);
    if !renderer.can_rasterize() {
        tracing::warn!("PNG output disabled: built without the `raster` feature");
    }
    let config = args.to_config();
    let app = badgesmith_server::router(AppState::new(renderer));

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(async move {
        let listener = badgesmith_server::bind(&config).await?;
        println!("Serving badges on http://{}", listener.local_addr()?);
        badgesmith_server::serve(listener, app).await
    })?;
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Render(args) => {
            let renderer = match OutputFormat::from_path(&args.out) {
                // No rasterizer needed; skip font discovery.
                OutputFormat::Svg => BadgeRenderer::default(),
                OutputFormat::Png => build_renderer(&args.raster),
            };
            render(&args, &renderer, &mut std::io::stdout().lock())
        }
        Command::Serve(args) => serve(args),
        Command::Card(args) => {
            let renderer = if args.svg {
                BadgeRenderer::default()
            } else {
                build_renderer(&args.raster)
            };
            let stdin = std::io::stdin();
            card::run(&args, &renderer, &mut stdin.lock(), &mut std::io::stdout().lock())?;
            Ok(())
        }
    }
}

fn init_tracing(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(match cli.command {
        Command::Serve(_) => "info",
        _ => "warn",
    });

    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
