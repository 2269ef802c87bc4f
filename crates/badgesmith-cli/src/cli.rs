use badgesmith::{
    BadgeSpec, DEFAULT_LABEL, DEFAULT_LEFT_COLOR, DEFAULT_MESSAGE, DEFAULT_RIGHT_COLOR,
    RasterOptions,
};
use badgesmith_server::ServerConfig;
use clap::{Args, Parser, Subcommand};
use std::net::IpAddr;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "badgesmith", version)]
#[command(about = "Render two-segment status badges to SVG/PNG, or serve them over HTTP")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render one badge to a file (`.png` writes PNG, anything else writes SVG)
    Render(RenderArgs),
    /// Serve `GET /api/badge` and a small HTML form
    Serve(ServeArgs),
    /// Prompt for a name and an award, then save the badge under a directory
    Card(CardArgs),
}

#[derive(Debug, Clone, Args)]
pub struct ColorArgs {
    /// Message (right segment) color
    #[arg(long, default_value = DEFAULT_RIGHT_COLOR)]
    pub color: String,

    /// Label (left segment) color
    #[arg(long, default_value = DEFAULT_LEFT_COLOR)]
    pub left_color: String,
}

#[derive(Debug, Clone, Args)]
pub struct BadgeArgs {
    #[arg(long, default_value = DEFAULT_LABEL)]
    pub label: String,

    #[arg(long, default_value = DEFAULT_MESSAGE)]
    pub message: String,

    #[command(flatten)]
    pub colors: ColorArgs,
}

impl BadgeArgs {
    pub fn to_spec(&self) -> BadgeSpec {
        BadgeSpec::new(self.label.as_str(), self.message.as_str())
            .with_left_color(self.colors.left_color.as_str())
            .with_right_color(self.colors.color.as_str())
    }
}

#[derive(Debug, Clone, Args)]
pub struct RasterArgs {
    /// Pixel scale for PNG output
    #[arg(long, default_value_t = 1.0, value_parser = parse_scale)]
    pub scale: f32,

    /// PNG background (`white`, `#rrggbb`, ...); transparent when omitted
    #[arg(long)]
    pub background: Option<String>,
}

impl RasterArgs {
    pub fn to_options(&self) -> RasterOptions {
        let options = RasterOptions::default().with_scale(self.scale);
        match self.background.as_deref().map(str::trim) {
            Some(bg) if !bg.is_empty() => options.with_background(bg),
            _ => options,
        }
    }
}

fn parse_scale(raw: &str) -> Result<f32, String> {
    let scale: f32 = raw.parse().map_err(|_| format!("`{raw}` is not a number"))?;
    if scale.is_finite() && scale > 0.0 {
        Ok(scale)
    } else {
        Err("scale must be a finite number > 0".to_string())
    }
}

#[derive(Debug, Clone, Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub badge: BadgeArgs,

    #[command(flatten)]
    pub raster: RasterArgs,

    /// Output file
    #[arg(short, long)]
    pub out: PathBuf,
}

#[derive(Debug, Clone, Args)]
pub struct ServeArgs {
    #[arg(long, default_value = "127.0.0.1")]
    pub host: IpAddr,

    #[arg(short, long, default_value_t = badgesmith_server::DEFAULT_PORT, env = "BADGESMITH_PORT")]
    pub port: u16,

    #[command(flatten)]
    pub raster: RasterArgs,
}

impl ServeArgs {
    pub fn to_config(&self) -> ServerConfig {
        ServerConfig::new(self.host, self.port)
    }
}

#[derive(Debug, Clone, Args)]
pub struct CardArgs {
    /// Directory the badge is written to (created when missing)
    #[arg(long, default_value = "badges")]
    pub dir: PathBuf,

    /// Write SVG instead of PNG
    #[arg(long)]
    pub svg: bool,

    #[command(flatten)]
    pub colors: ColorArgs,

    #[command(flatten)]
    pub raster: RasterArgs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Png,
}

impl OutputFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("png") => Self::Png,
            _ => Self::Svg,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(OutputFormat::from_path(Path::new("a.png")), OutputFormat::Png);
        assert_eq!(OutputFormat::from_path(Path::new("A.PNG")), OutputFormat::Png);
        assert_eq!(OutputFormat::from_path(Path::new("a.svg")), OutputFormat::Svg);
        assert_eq!(OutputFormat::from_path(Path::new("badge")), OutputFormat::Svg);
        assert_eq!(OutputFormat::from_path(Path::new("png")), OutputFormat::Svg);
    }

    #[test]
    fn render_defaults_to_build_passing() {
        let cli = Cli::try_parse_from(["badgesmith", "render", "--out", "x.svg"]).unwrap();
        let Command::Render(args) = cli.command else {
            panic!("expected render");
        };
        assert_eq!(args.badge.to_spec(), BadgeSpec::default());
        assert_eq!(args.raster.to_options(), RasterOptions::default());
    }

    #[test]
    fn color_is_the_message_color() {
        let cli = Cli::try_parse_from([
            "badgesmith",
            "render",
            "--out",
            "x.svg",
            "--color",
            "red",
            "--left-color",
            "#000",
        ])
        .unwrap();
        let Command::Render(args) = cli.command else {
            panic!("expected render");
        };
        let spec = args.badge.to_spec();
        assert_eq!(spec.right_color, "red");
        assert_eq!(spec.left_color, "#000");
    }

    #[test]
    fn rejects_bad_scale() {
        for scale in ["0", "-2", "abc", "inf"] {
            let res = Cli::try_parse_from(["badgesmith", "render", "-o", "x.png", "--scale", scale]);
            assert!(res.is_err(), "{scale}");
        }
    }

    #[test]
    fn blank_background_is_ignored() {
        let cli = Cli::try_parse_from([
            "badgesmith",
            "render",
            "-o",
            "x.png",
            "--background",
            "  ",
        ])
        .unwrap();
        let Command::Render(args) = cli.command else {
            panic!("expected render");
        };
        assert_eq!(args.raster.to_options().background, None);
    }
}
