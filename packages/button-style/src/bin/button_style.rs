//! Button Style CLI - Inspect presets and render descriptions.
//!
//! Prints JSON so hosts and scripts can preview exactly what a renderer
//! would receive for each state.

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use button_style::{
    ButtonStyle, InteractionState, LoadingPlacement, StyleRegistry, StyleSheet, StyleVariant,
};

#[derive(Parser)]
#[command(name = "button-style")]
#[command(about = "Button style presets - inspect render descriptions")]
#[command(version)]
struct Cli {
    /// Style sheet to load (defaults to $BUTTON_STYLE_FILE or the config dir)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available styles
    List,
    /// Render one state of a style
    Render {
        /// Style ID
        #[arg(short, long)]
        style: String,
        /// Render the pressed state
        #[arg(short, long)]
        pressed: bool,
        /// Render with the loading flag set
        #[arg(short, long)]
        loading: bool,
        /// Override the loading placement (loading styles only)
        #[arg(long)]
        placement: Option<LoadingPlacement>,
    },
    /// Render every press/loading combination of a style
    Matrix {
        /// Style ID
        #[arg(short, long)]
        style: String,
    },
    /// Show the placement to alignment table
    Placements,
}

/// JSON envelope for every command.
#[derive(Debug, Serialize)]
struct ApiResponse<T> {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }

    fn err(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let output = match load_registry(cli.config) {
        Ok(registry) => run(&registry, cli.command)?,
        Err(e) => {
            tracing::error!("Failed to load style sheet: {}", e);
            respond(ApiResponse::<()>::err(e.to_string()))?
        }
    };

    println!("{}", output);
    Ok(())
}

fn load_registry(path: Option<PathBuf>) -> button_style::Result<StyleRegistry> {
    let path = path.unwrap_or_else(StyleSheet::default_path);
    let sheet = StyleSheet::load_from_path(&path)?;
    StyleRegistry::with_sheet(&sheet)
}

fn respond<T: Serialize>(response: ApiResponse<T>) -> Result<String> {
    Ok(serde_json::to_string_pretty(&response)?)
}

fn run(registry: &StyleRegistry, command: Commands) -> Result<String> {
    match command {
        Commands::List => respond(ApiResponse::ok(json!({
            "styles": registry.list(),
        }))),
        Commands::Render {
            style,
            pressed,
            loading,
            placement,
        } => match lookup(registry, &style, placement) {
            Ok(button) => {
                let state = InteractionState::from(pressed);
                respond(ApiResponse::ok(json!({
                    "style": style,
                    "state": state,
                    "is_loading": loading,
                    "render": button.render_with_loading(state, loading),
                })))
            }
            Err(e) => respond(ApiResponse::<()>::err(e)),
        },
        Commands::Matrix { style } => match lookup(registry, &style, None) {
            Ok(button) => {
                let rows: Vec<_> = InteractionState::ALL
                    .into_iter()
                    .flat_map(|state| [false, true].map(|loading| (state, loading)))
                    .map(|(state, loading)| {
                        json!({
                            "state": state,
                            "is_loading": loading,
                            "render": button.render_with_loading(state, loading),
                        })
                    })
                    .collect();
                respond(ApiResponse::ok(json!({
                    "style": style,
                    "kind": button.kind(),
                    "states": rows,
                })))
            }
            Err(e) => respond(ApiResponse::<()>::err(e)),
        },
        Commands::Placements => {
            let rows: Vec<_> = LoadingPlacement::ALL
                .iter()
                .map(|p| {
                    json!({
                        "placement": p,
                        "alignment": p.alignment(),
                        "padding_edge": p.padding_edge(),
                    })
                })
                .collect();
            respond(ApiResponse::ok(json!({ "placements": rows })))
        }
    }
}

/// Find a style, applying a placement override to loading styles.
fn lookup(
    registry: &StyleRegistry,
    id: &str,
    placement: Option<LoadingPlacement>,
) -> std::result::Result<ButtonStyle, String> {
    let style = registry.require(id).map_err(|e| e.to_string())?;
    match (placement, style.variant) {
        (None, _) => Ok(style),
        (Some(placement), StyleVariant::Loading { .. }) => Ok(ButtonStyle::new(
            StyleVariant::Loading { placement },
            style.config,
        )),
        (Some(_), _) => Err(format!("Style {} is not a loading style", id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(output: &str) -> serde_json::Value {
        serde_json::from_str(output).unwrap()
    }

    #[test]
    fn test_render_bouncy_pressed() {
        let registry = StyleRegistry::new();
        let output = run(
            &registry,
            Commands::Render {
                style: "bouncy".into(),
                pressed: true,
                loading: false,
                placement: None,
            },
        )
        .unwrap();
        let value = parse(&output);
        assert_eq!(value["ok"], true);
        assert_eq!(value["data"]["render"]["vertical_offset"], -0.5);
    }

    #[test]
    fn test_placement_override_rejected_for_press_styles() {
        let registry = StyleRegistry::new();
        let output = run(
            &registry,
            Commands::Render {
                style: "growing".into(),
                pressed: false,
                loading: true,
                placement: Some(LoadingPlacement::Top),
            },
        )
        .unwrap();
        let value = parse(&output);
        assert_eq!(value["ok"], false);
    }

    #[test]
    fn test_placement_override_applies() {
        let registry = StyleRegistry::new();
        let style = lookup(&registry, "loading", Some(LoadingPlacement::Resize)).unwrap();
        assert_eq!(style.placement(), Some(LoadingPlacement::Resize));
    }

    #[test]
    fn test_matrix_covers_all_states() {
        let registry = StyleRegistry::new();
        let output = run(&registry, Commands::Matrix { style: "loading".into() }).unwrap();
        let value = parse(&output);
        assert_eq!(value["data"]["states"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_unknown_style() {
        let registry = StyleRegistry::new();
        let output = run(&registry, Commands::Matrix { style: "nope".into() }).unwrap();
        let value = parse(&output);
        assert_eq!(value["ok"], false);
        assert_eq!(value["error"], "Unknown style: nope");
    }

    #[test]
    fn test_placements_table() {
        let output = run(&StyleRegistry::new(), Commands::Placements).unwrap();
        let value = parse(&output);
        let rows = value["data"]["placements"].as_array().unwrap();
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[1]["placement"], "leading");
        assert_eq!(rows[1]["padding_edge"], "leading");
    }
}
