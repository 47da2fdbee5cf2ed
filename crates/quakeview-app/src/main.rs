//! Headless QUAKEVIEW driver.
//!
//! Fetches a seismic simulation for a user-chosen epicenter, plays the
//! wavefront animation for a while on the frame loop, and prints the final
//! geometry snapshot as JSON. The rendering layer proper consumes the same
//! snapshots through `SharedSnapshot`.

use std::time::Duration;

use clap::Parser;
use tracing::{error, info};

use quakeview_app::client::SimulationClient;
use quakeview_app::run_loop::spawn_frame_loop;
use quakeview_app::state::{shared_snapshot, LoopCommand};
use quakeview_core::commands::PlaybackCommand;
use quakeview_core::protocol::{City, SimulationRequest};
use quakeview_core::types::GeoPoint;
use quakeview_sim::controller::{ControllerConfig, VisualizationController};

#[derive(Parser, Debug)]
#[command(name = "quakeview")]
#[command(about = "Seismic wavefront visualization driver", long_about = None)]
struct Args {
    /// Epicenter latitude in degrees [-90, 90]
    #[arg(long, allow_hyphen_values = true)]
    lat: f64,

    /// Epicenter longitude in degrees [-180, 180]
    #[arg(long, allow_hyphen_values = true)]
    lon: f64,

    /// Earthquake magnitude [0, 10]
    #[arg(long, default_value = "6.3")]
    magnitude: f64,

    /// Hypocenter depth in km [0, 1000]
    #[arg(long, default_value = "10.0")]
    depth_km: f64,

    /// Base URL of the simulation service
    #[arg(long, default_value = "http://localhost:8080")]
    endpoint: String,

    /// Playback speed in simulated minutes per real second
    #[arg(long, default_value = "1.0")]
    speed: f64,

    /// How long to run playback before printing the snapshot (seconds)
    #[arg(long, default_value = "5.0")]
    duration_secs: f64,

    /// Ring resolution in points per ring
    #[arg(long, default_value = "180")]
    segments: usize,

    /// Response cache TTL in seconds
    #[arg(long, default_value = "600")]
    cache_ttl_secs: u64,
}

fn main() {
    let args = Args::parse();

    let env_filter = tracing_subscriber::EnvFilter::builder()
        .with_env_var("QUAKEVIEW_LOG")
        .with_default_directive("quakeview=info".parse().unwrap())
        .from_env_lossy();
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let request = SimulationRequest {
        lat: args.lat,
        lon: args.lon,
        depth_km: args.depth_km,
        magnitude: args.magnitude,
        cities: vec![
            City {
                name: "Bogotá".into(),
                lat: 4.711,
                lon: -74.0721,
            },
            City {
                name: "Tokio".into(),
                lat: 35.6762,
                lon: 139.6503,
            },
        ],
    };

    let mut client = SimulationClient::new(
        args.endpoint.clone(),
        Duration::from_secs(args.cache_ttl_secs),
    );
    let response = match client.simulate(&request) {
        Ok(response) => response,
        Err(err) => {
            error!("simulation request failed: {err}");
            std::process::exit(1);
        }
    };
    info!(
        has_rings = response.rings.is_some(),
        arrivals = response.arrivals.as_ref().map_or(0, Vec::len),
        "simulation response received"
    );

    let mut controller = VisualizationController::new(ControllerConfig {
        ring_segments: args.segments,
        ..ControllerConfig::default()
    });
    controller.apply_response(GeoPoint::new(args.lat, args.lon), &response);
    info!(
        max_minutes = controller.playback_state().max_minutes,
        "timeline configured"
    );

    let latest = shared_snapshot();
    let (cmd_tx, handle) = spawn_frame_loop(controller, latest.clone());
    let _ = cmd_tx.send(LoopCommand::Playback(PlaybackCommand::SetSpeed {
        multiplier: args.speed,
    }));
    let _ = cmd_tx.send(LoopCommand::Playback(PlaybackCommand::Play));

    std::thread::sleep(Duration::from_secs_f64(args.duration_secs.max(0.0)));

    let _ = cmd_tx.send(LoopCommand::Shutdown);
    if handle.join().is_err() {
        error!("frame loop thread panicked");
        std::process::exit(1);
    }

    match latest.lock().ok().and_then(|lock| lock.clone()) {
        Some(snapshot) => {
            // Final geometry for downstream consumers.
            println!(
                "{}",
                serde_json::to_string(&snapshot).expect("snapshot serializes")
            );
        }
        None => {
            error!("no geometry was produced");
            std::process::exit(1);
        }
    }
}
