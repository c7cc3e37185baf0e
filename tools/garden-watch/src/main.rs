//! garden-watch: live countdown for LiskGarden plants.
//!
//! Loads plant snapshots from a JSON file and prints, once per interval,
//! what the ledger would compute for them right now. Advisories go to the
//! log.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Deserialize;
use tracing::info;

use garden_telemetry::{init_telemetry, log_plant_event, TelemetryConfig};
use lg_01_contract_model::{abi, format_ether, AccountAddress, DeploymentConfig, Plant};
use lg_02_lifecycle_projection::{
    GardenService, InMemoryPlantReader, PlantProjection, TracingNotifier, Vitality,
};

/// garden-watch: LiskGarden plant countdown
#[derive(Parser, Debug)]
#[command(name = "garden-watch")]
#[command(about = "Live water and growth countdown for LiskGarden plant snapshots")]
struct Args {
    /// JSON file holding one plant snapshot or an array of them
    #[arg(short, long, required_unless_present = "print_abi")]
    snapshot: Option<PathBuf>,

    /// Owner to track (default: owner of the first snapshot)
    #[arg(short, long)]
    owner: Option<AccountAddress>,

    /// Stop after this many ticks (default: run until Ctrl-C)
    #[arg(short, long)]
    ticks: Option<u64>,

    /// Tick interval in milliseconds
    #[arg(short, long, default_value = "1000")]
    interval_ms: u64,

    /// Simulated start time in unix seconds; advances by one interval per tick
    #[arg(long)]
    now: Option<u64>,

    /// Print the ledger ABI as JSON and exit
    #[arg(long)]
    print_abi: bool,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SnapshotFile {
    Many(Vec<Plant>),
    One(Box<Plant>),
}

fn parse_snapshots(json: &str) -> Result<Vec<Plant>> {
    let plants = match serde_json::from_str::<SnapshotFile>(json)
        .context("snapshot is neither a plant nor an array of plants")?
    {
        SnapshotFile::Many(plants) => plants,
        SnapshotFile::One(plant) => vec![*plant],
    };
    if plants.is_empty() {
        bail!("snapshot file contains no plants");
    }
    Ok(plants)
}

fn load_snapshots(path: &Path) -> Result<Vec<Plant>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_snapshots(&json).with_context(|| format!("invalid snapshot file {}", path.display()))
}

/// Simulated or wall clock, in unix seconds.
struct Clock {
    simulated: Option<u64>,
    step_secs: u64,
}

impl Clock {
    fn now(&self) -> u64 {
        self.simulated.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs()
        })
    }

    fn advance(&mut self) {
        if let Some(t) = self.simulated.as_mut() {
            *t = t.saturating_add(self.step_secs);
        }
    }
}

fn vitality_label(vitality: Vitality) -> &'static str {
    match vitality {
        Vitality::Alive => "alive",
        Vitality::Wilting => "WILTING",
        Vitality::Dead => "DEAD",
    }
}

fn render(projection: &PlantProjection) -> String {
    let mut line = format!(
        "#{:<4} {:>3}% next drop {:>3}s  {:<8} {}",
        projection.plant_id.to_string(),
        projection.water_level,
        projection.next_water_drop.as_secs(),
        projection.projected_stage.to_string(),
        vitality_label(projection.vitality),
    );
    if projection.harvestable {
        line.push_str("  [harvest]");
    } else if projection.stage_eligible {
        line.push_str("  [grow]");
    } else if let Some(wait) = projection.until_stage_eligible {
        line.push_str(&format!("  grow in {}s", wait.as_secs()));
    }
    line
}

/// Load snapshots into the service, skipping plants it will not track.
fn track_snapshots(
    service: &GardenService<InMemoryPlantReader, TracingNotifier>,
    plants: Vec<Plant>,
) -> Result<usize> {
    let owner = service.owner();
    for plant in plants {
        let id = plant.id;
        if !service.load_snapshot(plant)? {
            log_plant_event!(warn, "Skipping plant: missing or not owned", id, owner = %owner);
        }
    }
    let tracked = service.plants().len();
    if tracked == 0 {
        bail!("no live plants owned by {}", owner);
    }
    Ok(tracked)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.print_abi {
        println!("{}", serde_json::to_string_pretty(&abi::abi_json())?);
        return Ok(());
    }

    let _telemetry = init_telemetry(TelemetryConfig::for_tool("garden-watch"))?;

    let deployment = DeploymentConfig::from_env().context("invalid LG_* configuration")?;
    info!(
        abi_version = abi::ABI_VERSION,
        plant_price = %format_ether(deployment.constants.plant_price),
        harvest_reward = %format_ether(deployment.constants.harvest_reward),
        stage_timing = ?deployment.stage_timing,
        "Ledger constants"
    );

    let Some(path) = args.snapshot.as_deref() else {
        bail!("--snapshot is required");
    };
    let plants = load_snapshots(path)?;
    let owner = args.owner.unwrap_or(plants[0].owner);

    let service = GardenService::new(
        &deployment,
        owner,
        Arc::new(InMemoryPlantReader::new()),
        Arc::new(TracingNotifier),
    )?;
    track_snapshots(&service, plants)?;

    let step = Duration::from_millis(args.interval_ms.max(1));
    let mut clock = Clock {
        simulated: args.now,
        step_secs: step.as_secs().max(1),
    };
    let mut interval = tokio::time::interval(step);
    let mut remaining = args.ticks;

    loop {
        tokio::select! {
            _ = interval.tick() => {}
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted");
                break;
            }
        }

        let now = clock.now();
        for projection in service.tick(now) {
            println!("{}", render(&projection));
        }
        clock.advance();

        if let Some(left) = remaining.as_mut() {
            *left = left.saturating_sub(1);
            if *left == 0 {
                break;
            }
        }
    }

    Ok(())
}
