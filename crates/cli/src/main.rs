use anyhow::Result;
use clap::{Parser, Subcommand};
use limites::epsdelta::EPSILON_SLIDER;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod commands;
mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Artifacts for the limits course: ε-δ tables, chart configs and static pages")]
struct Cmd {
    /// Optional run tag; propagated to provenance sidecars and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print the visualizer readout for one ε
    Delta {
        #[arg(long, default_value_t = EPSILON_SLIDER.initial)]
        epsilon: f64,
        /// Emit JSON instead of the two readout lines
        #[arg(long)]
        json: bool,
    },
    /// Write the line-chart config for one ε as JSON
    Figure {
        #[arg(long, default_value_t = EPSILON_SLIDER.initial)]
        epsilon: f64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Write the sampled curve and ε-band (.csv or .parquet)
    Samples {
        #[arg(long, default_value_t = EPSILON_SLIDER.initial)]
        epsilon: f64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Tabulate δ over every slider position in [from, to]
    Sweep {
        #[arg(long, default_value_t = EPSILON_SLIDER.min)]
        from: f64,
        #[arg(long, default_value_t = EPSILON_SLIDER.max)]
        to: f64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Render every course page to static HTML
    Site {
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    tracing::info!(tag = ?cmd.tag, "start");
    match cmd.action {
        Action::Delta { epsilon, json } => {
            println!("{}", commands::delta_text(epsilon, json)?);
        }
        Action::Figure { epsilon, out } => {
            commands::figure(epsilon, &out, cmd.tag)?;
        }
        Action::Samples { epsilon, out } => {
            commands::samples(epsilon, &out, cmd.tag)?;
        }
        Action::Sweep { from, to, out } => {
            commands::sweep(from, to, &out, cmd.tag)?;
        }
        Action::Site { out } => {
            let written = commands::site(&out, cmd.tag)?;
            tracing::info!(pages = written.len(), "site_done");
        }
        Action::Report => {
            let doc = provenance::report_doc(cmd.tag.as_deref());
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
    }
    Ok(())
}
